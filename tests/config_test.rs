// tests/config_test.rs
use git_release::config::{load_config, Config, CONFIG_FILE};
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[release]
branches = ["trunk"]
tag_pattern = "release-{version}"
remote = "upstream"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert_eq!(config.release.branches, vec!["trunk"]);
    assert_eq!(config.release.tag_pattern, "release-{version}");
    assert_eq!(config.release.remote.as_deref(), Some("upstream"));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = load_config(Some(dir.path().join("nope.toml").as_path()));
    assert!(result.is_err());
}

#[test]
fn test_invalid_pattern_in_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[release]\ntag_pattern = \"no-placeholder\"\n")
        .unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path())).unwrap_err();
    assert!(err.to_string().contains("Configuration error"));
}

#[test]
#[serial]
fn test_local_config_file_is_picked_up() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE),
        "[release]\nbranches = [\"develop\"]\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    let config = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    let config = config.unwrap();
    assert_eq!(config.release.branches, vec!["develop"]);
    assert_eq!(config.release.tag_pattern, Config::default().release.tag_pattern);
}
