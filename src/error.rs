use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for git-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Not a git repository: {}", .0.display())]
    NotARepository(PathBuf),

    #[error("Manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("Working tree has uncommitted changes; commit or stash them first")]
    DirtyWorkingTree,

    #[error("Manifest has no \"version\" field")]
    MissingVersion,

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Command `{command}` failed: {stderr}")]
    Command { command: String, stderr: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in git-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseError::Version(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        ReleaseError::Manifest(msg.into())
    }

    /// Create a failed-command error carrying the command's stderr
    pub fn command(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        ReleaseError::Command {
            command: command.into(),
            stderr: stderr.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ReleaseError = json_err.into();
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_path_variants_show_path() {
        let err = ReleaseError::NotARepository(PathBuf::from("/tmp/not-git"));
        assert_eq!(err.to_string(), "Not a git repository: /tmp/not-git");

        let err = ReleaseError::ManifestNotFound(PathBuf::from("/tmp/x/package.json"));
        assert_eq!(err.to_string(), "Manifest not found: /tmp/x/package.json");
    }

    #[test]
    fn test_command_error_includes_stderr() {
        let err = ReleaseError::command("git push --tags", "remote rejected");
        let msg = err.to_string();
        assert!(msg.contains("git push --tags"));
        assert!(msg.contains("remote rejected"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseError::config("x"), "Configuration error"),
            (ReleaseError::version("x"), "Version parsing error"),
            (ReleaseError::manifest("x"), "Manifest error"),
            (ReleaseError::MissingVersion, "Manifest has no"),
            (ReleaseError::DirtyWorkingTree, "Working tree has uncommitted"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
