use crate::error::{ReleaseError, Result};
use crate::git::Repository;
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Repository backend that shells out to the system `git` executable
pub struct SystemGit {
    work_dir: PathBuf,
    remote: Option<String>,
}

impl SystemGit {
    /// Run git commands in `work_dir`, pushing to git's default remote
    pub fn new<P: AsRef<Path>>(work_dir: P) -> Self {
        SystemGit {
            work_dir: work_dir.as_ref().to_path_buf(),
            remote: None,
        }
    }

    /// Push to the named remote instead of git's default
    pub fn with_remote(mut self, remote: Option<String>) -> Self {
        self.remote = remote;
        self
    }

    /// Run `git <args>` and return its trimmed stdout.
    fn run(&self, args: &[&str]) -> Result<String> {
        self.output(args).map(|stdout| stdout.trim().to_string())
    }

    /// Run `git <args>` and return its stdout untouched.
    ///
    /// A non-zero exit status becomes [ReleaseError::Command] carrying stderr.
    fn output(&self, args: &[&str]) -> Result<String> {
        let command = format!("git {}", args.join(" "));
        debug!("running `{}` in {}", command, self.work_dir.display());

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .map_err(|e| ReleaseError::command(&command, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!(
                "`{}` exited with {}: {}",
                command,
                output.status.code().unwrap_or(-1),
                stderr
            );
            return Err(ReleaseError::command(command, stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn push_args<'a>(&'a self, extra: &[&'a str]) -> Vec<&'a str> {
        let mut args = vec!["push"];
        if let Some(remote) = self.remote.as_deref() {
            args.push(remote);
        }
        args.extend_from_slice(extra);
        args
    }
}

impl Repository for SystemGit {
    fn status_porcelain(&self) -> Result<String> {
        self.run(&["status", "--porcelain"])
    }

    fn status_short(&self) -> Result<String> {
        // Leading column is the staged state; only trailing newlines go
        self.output(&["status", "--short"])
            .map(|listing| listing.trim_end().to_string())
    }

    fn current_branch(&self) -> Result<String> {
        self.run(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    fn stage(&self, path: &str) -> Result<()> {
        self.run(&["add", path]).map(|_| ())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).map(|_| ())
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        self.run(&["tag", "-a", name, "-m", message]).map(|_| ())
    }

    fn push_branch(&self) -> Result<()> {
        // With an explicit remote, HEAD names the current branch
        let args = if self.remote.is_some() {
            self.push_args(&["HEAD"])
        } else {
            self.push_args(&[])
        };
        self.run(&args).map(|_| ())
    }

    fn push_tags(&self) -> Result<()> {
        let args = self.push_args(&["--tags"]);
        self.run(&args).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(["-c", "user.name=Test User", "-c", "user.email=test@example.com"])
            .args(["-c", "commit.gpgsign=false"])
            .args(args)
            .current_dir(dir)
            .status()
            .expect("failed to run git");
        assert!(status.success(), "git {:?} failed", args);
    }

    #[test]
    fn test_push_args_default_remote() {
        let git = SystemGit::new(".");
        assert_eq!(git.push_args(&["--tags"]), vec!["push", "--tags"]);
    }

    #[test]
    fn test_push_args_named_remote() {
        let git = SystemGit::new(".").with_remote(Some("upstream".to_string()));
        assert_eq!(git.push_args(&["HEAD"]), vec!["push", "upstream", "HEAD"]);
    }

    #[test]
    fn test_failing_command_reports_stderr() {
        // An empty temp dir is not a repository, so git status fails
        let dir = TempDir::new().unwrap();
        let git = SystemGit::new(dir.path());

        match git.status_porcelain() {
            Err(ReleaseError::Command { command, .. }) => {
                assert_eq!(command, "git status --porcelain");
            }
            other => panic!("expected command failure, got {:?}", other),
        }
    }

    #[test]
    fn test_status_short_keeps_unstaged_column() {
        let dir = TempDir::new().unwrap();
        git(dir.path(), &["init"]);
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();
        git(dir.path(), &["add", "package.json"]);
        git(dir.path(), &["commit", "-m", "init"]);
        std::fs::write(dir.path().join("package.json"), "{\"a\":1}").unwrap();

        let repo = SystemGit::new(dir.path());
        assert_eq!(repo.status_short().unwrap(), " M package.json");
        assert_eq!(repo.status_porcelain().unwrap(), "M package.json");
    }
}
