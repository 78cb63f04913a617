use crate::error::{ReleaseError, Result};
use crate::git::Repository;
use std::cell::RefCell;

/// Operations a [MockRepository] can be told to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitOperation {
    Status,
    CurrentBranch,
    Stage,
    Commit,
    Tag,
    PushBranch,
    PushTags,
}

/// A mutating call observed by a [MockRepository]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    Stage(String),
    Commit(String),
    Tag { name: String, message: String },
    PushBranch,
    PushTags,
}

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    status: String,
    branch: String,
    failing: Option<GitOperation>,
    calls: RefCell<Vec<GitCall>>,
}

impl MockRepository {
    /// Create a clean mock repository on `main`
    pub fn new() -> Self {
        MockRepository {
            status: String::new(),
            branch: "main".to_string(),
            failing: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Report uncommitted changes (porcelain listing)
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Set the current branch
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    /// Make one operation return an error
    pub fn failing_on(mut self, operation: GitOperation) -> Self {
        self.failing = Some(operation);
        self
    }

    /// Mutating calls made so far, in order
    pub fn calls(&self) -> Vec<GitCall> {
        self.calls.borrow().clone()
    }

    fn check(&self, operation: GitOperation) -> Result<()> {
        if self.failing == Some(operation) {
            return Err(ReleaseError::command(
                format!("mock {:?}", operation),
                "injected failure",
            ));
        }
        Ok(())
    }

    fn record(&self, operation: GitOperation, call: GitCall) -> Result<()> {
        self.check(operation)?;
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn status_porcelain(&self) -> Result<String> {
        self.check(GitOperation::Status)?;
        Ok(self.status.trim().to_string())
    }

    fn status_short(&self) -> Result<String> {
        self.check(GitOperation::Status)?;
        Ok(self.status.trim_end().to_string())
    }

    fn current_branch(&self) -> Result<String> {
        self.check(GitOperation::CurrentBranch)?;
        Ok(self.branch.clone())
    }

    fn stage(&self, path: &str) -> Result<()> {
        self.record(GitOperation::Stage, GitCall::Stage(path.to_string()))
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record(GitOperation::Commit, GitCall::Commit(message.to_string()))
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        self.record(
            GitOperation::Tag,
            GitCall::Tag {
                name: name.to_string(),
                message: message.to_string(),
            },
        )
    }

    fn push_branch(&self) -> Result<()> {
        self.record(GitOperation::PushBranch, GitCall::PushBranch)
    }

    fn push_tags(&self) -> Result<()> {
        self.record(GitOperation::PushTags, GitCall::PushTags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert_eq!(repo.status_porcelain().unwrap(), "");
        assert_eq!(repo.current_branch().unwrap(), "main");
        assert!(repo.calls().is_empty());
    }

    #[test]
    fn test_mock_repository_records_calls() {
        let repo = MockRepository::new();
        repo.stage("package.json").unwrap();
        repo.commit("Release: 1.0.1").unwrap();
        repo.create_annotated_tag("v1.0.1", "Release: 1.0.1").unwrap();
        repo.push_branch().unwrap();
        repo.push_tags().unwrap();

        assert_eq!(
            repo.calls(),
            vec![
                GitCall::Stage("package.json".to_string()),
                GitCall::Commit("Release: 1.0.1".to_string()),
                GitCall::Tag {
                    name: "v1.0.1".to_string(),
                    message: "Release: 1.0.1".to_string(),
                },
                GitCall::PushBranch,
                GitCall::PushTags,
            ]
        );
    }

    #[test]
    fn test_mock_repository_injected_failure() {
        let repo = MockRepository::new().failing_on(GitOperation::Tag);
        assert!(repo.commit("msg").is_ok());
        assert!(repo.create_annotated_tag("v1.0.0", "msg").is_err());
        assert_eq!(repo.calls(), vec![GitCall::Commit("msg".to_string())]);
    }

    #[test]
    fn test_mock_repository_status_and_branch() {
        let repo = MockRepository::new()
            .with_status(" M src/lib.rs\n")
            .with_branch("feature/x");
        assert_eq!(repo.status_porcelain().unwrap(), "M src/lib.rs");
        assert_eq!(repo.status_short().unwrap(), " M src/lib.rs");
        assert_eq!(repo.current_branch().unwrap(), "feature/x");
    }
}
