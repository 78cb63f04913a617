//! Version-control operations abstraction layer
//!
//! The release workflow needs only a handful of capabilities from the
//! surrounding version-control system. They are collected in the
//! [Repository] trait so the workflow can run against a real checkout or
//! against a substitute in tests.
//!
//! - [system::SystemGit]: runs the `git` executable in the working directory
//! - [mock::MockRepository]: records calls in memory, for testing
//!
//! ```rust
//! # use git_release::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> git_release::Result<()> {
//! if repo.status_porcelain()?.is_empty() {
//!     println!("clean on {}", repo.current_branch()?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod system;

pub use mock::{GitCall, GitOperation, MockRepository};
pub use system::SystemGit;

use crate::error::Result;

/// Version-control capabilities consumed by the release workflow
///
/// Every method maps to exactly one external operation and is attempted
/// once; implementations report a failure as an error and never retry.
/// Returned text is whitespace-trimmed, except that [Repository::status_short]
/// keeps the leading status column.
pub trait Repository {
    /// Machine-readable uncommitted-change listing; empty when the tree is clean
    fn status_porcelain(&self) -> Result<String>;

    /// Human-readable short status listing, shown when the tree is dirty.
    /// Only trailing whitespace is removed.
    fn status_short(&self) -> Result<String>;

    /// Name of the currently checked-out branch
    fn current_branch(&self) -> Result<String>;

    /// Stage a file, by path relative to the working directory
    fn stage(&self, path: &str) -> Result<()>;

    /// Create a commit of the staged changes
    fn commit(&self, message: &str) -> Result<()>;

    /// Create an annotated tag at HEAD carrying `message`
    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()>;

    /// Push the current branch
    fn push_branch(&self) -> Result<()>;

    /// Push tags
    fn push_tags(&self) -> Result<()>;
}
