//! Domain logic - pure release rules independent of git and the filesystem

pub mod branch;
pub mod release;
pub mod tag;
pub mod version;

pub use branch::BranchContext;
pub use release::{release_message, strip_non_interactive, ReleaseRequest};
pub use tag::TagPattern;
pub use version::{bump_version, Version, VersionBump};
