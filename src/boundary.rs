use std::fmt;

/// Non-fatal conditions noticed before a release.
/// These are reported to the user, who may choose to continue.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Releasing from a branch that is not a configured release branch
    NonReleaseBranch {
        branch: String,
        release_branches: Vec<String>,
    },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NonReleaseBranch {
                branch,
                release_branches,
            } => {
                write!(f, "You are on branch '{}'", branch)?;
                if !release_branches.is_empty() {
                    write!(f, ", not {}", release_branches.join(" or "))?;
                }
                Ok(())
            }
        }
    }
}
