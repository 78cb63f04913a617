/// Branches a release is expected to be cut from when nothing else is configured
pub fn default_release_branches() -> Vec<String> {
    vec!["main".to_string(), "master".to_string()]
}

/// The branch a release is being cut from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub name: String,
    pub is_release: bool,
}

impl BranchContext {
    /// Classify `name` against the list of release branches
    pub fn new(name: impl Into<String>, release_branches: &[String]) -> Self {
        let name = name.into();
        let is_release = release_branches.iter().any(|branch| *branch == name);

        BranchContext { name, is_release }
    }

    pub fn is_release_branch(&self) -> bool {
        self.is_release
    }
}
