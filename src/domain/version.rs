use crate::error::{ReleaseError, Result};
use std::fmt;

/// Semantic version representation (major.minor.patch only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string of the exact form `X.Y.Z`.
    ///
    /// Pre-release and build metadata suffixes are rejected, as is any
    /// component that is not a non-negative integer.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();

        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() != 3 {
            return Err(ReleaseError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                text
            )));
        }

        let major = parse_component(parts[0], "major")?;
        let minor = parse_component(parts[1], "minor")?;
        let patch = parse_component(parts[2], "patch")?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Bump version according to bump type.
    ///
    /// Fails only if the incremented component would overflow.
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        let overflow = || {
            ReleaseError::version(format!("Cannot bump {} of {}: overflow", bump_type, self))
        };

        let bumped = match bump_type {
            VersionBump::Major => Version {
                major: self.major.checked_add(1).ok_or_else(overflow)?,
                minor: 0,
                patch: 0,
            },
            VersionBump::Minor => Version {
                major: self.major,
                minor: self.minor.checked_add(1).ok_or_else(overflow)?,
                patch: 0,
            },
            VersionBump::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch.checked_add(1).ok_or_else(overflow)?,
            },
        };
        Ok(bumped)
    }
}

fn parse_component(part: &str, name: &str) -> Result<u32> {
    // u32::from_str tolerates a leading '+', which is not a version digit
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return Err(ReleaseError::version(format!(
            "Invalid {} version: '{}'",
            name, part
        )));
    }
    part.parse::<u32>()
        .map_err(|_| ReleaseError::version(format!("Invalid {} version: '{}'", name, part)))
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which version component a release increments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl VersionBump {
    /// Recognize a bump kind token from the command line.
    ///
    /// Only the exact lowercase words `major`, `minor` and `patch` match.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "major" => Some(VersionBump::Major),
            "minor" => Some(VersionBump::Minor),
            "patch" => Some(VersionBump::Patch),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computes the next version string for a release.
///
/// This is the programmatic entry point to the version calculator: it parses
/// `current`, applies `kind` and renders the result back to text.
///
/// # Example
/// ```
/// use git_release::domain::{bump_version, VersionBump};
///
/// assert_eq!(bump_version("1.2.3", VersionBump::Minor).unwrap(), "1.3.0");
/// assert!(bump_version("1.2", VersionBump::Patch).is_err());
/// ```
pub fn bump_version(current: &str, kind: VersionBump) -> Result<String> {
    let version = Version::parse(current)?;
    Ok(version.bump(kind)?.to_string())
}
