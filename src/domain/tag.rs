use crate::error::{ReleaseError, Result};

use super::version::Version;

pub const DEFAULT_TAG_PATTERN: &str = "v{version}";

const PLACEHOLDER: &str = "{version}";

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPattern {
    pattern: String,
}

impl TagPattern {
    /// Create a tag pattern, requiring exactly one `{version}` placeholder
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.matches(PLACEHOLDER).count() != 1 {
            return Err(ReleaseError::config(format!(
                "Invalid tag pattern '{}': should have exactly one {{version}} placeholder",
                pattern
            )));
        }
        Ok(TagPattern { pattern })
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version=1.2.3 -> "v1.2.3"
    pub fn format(&self, version: &Version) -> String {
        self.pattern.replace(PLACEHOLDER, &version.to_string())
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern {
            pattern: DEFAULT_TAG_PATTERN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pattern_prefixes_v() {
        let pattern = TagPattern::default();
        assert_eq!(pattern.format(&Version::new(1, 1, 0)), "v1.1.0");
    }

    #[test]
    fn test_pattern_format_with_suffix() {
        let pattern = TagPattern::new("release-{version}-final").unwrap();
        assert_eq!(
            pattern.format(&Version::new(1, 2, 3)),
            "release-1.2.3-final"
        );
    }

    #[test]
    fn test_pattern_requires_single_placeholder() {
        assert!(TagPattern::new("latest").is_err());
        assert!(TagPattern::new("{version}-{version}").is_err());
        assert!(TagPattern::new("{version}").is_ok());
    }
}
