//! Release manifest (`package.json`) handling.
//!
//! The manifest is parsed as an ordered JSON object so that rewriting it only
//! changes the `version` value; every other field keeps its position and value.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::{Map, Value};

use crate::domain::Version;
use crate::error::{ReleaseError, Result};

/// Fixed manifest filename looked up in the invocation directory
pub const MANIFEST_FILE: &str = "package.json";

const VERSION_FIELD: &str = "version";

/// An in-memory copy of the release manifest
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    ///
    /// # Returns
    /// * `Ok(Manifest)` - The manifest's top-level object
    /// * `Err` - If the file cannot be read, is not JSON, or is not a JSON object
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("reading manifest {}", path.display());

        let content = fs::read_to_string(path)?;
        let fields = Self::parse(&content)?;

        Ok(Manifest {
            path: path.to_path_buf(),
            fields,
        })
    }

    fn parse(content: &str) -> Result<Map<String, Value>> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(fields) => Ok(fields),
            _ => Err(ReleaseError::manifest(
                "top-level value must be a JSON object",
            )),
        }
    }

    /// The raw `version` string
    pub fn version_text(&self) -> Result<&str> {
        match self.fields.get(VERSION_FIELD) {
            None | Some(Value::Null) => Err(ReleaseError::MissingVersion),
            Some(Value::String(text)) => Ok(text.as_str()),
            Some(other) => Err(ReleaseError::version(format!(
                "\"version\" must be a string, found {}",
                other
            ))),
        }
    }

    /// The `version` field parsed as a three-component version
    pub fn version(&self) -> Result<Version> {
        Version::parse(self.version_text()?)
    }

    /// Replace the `version` value in place, leaving its position untouched
    pub fn set_version(&mut self, version: &Version) {
        self.fields
            .insert(VERSION_FIELD.to_string(), Value::String(version.to_string()));
    }

    /// Serialize with two-space indentation and a trailing newline
    pub fn render(&self) -> Result<String> {
        let mut text = serde_json::to_string_pretty(&self.fields)?;
        text.push('\n');
        Ok(text)
    }

    /// Write the manifest back to the file it was loaded from
    pub fn save(&self) -> Result<()> {
        debug!("writing manifest {}", self.path.display());
        fs::write(&self.path, self.render()?)?;
        Ok(())
    }
}
