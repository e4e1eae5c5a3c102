//! LockOptions loading and serialization.

use super::model::LockOptions;
use crate::error::{LockError, Result};
use std::path::Path;

impl LockOptions {
    /// Load options from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(LockOptions)` - Parsed options, defaults filled in
    /// * `Err(LockError::ConfigFailure)` - The file is unreadable or not valid YAML
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LockError::ConfigFailure(format!(
                "failed to read options file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse options from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| LockError::ConfigFailure(format!("failed to parse options YAML: {}", e)))
    }

    /// Serialize options to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            LockError::ConfigFailure(format!("failed to serialize options to YAML: {}", e))
        })
    }
}
