//! LockOptions struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// Options applied when a `LockHandle` is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockOptions {
    /// When the record file is missing on load, write a fresh unlocked record
    /// instead of failing (default: true).
    pub create_if_not_exists: bool,
}

impl LockOptions {
    /// Override the creation policy.
    pub fn with_create_if_not_exists(mut self, create: bool) -> Self {
        self.create_if_not_exists = create;
        self
    }
}

impl Default for LockOptions {
    fn default() -> Self {
        Self {
            create_if_not_exists: true,
        }
    }
}
