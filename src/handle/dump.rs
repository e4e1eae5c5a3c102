//! Human-readable rendering of the in-memory record.

use super::lifecycle::LockHandle;

/// Returned by `dump` when the handle has no record.
pub const NIL_RECORD_DUMP: &str = "object is nil";

impl LockHandle {
    /// Render the in-memory record as indented JSON for debugging.
    ///
    /// The output format is not stable and must not be parsed.
    pub fn dump(&self) -> String {
        match &self.record {
            Some(record) => serde_json::to_string_pretty(record)
                .unwrap_or_else(|e| format!("unprintable record: {}", e)),
            None => NIL_RECORD_DUMP.to_string(),
        }
    }
}
