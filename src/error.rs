//! Error types for lock record operations.
//!
//! Uses thiserror for derive macros. Variants carry the offending path or key
//! and the underlying I/O or codec error rather than preformatted text.

use crate::exit_codes;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lock record operations.
#[derive(Error, Debug)]
pub enum LockError {
    /// The record path is empty or otherwise unusable. Detected before any I/O.
    #[error("invalid record file path: '{}'", path.display())]
    InvalidPath { path: PathBuf },

    /// The handle carries no in-memory record.
    #[error("record is nil")]
    RecordIsNil,

    /// The metadata map was never initialized.
    #[error("metadata is nil")]
    MetadataNil,

    /// The metadata map exists but lacks the requested key.
    #[error("metadata key not found: {key}")]
    MetadataKeyNotFound { key: String },

    /// The record file could not be read.
    #[error("failed to read record file '{}': {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The record file was read but its bytes are not a valid record.
    #[error("failed to decode record file '{}': {source}", path.display())]
    DecodeFailure {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory record could not be serialized.
    #[error("failed to encode record: {source}")]
    EncodeFailure {
        #[source]
        source: serde_json::Error,
    },

    /// The record file could not be written.
    #[error("failed to write record file '{}': {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An options file could not be read or parsed.
    #[error("invalid lock options: {0}")]
    ConfigFailure(String),

    /// The advisory guard next to the record could not be opened or locked.
    #[error("failed to acquire guard '{}': {source}", path.display())]
    GuardFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LockError {
    /// Returns the process exit code the CLI uses for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LockError::InvalidPath { .. }
            | LockError::RecordIsNil
            | LockError::MetadataNil
            | LockError::MetadataKeyNotFound { .. }
            | LockError::ConfigFailure(_) => exit_codes::USER_ERROR,
            LockError::ReadFailure { .. } | LockError::DecodeFailure { .. } => {
                exit_codes::READ_FAILURE
            }
            LockError::EncodeFailure { .. } | LockError::WriteFailure { .. } => {
                exit_codes::WRITE_FAILURE
            }
            LockError::GuardFailure { .. } => exit_codes::GUARD_FAILURE,
        }
    }
}

/// Result type alias for lock record operations.
pub type Result<T> = std::result::Result<T, LockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precondition_errors_are_user_errors() {
        let err = LockError::InvalidPath {
            path: PathBuf::new(),
        };
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(LockError::RecordIsNil.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(LockError::MetadataNil.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn io_errors_map_to_read_and_write_codes() {
        let err = LockError::ReadFailure {
            path: PathBuf::from("a.lock"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.exit_code(), exit_codes::READ_FAILURE);

        let err = LockError::WriteFailure {
            path: PathBuf::from("a.lock"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.exit_code(), exit_codes::WRITE_FAILURE);
    }

    #[test]
    fn error_messages_carry_structured_fields() {
        let err = LockError::MetadataKeyNotFound {
            key: "owner".to_string(),
        };
        assert_eq!(err.to_string(), "metadata key not found: owner");

        let err = LockError::InvalidPath {
            path: PathBuf::new(),
        };
        assert_eq!(err.to_string(), "invalid record file path: ''");
    }
}
