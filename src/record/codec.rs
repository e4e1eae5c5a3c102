//! Encoding and decoding of record files.

use super::model::LockRecord;

/// Serialize a record into the bytes written to a record file.
pub fn encode(record: &LockRecord) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec_pretty(record)
}

/// Parse the bytes of a record file.
///
/// The whole input must be one record document; an empty input is an error.
pub fn decode(bytes: &[u8]) -> Result<LockRecord, serde_json::Error> {
    serde_json::from_slice(bytes)
}
