//! Metadata access on the in-memory record.

use super::lifecycle::LockHandle;
use crate::error::{LockError, Result};
use crate::record::Metadata;

impl LockHandle {
    /// The full metadata map.
    ///
    /// Fails with `MetadataNil` when no key has ever been written, which is
    /// distinct from an existing but empty map.
    pub fn get_metadata_all(&self) -> Result<&Metadata> {
        let record = self.record.as_ref().ok_or(LockError::RecordIsNil)?;
        record.metadata.as_ref().ok_or(LockError::MetadataNil)
    }

    /// The value stored under `key`.
    pub fn get_metadata(&self, key: &str) -> Result<&[u8]> {
        self.get_metadata_all()?
            .get(key)
            .map(Vec::as_slice)
            .ok_or_else(|| LockError::MetadataKeyNotFound {
                key: key.to_string(),
            })
    }

    /// Insert or overwrite `key`, creating the map on first write.
    ///
    /// Only the in-memory record changes; call `save` to persist.
    pub fn set_metadata<K, V>(&mut self, key: K, value: V) -> Result<()>
    where
        K: Into<String>,
        V: Into<Vec<u8>>,
    {
        let record = self.record.as_mut().ok_or(LockError::RecordIsNil)?;
        record
            .metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.into(), value.into());
        Ok(())
    }
}
