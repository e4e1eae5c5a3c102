//! Handle construction, load/save and record reinitialization.

use crate::config::LockOptions;
use crate::error::{LockError, Result};
use crate::fs;
use crate::record::{self, LockRecord};
use std::io;
use std::path::{Path, PathBuf};

/// Controller for one record file.
///
/// The handle starts with a fresh unlocked record attached, whether or not the
/// backing file exists. It is not safe to share between threads without
/// external synchronization.
#[derive(Debug)]
pub struct LockHandle {
    path: PathBuf,
    create_if_not_exists: bool,
    pub(crate) record: Option<LockRecord>,
}

impl LockHandle {
    /// Create a handle bound to `path` with default options.
    ///
    /// Performs no I/O. An empty path is accepted here and rejected by `load`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self::with_options(path, LockOptions::default())
    }

    /// Create a handle bound to `path` with explicit options.
    pub fn with_options<P: Into<PathBuf>>(path: P, options: LockOptions) -> Self {
        let mut handle = Self {
            path: path.into(),
            create_if_not_exists: options.create_if_not_exists,
            record: None,
        };
        handle.new_object();
        handle
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_create_if_not_exists(&self) -> bool {
        self.create_if_not_exists
    }

    pub fn set_create_if_not_exists(&mut self, create: bool) {
        self.create_if_not_exists = create;
    }

    /// Read the backing file and replace the in-memory record.
    ///
    /// A missing file is created from the current in-memory record when the
    /// creation policy allows it. The record is only replaced once the file
    /// decodes completely; on any error the previous record is kept.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The record was loaded, or the missing file was created
    /// * `Err(LockError::InvalidPath)` - The path is empty
    /// * `Err(LockError::ReadFailure)` - The file could not be read
    /// * `Err(LockError::DecodeFailure)` - The file is not a valid record
    /// * Any error from `save` when a missing file is being created
    pub fn load(&mut self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(LockError::InvalidPath {
                path: self.path.clone(),
            });
        }

        let bytes = match fs::read_file(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound && self.create_if_not_exists => {
                return self.save();
            }
            Err(e) => {
                return Err(LockError::ReadFailure {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        let loaded = record::decode(&bytes).map_err(|e| LockError::DecodeFailure {
            path: self.path.clone(),
            source: e,
        })?;
        self.record = Some(loaded);

        Ok(())
    }

    /// Write the in-memory record to the backing file, replacing its contents.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The file now holds the in-memory record
    /// * `Err(LockError::RecordIsNil)` - The handle has no record
    /// * `Err(LockError::EncodeFailure)` - The record could not be serialized
    /// * `Err(LockError::WriteFailure)` - The file could not be written
    pub fn save(&self) -> Result<()> {
        let record = self.record.as_ref().ok_or(LockError::RecordIsNil)?;
        let bytes = record::encode(record).map_err(|e| LockError::EncodeFailure { source: e })?;
        fs::write_file(&self.path, &bytes)
    }

    /// Discard the in-memory record and attach a fresh unlocked one.
    ///
    /// The backing file is not touched.
    pub fn new_object(&mut self) -> &LockRecord {
        self.record.insert(LockRecord::new())
    }

    /// Attach a fresh record and persist it.
    ///
    /// The in-memory record is replaced even when the save fails.
    pub fn reset(&mut self) -> Result<()> {
        self.new_object();
        self.save()
    }

    /// The in-memory record, attaching a fresh one first if none exists.
    pub fn object(&mut self) -> &LockRecord {
        self.record.get_or_insert_with(LockRecord::new)
    }

    /// The in-memory record, if any.
    pub fn record(&self) -> Option<&LockRecord> {
        self.record.as_ref()
    }

    /// Detach the in-memory record, leaving the handle without one.
    ///
    /// Validated operations such as `save` and `set_lock` then fail with
    /// `RecordIsNil` until a record is attached again.
    pub fn take_object(&mut self) -> Option<LockRecord> {
        self.record.take()
    }
}
