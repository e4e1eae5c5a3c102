//! RAII advisory lock guard implementation.

use crate::error::{LockError, Result};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// RAII guard for the advisory lock next to a record file.
///
/// When dropped, the lock is released. If releasing fails, a warning is
/// printed but no panic occurs.
#[derive(Debug)]
pub struct ExclusiveGuard {
    /// Path to the sidecar guard file.
    path: PathBuf,

    /// Open handle holding the advisory lock.
    file: File,

    /// Whether the lock has been released manually.
    released: bool,
}

impl ExclusiveGuard {
    /// The sidecar path guarding `record_path`.
    pub fn guard_path(record_path: &Path) -> PathBuf {
        let mut name = record_path.as_os_str().to_owned();
        name.push(".guard");
        PathBuf::from(name)
    }

    /// Block until the advisory lock for `record_path` is held.
    pub fn acquire<P: AsRef<Path>>(record_path: P) -> Result<Self> {
        let path = checked_guard_path(record_path.as_ref())?;
        let file = open_guard_file(&path)?;

        file.lock_exclusive().map_err(|e| LockError::GuardFailure {
            path: path.clone(),
            source: e,
        })?;

        Ok(Self::new(path, file))
    }

    /// Take the advisory lock for `record_path` if nobody else holds it.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(guard))` - The lock is now held
    /// * `Ok(None)` - Another holder has it
    /// * `Err(LockError::GuardFailure)` - The guard file could not be opened or locked
    pub fn try_acquire<P: AsRef<Path>>(record_path: P) -> Result<Option<Self>> {
        let path = checked_guard_path(record_path.as_ref())?;
        let file = open_guard_file(&path)?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(Some(Self::new(path, file))),
            Err(e) if is_contended(&e) => Ok(None),
            Err(e) => Err(LockError::GuardFailure { path, source: e }),
        }
    }

    fn new(path: PathBuf, file: File) -> Self {
        Self {
            path,
            file,
            released: false,
        }
    }

    /// Get the path to the sidecar guard file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Manually release the lock and report any failure.
    pub fn release(mut self) -> Result<()> {
        self.released = true;
        FileExt::unlock(&self.file).map_err(|e| LockError::GuardFailure {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl Drop for ExclusiveGuard {
    fn drop(&mut self) {
        if !self.released
            && let Err(e) = FileExt::unlock(&self.file)
        {
            eprintln!(
                "Warning: failed to release guard '{}': {}",
                self.path.display(),
                e
            );
        }
    }
}

fn checked_guard_path(record_path: &Path) -> Result<PathBuf> {
    if record_path.as_os_str().is_empty() {
        return Err(LockError::InvalidPath {
            path: record_path.to_path_buf(),
        });
    }
    Ok(ExclusiveGuard::guard_path(record_path))
}

fn open_guard_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|e| LockError::GuardFailure {
            path: path.to_path_buf(),
            source: e,
        })
}

fn is_contended(e: &io::Error) -> bool {
    e.kind() == io::ErrorKind::WouldBlock
        || e.raw_os_error() == fs2::lock_contended_error().raw_os_error()
}
