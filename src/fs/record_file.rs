//! Reading and writing record files.

use crate::error::{LockError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Permission bits for newly created record files, before the process umask.
pub const DEFAULT_FILE_MODE: u32 = 0o666;

/// Read the full contents of a record file.
///
/// The raw `io::Error` is returned so callers can tell a missing file apart
/// from other failures.
pub fn read_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<u8>> {
    std::fs::read(path)
}

/// Replace the contents of a record file, creating it if needed.
///
/// New files are created with `DEFAULT_FILE_MODE` on Unix. Existing files keep
/// their permissions and are truncated before the write.
///
/// # Returns
///
/// * `Ok(())` - The content was written and synced
/// * `Err(LockError::WriteFailure)` - Open, write or sync failed
pub fn write_file<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let write_failure = |source: io::Error| LockError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let mut file = open_for_replace(path).map_err(write_failure)?;
    file.write_all(content).map_err(write_failure)?;
    file.sync_all().map_err(write_failure)?;

    Ok(())
}

#[cfg(unix)]
fn open_for_replace(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(DEFAULT_FILE_MODE)
        .open(path)
}

#[cfg(not(unix))]
fn open_for_replace(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}
