//! Tests for advisory guards.

use super::*;
use crate::error::LockError;
use crate::handle::LockHandle;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_guard_path_is_sidecar() {
    let path = ExclusiveGuard::guard_path(Path::new("/var/run/app/state.lock"));
    assert_eq!(path, Path::new("/var/run/app/state.lock.guard"));
}

#[test]
fn test_acquire_creates_sidecar_and_leaves_record_alone() {
    let temp_dir = TempDir::new().unwrap();
    let record_path = temp_dir.path().join("state.lock");

    let guard = ExclusiveGuard::acquire(&record_path).unwrap();

    assert!(guard.path().exists());
    assert!(!record_path.exists());
}

#[test]
fn test_try_acquire_fails_while_held() {
    let temp_dir = TempDir::new().unwrap();
    let record_path = temp_dir.path().join("state.lock");

    let guard = ExclusiveGuard::acquire(&record_path).unwrap();
    assert!(ExclusiveGuard::try_acquire(&record_path).unwrap().is_none());

    drop(guard);

    let second = ExclusiveGuard::try_acquire(&record_path).unwrap();
    assert!(second.is_some());
}

#[test]
fn test_manual_release_frees_guard() {
    let temp_dir = TempDir::new().unwrap();
    let record_path = temp_dir.path().join("state.lock");

    let guard = ExclusiveGuard::acquire(&record_path).unwrap();
    guard.release().unwrap();

    assert!(ExclusiveGuard::try_acquire(&record_path).unwrap().is_some());
}

#[test]
fn test_empty_path_is_invalid() {
    let result = ExclusiveGuard::acquire("");
    assert!(matches!(result, Err(LockError::InvalidPath { .. })));

    let handle = LockHandle::new("");
    assert!(matches!(
        handle.try_exclusive(),
        Err(LockError::InvalidPath { .. })
    ));
}

#[test]
fn test_missing_directory_is_guard_failure() {
    let temp_dir = TempDir::new().unwrap();
    let record_path = temp_dir.path().join("missing").join("state.lock");

    let result = ExclusiveGuard::acquire(&record_path);
    assert!(matches!(result, Err(LockError::GuardFailure { .. })));
}

#[test]
fn test_transact_loads_updates_and_saves() {
    let temp_dir = TempDir::new().unwrap();
    let record_path = temp_dir.path().join("state.lock");

    let mut writer = LockHandle::new(&record_path);
    writer.lock();
    writer.set_metadata("owner", "alice").unwrap();
    writer.save().unwrap();

    let mut handle = LockHandle::new(&record_path);
    let was_locked = handle
        .transact(|h| {
            let was_locked = h.is_locked();
            h.unlock();
            h.set_metadata("owner", "bob")?;
            Ok(was_locked)
        })
        .unwrap();
    assert!(was_locked);

    let mut reader = LockHandle::new(&record_path);
    reader.load().unwrap();
    assert!(reader.is_unlocked());
    assert_eq!(reader.get_metadata("owner").unwrap(), b"bob");

    // The guard is released once transact returns.
    assert!(handle.try_exclusive().unwrap().is_some());
}

#[test]
fn test_transact_skips_save_when_update_fails() {
    let temp_dir = TempDir::new().unwrap();
    let record_path = temp_dir.path().join("state.lock");

    let mut writer = LockHandle::new(&record_path);
    writer.save().unwrap();

    let mut handle = LockHandle::new(&record_path);
    let result: crate::error::Result<()> = handle.transact(|h| {
        h.lock();
        h.get_metadata("missing").map(|_| ())
    });
    assert!(matches!(result, Err(LockError::MetadataNil)));
    assert!(handle.is_unlocked());

    let mut reader = LockHandle::new(&record_path);
    reader.load().unwrap();
    assert!(reader.is_unlocked());
    assert!(handle.try_exclusive().unwrap().is_some());
}
