//! Helpers shared by unit tests.

use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Runs a test inside `dir` and restores the previous working directory on drop.
///
/// Tests using it must also be `#[serial]`; the mutex only covers tests that
/// go through this guard.
pub(crate) struct WorkingDirGuard {
    previous: PathBuf,
    _cwd: MutexGuard<'static, ()>,
}

impl WorkingDirGuard {
    pub(crate) fn enter(dir: &Path) -> Self {
        let cwd = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        Self {
            previous,
            _cwd: cwd,
        }
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}
