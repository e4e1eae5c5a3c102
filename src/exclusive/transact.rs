//! Guarded load-modify-save on a handle.

use super::guard::ExclusiveGuard;
use crate::error::Result;
use crate::handle::LockHandle;

impl LockHandle {
    /// Block until the advisory guard for this handle's path is held.
    pub fn exclusive(&self) -> Result<ExclusiveGuard> {
        ExclusiveGuard::acquire(self.path())
    }

    /// Take the advisory guard for this handle's path if it is free.
    pub fn try_exclusive(&self) -> Result<Option<ExclusiveGuard>> {
        ExclusiveGuard::try_acquire(self.path())
    }

    /// Run load, `update`, save while holding the advisory guard.
    ///
    /// Nothing is saved if the load or `update` fails. When `update` fails the
    /// in-memory record is rolled back to what was loaded, so memory matches
    /// the file. The guard is released before returning in every case.
    pub fn transact<T, F>(&mut self, update: F) -> Result<T>
    where
        F: FnOnce(&mut LockHandle) -> Result<T>,
    {
        let _guard = self.exclusive()?;
        self.load()?;
        let loaded = self.record.clone();
        let value = match update(self) {
            Ok(value) => value,
            Err(e) => {
                self.record = loaded;
                return Err(e);
            }
        };
        self.save()?;
        Ok(value)
    }
}
