//! Locked flag and timestamp operations.

use super::lifecycle::LockHandle;
use crate::error::{LockError, Result};
use crate::record::{LockRecord, RecordInstant};
use chrono::Utc;
use std::cmp::Ordering;

impl LockHandle {
    /// Mark the in-memory record as locked. Does not persist or touch the timestamp.
    pub fn lock(&mut self) -> &mut Self {
        self.record.get_or_insert_with(LockRecord::new).locked = true;
        self
    }

    /// Mark the in-memory record as unlocked. Does not persist or touch the timestamp.
    pub fn unlock(&mut self) -> &mut Self {
        self.record.get_or_insert_with(LockRecord::new).locked = false;
        self
    }

    /// Lock the existing record and save it.
    ///
    /// No load happens first; the in-memory record is assumed current.
    pub fn set_lock(&mut self) -> Result<()> {
        if self.record.is_none() {
            return Err(LockError::RecordIsNil);
        }
        self.lock();
        self.save()
    }

    /// Unlock the existing record and save it.
    pub fn set_unlock(&mut self) -> Result<()> {
        if self.record.is_none() {
            return Err(LockError::RecordIsNil);
        }
        self.unlock();
        self.save()
    }

    /// True when a record is attached and locked.
    pub fn is_locked(&self) -> bool {
        self.record.as_ref().is_some_and(|record| record.locked)
    }

    /// True unless a record is attached and locked.
    pub fn is_unlocked(&self) -> bool {
        !self.is_locked()
    }

    /// Set the timestamp to the current wall-clock time.
    pub fn set_timestamp_now(&mut self) -> &mut Self {
        self.set_timestamp(Utc::now())
    }

    /// Set the timestamp to `instant`, truncated to microseconds.
    pub fn set_timestamp<T: RecordInstant>(&mut self, instant: T) -> &mut Self {
        let micros = instant.to_record_micros();
        self.record.get_or_insert_with(LockRecord::new).timestamp = micros;
        self
    }

    /// Alias for `set_timestamp_now`.
    pub fn touch(&mut self) -> &mut Self {
        self.set_timestamp_now()
    }

    /// Compare the stored timestamp against `instant` at microsecond resolution.
    ///
    /// `Less` means the record is older than `instant`. A handle without a
    /// record always compares as `Less`.
    pub fn time_compare<T: RecordInstant>(&self, instant: T) -> Ordering {
        match &self.record {
            Some(record) => record.timestamp.cmp(&instant.to_record_micros()),
            None => Ordering::Less,
        }
    }
}
