//! Lockrec: a durable, file-backed lock record.
//!
//! A record file stores a locked/unlocked flag, the time it was last stamped
//! and a set of key/value metadata. `LockHandle` binds to one file and offers
//! load/save, lock/unlock, timestamp and metadata operations.
//!
//! The flag is data, not mutual exclusion: concurrent writers race and the
//! last save wins. `exclusive::ExclusiveGuard` adds an OS advisory lock for
//! callers that need it.
//!
//! ```no_run
//! use lockrec::LockHandle;
//!
//! let mut handle = LockHandle::new("/tmp/resource.lock");
//! handle.load()?;
//! if handle.is_unlocked() {
//!     handle.set_metadata("owner", "worker-1")?;
//!     handle.touch();
//!     handle.set_lock()?;
//! }
//! # Ok::<(), lockrec::LockError>(())
//! ```

pub mod config;
pub mod error;
pub mod exclusive;
pub mod exit_codes;
pub mod fs;
pub mod handle;
pub mod record;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::LockOptions;
pub use error::{LockError, Result};
pub use exclusive::ExclusiveGuard;
pub use handle::LockHandle;
pub use record::{LockRecord, Metadata, RecordInstant};
