//! The in-memory controller for a record file.
//!
//! A `LockHandle` is bound to one path and owns at most one `LockRecord`.
//! Mutations happen in memory; only `save`, `set_lock`, `set_unlock`, `reset`
//! and a load that creates a missing file touch the disk.
//!
//! # Concurrency
//!
//! Nothing here serializes access. Two handles on the same path race on
//! load-modify-save and the last save wins. Use `crate::exclusive` around the
//! sequence when cross-process exclusion is required.

mod dump;
mod lifecycle;
mod metadata;
mod state;


pub use dump::NIL_RECORD_DUMP;
pub use lifecycle::LockHandle;
