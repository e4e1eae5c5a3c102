//! Optional cross-process exclusion for record files.
//!
//! The record's `locked` flag is only data; it does not stop two processes
//! from racing on load-modify-save. This module adds an OS advisory lock on a
//! sidecar file (`<record>.guard`) that callers can hold around such a
//! sequence. `LockHandle::set_lock` and `set_unlock` never take it.
//!
//! # RAII Guards
//!
//! The advisory lock is released when the `ExclusiveGuard` is dropped. The
//! sidecar file is left in place so other processes always lock the same inode.

mod guard;
mod transact;

#[cfg(test)]
mod tests;

pub use guard::ExclusiveGuard;
