//! The persisted lock record and its on-disk codec.
//!
//! # Record File
//!
//! A record file holds one JSON document with three fields:
//! - `locked`: whether the resource is claimed
//! - `timestamp`: microseconds since the Unix epoch
//! - `metadata`: string keys to base64-encoded bytes, or `null` when never written
//!
//! The document is always written whole; there are no partial updates.

mod codec;
mod instant;
mod model;


pub use codec::{decode, encode};
pub use instant::RecordInstant;
pub use model::{LockRecord, Metadata};
