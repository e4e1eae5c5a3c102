//! Construction-time options for lock handles.
//!
//! `LockOptions` can be built in code or read from a YAML document. Unknown
//! fields in the YAML are ignored and missing fields take their defaults.

mod model;
mod operations;

#[cfg(test)]
mod tests;

pub use model::LockOptions;
