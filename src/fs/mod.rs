//! Filesystem primitives for record files.
//!
//! Record files are written with a single blocking write into the target path.
//! There is no write-then-rename step, so a crash mid-write can leave a
//! truncated file behind; the next load reports it as a decode failure.

mod record_file;

pub use record_file::{DEFAULT_FILE_MODE, read_file, write_file};
