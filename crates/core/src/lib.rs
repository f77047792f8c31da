//! Functional core for logquery.
//!
//! Pure types and contracts shared by every storage backend: the log record,
//! the range query descriptor and the `LogStore` capability. Nothing in this
//! crate performs I/O.

pub mod log;
pub mod storage;
