//! Domain building blocks shared by the database and API crates.
//!
//! Nothing in here performs I/O: identifier parsing, the error taxonomy, and
//! the in-memory relation projection used by list-valued joins.

pub mod error;
pub mod ids;
pub mod relation;
pub mod types;
