//! Template resolution and destination merging
//!
//! Both stages are pure functions over line sequences:
//! - [`resolve`]: substitute whole-value placeholder tokens from a table
//! - [`merge`]: combine generated lines with an existing destination file

pub mod merge;
pub mod resolve;

pub use merge::{apply_extra_variables, merge};
pub use resolve::{resolve, unresolved};
