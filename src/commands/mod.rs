//! Command implementations
//!
//! Commands are methods on `Repository` writing their output to the
//! repository's writer, organized the way git organizes its commands:
//!
//! - `plumbing`: Low-level object inspection (cat-file)
//! - `porcelain`: User-facing commands (contains, graph, visualize, branches)

pub mod plumbing;
pub mod porcelain;
