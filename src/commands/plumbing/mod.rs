//! Plumbing commands (low-level object inspection)
//!
//! ## Commands
//!
//! - `cat-file`: Print the kind, size or content of a stored object

pub mod cat_file;
