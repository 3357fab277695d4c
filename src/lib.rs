//! Object reachability and graph drawing over a git object store
//!
//! - `areas`: the on-disk stores (objects, refs), the repository handle and
//!   configuration
//! - `artifacts`: object types, branch names and the object graph
//! - `commands`: user-facing commands built on top of a `Repository`
//! - `errors`: the error taxonomy shared by the stores and the graph

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
