//! Porcelain commands
//!
//! - `contains`: Check whether an object is reachable from a branch tip
//! - `graph`: Write the Mermaid graph of a branch tip
//! - `visualize`: Check, render and display in one go
//! - `branches`: List loose branches

pub mod branches;
pub mod contains;
pub mod graph;
pub mod visualize;
