//! Git data structures and algorithms
//!
//! - `branch`: Branch name validation
//! - `graph`: Object graph expansion, reachability and rendering
//! - `objects`: Git object types (blob, tree, commit)

pub mod branch;
pub mod graph;
pub mod objects;
