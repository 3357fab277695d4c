//! Object graph construction and rendering
//!
//! - `object_node`: fully expanded representation of one stored object
//! - `expander`: decodes an object and everything it references
//! - `reachability`: searches an object's expansion for a target id
//! - `mermaid`: flattens an expansion into Mermaid edge text
//! - `renderer`: external renderer and viewer capabilities

pub mod expander;
pub mod mermaid;
pub mod object_node;
pub mod reachability;
pub mod renderer;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::areas::database::Database;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use expander::Expander;

/// Expand `root` and render it as Mermaid text
pub fn build_graph(database: &Database, root: &ObjectId, dedup: bool) -> Result<String> {
    let node = Expander::new(database, dedup).expand(root)?;
    Ok(mermaid::render(&node))
}
