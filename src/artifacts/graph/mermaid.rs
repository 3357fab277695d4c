//! Mermaid flowchart rendering
//!
//! ```text
//! graph TD
//! commit_1a2b3c --> tree_4d5e6f
//! tree_4d5e6f --> blob_7a8b9c_a.txt
//! ```
//!
//! Each node contributes one edge line per child, followed by the lines of
//! each child in order (depth-first pre-order). Output depends only on the
//! node structure.

use crate::artifacts::graph::object_node::ObjectNode;

pub const GRAPH_HEADER: &str = "graph TD";

pub fn render(root: &ObjectNode) -> String {
    let mut graph = String::new();
    graph.push_str(GRAPH_HEADER);
    graph.push('\n');

    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        for child in node.children() {
            graph.push_str(&format!("{} --> {}\n", node.label(), child.label()));
        }
        stack.extend(node.children().iter().rev());
    }

    graph
}
