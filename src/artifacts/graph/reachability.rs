//! Reachability search
//!
//! Answers whether an object occurs anywhere in the expansion of another one.
//! Started from a commit the search covers its tree, every ancestor commit
//! and their trees; started from a tree it covers the tree's content.
//!
//! The search walks the same depth-first pre-order as the expander but reads
//! objects lazily and stops at the first match, so a hit close to the tip
//! never touches the rest of the history.

use crate::areas::database::Database;
use crate::artifacts::objects::object::ParsedObject;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use derive_new::new;
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, new)]
pub struct ReachabilityChecker<'d> {
    database: &'d Database,
    /// Skip objects whose subtree was already searched
    dedup: bool,
}

impl ReachabilityChecker<'_> {
    /// True iff `target` is `root` itself or any object in its expansion
    pub fn contains(&self, root: &ObjectId, target: &ObjectId) -> Result<bool> {
        let mut stack = vec![root.clone()];
        let mut searched: HashSet<ObjectId> = HashSet::new();
        let mut visited = 0usize;

        while let Some(oid) = stack.pop() {
            if &oid == target {
                debug!(root = %root, target = %target, visited, "target reached");
                return Ok(true);
            }

            if self.dedup && !searched.insert(oid.clone()) {
                continue;
            }

            visited += 1;
            let children = match self.database.parse_object(&oid)? {
                ParsedObject::Blob(_) => Vec::new(),
                ParsedObject::Tree(tree) => tree.into_entries().map(|entry| entry.oid).collect(),
                ParsedObject::Commit(commit) => commit.referenced_oids().cloned().collect(),
            };

            // reversed so the first child is searched first
            stack.extend(children.into_iter().rev());
        }

        debug!(root = %root, target = %target, visited, "target not reachable");
        Ok(false)
    }
}
