//! Object decoder
//!
//! Turns an object id into an [`ObjectNode`] whose children are expanded all
//! the way down: a commit pulls in its tree and its entire ancestry, a tree
//! pulls in every entry.
//!
//! Expansion uses an explicit stack of frames rather than recursion, so deep
//! histories do not exhaust the call stack. Objects are read in the same
//! depth-first pre-order a recursive decoder would use.
//!
//! By default every occurrence of an object is decoded again. With
//! deduplication on, each object is decoded once per expansion and its
//! subtree is shared; labels are still attached per occurrence so the
//! resulting structure is identical.

use crate::areas::database::Database;
use crate::artifacts::graph::object_node::ObjectNode;
use crate::artifacts::objects::object::ParsedObject;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{GraphError, Result};
use derive_new::new;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use tracing::debug;

/// A referenced object that still has to be expanded
#[derive(Debug)]
struct ChildRef {
    oid: ObjectId,
    suffix: Option<String>,
}

/// An object whose children are being expanded
#[derive(Debug)]
struct Frame {
    oid: ObjectId,
    kind: ObjectType,
    suffix: Option<String>,
    message: Option<Rc<str>>,
    pending: std::vec::IntoIter<ChildRef>,
    built: Vec<ObjectNode>,
}

impl Frame {
    fn finish(self) -> ObjectNode {
        ObjectNode::new(
            self.oid,
            self.kind,
            self.suffix.as_deref(),
            self.message,
            Rc::from(self.built),
        )
    }
}

#[derive(Debug, new)]
pub struct Expander<'d> {
    database: &'d Database,
    dedup: bool,
}

impl Expander<'_> {
    /// Expand a root object (no naming suffix)
    pub fn expand(&self, oid: &ObjectId) -> Result<ObjectNode> {
        self.expand_named(oid, None)
    }

    /// Expand an object reached under a name, e.g. a tree entry
    pub fn expand_named(&self, oid: &ObjectId, suffix: Option<&str>) -> Result<ObjectNode> {
        let mut memo: HashMap<ObjectId, ObjectNode> = HashMap::new();
        // objects on the current path; a repeat means the store has a cycle
        let mut in_progress: HashSet<ObjectId> = HashSet::new();
        let mut decoded = 0usize;

        in_progress.insert(oid.clone());
        let mut stack = vec![self.open_frame(oid.clone(), suffix.map(str::to_string))?];
        decoded += 1;

        while let Some(frame) = stack.last_mut() {
            if let Some(child) = frame.pending.next() {
                if self.dedup
                    && let Some(node) = memo.get(&child.oid)
                {
                    frame.built.push(node.relabeled(child.suffix.as_deref()));
                    continue;
                }

                if !in_progress.insert(child.oid.clone()) {
                    return Err(GraphError::corrupt(
                        &child.oid,
                        "object is reachable from itself",
                    ));
                }

                let child_frame = self.open_frame(child.oid, child.suffix)?;
                decoded += 1;
                stack.push(child_frame);
                continue;
            }

            let Some(frame) = stack.pop() else { break };
            in_progress.remove(&frame.oid);
            let node = frame.finish();

            if self.dedup {
                memo.entry(node.oid().clone())
                    .or_insert_with(|| node.relabeled(None));
            }

            match stack.last_mut() {
                Some(parent) => parent.built.push(node),
                None => {
                    debug!(
                        root = %oid,
                        decoded,
                        dedup = self.dedup,
                        "expanded object graph"
                    );
                    return Ok(node);
                }
            }
        }

        Err(GraphError::corrupt(oid, "expansion finished without a root"))
    }

    fn open_frame(&self, oid: ObjectId, suffix: Option<String>) -> Result<Frame> {
        let parsed = self.database.parse_object(&oid)?;
        let kind = parsed.object_type();

        let (message, children) = match parsed {
            ParsedObject::Blob(_) => (None, Vec::new()),
            ParsedObject::Tree(tree) => (
                None,
                tree.into_entries()
                    .map(|entry| ChildRef {
                        oid: entry.oid,
                        suffix: Some(entry.name),
                    })
                    .collect(),
            ),
            ParsedObject::Commit(commit) => {
                debug!(
                    oid = %oid,
                    merge = commit.is_merge(),
                    subject = commit.short_message(),
                    "decoded commit"
                );
                (
                    Some(Rc::from(commit.message())),
                    commit
                        .referenced_oids()
                        .map(|oid| ChildRef {
                            oid: oid.clone(),
                            suffix: None,
                        })
                        .collect(),
                )
            }
        };

        Ok(Frame {
            oid,
            kind,
            suffix,
            message,
            pending: children.into_iter(),
            built: Vec::new(),
        })
    }
}
