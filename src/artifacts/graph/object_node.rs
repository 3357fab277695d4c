use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use std::rc::Rc;

/// A stored object together with its fully expanded children
///
/// - Commit: its tree, then every parent commit in declaration order
/// - Tree: one node per entry, in on-disk order, labelled with the entry name
/// - Blob: no children
///
/// Children are shared behind an `Rc` so that a memoised subtree can be
/// attached under several parents with a different label each time.
///
/// Dropping and comparing walk the subtree with an explicit stack, so a
/// history of any depth is released without growing the call stack.
#[derive(Debug, Clone)]
pub struct ObjectNode {
    oid: ObjectId,
    kind: ObjectType,
    label: String,
    message: Option<Rc<str>>,
    children: Rc<[ObjectNode]>,
}

impl ObjectNode {
    pub fn new(
        oid: ObjectId,
        kind: ObjectType,
        suffix: Option<&str>,
        message: Option<Rc<str>>,
        children: Rc<[ObjectNode]>,
    ) -> Self {
        let label = Self::make_label(kind, &oid, suffix);

        ObjectNode {
            oid,
            kind,
            label,
            message,
            children,
        }
    }

    /// `<kind>_<first 6 hex chars>`, followed by `_<suffix>` when given
    pub fn make_label(kind: ObjectType, oid: &ObjectId, suffix: Option<&str>) -> String {
        match suffix {
            Some(suffix) => format!("{}_{}_{}", kind.as_str(), oid.label_prefix(), suffix),
            None => format!("{}_{}", kind.as_str(), oid.label_prefix()),
        }
    }

    /// Same object and subtree under a different naming suffix
    pub fn relabeled(&self, suffix: Option<&str>) -> Self {
        ObjectNode {
            oid: self.oid.clone(),
            kind: self.kind,
            label: Self::make_label(self.kind, &self.oid, suffix),
            message: self.message.clone(),
            children: Rc::clone(&self.children),
        }
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn kind(&self) -> ObjectType {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Commit message; `None` for trees and blobs
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn children(&self) -> &[ObjectNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in the expansion, counting every occurrence
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }

        count
    }

    /// Whether `target` is this node or occurs anywhere beneath it
    pub fn contains(&self, target: &ObjectId) -> bool {
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if &node.oid == target {
                return true;
            }
            stack.extend(node.children.iter().rev());
        }

        false
    }
}

impl PartialEq for ObjectNode {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];

        while let Some((left, right)) = stack.pop() {
            if left.oid != right.oid
                || left.kind != right.kind
                || left.label != right.label
                || left.message != right.message
                || left.children.len() != right.children.len()
            {
                return false;
            }

            if !Rc::ptr_eq(&left.children, &right.children) {
                stack.extend(left.children.iter().zip(right.children.iter()));
            }
        }

        true
    }
}

impl Eq for ObjectNode {}

impl Drop for ObjectNode {
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }

        let mut pending = vec![std::mem::replace(&mut self.children, Rc::from([]))];
        while let Some(mut children) = pending.pop() {
            // shared subtrees are released by their last owner
            let Some(children) = Rc::get_mut(&mut children) else {
                continue;
            };

            for child in children.iter_mut() {
                if !child.children.is_empty() {
                    pending.push(std::mem::replace(&mut child.children, Rc::from([])));
                }
            }
        }
    }
}
