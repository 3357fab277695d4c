//! Git commit object
//!
//! Commits represent snapshots of the repository at specific points in time.
//! For graph building only the tree, the parents and the message matter.
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::io::{BufRead, Read};

/// Git commit object
///
/// Holds the tree snapshot, the parent commits in declaration order
/// (empty for a root commit, several for a merge) and the message.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    tree_oid: ObjectId,
    parents: Vec<ObjectId>,
    /// Header lines other than `tree`/`parent` (author, committer, gpgsig...)
    extra_headers: Vec<String>,
    message: String,
}

impl Commit {
    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// Message with surrounding whitespace trimmed
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the first line of the commit message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Header lines after `tree` and `parent`, in stored order
    pub fn extra_headers(&self) -> &[String] {
        &self.extra_headers
    }

    /// Object IDs referenced by this commit: the tree first, then every parent
    pub fn referenced_oids(&self) -> impl Iterator<Item = &ObjectId> {
        std::iter::once(&self.tree_oid).chain(self.parents.iter())
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = String::new();
        let mut reader = reader;
        reader
            .read_to_string(&mut content)
            .context("commit payload is not valid UTF-8")?;

        let mut lines = content.lines();

        let tree_line = lines
            .next()
            .context("Invalid commit object: missing tree line")?;
        let tree_oid = tree_line
            .strip_prefix("tree ")
            .context("Invalid commit object: invalid tree line")?;
        let tree_oid = ObjectId::try_parse(tree_oid)
            .context("Invalid commit object: invalid tree object id")?;

        // Parse all parent lines (there can be 0, 1, or multiple parents)
        let mut parents = Vec::new();
        let mut next_line = lines.next();

        while let Some(parent_oid) = next_line.and_then(|line| line.strip_prefix("parent ")) {
            parents.push(
                ObjectId::try_parse(parent_oid)
                    .context("Invalid commit object: invalid parent object id")?,
            );
            next_line = lines.next();
        }

        // the remaining headers run up to the blank line before the message
        let mut extra_headers = Vec::new();
        while let Some(line) = next_line {
            if line.is_empty() {
                break;
            }
            extra_headers.push(line.to_string());
            next_line = lines.next();
        }

        let message = lines.collect::<Vec<&str>>().join("\n").trim().to_string();

        Ok(Commit {
            tree_oid,
            parents,
            extra_headers,
            message,
        })
    }
}
