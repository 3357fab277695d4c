//! Git tree object
//!
//! Trees represent directory snapshots in Git. They contain entries for files (blobs)
//! and subdirectories (other trees), along with their names and modes.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`
//!
//! Entries are kept in on-disk order, which is what the graph traverses.

use crate::artifacts::objects::RAW_OBJECT_ID_LENGTH;
use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::io::{BufRead, Read};

const TREE_MODE: &str = "40000";
const GITLINK_MODE: &str = "160000";

/// One `<mode> <name>\0<oid>` record of a tree
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    /// Octal mode exactly as stored (e.g. `100644`, `40000`)
    pub mode: String,
    pub name: String,
    pub oid: ObjectId,
}

impl TreeEntry {
    pub fn is_tree(&self) -> bool {
        self.mode == TREE_MODE || self.mode == "040000"
    }

    /// Submodule entries point at commits of another repository
    pub fn is_gitlink(&self) -> bool {
        self.mode == GITLINK_MODE
    }

    /// Object kind implied by the mode, as printed by `cat-file -p`
    pub fn kind_hint(&self) -> &str {
        if self.is_tree() {
            "tree"
        } else if self.is_gitlink() {
            "commit"
        } else {
            "blob"
        }
    }
}

/// Git tree object as read from the database
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn into_entries(self) -> impl Iterator<Item = TreeEntry> {
        self.entries.into_iter()
    }

    pub fn display(&self) -> String {
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "{:0>6} {} {}\t{}",
                    entry.mode,
                    entry.kind_hint(),
                    entry.oid,
                    entry.name
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl Unpackable for Tree {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let mut entries = Vec::new();
        let mut reader = reader;

        // Reuse scratch buffers to reduce allocs
        let mut mode_bytes = Vec::new();
        let mut name_bytes = Vec::new();
        let mut raw_oid = [0u8; RAW_OBJECT_ID_LENGTH];

        loop {
            mode_bytes.clear();
            // Read "mode " (space-delimited)
            let n = reader.read_until(b' ', &mut mode_bytes)?;
            if n == 0 {
                break; // clean EOF: no more entries
            }
            // Must end with ' ' or it's malformed
            if mode_bytes.pop() != Some(b' ') {
                anyhow::bail!("unexpected EOF in mode of entry {}", entries.len());
            }
            let mode = std::str::from_utf8(&mode_bytes)
                .context("tree entry mode is not valid UTF-8")?
                .to_owned();

            // Read "name\0"
            name_bytes.clear();
            reader.read_until(b'\0', &mut name_bytes)?;
            if name_bytes.pop() != Some(b'\0') {
                anyhow::bail!("unexpected EOF in name of entry {}", entries.len());
            }
            let name = std::str::from_utf8(&name_bytes)
                .context("tree entry name is not valid UTF-8")?
                .to_owned();

            reader
                .read_exact(&mut raw_oid)
                .with_context(|| format!("truncated object id for entry '{name}'"))?;
            let oid = ObjectId::from_raw(&raw_oid)?;

            entries.push(TreeEntry::new(mode, name, oid));
        }

        Ok(Tree { entries })
    }
}
