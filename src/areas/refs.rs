//! Git references (branches)
//!
//! Only loose branch refs are read: `refs/heads/<branch>` is a text file
//! holding the 40-character hash of the branch tip.
//!
//! Symbolic refs, detached HEAD and `packed-refs` are not consulted.

use crate::artifacts::branch::branch_name::{BranchName, REF_PREFIX};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{GraphError, Result};
use derive_new::new;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Git references reader
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the git directory (the one holding `refs/`)
    path: Box<Path>,
}

impl Refs {
    pub fn heads_path(&self) -> PathBuf {
        self.path.join(REF_PREFIX)
    }

    pub fn branch_path(&self, branch: &BranchName) -> PathBuf {
        self.path.join(branch.as_ref_path())
    }

    /// Read the tip commit of a branch
    ///
    /// The file content is trimmed and must be a full object ID.
    pub fn resolve_branch_tip(&self, branch: &BranchName) -> Result<ObjectId> {
        let path = self.branch_path(branch);

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(GraphError::RefNotFound {
                    branch: branch.to_string(),
                    path,
                });
            }
            Err(err) => return Err(err.into()),
        };

        let tip = ObjectId::try_parse(content.trim()).map_err(|_| {
            GraphError::InvalidObjectId(format!(
                "ref {} does not hold an object id: '{}'",
                path.display(),
                content.trim()
            ))
        })?;

        debug!(branch = %branch, tip = %tip, "resolved branch tip");
        Ok(tip)
    }

    /// All loose branches, sorted by name
    pub fn list_branches(&self) -> Result<Vec<BranchName>> {
        let heads_path = self.heads_path();
        if !heads_path.is_dir() {
            return Ok(Vec::new());
        }

        let mut branches = Vec::new();
        for entry in WalkDir::new(&heads_path).sort_by_file_name() {
            let entry = entry.map_err(|err| {
                GraphError::Io(
                    err.into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("refs directory loop")),
                )
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(&heads_path) else {
                continue;
            };
            let name = relative
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            // lock files and other oddities are not branches
            if let Ok(branch) = BranchName::try_parse(name) {
                branches.push(branch);
            }
        }

        branches.sort();
        Ok(branches)
    }
}
