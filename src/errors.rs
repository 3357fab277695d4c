//! Error types for object store reading, decoding and graph rendering.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;

/// Errors raised while reading the object and ref stores or rendering a graph.
///
/// None of these are recovered locally: the first one aborts the current
/// top-level operation.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The loose object file does not exist.
    ///
    /// Also raised for objects that only live in a packfile.
    #[error("object {oid} not found at {}", path.display())]
    ObjectNotFound { oid: ObjectId, path: PathBuf },

    /// Decompression failed or the payload is malformed for its declared kind.
    #[error("corrupt object {oid}: {reason}")]
    CorruptObject { oid: ObjectId, reason: String },

    /// The branch has no loose ref file.
    #[error("branch '{branch}' not found at {}", path.display())]
    RefNotFound { branch: String, path: PathBuf },

    /// The external diagram renderer failed or produced no output.
    #[error("renderer failure: {0}")]
    RendererFailure(String),

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub(crate) fn corrupt(oid: &ObjectId, reason: impl Into<String>) -> Self {
        GraphError::CorruptObject {
            oid: oid.clone(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
