//! Git object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character hexadecimal strings representing SHA-1 hashes.
//! They uniquely identify all objects in Git (blobs, trees, commits).
//!
//! ## Format
//!
//! - Full: 40 hex characters (e.g., "abc123...def")
//! - Label prefix: first 6 characters, used in graph node labels
//! - Short: first 7 characters, used in user-facing messages
//!
//! ## Storage
//!
//! Objects are stored in `objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::{LABEL_PREFIX_LENGTH, OBJECT_ID_LENGTH, RAW_OBJECT_ID_LENGTH};
use crate::errors::GraphError;
use std::path::PathBuf;

/// Git object identifier (SHA-1 hash)
///
/// Always holds 40 lowercase hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Surrounding whitespace is ignored and uppercase digits are normalised,
    /// so ids copied from other tools compare equal to ids read from trees.
    pub fn try_parse(id: impl AsRef<str>) -> Result<Self, GraphError> {
        let id = id.as_ref().trim();

        if id.len() != OBJECT_ID_LENGTH {
            return Err(GraphError::InvalidObjectId(format!(
                "expected {OBJECT_ID_LENGTH} hex characters, got {} in '{id}'",
                id.len()
            )));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(GraphError::InvalidObjectId(format!(
                "non-hexadecimal characters in '{id}'"
            )));
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Build an object ID from its 20-byte binary form, as stored in tree entries
    pub fn from_raw(raw: &[u8]) -> Result<Self, GraphError> {
        if raw.len() != RAW_OBJECT_ID_LENGTH {
            return Err(GraphError::InvalidObjectId(format!(
                "expected {RAW_OBJECT_ID_LENGTH} raw bytes, got {}",
                raw.len()
            )));
        }

        let hex40 = raw
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect::<String>();

        Ok(Self(hex40))
    }

    /// Convert to file system path for object storage
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    /// For example, `abc123...` becomes `ab/c123...`
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// First 6 characters, as used in graph node labels
    pub fn label_prefix(&self) -> &str {
        &self.0[..LABEL_PREFIX_LENGTH]
    }

    /// First 7 characters of the hash (standard Git abbreviation)
    pub fn to_short_oid(&self) -> String {
        self.0[..7].to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for ObjectId {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
