//! Git object types and operations
//!
//! Git stores all content as objects identified by SHA-1 hashes. Three types
//! are understood here:
//!
//! - **Blob**: File content (raw bytes)
//! - **Tree**: Directory listing (names, modes, and object IDs)
//! - **Commit**: Snapshot with metadata (tree, parent commits, message)
//!
//! Every loose object decompresses to `<type> <size>\0<content>`.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in binary format, as stored in tree entries
pub const RAW_OBJECT_ID_LENGTH: usize = 20;

/// Number of hash characters shown in graph node labels
pub const LABEL_PREFIX_LENGTH: usize = 6;
