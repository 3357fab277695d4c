use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::GraphError;
use bytes::Bytes;
use derive_new::new;
use std::io::{BufRead, Cursor};

pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self>
    where
        Self: Sized;
}

/// A loose object after decompression: its declared kind and the bytes
/// following the header
#[derive(Debug, Clone, new)]
pub struct RawObject {
    pub oid: ObjectId,
    pub object_type: ObjectType,
    pub payload: Bytes,
}

impl RawObject {
    /// Parse the payload according to the declared kind
    pub fn parse(self) -> Result<ParsedObject, GraphError> {
        let reader = Cursor::new(self.payload);

        let parsed = match self.object_type {
            ObjectType::Blob => Blob::deserialize(reader).map(ParsedObject::Blob),
            ObjectType::Tree => Tree::deserialize(reader).map(ParsedObject::Tree),
            ObjectType::Commit => Commit::deserialize(reader).map(ParsedObject::Commit),
        };

        parsed.map_err(|err| GraphError::corrupt(&self.oid, format!("{err:#}")))
    }
}

pub enum ParsedObject {
    Blob(Blob),
    Tree(Tree),
    Commit(Commit),
}

impl ParsedObject {
    pub fn object_type(&self) -> ObjectType {
        match self {
            ParsedObject::Blob(_) => ObjectType::Blob,
            ParsedObject::Tree(_) => ObjectType::Tree,
            ParsedObject::Commit(_) => ObjectType::Commit,
        }
    }
}
