use crate::artifacts::objects::object::{ParsedObject, RawObject};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{GraphError, Result};
use bytes::Bytes;
use std::io::{Cursor, ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read-only view of the loose object store (`<git-dir>/objects`)
///
/// Every load opens, reads and closes the object file before returning.
/// Nothing is cached between loads.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

// TODO: read packfiles so that objects moved by `git gc` can still be found
impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    /// Load an object and split it into its declared kind and payload
    pub fn load(&self, object_id: &ObjectId) -> Result<RawObject> {
        let object_path = self.object_path(object_id);
        let object_content = self.read_object(object_id, object_path)?;
        let mut object_reader = Cursor::new(object_content);

        let header = ObjectType::parse_header(&mut object_reader)
            .map_err(|err| GraphError::corrupt(object_id, format!("{err:#}")))?;

        let header_length = object_reader.position() as usize;
        let payload = object_reader.into_inner().slice(header_length..);

        if payload.len() != header.declared_size {
            return Err(GraphError::corrupt(
                object_id,
                format!(
                    "declared size {} does not match payload size {}",
                    header.declared_size,
                    payload.len()
                ),
            ));
        }

        debug!(
            oid = %object_id,
            kind = %header.object_type,
            size = payload.len(),
            "loaded object"
        );

        Ok(RawObject::new(
            object_id.clone(),
            header.object_type,
            payload,
        ))
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> Result<ParsedObject> {
        self.load(object_id)?.parse()
    }

    fn read_object(&self, object_id: &ObjectId, object_path: PathBuf) -> Result<Bytes> {
        // read the object file
        let object_content = match std::fs::read(&object_path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(GraphError::ObjectNotFound {
                    oid: object_id.clone(),
                    path: object_path,
                });
            }
            Err(err) => return Err(err.into()),
        };

        // decompress the object content
        Self::decompress(object_content.into())
            .map_err(|err| GraphError::corrupt(object_id, format!("unable to decompress: {err}")))
    }

    fn decompress(data: Bytes) -> std::io::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder.read_to_end(&mut decompressed_content)?;

        Ok(decompressed_content.into())
    }
}
