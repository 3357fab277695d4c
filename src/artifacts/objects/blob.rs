//! Git blob object
//!
//! Blobs store file content in Git. The graph treats them as opaque leaves;
//! the content is only looked at by `cat-file -p`.
//!
//! ## Format
//!
//! On disk: `blob <size>\0<content>`

use crate::artifacts::objects::object::Unpackable;
use bytes::Bytes;
use derive_new::new;
use std::io::{BufRead, Read};

#[derive(Debug, Clone, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    /// Content as text, with invalid UTF-8 sequences replaced
    pub fn display(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

impl Unpackable for Blob {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        // the header has already been read
        let mut content = Vec::new();
        let mut reader = reader;
        reader.read_to_end(&mut content)?;

        Ok(Self::new(content.into()))
    }
}
