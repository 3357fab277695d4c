use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Blob,
    Tree,
    Commit,
}

/// Parsed `<kind> <size>\0` header of a loose object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectHeader {
    pub object_type: ObjectType,
    pub declared_size: usize,
}

impl ObjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Tree => "tree",
            ObjectType::Commit => "commit",
        }
    }

    /// Read the header up to and including the NUL separator
    ///
    /// Leaves the reader positioned at the first payload byte.
    pub fn parse_header(data_reader: &mut impl BufRead) -> anyhow::Result<ObjectHeader> {
        let mut header = Vec::new();
        data_reader.read_until(b'\0', &mut header)?;

        if header.pop() != Some(b'\0') {
            anyhow::bail!("missing NUL separator after object header");
        }

        let header = std::str::from_utf8(&header)?;
        let (object_type, size) = header
            .split_once(' ')
            .ok_or_else(|| anyhow::anyhow!("malformed object header '{header}'"))?;

        let declared_size = size
            .parse::<usize>()
            .map_err(|_| anyhow::anyhow!("invalid object size '{size}'"))?;

        Ok(ObjectHeader {
            object_type: ObjectType::try_from(object_type)?,
            declared_size,
        })
    }
}

impl TryFrom<&str> for ObjectType {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        match value {
            "blob" => Ok(ObjectType::Blob),
            "tree" => Ok(ObjectType::Tree),
            "commit" => Ok(ObjectType::Commit),
            _ => Err(anyhow::anyhow!("unsupported object type '{value}'")),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    #[test]
    fn header_is_split_from_payload() {
        let mut reader = Cursor::new(b"blob 5\0hello".to_vec());

        let header = ObjectType::parse_header(&mut reader).unwrap();
        let mut payload = Vec::new();
        reader.read_to_end(&mut payload).unwrap();

        assert_eq!(header.object_type, ObjectType::Blob);
        assert_eq!(header.declared_size, 5);
        assert_eq!(payload, b"hello");
    }

    #[test]
    fn header_without_nul_is_rejected() {
        let mut reader = Cursor::new(b"blob 5 hello".to_vec());

        assert!(ObjectType::parse_header(&mut reader).is_err());
    }

    #[test]
    fn tags_are_not_supported() {
        let mut reader = Cursor::new(b"tag 3\0abc".to_vec());

        assert!(ObjectType::parse_header(&mut reader).is_err());
    }
}
