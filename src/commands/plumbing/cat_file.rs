use crate::areas::repository::Repository;
use crate::artifacts::objects::object::ParsedObject;
use crate::artifacts::objects::object_id::ObjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatFileMode {
    /// Print the object kind
    Type,
    /// Print the payload size in bytes
    Size,
    /// Print a readable rendering of the payload
    Pretty,
}

impl Repository {
    pub fn cat_file(&self, object_id: &str, mode: CatFileMode) -> anyhow::Result<()> {
        let oid = ObjectId::try_parse(object_id)?;
        let object = self.database().load(&oid)?;

        match mode {
            CatFileMode::Type => writeln!(self.writer(), "{}", object.object_type)?,
            CatFileMode::Size => writeln!(self.writer(), "{}", object.payload.len())?,
            CatFileMode::Pretty => match object.parse()? {
                ParsedObject::Blob(blob) => write!(self.writer(), "{}", blob.display())?,
                ParsedObject::Tree(tree) => writeln!(self.writer(), "{}", tree.display())?,
                ParsedObject::Commit(commit) => {
                    writeln!(self.writer(), "tree {}", commit.tree_oid())?;
                    for parent in commit.parents() {
                        writeln!(self.writer(), "parent {parent}")?;
                    }
                    for header in commit.extra_headers() {
                        writeln!(self.writer(), "{header}")?;
                    }
                    writeln!(self.writer())?;
                    writeln!(self.writer(), "{}", commit.message())?;
                }
            },
        }

        Ok(())
    }
}
