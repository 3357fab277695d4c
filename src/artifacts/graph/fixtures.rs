//! Loose object store builder for unit tests

use crate::areas::database::Database;
use crate::artifacts::objects::object_id::ObjectId;
use assert_fs::TempDir;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use sha1::{Digest, Sha1};
use std::io::Write;
use std::path::Path;

pub struct ObjectStore {
    dir: TempDir,
    database: Database,
}

impl ObjectStore {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let objects = dir.path().join("objects");
        std::fs::create_dir_all(&objects).unwrap();
        let database = Database::new(objects.into_boxed_path());
        ObjectStore { dir, database }
    }

    /// Directory holding `objects/` and `refs/`
    pub fn git_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn set_branch(&self, name: &str, tip: &ObjectId) {
        let path = self.dir.path().join("refs").join("heads").join(name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, format!("{tip}\n")).unwrap();
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn write(&self, kind: &str, payload: &[u8]) -> ObjectId {
        let mut content = format!("{kind} {}\0", payload.len()).into_bytes();
        content.extend_from_slice(payload);

        let oid = ObjectId::try_parse(format!("{:x}", Sha1::digest(&content))).unwrap();
        let path = self.database.object_path(&oid);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&content).unwrap();
        std::fs::write(path, encoder.finish().unwrap()).unwrap();

        oid
    }

    pub fn blob(&self, content: &str) -> ObjectId {
        self.write("blob", content.as_bytes())
    }

    pub fn tree(&self, entries: &[(&str, &str, &ObjectId)]) -> ObjectId {
        let mut payload = Vec::new();
        for (mode, name, oid) in entries {
            payload.extend_from_slice(format!("{mode} {name}\0").as_bytes());
            let raw = (0..40)
                .step_by(2)
                .map(|i| u8::from_str_radix(&oid.as_ref()[i..i + 2], 16).unwrap())
                .collect::<Vec<u8>>();
            payload.extend_from_slice(&raw);
        }
        self.write("tree", &payload)
    }

    pub fn commit(&self, tree: &ObjectId, parents: &[&ObjectId], message: &str) -> ObjectId {
        let mut payload = format!("tree {tree}\n");
        for parent in parents {
            payload.push_str(&format!("parent {parent}\n"));
        }
        payload.push_str("author fake_user <fake_email@email.com> 1672574400 +0000\n");
        payload.push_str("committer fake_user <fake_email@email.com> 1672574400 +0000\n");
        payload.push_str(&format!("\n{message}\n"));
        self.write("commit", payload.as_bytes())
    }

    /// Remove an object file, simulating an object only present in a packfile
    pub fn remove(&self, oid: &ObjectId) {
        std::fs::remove_file(self.database.object_path(oid)).unwrap();
    }
}
