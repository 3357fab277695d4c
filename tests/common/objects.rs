use flate2::Compression;
use flate2::write::ZlibEncoder;
use sha1::{Digest, Sha1};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes loose objects and branch refs into a `.git` directory
#[derive(Debug, Clone)]
pub struct LooseObjects {
    git_dir: PathBuf,
}

impl LooseObjects {
    pub fn init(root: &Path) -> Self {
        let git_dir = root.join(".git");
        std::fs::create_dir_all(git_dir.join("objects")).expect("Failed to create objects dir");
        std::fs::create_dir_all(git_dir.join("refs").join("heads"))
            .expect("Failed to create refs dir");

        LooseObjects { git_dir }
    }

    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    pub fn object_path(&self, oid: &str) -> PathBuf {
        self.git_dir.join("objects").join(&oid[..2]).join(&oid[2..])
    }

    pub fn write(&self, kind: &str, payload: &[u8]) -> String {
        let mut content = format!("{kind} {}\0", payload.len()).into_bytes();
        content.extend_from_slice(payload);
        self.write_raw(&content)
    }

    /// Store already framed content under its hash
    pub fn write_raw(&self, content: &[u8]) -> String {
        let oid = format!("{:x}", Sha1::digest(content));
        let path = self.object_path(&oid);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(content).unwrap();
        std::fs::write(path, encoder.finish().unwrap()).unwrap();

        oid
    }

    pub fn blob(&self, content: &str) -> String {
        self.write("blob", content.as_bytes())
    }

    pub fn tree(&self, entries: &[(&str, &str, &str)]) -> String {
        let mut payload = Vec::new();
        for (mode, name, oid) in entries {
            payload.extend_from_slice(format!("{mode} {name}\0").as_bytes());
            payload.extend((0..40).step_by(2).map(|i| {
                u8::from_str_radix(&oid[i..i + 2], 16).expect("Invalid hex in object id")
            }));
        }
        self.write("tree", &payload)
    }

    pub fn commit(&self, tree: &str, parents: &[&str], message: &str) -> String {
        let mut payload = format!("tree {tree}\n");
        for parent in parents {
            payload.push_str(&format!("parent {parent}\n"));
        }
        payload.push_str("author fake_user <fake_email@email.com> 1672574400 +0000\n");
        payload.push_str("committer fake_user <fake_email@email.com> 1672574400 +0000\n");
        payload.push_str(&format!("\n{message}\n"));
        self.write("commit", payload.as_bytes())
    }

    pub fn set_branch(&self, name: &str, tip: &str) {
        let path = self.git_dir.join("refs").join("heads").join(name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, format!("{tip}\n")).unwrap();
    }

    pub fn remove(&self, oid: &str) {
        std::fs::remove_file(self.object_path(oid)).unwrap();
    }
}
