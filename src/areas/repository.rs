use crate::areas::database::Database;
use crate::areas::refs::Refs;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub struct Repository {
    /// The git directory (the one holding `objects/` and `refs/`)
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    refs: Refs,
}

impl Repository {
    /// Open a repository for reading
    ///
    /// `path` is either a working tree root containing `.git/` or a git
    /// directory itself (bare repository).
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("repository path {} does not exist", path.display()))?;

        let git_dir = if path.join(".git").is_dir() {
            path.join(".git")
        } else {
            path
        };

        if !git_dir.join("objects").is_dir() {
            anyhow::bail!(
                "{} is not a git repository: no objects directory",
                git_dir.display()
            );
        }

        let database = Database::new(git_dir.join("objects").into_boxed_path());
        let refs = Refs::new(git_dir.clone().into_boxed_path());

        Ok(Repository {
            path: git_dir.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
