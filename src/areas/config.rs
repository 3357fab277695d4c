//! TOML configuration
//!
//! ```toml
//! [config]
//! repo_path = "/path/to/repo"
//! branch = "main"
//! target_file_hash = "43dd47ea691c90a5fa7827892c70241913351963"
//! visualizer_path = "/usr/local/bin/mmdc"
//! ```
//!
//! Command line flags override values read from the file.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GraphError;
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    config: Config,
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Repository root; its `.git` directory is used when present.
    pub repo_path: Option<PathBuf>,
    /// Branch whose tip is inspected.
    pub branch: Option<String>,
    /// Object searched for under the branch tip.
    pub target_file_hash: Option<String>,
    /// Mermaid CLI executable used to render the graph file.
    pub visualizer_path: Option<PathBuf>,
    /// Program used to display the rendered image. Platform opener if unset.
    pub viewer_path: Option<PathBuf>,
    pub graph_file: PathBuf,
    pub output_file: PathBuf,
    /// Scale factor handed to the renderer.
    pub scale: u32,
    /// Decode each object once per traversal instead of once per path.
    pub dedup: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo_path: None,
            branch: None,
            target_file_hash: None,
            visualizer_path: None,
            viewer_path: None,
            graph_file: PathBuf::from("graph.mmd"),
            output_file: PathBuf::from("graph.png"),
            scale: 3,
            dedup: false,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        Self::parse(&s).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn parse(s: &str) -> anyhow::Result<Self> {
        let file: ConfigFile = toml::from_str(s)?;
        Ok(file.config)
    }

    /// Load an explicitly requested file, or `config.toml` from the working
    /// directory when it exists, or fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn repo_path(&self) -> Result<&Path, GraphError> {
        self.repo_path
            .as_deref()
            .ok_or_else(|| missing("repo_path", "--repo"))
    }

    pub fn branch(&self) -> Result<BranchName, GraphError> {
        let branch = self
            .branch
            .as_deref()
            .ok_or_else(|| missing("branch", "--branch"))?;
        BranchName::try_parse(branch)
    }

    pub fn target(&self) -> Result<ObjectId, GraphError> {
        let target = self
            .target_file_hash
            .as_deref()
            .ok_or_else(|| missing("target_file_hash", "<TARGET>"))?;
        ObjectId::try_parse(target)
    }

    pub fn visualizer_path(&self) -> Result<&Path, GraphError> {
        self.visualizer_path
            .as_deref()
            .ok_or_else(|| missing("visualizer_path", "--visualizer"))
    }
}

fn missing(key: &str, flag: &str) -> GraphError {
    GraphError::Config(format!(
        "'{key}' is not set; add it to the [config] table or pass {flag}"
    ))
}
