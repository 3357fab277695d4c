use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::graph;
use anyhow::Context;
use std::path::PathBuf;
use tracing::info;

/// Where the Mermaid text goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphDestination {
    Stdout,
    File(PathBuf),
}

impl From<PathBuf> for GraphDestination {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            GraphDestination::Stdout
        } else {
            GraphDestination::File(path)
        }
    }
}

impl Repository {
    /// Write the object graph of the branch tip
    pub fn graph(
        &self,
        branch: &BranchName,
        destination: &GraphDestination,
        dedup: bool,
    ) -> anyhow::Result<()> {
        let tip = self.branch_tip(branch)?;
        let graph = graph::build_graph(self.database(), &tip, dedup)?;

        match destination {
            GraphDestination::Stdout => write!(self.writer(), "{graph}")?,
            GraphDestination::File(path) => {
                std::fs::write(path, &graph)
                    .with_context(|| format!("unable to write graph file {}", path.display()))?;
                info!(path = %path.display(), lines = graph.lines().count(), "wrote graph file");
            }
        }

        Ok(())
    }
}
