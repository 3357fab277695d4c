use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::graph;
use crate::artifacts::graph::reachability::ReachabilityChecker;
use crate::artifacts::graph::renderer::{DiagramRenderer, ImageViewer};
use crate::artifacts::objects::object_id::ObjectId;
use crate::commands::porcelain::contains::not_found_message;
use anyhow::Context;
use colored::Colorize;
use derive_new::new;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, new)]
pub struct VisualizeOptions {
    pub branch: BranchName,
    pub target: ObjectId,
    pub graph_file: PathBuf,
    pub output_file: PathBuf,
    pub dedup: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualizeOutcome {
    /// The graph was rendered and handed to the viewer
    Displayed { graph_file: PathBuf, image: PathBuf },
    /// The target is not reachable; nothing was written
    NotFound,
}

impl Repository {
    /// Check the target, then render and display the branch's object graph
    ///
    /// The graph file is only written when the target is reachable.
    pub fn visualize(
        &self,
        options: &VisualizeOptions,
        renderer: &dyn DiagramRenderer,
        viewer: &dyn ImageViewer,
    ) -> anyhow::Result<VisualizeOutcome> {
        let tip = self.branch_tip(&options.branch)?;
        info!(branch = %options.branch, tip = %tip, target = %options.target, "checking reachability");

        let found = ReachabilityChecker::new(self.database(), options.dedup)
            .contains(&tip, &options.target)?;
        if !found {
            writeln!(
                self.writer(),
                "{}",
                not_found_message(&options.target, &options.branch).yellow()
            )?;
            return Ok(VisualizeOutcome::NotFound);
        }

        let graph = graph::build_graph(self.database(), &tip, options.dedup)?;
        std::fs::write(&options.graph_file, &graph).with_context(|| {
            format!(
                "unable to write graph file {}",
                options.graph_file.display()
            )
        })?;
        info!(path = %options.graph_file.display(), "wrote graph file");

        renderer.render(&options.graph_file, &options.output_file)?;
        info!(path = %options.output_file.display(), "rendered graph image");

        writeln!(
            self.writer(),
            "{}",
            format!("rendered {}", options.output_file.display()).green()
        )?;
        viewer.show(&options.output_file)?;

        Ok(VisualizeOutcome::Displayed {
            graph_file: options.graph_file.clone(),
            image: options.output_file.clone(),
        })
    }
}
