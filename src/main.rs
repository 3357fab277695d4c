mod telemetry;

use anyhow::Result;
use bit_graph::areas::config::Config;
use bit_graph::areas::repository::Repository;
use bit_graph::artifacts::graph::renderer::{MermaidCli, SystemViewer};
use bit_graph::commands::plumbing::cat_file::CatFileMode;
use bit_graph::commands::porcelain::graph::GraphDestination;
use bit_graph::commands::porcelain::visualize::{VisualizeOptions, VisualizeOutcome};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status of `contains` when the target is not reachable
const NOT_FOUND_EXIT: u8 = 1;
/// Exit status for any error
const ERROR_EXIT: u8 = 2;

#[derive(Parser)]
#[command(
    name = "bit-graph",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Find objects in a branch's history and draw its object graph",
    long_about = "This tool reads the loose objects of a git repository, checks whether \
    an object is reachable from the tip of a branch and renders the commits, trees and \
    blobs below that tip as a Mermaid diagram.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short,
        long,
        global = true,
        help = "Path to the TOML config file (defaults to ./config.toml when present)"
    )]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Log level used when RUST_LOG is not set")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RepoArgs {
    #[arg(short, long, help = "Repository root or git directory")]
    repo: Option<PathBuf>,
    #[arg(short, long, help = "Branch whose tip is inspected")]
    branch: Option<String>,
    #[arg(long, help = "Decode every object only once per traversal")]
    dedup: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "contains",
        about = "Check whether an object is reachable from a branch tip",
        long_about = "This command searches the tip commit of a branch, its tree and its whole \
        ancestry for the given object. It exits with status 1 when the object is not found."
    )]
    Contains {
        #[command(flatten)]
        repo: RepoArgs,
        #[arg(index = 1, help = "The object SHA to look for")]
        target: Option<String>,
    },
    #[command(
        name = "graph",
        about = "Write the Mermaid graph of a branch tip",
        long_about = "This command expands the tip commit of a branch into its trees, blobs and \
        ancestor commits and writes the edges as a Mermaid flowchart."
    )]
    Graph {
        #[command(flatten)]
        repo: RepoArgs,
        #[arg(short, long, help = "Output file, '-' for stdout (defaults to graph_file)")]
        output: Option<PathBuf>,
    },
    #[command(
        name = "visualize",
        about = "Check an object, then render and display the graph",
        long_about = "This command checks that the target object is reachable from the branch \
        tip, writes the Mermaid graph, renders it with the Mermaid CLI and opens the image."
    )]
    Visualize {
        #[command(flatten)]
        repo: RepoArgs,
        #[arg(index = 1, help = "The object SHA to look for")]
        target: Option<String>,
        #[arg(long, help = "The Mermaid CLI executable")]
        visualizer: Option<PathBuf>,
        #[arg(long, help = "Program used to open the image")]
        viewer: Option<PathBuf>,
        #[arg(long, help = "Where the Mermaid graph is written")]
        graph_file: Option<PathBuf>,
        #[arg(long, help = "Where the rendered image is written")]
        output_file: Option<PathBuf>,
        #[arg(long, help = "Scale factor passed to the renderer")]
        scale: Option<u32>,
    },
    #[command(
        name = "cat-file",
        about = "Print the type, size or content of an object",
        long_about = "This command prints information about an object in the repository. \
        It requires the SHA of the object to be specified."
    )]
    CatFile {
        #[arg(short = 't', conflicts_with_all = ["size", "pretty"], help = "Print the object type")]
        kind: bool,
        #[arg(short = 's', conflicts_with = "pretty", help = "Print the payload size")]
        size: bool,
        #[arg(short = 'p', help = "Pretty-print the object content")]
        pretty: bool,
        #[arg(short, long, help = "Repository root or git directory")]
        repo: Option<PathBuf>,
        #[arg(index = 1)]
        sha: String,
    },
    #[command(name = "branches", about = "List the loose branches of the repository")]
    Branches {
        #[arg(short, long, help = "Repository root or git directory")]
        repo: Option<PathBuf>,
    },
}

impl RepoArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(repo) = &self.repo {
            config.repo_path = Some(repo.clone());
        }
        if let Some(branch) = &self.branch {
            config.branch = Some(branch.clone());
        }
        config.dedup |= self.dedup;
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match Config::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red());
            return ExitCode::from(ERROR_EXIT);
        }
    };
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    telemetry::init(&config.log_level);

    match run(cli.command, config) {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("{} {err:#}", "error:".red());
            ExitCode::from(ERROR_EXIT)
        }
    }
}

fn open_repository(config: &mut Config) -> Result<Repository> {
    if config.repo_path.is_none() {
        config.repo_path = Some(std::env::current_dir()?);
    }

    let repository = Repository::new(config.repo_path()?, Box::new(std::io::stdout()))?;
    tracing::debug!(git_dir = %repository.path().display(), "opened repository");

    Ok(repository)
}

fn run(command: Commands, mut config: Config) -> Result<ExitCode> {
    match command {
        Commands::Contains { repo, target } => {
            repo.apply(&mut config);
            if let Some(target) = target {
                config.target_file_hash = Some(target);
            }

            let repository = open_repository(&mut config)?;
            let found = repository.contains(&config.branch()?, &config.target()?, config.dedup)?;

            if !found {
                return Ok(ExitCode::from(NOT_FOUND_EXIT));
            }
        }
        Commands::Graph { repo, output } => {
            repo.apply(&mut config);

            let repository = open_repository(&mut config)?;
            let destination = GraphDestination::from(output.unwrap_or(config.graph_file.clone()));
            repository.graph(&config.branch()?, &destination, config.dedup)?;
        }
        Commands::Visualize {
            repo,
            target,
            visualizer,
            viewer,
            graph_file,
            output_file,
            scale,
        } => {
            repo.apply(&mut config);
            if let Some(target) = target {
                config.target_file_hash = Some(target);
            }
            if let Some(visualizer) = visualizer {
                config.visualizer_path = Some(visualizer);
            }
            if let Some(viewer) = viewer {
                config.viewer_path = Some(viewer);
            }
            if let Some(graph_file) = graph_file {
                config.graph_file = graph_file;
            }
            if let Some(output_file) = output_file {
                config.output_file = output_file;
            }
            if let Some(scale) = scale {
                config.scale = scale;
            }

            let repository = open_repository(&mut config)?;
            let options = VisualizeOptions::new(
                config.branch()?,
                config.target()?,
                config.graph_file.clone(),
                config.output_file.clone(),
                config.dedup,
            );
            let renderer = MermaidCli::new(config.visualizer_path()?.to_path_buf(), config.scale);
            let viewer = SystemViewer::new(config.viewer_path.clone());

            if let VisualizeOutcome::Displayed { image, .. } =
                repository.visualize(&options, &renderer, &viewer)?
            {
                tracing::info!(image = %image.display(), "graph displayed");
            }
        }
        Commands::CatFile {
            kind,
            size,
            pretty: _,
            repo,
            sha,
        } => {
            if let Some(repo) = repo {
                config.repo_path = Some(repo);
            }

            let mode = if kind {
                CatFileMode::Type
            } else if size {
                CatFileMode::Size
            } else {
                CatFileMode::Pretty
            };

            open_repository(&mut config)?.cat_file(&sha, mode)?;
        }
        Commands::Branches { repo } => {
            if let Some(repo) = repo {
                config.repo_path = Some(repo);
            }

            open_repository(&mut config)?.branches()?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
