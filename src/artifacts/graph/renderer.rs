//! External diagram renderer and image viewer
//!
//! Rendering the Mermaid text into an image and displaying the image are
//! delegated to other programs. Both are behind traits so the pipeline can be
//! driven without spawning processes.

use crate::errors::{GraphError, Result};
use derive_new::new;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// Turns a graph file into an image file
pub trait DiagramRenderer {
    fn render(&self, graph_file: &Path, output_file: &Path) -> Result<()>;
}

/// Displays an image to the user
pub trait ImageViewer {
    fn show(&self, image: &Path) -> Result<()>;
}

/// The Mermaid CLI (`mmdc -i <graph> -o <image> --scale <n>`)
#[derive(Debug, Clone, new)]
pub struct MermaidCli {
    executable: PathBuf,
    scale: u32,
}

impl DiagramRenderer for MermaidCli {
    fn render(&self, graph_file: &Path, output_file: &Path) -> Result<()> {
        if !is_executable::is_executable(&self.executable) {
            return Err(GraphError::RendererFailure(format!(
                "{} is not an executable file",
                self.executable.display()
            )));
        }

        // a stale image from a previous run must not count as output
        match std::fs::remove_file(output_file) {
            Ok(()) => debug!(path = %output_file.display(), "removed stale image"),
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }

        let output = Command::new(&self.executable)
            .arg("-i")
            .arg(graph_file)
            .arg("-o")
            .arg(output_file)
            .arg("--scale")
            .arg(self.scale.to_string())
            .output()
            .map_err(|err| {
                GraphError::RendererFailure(format!(
                    "unable to run {}: {err}",
                    self.executable.display()
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(status = %output.status, "renderer exited abnormally");
            return Err(GraphError::RendererFailure(format!(
                "{} exited with {}: {}",
                self.executable.display(),
                output.status,
                stderr.trim()
            )));
        }

        if !output_file.is_file() {
            return Err(GraphError::RendererFailure(format!(
                "{} produced no output file at {}",
                self.executable.display(),
                output_file.display()
            )));
        }

        Ok(())
    }
}

/// Opens the image with a configured program or the platform's default opener
#[derive(Debug, Clone, Default, new)]
pub struct SystemViewer {
    program: Option<PathBuf>,
}

impl SystemViewer {
    fn command(&self, image: &Path) -> Command {
        match &self.program {
            Some(program) => {
                let mut command = Command::new(program);
                command.arg(image);
                command
            }
            None if cfg!(target_os = "macos") => {
                let mut command = Command::new("open");
                command.arg(image);
                command
            }
            None if cfg!(target_os = "windows") => {
                let mut command = Command::new("cmd");
                command.args(["/C", "start", ""]).arg(image);
                command
            }
            None => {
                let mut command = Command::new("xdg-open");
                command.arg(image);
                command
            }
        }
    }
}

impl ImageViewer for SystemViewer {
    fn show(&self, image: &Path) -> Result<()> {
        let mut command = self.command(image);
        debug!(?command, "opening image");

        let status = command.status().map_err(|err| {
            GraphError::RendererFailure(format!("unable to start image viewer: {err}"))
        })?;

        if !status.success() {
            return Err(GraphError::RendererFailure(format!(
                "image viewer exited with {status}"
            )));
        }

        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use std::os::unix::fs::PermissionsExt;

    fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn renderer_receives_input_output_and_scale() {
        let dir = TempDir::new().unwrap();
        let args_file = dir.path().join("args.txt");
        let mmdc = script(
            dir.path(),
            "mmdc",
            &format!("echo \"$@\" > {}\ntouch \"$4\"", args_file.display()),
        );
        let graph = dir.path().join("graph.mmd");
        let image = dir.path().join("graph.png");
        std::fs::write(&graph, "graph TD\n").unwrap();

        MermaidCli::new(mmdc, 3).render(&graph, &image).unwrap();

        let args = std::fs::read_to_string(args_file).unwrap();
        assert_eq!(
            args.trim(),
            format!("-i {} -o {} --scale 3", graph.display(), image.display())
        );
        assert!(image.is_file());
    }

    #[test]
    fn failing_renderer_is_reported() {
        let dir = TempDir::new().unwrap();
        let mmdc = script(dir.path(), "mmdc", "echo boom >&2\nexit 2");

        let err = MermaidCli::new(mmdc, 3)
            .render(&dir.path().join("graph.mmd"), &dir.path().join("graph.png"))
            .unwrap_err();

        assert!(matches!(err, GraphError::RendererFailure(ref msg) if msg.contains("boom")));
    }

    #[test]
    fn renderer_without_output_is_reported() {
        let dir = TempDir::new().unwrap();
        let mmdc = script(dir.path(), "mmdc", "exit 0");
        let image = dir.path().join("graph.png");
        std::fs::write(&image, "stale").unwrap();

        let err = MermaidCli::new(mmdc, 3)
            .render(&dir.path().join("graph.mmd"), &image)
            .unwrap_err();

        assert!(matches!(err, GraphError::RendererFailure(_)));
    }

    #[test]
    fn non_executable_renderer_is_rejected() {
        let dir = TempDir::new().unwrap();
        let not_a_program = dir.path().join("mmdc");
        std::fs::write(&not_a_program, "plain text").unwrap();

        let err = MermaidCli::new(not_a_program, 3)
            .render(&dir.path().join("graph.mmd"), &dir.path().join("graph.png"))
            .unwrap_err();

        assert!(matches!(err, GraphError::RendererFailure(_)));
    }

    #[test]
    fn configured_viewer_is_given_the_image() {
        let dir = TempDir::new().unwrap();
        let seen = dir.path().join("seen.txt");
        let viewer = script(dir.path(), "viewer", &format!("echo \"$1\" > {}", seen.display()));
        let image = dir.path().join("graph.png");

        SystemViewer::new(Some(viewer)).show(&image).unwrap();

        assert_eq!(
            std::fs::read_to_string(seen).unwrap().trim(),
            image.display().to_string()
        );
    }
}
