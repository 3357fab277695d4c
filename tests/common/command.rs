use crate::common::objects::LooseObjects;
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// A repository with two commits on `main`
///
/// ```text
/// first:  1.txt
/// second: 1.txt (changed), a/2.txt, a/b/3.txt
/// ```
pub struct SampleRepository {
    pub dir: TempDir,
    pub objects: LooseObjects,
    pub old_blob: String,
    pub blob1: String,
    pub blob2: String,
    pub blob3: String,
    pub tree_b: String,
    pub tree_a: String,
    pub old_tree: String,
    pub tree: String,
    pub first: String,
    pub second: String,
}

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn sample_repository(repository_dir: TempDir) -> SampleRepository {
    let objects = LooseObjects::init(repository_dir.path());

    let old_blob = objects.blob("one");
    let old_tree = objects.tree(&[("100644", "1.txt", &old_blob)]);
    let first = objects.commit(&old_tree, &[], "Initial commit");

    let blob1 = objects.blob("one, changed");
    let blob2 = objects.blob("two");
    let blob3 = objects.blob("three");
    let tree_b = objects.tree(&[("100644", "3.txt", &blob3)]);
    let tree_a = objects.tree(&[("100644", "2.txt", &blob2), ("40000", "b", &tree_b)]);
    let tree = objects.tree(&[("100644", "1.txt", &blob1), ("40000", "a", &tree_a)]);
    let second = objects.commit(&tree, &[&first], "Add nested files");

    objects.set_branch("main", &second);

    SampleRepository {
        dir: repository_dir,
        objects,
        old_blob,
        blob1,
        blob2,
        blob3,
        tree_b,
        tree_a,
        old_tree,
        tree,
        first,
        second,
    }
}

pub fn run_bit_graph_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("bit-graph").expect("Failed to find bit-graph binary");
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    for arg in args {
        cmd.arg(arg);
    }

    cmd
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success();
    String::from_utf8(output.get_output().stdout.clone()).expect("stdout is not utf-8")
}
