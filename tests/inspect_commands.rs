use crate::common::command::{SampleRepository, run_bit_graph_command, sample_repository, stdout_of};
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

#[rstest]
#[case::blob("blob1", "blob")]
#[case::tree("tree", "tree")]
#[case::commit("second", "commit")]
fn cat_file_prints_object_type(
    sample_repository: SampleRepository,
    #[case] name: &str,
    #[case] expected: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = sample_repository;
    let oid = match name {
        "blob1" => &repo.blob1,
        "tree" => &repo.tree,
        _ => &repo.second,
    };

    let actual = stdout_of(&mut run_bit_graph_command(
        repo.dir.path(),
        &["cat-file", "-t", oid],
    ));

    pretty_assertions::assert_eq!(actual, format!("{expected}\n"));

    Ok(())
}

#[rstest]
fn cat_file_prints_blob_content_and_size(
    sample_repository: SampleRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = sample_repository;

    let content = stdout_of(&mut run_bit_graph_command(
        repo.dir.path(),
        &["cat-file", "-p", &repo.blob2],
    ));
    let size = stdout_of(&mut run_bit_graph_command(
        repo.dir.path(),
        &["cat-file", "-s", &repo.blob2],
    ));

    pretty_assertions::assert_eq!(content, "two");
    pretty_assertions::assert_eq!(size, "3\n");

    Ok(())
}

#[rstest]
fn cat_file_pretty_prints_trees(
    sample_repository: SampleRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = sample_repository;

    let actual = stdout_of(&mut run_bit_graph_command(
        repo.dir.path(),
        &["cat-file", "-p", &repo.tree_a],
    ));

    pretty_assertions::assert_eq!(
        actual,
        format!(
            "100644 blob {}\t2.txt\n040000 tree {}\tb\n",
            repo.blob2, repo.tree_b
        )
    );

    Ok(())
}

#[rstest]
fn cat_file_pretty_prints_commits(
    sample_repository: SampleRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = sample_repository;

    let actual = stdout_of(&mut run_bit_graph_command(
        repo.dir.path(),
        &["cat-file", "-p", &repo.second],
    ));

    pretty_assertions::assert_eq!(
        actual,
        format!(
            "tree {}\nparent {}\n\
             author fake_user <fake_email@email.com> 1672574400 +0000\n\
             committer fake_user <fake_email@email.com> 1672574400 +0000\n\
             \nAdd nested files\n",
            repo.tree, repo.first
        )
    );

    Ok(())
}

#[rstest]
fn cat_file_of_missing_object_fails(
    sample_repository: SampleRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = sample_repository;
    let missing = "0123456789abcdef0123456789abcdef01234567";

    run_bit_graph_command(repo.dir.path(), &["cat-file", "-t", missing])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(format!("object {missing} not found")));

    Ok(())
}

#[rstest]
fn branches_are_listed_in_name_order(
    sample_repository: SampleRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = sample_repository;
    repo.objects.set_branch("feature/graph", &repo.first);
    repo.objects.set_branch("dev", &repo.first);

    let actual = stdout_of(&mut run_bit_graph_command(repo.dir.path(), &["branches"]));

    pretty_assertions::assert_eq!(actual, "dev\nfeature/graph\nmain\n");

    Ok(())
}

#[rstest]
fn branch_names_with_nested_paths_resolve(
    sample_repository: SampleRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = sample_repository;
    repo.objects.set_branch("feature/graph", &repo.first);

    run_bit_graph_command(
        repo.dir.path(),
        &["contains", "-b", "feature/graph", &repo.blob1],
    )
    .assert()
    .code(1);

    run_bit_graph_command(
        repo.dir.path(),
        &["contains", "-b", "feature/graph", &repo.old_blob],
    )
    .assert()
    .success();

    Ok(())
}

#[rstest]
fn directory_without_objects_is_not_a_repository(
    sample_repository: SampleRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = sample_repository;
    let elsewhere = assert_fs::TempDir::new()?;

    run_bit_graph_command(
        repo.dir.path(),
        &["branches", "-r", elsewhere.path().to_str().unwrap()],
    )
    .assert()
    .code(2)
    .stderr(predicate::str::contains("is not a git repository"));

    Ok(())
}
