use crate::common::command::{
    init_repository_dir, read_head, read_refs, repository_dir, run_jot_command,
    staging_record_exists,
};
use crate::common::file::{FileSpec, write_file, write_generated_files};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

#[rstest]
fn add_records_content_and_hash_in_the_staging_area(repository_dir: TempDir) {
    run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("notes.txt"),
        "hello".to_string(),
    ));

    run_jot_command(repository_dir.path(), &["add", "notes.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 file(s) staged"));

    let staging: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(repository_dir.path().join(".jot/staging.json"))
            .expect("staging record missing"),
    )
    .expect("staging record is not valid JSON");

    assert_eq!(staging["notes.txt"]["content"], "hello");
    // sha1("hello")
    assert_eq!(
        staging["notes.txt"]["hash"],
        "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"
    );
}

#[rstest]
fn add_reports_missing_files_without_failing(repository_dir: TempDir) {
    run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_jot_command(repository_dir.path(), &["add", "ghost.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("file not found: ghost.txt"))
        .stdout(predicate::str::contains("0 file(s) staged"));

    assert!(!staging_record_exists(repository_dir.path()));
}

#[rstest]
fn commit_clears_the_staging_area_and_advances_the_branch(init_repository_dir: TempDir) {
    assert!(!staging_record_exists(init_repository_dir.path()));

    let refs = read_refs(init_repository_dir.path());
    let commit_id = refs.get("main").expect("main has no commit");
    assert_eq!(commit_id.len(), 40);

    let commit_path = init_repository_dir
        .path()
        .join(".jot/commits")
        .join(format!("{}.json", commit_id));
    let commit: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(commit_path).expect("commit record missing"))
            .expect("commit record is not valid JSON");

    assert_eq!(commit["message"], "C1");
    assert_eq!(commit["parent"], "main");
    assert_eq!(commit["files"]["test.txt"]["content"], "Contenu Version 1");
}

#[rstest]
fn commit_with_an_empty_staging_area_is_a_soft_failure(repository_dir: TempDir) {
    run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_jot_command(repository_dir.path(), &["commit", "-m", "empty"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "nothing to commit (staging area is empty)",
        ));

    assert!(read_refs(repository_dir.path()).is_empty());
}

#[rstest]
fn malformed_staging_record_is_treated_as_empty(repository_dir: TempDir) {
    run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join(".jot/staging.json"),
        "{not json".to_string(),
    ));

    run_jot_command(repository_dir.path(), &["commit", "-m", "broken"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "nothing to commit (staging area is empty)",
        ));
}

#[rstest]
fn commit_snapshots_every_staged_file(repository_dir: TempDir) {
    run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let specs = write_generated_files(repository_dir.path(), 5);
    let mut args = vec!["add"];
    let names: Vec<String> = specs
        .iter()
        .map(|spec| {
            spec.path
                .file_name()
                .expect("generated file has no name")
                .to_string_lossy()
                .to_string()
        })
        .collect();
    args.extend(names.iter().map(String::as_str));

    run_jot_command(repository_dir.path(), &args)
        .assert()
        .success()
        .stdout(predicate::str::contains("5 file(s) staged"));

    run_jot_command(repository_dir.path(), &["commit", "-m", "bulk"])
        .assert()
        .success();

    let refs = read_refs(repository_dir.path());
    let commit_id = refs.get("main").expect("main has no commit");
    let commit_path = repository_dir
        .path()
        .join(".jot/commits")
        .join(format!("{}.json", commit_id));
    let commit: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(commit_path).expect("commit record missing"))
            .expect("commit record is not valid JSON");

    for name in &names {
        assert!(commit["files"].get(name.as_str()).is_some());
    }
}

#[rstest]
fn status_lists_staged_and_untracked_files(repository_dir: TempDir) {
    run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("staged.txt"),
        "a".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("loose.txt"),
        "b".to_string(),
    ));

    run_jot_command(repository_dir.path(), &["add", "staged.txt"])
        .assert()
        .success();

    run_jot_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("On branch main"))
        .stdout(predicate::str::contains("+ staged.txt"))
        .stdout(predicate::str::contains("? loose.txt"));

    assert_eq!(read_head(repository_dir.path()), "main");
}
