use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::collections::BTreeMap;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Initialized repository with one commit `C1` on `main` containing
/// `test.txt` = "Contenu Version 1"
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("test.txt"),
        "Contenu Version 1".to_string(),
    ));

    run_jot_command(repository_dir.path(), &["add", "test.txt"])
        .assert()
        .success();

    run_jot_command(repository_dir.path(), &["commit", "-m", "C1"])
        .assert()
        .success();

    repository_dir
}

pub fn run_jot_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("jot").expect("Failed to find jot binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Parse the branch reference table straight from the on-disk record
///
/// A repository without any commit has no refs record yet; that reads as
/// an empty table, like the engine itself treats it.
pub fn read_refs(dir: &Path) -> BTreeMap<String, String> {
    let refs_path = dir.join(".jot").join("refs.json");
    let content = match std::fs::read_to_string(&refs_path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
        Err(e) => panic!("Failed to read {:?}: {}", refs_path, e),
    };

    serde_json::from_str(&content).expect("Failed to parse refs record")
}

/// Read the currently active branch name from the config record
pub fn read_head(dir: &Path) -> String {
    let config_path = dir.join(".jot").join("config.json");
    let content = std::fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", config_path, e));

    let config: serde_json::Value =
        serde_json::from_str(&content).expect("Failed to parse config record");
    config["head"]
        .as_str()
        .expect("config record has no head")
        .to_string()
}

pub fn staging_record_exists(dir: &Path) -> bool {
    dir.join(".jot").join("staging.json").exists()
}

pub fn read_file_content(dir: &Path, name: &str) -> String {
    let path = dir.join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e))
}
