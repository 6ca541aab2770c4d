use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn dir_remover() -> Command {
    let mut cmd = Command::cargo_bin("dir-remover").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

fn setup_sized_files() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("small.txt"), vec![0u8; 500]).unwrap();
    fs::write(dir.path().join("medium.bin"), vec![0u8; 2048]).unwrap();
    fs::write(dir.path().join("large.bin"), vec![0u8; 1_048_576]).unwrap();
    dir
}

#[test]
fn test_help_flag() {
    for flag in ["--help", "-h"] {
        dir_remover()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("--all"));
    }
}

#[test]
fn test_version_flag() {
    for flag in ["--version", "-v"] {
        dir_remover()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("0.1.7"));
    }
}

#[test]
fn test_missing_path_fails() {
    let dir = tempdir().unwrap();
    dir_remover()
        .arg(dir.path().join("does-not-exist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path does not exist"));
}

#[test]
fn test_table_shows_human_sizes() {
    let dir = setup_sized_files();

    dir_remover()
        .arg(dir.path())
        .write_stdin("y\nn\nn\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("500 B"))
        .stdout(predicate::str::contains("2.0 KiB"))
        .stdout(predicate::str::contains("1.0 MiB"))
        .stdout(predicate::str::contains("No items selected for deletion."));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 3);
}

#[test]
fn test_bulk_mode_deletes_all() {
    let dir = setup_sized_files();
    fs::create_dir_all(dir.path().join("cache/objects")).unwrap();
    fs::write(dir.path().join("cache/objects/blob"), "x").unwrap();

    dir_remover()
        .arg(dir.path())
        .arg("--all")
        .env("RUST_LOG", "debug")
        .write_stdin("y\ny\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete all 4 items shown above?"))
        .stdout(predicate::str::contains("Successfully deleted 4 items."))
        .stderr(predicate::str::contains("removed 4 of 4 entries"));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_closed_stdin_deletes_nothing() {
    let dir = setup_sized_files();

    dir_remover()
        .arg(dir.path())
        .arg("--all")
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No items selected for deletion."))
        .stderr(predicate::str::contains("Assuming No"));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 3);
}

#[test]
fn test_empty_directory() {
    let dir = tempdir().unwrap();

    dir_remover()
        .arg(dir.path())
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No files or subdirectories found"));
}

#[test]
fn test_single_file_target() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("notes.txt");
    fs::write(&file, "remember").unwrap();

    dir_remover()
        .arg(&file)
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("FILE:"))
        .stdout(predicate::str::contains("Deleted file:"));

    assert!(!file.exists());
}

#[test]
fn test_unterminated_answer_keeps_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("precious.txt");
    fs::write(&file, "keep me").unwrap();

    dir_remover()
        .arg(&file)
        .write_stdin("y")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation aborted by user."))
        .stderr(predicate::str::contains("Input closed. Assuming No."));

    assert!(file.exists());
}

#[test]
fn test_invalid_answer_reprompts() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("only.txt"), "x").unwrap();

    dir_remover()
        .arg(dir.path())
        .write_stdin("y\nmaybe\ny\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input. Please enter 'y' or 'n'."))
        .stdout(predicate::str::contains("Successfully deleted 1 items."));

    assert!(!dir.path().join("only.txt").exists());
}
