use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::File;
use tempfile::tempdir;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_prints_usage_and_does_no_work() {
        let mut cmd = Command::cargo_bin("trename").unwrap();

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn test_extra_arguments_are_rejected() {
        let dir = tempdir().unwrap();
        let mut cmd = Command::cargo_bin("trename").unwrap();

        cmd.arg(dir.path())
            .arg("unexpected_extra")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn test_renames_cyrillic_files_in_the_given_folder() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("Мышь.txt")).unwrap();
        File::create(dir.path().join("keep.txt")).unwrap();

        let mut cmd = Command::cargo_bin("trename").unwrap();
        cmd.current_dir(dir.path())
            .arg(dir.path())
            .arg("--log-locally")
            .arg("--log-file")
            .arg("run.log")
            .assert()
            .success()
            .stdout(predicate::str::contains("Processing complete."));

        assert!(dir.path().join("Mysh.txt").is_file());
        assert!(!dir.path().join("Мышь.txt").exists());
        assert!(dir.path().join("keep.txt").is_file());
    }

    #[test]
    fn test_dry_run_reports_without_renaming() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("Ёлка.txt")).unwrap();

        let mut cmd = Command::cargo_bin("trename").unwrap();
        cmd.current_dir(dir.path())
            .arg(dir.path())
            .arg("--dry")
            .arg("--log-locally")
            .arg("--log-file")
            .arg("run.log")
            .assert()
            .success()
            .stdout(predicate::str::contains("Would rename: Ёлка.txt -> Elka.txt"));

        assert!(dir.path().join("Ёлка.txt").is_file());
        assert!(!dir.path().join("Elka.txt").exists());
    }

    #[test]
    fn test_missing_folder_is_reported_but_exits_normally() {
        let dir = tempdir().unwrap();

        let mut cmd = Command::cargo_bin("trename").unwrap();
        cmd.current_dir(dir.path())
            .arg(dir.path().join("no_such_folder"))
            .arg("--log-locally")
            .arg("--log-file")
            .arg("run.log")
            .assert()
            .success()
            .stdout(predicate::str::contains("Skipping folder due to error"));
    }
}
