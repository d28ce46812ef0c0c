//! Transliteration-driven file renaming
//!
//! The [`Renamer`] trait carries the orchestration contract; the concrete
//! implementations differ only in whether they touch the filesystem.
//! Failures are isolated per file: one bad rename never aborts the batch.

use std::fs;
use std::path::Path;

use log::{error, info};

use crate::errors::{Result, file_operation_error};
use crate::finder::{FileFinder, FoundFile};
use crate::translit::transliterate;

/// Contract for renaming a batch of files
pub trait Renamer {
    /// Renames the matching files found in the given folder
    ///
    /// Uses the configured finder. If the folder cannot be listed, the
    /// failure is logged and the folder is skipped entirely; nothing is
    /// renamed and nothing is raised to the caller.
    fn rename_in_dir(&self, folder: &Path);

    /// Renames a specific list of files, from any source
    ///
    /// Entries are processed sequentially. A failure for one entry is
    /// logged and the remaining entries are still processed.
    fn rename_files(&self, files: &[FoundFile]);
}

/// Renames files by transliterating their names to Latin
///
/// Holds its [`FileFinder`] by value so the finding strategy can be
/// injected. The rename overwrites an existing file at the target path;
/// colliding transliterations keep only the last file renamed.
#[derive(Debug)]
pub struct TransliterationRenamer<F: FileFinder> {
    finder: F,
}

impl<F: FileFinder> TransliterationRenamer<F> {
    pub fn new(finder: F) -> Self {
        TransliterationRenamer { finder }
    }

    fn rename_one(&self, file: &FoundFile) -> Result<()> {
        let new_name = transliterate(&file.name);
        let target = file.path.with_file_name(&new_name);

        move_replacing(&file.path, &target)?;
        info!("Renamed: {} -> {}", file.name, new_name);
        Ok(())
    }
}

impl<F: FileFinder> Renamer for TransliterationRenamer<F> {
    fn rename_in_dir(&self, folder: &Path) {
        let files = match self.finder.find_files_or_err(folder) {
            Ok(files) => files,
            Err(e) => {
                error!("Skipping folder due to error: {e}");
                return;
            }
        };

        self.rename_files(&files);
    }

    fn rename_files(&self, files: &[FoundFile]) {
        for file in files {
            if let Err(e) = self.rename_one(file) {
                error!("Failed to rename file '{}', skipping: {e}", file.name);
            }
        }
    }
}

/// Reports the renames that would happen without performing them
///
/// Same enumeration and name computation as the real renamer, but the
/// filesystem is left untouched.
#[derive(Debug)]
pub struct DryRunRenamer<F: FileFinder> {
    finder: F,
}

impl<F: FileFinder> DryRunRenamer<F> {
    pub fn new(finder: F) -> Self {
        DryRunRenamer { finder }
    }
}

impl<F: FileFinder> Renamer for DryRunRenamer<F> {
    fn rename_in_dir(&self, folder: &Path) {
        let files = match self.finder.find_files_or_err(folder) {
            Ok(files) => files,
            Err(e) => {
                error!("Skipping folder due to error: {e}");
                return;
            }
        };

        self.rename_files(&files);
    }

    fn rename_files(&self, files: &[FoundFile]) {
        for file in files {
            info!("Would rename: {} -> {}", file.name, transliterate(&file.name));
        }
    }
}

/// Moves `source` to `target`, replacing an existing target
///
/// `fs::rename` already replaces the target on Unix. On Windows it fails
/// instead, so a pre-existing target that is not the source itself is
/// removed first to keep the overwrite contract on every platform. A
/// rename onto itself (no Cyrillic was substituted) stays a harmless
/// self-move and never deletes the source.
fn move_replacing(source: &Path, target: &Path) -> Result<()> {
    #[cfg(windows)]
    if source != target && target.is_file() {
        fs::remove_file(target)
            .map_err(|e| file_operation_error(e, target.to_path_buf(), "replace"))?;
    }

    fs::rename(source, target)
        .map_err(|e| file_operation_error(e, source.to_path_buf(), "rename"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_replacing_onto_itself_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("already-latin.txt");
        fs::write(&path, b"payload").unwrap();

        move_replacing(&path, &path).unwrap();

        assert!(path.is_file(), "self-move must not delete the source");
        assert_eq!(fs::read(&path).unwrap(), b"payload");
    }

    #[test]
    fn test_move_replacing_overwrites_existing_target() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("старый.txt");
        let target = dir.path().join("staryy.txt");
        fs::write(&source, b"new content").unwrap();
        fs::write(&target, b"old content").unwrap();

        move_replacing(&source, &target).unwrap();

        assert!(!source.exists());
        assert_eq!(fs::read(&target).unwrap(), b"new content");
    }

    #[test]
    fn test_move_replacing_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("нет.txt");
        let target = dir.path().join("net.txt");

        let result = move_replacing(&source, &target);

        assert!(result.is_err());
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("rename"), "error should name the operation");
    }

    #[test]
    fn test_rename_one_uses_transliterated_sibling() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("Мышь.txt");
        fs::write(&source, b"x").unwrap();

        let renamer = TransliterationRenamer::new(crate::finder::CyrillicFileFinder::new());
        let file = FoundFile {
            path: source.clone(),
            name: "Мышь.txt".to_string(),
        };
        renamer.rename_one(&file).unwrap();

        assert!(!source.exists());
        assert!(dir.path().join("Mysh.txt").is_file());
    }
}
