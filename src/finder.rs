//! Directory scanning for Cyrillic-named files
//!
//! This module contains the [`FileFinder`] trait and its concrete
//! implementation which lists the immediate entries of a directory and
//! keeps the regular files whose names contain Cyrillic characters.

use std::fs::read_dir;
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::constants::{CYRILLIC_BLOCK_END, CYRILLIC_BLOCK_START};
use crate::errors::{
    Result, invalid_filename_error, invalid_path_error, unreadable_directory_error,
};

/// A file picked up during the directory scan
///
/// Holds the full path and the decoded filename. Instances are transient;
/// they live only for the duration of one rename batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundFile {
    /// The path to the file
    pub path: PathBuf,
    /// The filename of the file
    pub name: String,
}

impl FoundFile {
    /// Creates a new FoundFile from a path
    ///
    /// # Errors
    /// Returns an error if the filename cannot be extracted or is not
    /// valid Unicode.
    pub fn new(path: PathBuf) -> Result<Self> {
        let name = path
            .file_name()
            .ok_or_else(|| invalid_filename_error(path.clone()))?
            .to_str()
            .ok_or_else(|| invalid_filename_error(path.clone()))?
            .to_string();

        Ok(FoundFile { path, name })
    }
}

/// Contract for finding candidate files in a directory
///
/// Kept as a trait so alternative strategies (a recursive finder, a
/// fixture-driven finder in tests) can be swapped in without touching the
/// rename orchestration.
pub trait FileFinder {
    /// Finds matching files in the given folder, failing on bad input
    ///
    /// # Errors
    /// Returns [`Error::InvalidPath`](crate::Error::InvalidPath) if the
    /// path does not exist or is not a directory, and
    /// [`Error::UnreadableDirectory`](crate::Error::UnreadableDirectory)
    /// if the directory contents cannot be listed.
    fn find_files_or_err(&self, folder: &Path) -> Result<Vec<FoundFile>>;

    /// Finds matching files in the given folder, swallowing errors
    ///
    /// Any listing failure is logged and an empty list is returned, for
    /// callers that do not distinguish failure from "nothing to do".
    fn find_files(&self, folder: &Path) -> Vec<FoundFile> {
        match self.find_files_or_err(folder) {
            Ok(files) => files,
            Err(e) => {
                error!("Could not scan folder: {e}");
                Vec::new()
            }
        }
    }
}

/// Finds regular files whose names contain Cyrillic characters
#[derive(Debug, Default)]
pub struct CyrillicFileFinder;

impl CyrillicFileFinder {
    pub fn new() -> Self {
        CyrillicFileFinder
    }
}

impl FileFinder for CyrillicFileFinder {
    fn find_files_or_err(&self, folder: &Path) -> Result<Vec<FoundFile>> {
        if !folder.is_dir() {
            return Err(invalid_path_error(folder.to_path_buf()));
        }

        let entries =
            read_dir(folder).map_err(|e| unreadable_directory_error(e, folder.to_path_buf()))?;

        let mut result = Vec::new();
        for entry in entries {
            let Ok(entry) = entry else {
                debug!("Skipping unreadable entry in {}", folder.display());
                continue;
            };

            let path = entry.path();
            // Directories are always excluded, whatever their name
            if !path.is_file() {
                continue;
            }

            match FoundFile::new(path) {
                Ok(file) if contains_cyrillic(&file.name) => result.push(file),
                Ok(_) => {}
                Err(e) => debug!("Skipping entry with undecodable name: {e}"),
            }
        }

        debug!("Found {} Cyrillic-named files in {}", result.len(), folder.display());

        Ok(result)
    }
}

/// Checks whether the name contains at least one character from the
/// Unicode Cyrillic block
///
/// The test is per character and block based, so it is wider than the
/// transliteration table: any Cyrillic-script letter qualifies, not just
/// the Russian alphabet.
pub fn contains_cyrillic(name: &str) -> bool {
    name.chars()
        .any(|ch| (CYRILLIC_BLOCK_START..=CYRILLIC_BLOCK_END).contains(&ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_cyrillic() {
        assert!(contains_cyrillic("отчёт.txt"));
        assert!(contains_cyrillic("mixed_файл.log"));
        assert!(!contains_cyrillic("report.txt"));
        assert!(!contains_cyrillic(""));
        assert!(!contains_cyrillic("naïve-ASCII-123"));
    }

    #[test]
    fn test_contains_cyrillic_is_block_based() {
        // Ukrainian and Serbian letters are outside the Russian alphabet
        // but inside the Cyrillic block
        assert!(contains_cyrillic("ї.txt"));
        assert!(contains_cyrillic("љ.txt"));
    }

    #[test]
    fn test_found_file_keeps_name_and_path() {
        let file = FoundFile::new(PathBuf::from("/tmp/файл.txt")).unwrap();
        assert_eq!(file.name, "файл.txt");
        assert_eq!(file.path, PathBuf::from("/tmp/файл.txt"));
    }
}
