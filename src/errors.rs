use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the transliteration renamer
#[derive(Debug)]
pub enum Error {
    /// Error when a path does not exist or is not a directory
    InvalidPath { path: PathBuf },
    /// Error when a directory exists but its contents cannot be listed
    UnreadableDirectory { source: io::Error, path: PathBuf },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPath { path } => {
                write!(f, "Path is not a valid directory: {}", path.display())
            }
            Error::UnreadableDirectory { path, .. } => {
                write!(f, "Unable to list files in folder: {}", path.display())
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::UnreadableDirectory { source, .. } => Some(source),
            Error::FileOperation { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "perform operation on".to_string(),
        }
    }
}

/// Custom Result type for the transliteration renamer
///
/// This type alias simplifies error handling throughout the application by
/// using the custom Error type. It's used as the return type for most
/// functions that can fail.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an invalid path error
pub fn invalid_path_error(path: PathBuf) -> Error {
    Error::InvalidPath { path }
}

/// Helper function to create an unreadable directory error
pub fn unreadable_directory_error(err: io::Error, path: PathBuf) -> Error {
    Error::UnreadableDirectory { source: err, path }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
