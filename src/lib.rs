pub use cli::*;
pub use errors::*;
pub use finder::*;
pub use renamer::*;
pub use translit::*;

pub mod cli;
pub mod constants;
mod errors;
pub mod finder;
pub mod logging;
pub mod renamer;
pub mod translit;
mod utils;

pub mod prelude {
    pub use crate::cli::{
        check_for_stdout_stream, get_folder, get_log_file, get_matches, get_verbosity,
    };
    pub use crate::errors::{
        Error, Result, file_operation_error, generic_error, invalid_filename_error,
        invalid_path_error, unreadable_directory_error,
    };
    pub use crate::finder::{CyrillicFileFinder, FileFinder, FoundFile, contains_cyrillic};
    pub use crate::logging::{LogLevel, init_logger};
    pub use crate::renamer::{DryRunRenamer, Renamer, TransliterationRenamer};
    pub use crate::translit::{transliterate, transliterate_opt};
}
