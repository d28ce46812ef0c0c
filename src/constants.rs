/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
///
/// This is used as part of the application's unique identifier.
pub const QUALIFIER: &str = "io.github";

/// Organisation name used for application identification
///
/// This is used as part of the application's unique identifier.
pub const ORGANIZATION: &str = "ckofa";

/// Application name used for identification
///
/// This is the name of the application used in various contexts like
/// log file paths and application identification.
pub const APPLICATION: &str = "translit_renamer";

/// Help text for the folder command-line argument
pub const FOLDER_HELP: &str =
    "Folder whose files will be renamed (quote the path if it contains spaces)";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Run without renaming any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Write the log to a specific file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str =
    "Write the log file into the current directory instead of the config directory";

/// Default name of the log file
pub const LOG_FILE_DEFAULT: &str = "translit_renamer.log";

/// First code point of the Unicode Cyrillic block
pub const CYRILLIC_BLOCK_START: char = '\u{0400}';

/// Last code point of the Unicode Cyrillic block
pub const CYRILLIC_BLOCK_END: char = '\u{04FF}';
