use atty::Stream;
use clap::{Arg, ArgMatches, command, crate_authors, crate_description, crate_name, crate_version};

use crate::constants::{
    DRY_RUN_HELP, FOLDER_HELP, LOCAL_LOGGING_HELP, LOG_FILE_DEFAULT, LOG_FILE_HELP, VERBOSE_HELP,
};
use crate::errors::{Result, generic_error};
use crate::logging::LogLevel;
use crate::utils::find_project_folder;

/// Checks if stdout is a terminal and waits for user input if it is
///
/// This function is used to prevent the console window from closing
/// immediately after the program finishes when run from a GUI.
pub fn check_for_stdout_stream() {
    if atty::is(Stream::Stdout) {
        dont_disappear::enter_to_continue::default();
    }
}

/// Sets up and returns command-line argument matches
///
/// Defines the following arguments:
/// - `folder`: Path to the folder whose files will be renamed (required)
/// - `dry`: Report the renames without performing them
/// - `verbose`: Increase verbosity level
/// - `log_file` / `log_locally`: Log file placement
///
/// Any other argument count makes clap print usage guidance and exit
/// without processing anything.
///
/// # Errors
/// Returns an error if the command-line arguments cannot be parsed
pub fn get_matches() -> Result<ArgMatches> {
    // define the single positional arg for the folder to process
    let arg_folder = Arg::new("folder").help(FOLDER_HELP).required(true);

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(clap::ArgAction::SetTrue);

    let matches = command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_folder)
        .arg(arg_dry)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
        .get_matches();

    Ok(matches)
}

/// Gets the folder argument with the user's home directory expanded
///
/// The shell already splits quoted paths, so the value arrives as one
/// string; only `~` expansion is applied here.
pub fn get_folder(matches: &ArgMatches) -> Result<String> {
    let folder = matches
        .get_one::<String>("folder")
        .ok_or_else(|| generic_error("Folder argument not found"))?;
    Ok(shellexpand::tilde(folder).to_string())
}

/// Gets the verbosity level from the command-line arguments
///
/// Counts the occurrences of the "verbose" flag and converts the count to
/// a [`LogLevel`].
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Resolves the log file location from the command-line arguments
///
/// By default the log file is placed in the per-user config directory;
/// with `--log-locally` the given name is used as-is.
pub fn get_log_file(matches: &ArgMatches) -> Result<String> {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());
    if matches.get_flag("log_locally") {
        Ok(filename)
    } else {
        let folder = find_project_folder()?;
        let path = folder.config_dir().join(filename);
        let path_str = path
            .as_path()
            .to_str()
            .ok_or_else(|| generic_error(&format!("Failed to convert path to string: {path:?}")))?;
        Ok(path_str.to_string())
    }
}
