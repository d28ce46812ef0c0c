use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use human_panic::setup_panic;
use log::info;

use translit_renamer::prelude::*;

fn main() -> Result<()> {
    setup_panic!();

    let matches = get_matches()?;
    let verbosity = get_verbosity(&matches);
    let log_file = get_log_file(&matches)?;
    init_logger(verbosity, &log_file)?;

    let folder = get_folder(&matches)?;
    info!("Program start, folder for processing files: {folder}");

    let finder = CyrillicFileFinder::new();
    let renamer: Box<dyn Renamer> = if matches.get_flag("dry") {
        Box::new(DryRunRenamer::new(finder))
    } else {
        Box::new(TransliterationRenamer::new(finder))
    };

    renamer.rename_in_dir(Path::new(&folder));

    println!("{}", "Processing complete.".green());
    check_for_stdout_stream();

    Ok(())
}
