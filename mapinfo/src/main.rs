#![doc = include_str!("../../README.md")]

mod cli;
mod config;

use buildmap::log::{self, info};
use buildmap::run_batch;
use cli::*;
use simplelog::TermLogger;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::UserConfig;

const BASE_DIR: &str = "buildmap/";

/// Prints a report per MAP file. A file that fails is reported and skipped,
/// the exit code is non-zero if any did.
fn main() -> Result<ExitCode, Box<dyn Error>> {
    let mut options: CLIOptions = argh::from_env();

    TermLogger::init(
        options.verbose.unwrap_or(log::LevelFilter::Warn),
        simplelog::ConfigBuilder::default()
            .set_time_level(log::LevelFilter::Trace)
            .build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    if options.files.is_empty() {
        eprintln!("Usage: mapinfo [files], see `mapinfo --help`");
        return Ok(ExitCode::FAILURE);
    }

    let mut user_config = UserConfig::load();
    user_config.sync_cli(&mut options);

    let paths: Vec<PathBuf> = options.files.iter().map(PathBuf::from).collect();
    let reports = run_batch(&paths, &user_config.batch_options());

    let mut failed = 0;
    for report in &reports {
        match &report.result {
            Ok(map_report) => print!("{map_report}"),
            Err(e) => {
                failed += 1;
                eprintln!("{}: {} ({})", report.path.display(), e, e.check_name());
            }
        }
    }
    info!("{} of {} files read", reports.len() - failed, reports.len());

    if failed > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
