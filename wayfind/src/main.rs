mod cli;
mod commands;
mod config;
mod logging;

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::{FileConfig, Settings};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Search(args) => {
            let file = match &args.config {
                Some(path) => FileConfig::load(path)?,
                None => FileConfig::default(),
            };
            let level = cli.log_level.as_deref().or(file.log_level.as_deref());
            let logger = logging::init(level)?;
            let settings = Settings::resolve(&args, &file);
            let result = commands::search(&args, &settings);
            logger.flush();
            result.map(|summary| {
                log::debug!("{} of {} runs succeeded", summary.successes, summary.runs)
            })
        }
        Command::Generate(args) => {
            let logger = logging::init(cli.log_level.as_deref())?;
            let result = commands::generate(&args);
            logger.flush();
            result
        }
    }
}
