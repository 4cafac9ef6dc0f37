//! Writes the sample logger config, builds the logger from it, then runs one demo picked
//! from a numbered menu.
//!
//! Usage:
//!   loglet                          Prompt for a choice
//!   loglet --choice 3               Run one demo without prompting
//!   loglet --config my.ini --log-file ~/logs/app.log --out-dir out/

use clap::Parser;
use loglet::Logger;
use loglet::cli::{Choice, Cli, Workspace, dispatch, expand_path, print_menu, prompt_choice};
use loglet::config::Config;
use loglet::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    internal::init(cli.verbose);

    let config_path = expand_path(&cli.config);
    let log_path = expand_path(&cli.log_file);
    let workspace = Workspace::new(expand_path(&cli.out_dir));

    // First run leaves a sample behind; a failed write just means the load falls back
    if let Err(e) = Config::write_sample_if_missing(&config_path) {
        internal::warn(
            "CONFIG",
            &format!("Could not write {}: {e}", config_path.display()),
        );
    }

    let config = Config::load_or_fallback(&config_path);
    let logger = Logger::from_config_or_fallback(&config, &log_path);

    let input = match cli.choice {
        Some(choice) => choice,
        None => {
            print_menu();
            match prompt_choice() {
                Ok(line) => line,
                Err(e) => {
                    internal::error("CLI", &e);
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    match input.parse::<Choice>() {
        Ok(choice) => {
            dispatch(choice, &logger, &log_path, &workspace);
        }
        Err(e) => internal::error("CLI", &format!("{e}")),
    }

    logger.info("Program finished");
    ExitCode::SUCCESS
}
