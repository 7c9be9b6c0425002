// infogain/src/main.rs
//! infogain entry point.
//!
//! Parses arguments, sets up logging, and dispatches to the selected command.

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use log::LevelFilter;
use std::io;
use std::process::ExitCode;

use infogain::cli::{Cli, Commands};
use infogain::commands::entropy::run_entropy;
use infogain::commands::gain::{run_gain, GainOptions};
use infogain::commands::sigmoid::run_sigmoid;
use infogain::logger;
use infogain::ui::output_format;

fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Entropy(cmd) => run_entropy(&cmd.counts, cmd.simple, &mut out),
        Commands::Gain(cmd) => {
            let opts = GainOptions {
                data: cmd.data,
                config: cmd.config,
                splits: cmd.splits,
                positive_label: cmd.positive_label,
                all_values: cmd.all_values,
                show_data: cmd.show_data,
                format: cmd.format,
                color: io::stdout().is_terminal(),
            };
            run_gain(&opts, &mut out)
        }
        Commands::Sigmoid(cmd) => run_sigmoid(cmd.x, &mut out),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if cli.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let supports_color = io::stderr().is_terminal();
            let _ = output_format::print_error_message(&mut io::stderr(), &format!("{:#}", e), supports_color);
            ExitCode::FAILURE
        }
    }
}
