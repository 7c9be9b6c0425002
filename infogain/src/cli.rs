// infogain/src/cli.rs
//! This file defines the command-line interface (CLI) for the infogain
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use infogain_core::SplitCandidate;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "infogain",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Shannon entropy and information gain for small tabular datasets",
    long_about = "infogain computes the Shannon entropy of discrete frequency distributions and the information gain of candidate splits (categorical values or numeric thresholds) over a binary-labeled CSV dataset.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, conflicts_with = "debug", help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `infogain` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Computes the Shannon entropy of a frequency distribution.
    #[command(about = "Computes the Shannon entropy of a frequency distribution.")]
    Entropy(EntropyCommand),

    /// Reports the information gain of each candidate split over a dataset.
    #[command(about = "Reports the information gain of each candidate split over a CSV dataset.")]
    Gain(GainCommand),

    /// Evaluates the logistic sigmoid.
    #[command(about = "Evaluates the logistic sigmoid 1 / (1 + e^-x).")]
    Sigmoid(SigmoidCommand),
}

/// Arguments for the `entropy` command.
#[derive(Parser, Debug)]
pub struct EntropyCommand {
    /// Observed outcome counts.
    #[arg(value_name = "COUNT", required = true, num_args = 1.., allow_negative_numbers = true, help = "Observed outcome counts, e.g. `8 3 2`.")]
    pub counts: Vec<f64>,

    /// Use the closed-form two-outcome formula (requires exactly two non-zero counts).
    #[arg(long, short = 's', help = "Use the closed-form two-outcome formula; requires exactly two non-zero counts.")]
    pub simple: bool,
}

/// Arguments for the `gain` command.
#[derive(Parser, Debug)]
pub struct GainCommand {
    /// Path to the CSV dataset (defaults to the configured path, `ml-bugs.csv`).
    #[arg(long, short = 'i', value_name = "FILE", env = "INFOGAIN_DATA", help = "Path to the CSV dataset.")]
    pub data: Option<PathBuf>,

    /// Path to a custom configuration file (YAML).
    #[arg(long = "config", short = 'c', value_name = "FILE", help = "Path to a custom configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Candidate splits to evaluate, replacing the configured list.
    #[arg(long = "split", short = 's', value_name = "SPLIT", value_delimiter = ',', allow_negative_numbers = true, help = "Candidate splits (comma-separated). Numbers are thresholds, anything else is a category.")]
    pub splits: Vec<SplitCandidate>,

    /// Label value counted as the positive outcome.
    #[arg(long = "positive", value_name = "LABEL", help = "Label value counted as the positive outcome.")]
    pub positive_label: Option<String>,

    /// Also evaluate a categorical split for every distinct category in the data.
    #[arg(long = "all-values", help = "Also evaluate a split for every distinct category in the data.")]
    pub all_values: bool,

    /// Print the loaded dataset before the report.
    #[arg(long = "show-data", help = "Print the loaded dataset before the report.")]
    pub show_data: bool,

    /// Output format for the report.
    #[arg(long = "format", short = 'f', value_enum, default_value = "text", help = "Output format for the report.")]
    pub format: OutputFormat,
}

/// Arguments for the `sigmoid` command.
#[derive(Parser, Debug)]
pub struct SigmoidCommand {
    /// Input value.
    #[arg(value_name = "X", allow_negative_numbers = true)]
    pub x: f64,
}

/// Enum for selecting the report format.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `label\t: value` line per result, four decimals.
    Text,
    /// A formatted table.
    Table,
    /// Pretty-printed JSON.
    Json,
}
