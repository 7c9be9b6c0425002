//! `gain` command: information gain of each candidate split over a dataset.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::path::PathBuf;

use infogain_core::{
    evaluate_split, merge_config, parent_entropy, Dataset, GainConfig, SplitCandidate, SplitReport,
};

use crate::cli::OutputFormat;
use crate::ui::{output_format, report};

/// Options for the `gain` command, decoupled from clap for testing.
#[derive(Debug, Clone)]
pub struct GainOptions {
    pub data: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub splits: Vec<SplitCandidate>,
    pub positive_label: Option<String>,
    pub all_values: bool,
    pub show_data: bool,
    pub format: OutputFormat,
    /// Style headings for a terminal.
    pub color: bool,
}

impl Default for GainOptions {
    fn default() -> Self {
        Self {
            data: None,
            config: None,
            splits: Vec::new(),
            positive_label: None,
            all_values: false,
            show_data: false,
            format: OutputFormat::Text,
            color: false,
        }
    }
}

/// Builds the effective configuration: embedded defaults, then the user
/// config file, then command-line flags.
pub fn resolve_config(opts: &GainOptions) -> Result<GainConfig> {
    let default_config = GainConfig::load_default()?;
    let user_config = opts
        .config
        .as_ref()
        .map(|path| {
            GainConfig::load_from_file(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))
        })
        .transpose()?;
    let mut config = merge_config(default_config, user_config);

    if let Some(data) = &opts.data {
        debug!("Dataset path overridden on command line: {}", data.display());
        config.dataset.path = Some(data.clone());
    }
    if let Some(label) = &opts.positive_label {
        config.dataset.positive_label = Some(label.clone());
    }
    if !opts.splits.is_empty() {
        config.splits = opts.splits.clone();
    }
    config.validate()?;
    Ok(config)
}

/// The main operation runner for `infogain gain`.
pub fn run_gain<W: Write>(opts: &GainOptions, out: &mut W) -> Result<()> {
    info!("Starting information gain run.");
    let mut config = resolve_config(opts)?;
    let schema = config.schema()?;
    let dataset = Dataset::load(&schema)
        .with_context(|| format!("Failed to load dataset {}", schema.path.display()))?;

    if opts.all_values {
        for category in dataset.categories() {
            let split = SplitCandidate::Categorical(category.to_string());
            if !config.splits.contains(&split) {
                config.splits.push(split);
            }
        }
    }

    if opts.show_data {
        let heading = format!(
            "Dataset {} ({} rows, positive label '{}')",
            schema.path.display(),
            dataset.len(),
            dataset.positive_label()
        );
        output_format::print_info_message(out, &heading, opts.color)?;
        report::write_dataset(&dataset, &schema, out)?;
    }

    let parent = parent_entropy(&dataset).context("Cannot compute parent entropy")?;
    let reports = config
        .splits
        .iter()
        .map(|split| evaluate_split(&dataset, parent, split))
        .collect::<Result<Vec<SplitReport>, _>>()
        .context("Cannot evaluate splits")?;

    match opts.format {
        OutputFormat::Text => report::write_text(parent, &reports, out)?,
        OutputFormat::Table => report::write_table(parent, &reports, out)?,
        OutputFormat::Json => report::write_json(parent, dataset.len(), &reports, out)?,
    }

    info!("Evaluated {} splits over {} rows.", reports.len(), dataset.len());
    Ok(())
}
