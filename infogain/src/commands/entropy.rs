//! `entropy` command: Shannon entropy of a list of counts.

use anyhow::{bail, Context, Result};
use log::debug;
use std::io::Write;

use infogain_core::{entropy, simple_entropy};

use crate::ui::report::format_value;

/// Computes and prints the entropy of `counts`.
///
/// With `simple` set, the closed-form two-outcome formula is used instead of
/// the general one, which requires exactly two counts, both non-zero.
pub fn run_entropy<W: Write>(counts: &[f64], simple: bool, out: &mut W) -> Result<()> {
    debug!("Computing entropy of {:?} (simple: {})", counts, simple);

    if simple {
        let [m, n] = counts else {
            bail!("--simple takes exactly two counts, got {}", counts.len());
        };
        let bits = simple_entropy(*m, *n).context("Cannot compute simple entropy")?;
        writeln!(out, "{}", format_value("simple entropy", bits))?;
    } else {
        let bits = entropy(counts).context("Cannot compute entropy")?;
        writeln!(out, "{}", format_value("entropy", bits))?;
    }
    Ok(())
}
