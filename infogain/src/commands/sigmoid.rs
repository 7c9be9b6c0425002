//! `sigmoid` command.

use anyhow::Result;
use std::io::Write;

use infogain_core::sigmoid;

use crate::ui::report::format_value;

pub fn run_sigmoid<W: Write>(x: f64, out: &mut W) -> Result<()> {
    writeln!(out, "{}", format_value("sigmoid", sigmoid(x)))?;
    Ok(())
}
