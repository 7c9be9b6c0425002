//! Rendering of entropy values and split reports.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;
use std::io::Write;

use infogain_core::{best_split, Bits, Dataset, DatasetSchema, SplitReport};

/// Formats one `label\t: value` line with four decimals.
pub fn format_value(label: &str, value: f64) -> String {
    format!("{}\t: {:.4}", label, value)
}

/// Plain text report: the parent entropy, then the gain of each split.
pub fn write_text<W: Write>(parent: Bits, reports: &[SplitReport], out: &mut W) -> Result<()> {
    writeln!(out, "{}", format_value("parent entropy", parent))?;
    for report in reports {
        let label = format!("{} entropy", report.split.label());
        writeln!(out, "{}", format_value(&label, report.information_gain))?;
    }
    Ok(())
}

/// Tabular report with partition sizes and both entropies.
pub fn write_table<W: Write>(parent: Bits, reports: &[SplitReport], out: &mut W) -> Result<()> {
    writeln!(out, "{}", format_value("parent entropy", parent))?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Split", "Matching", "Remaining", "Child entropy", "Information gain"]);

    let best = best_split(reports).map(|r| &r.split);
    for report in reports {
        let mut split = report.split.to_string();
        if Some(&report.split) == best {
            split.push_str(" *");
        }
        table.add_row(vec![
            Cell::new(split),
            Cell::new(report.left_size).set_alignment(CellAlignment::Right),
            Cell::new(report.right_size).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", report.child_entropy)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", report.information_gain)).set_alignment(CellAlignment::Right),
        ]);
    }

    writeln!(out, "{}", table)?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    parent_entropy: Bits,
    rows: usize,
    splits: &'a [SplitReport],
    best_split: Option<String>,
}

/// Pretty-printed JSON report.
pub fn write_json<W: Write>(parent: Bits, rows: usize, reports: &[SplitReport], out: &mut W) -> Result<()> {
    let report = JsonReport {
        parent_entropy: parent,
        rows,
        splits: reports,
        best_split: best_split(reports).map(|r| r.split.label()),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

/// Prints the loaded dataset, one row per line, using the schema's headers.
pub fn write_dataset<W: Write>(dataset: &Dataset, schema: &DatasetSchema, out: &mut W) -> Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "#",
        schema.label_column.as_str(),
        schema.categorical_column.as_str(),
        schema.numeric_column.as_str(),
    ]);
    for (i, row) in dataset.rows().iter().enumerate() {
        table.add_row(vec![
            Cell::new(i),
            Cell::new(&row.label),
            Cell::new(&row.category),
            Cell::new(row.value).set_alignment(CellAlignment::Right),
        ]);
    }
    writeln!(out, "{}", table)?;
    writeln!(out, "[{} rows x 3 columns]", dataset.len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use infogain_core::SplitCandidate;

    fn reports() -> Vec<SplitReport> {
        vec![
            SplitReport {
                split: SplitCandidate::Categorical("Green".into()),
                parent_entropy: 0.9,
                child_entropy: 0.8,
                information_gain: 0.1,
                left_size: 3,
                right_size: 7,
            },
            SplitReport {
                split: SplitCandidate::Threshold(17.0),
                parent_entropy: 0.9,
                child_entropy: 0.5,
                information_gain: 0.4,
                left_size: 4,
                right_size: 6,
            },
        ]
    }

    #[test]
    fn text_lines_use_four_decimals() -> Result<()> {
        let mut out = Vec::new();
        write_text(0.9, &reports(), &mut out)?;
        assert_eq!(
            String::from_utf8(out)?,
            "parent entropy\t: 0.9000\ngreen entropy\t: 0.1000\n<17 entropy\t: 0.4000\n"
        );
        Ok(())
    }

    #[test]
    fn table_marks_best_split() -> Result<()> {
        let mut out = Vec::new();
        write_table(0.9, &reports(), &mut out)?;
        let text = String::from_utf8(out)?;
        assert!(text.contains("< 17 *"));
        assert!(text.contains("== Green"));
        assert!(!text.contains("== Green *"));
        Ok(())
    }

    #[test]
    fn json_is_parseable() -> Result<()> {
        let mut out = Vec::new();
        write_json(0.9, 10, &reports(), &mut out)?;
        let value: serde_json::Value = serde_json::from_slice(&out)?;
        assert_eq!(value["rows"], 10);
        assert_eq!(value["best_split"], "<17");
        assert_eq!(value["splits"][0]["split"]["categorical"], "Green");
        assert_eq!(value["splits"][1]["left_size"], 4);
        Ok(())
    }
}
