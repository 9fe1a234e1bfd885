//! Rendering records for the terminal.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::Record;

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Tab-separated values, one record per line
    Plain,
    /// Aligned table with headings
    #[default]
    Table,
    /// JSON array
    Json,
}

const HEADINGS: [&str; 6] = ["ID", "Roll No", "Name", "Email", "Age", "Gender"];

fn cells(record: &Record) -> [String; 6] {
    [
        record.internal_id.to_string(),
        record.roll_no.to_string(),
        record.fields.name.clone(),
        record.fields.email.clone(),
        record.fields.age.to_string(),
        record.fields.gender.to_string(),
    ]
}

/// Render a listing in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_records(records: &[Record], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(records)?,
        OutputFormat::Plain => records
            .iter()
            .map(|r| cells(r).join("\t"))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Table => render_table(records),
    })
}

/// Render a single record as `key: value` lines or as a JSON object.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_record(record: &Record, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(record)?);
    }
    // Room for the trailing colon.
    let width = HEADINGS.iter().map(|h| h.len()).max().unwrap_or(0) + 1;
    Ok(HEADINGS
        .iter()
        .zip(cells(record))
        .map(|(heading, value)| format!("{:<width$}  {value}", format!("{heading}:")))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn render_table(records: &[Record]) -> String {
    let rows: Vec<[String; 6]> = records.iter().map(cells).collect();

    let mut widths = HEADINGS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(table_line(HEADINGS.iter().copied(), &widths));
    out.push(table_line(rule.iter().map(String::as_str), &widths));
    for row in &rows {
        out.push(table_line(row.iter().map(String::as_str), &widths));
    }
    out.join("\n")
}

fn table_line<'a>(values: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    values
        .zip(widths)
        .map(|(value, width)| pad(value, *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Left-align `value` in `width` characters.
fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{value}{}", " ".repeat(width.saturating_sub(len)))
}
