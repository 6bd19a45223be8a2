// Export - Delimited text rendering of record lists
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};

use crate::models::Enquiry;
use crate::perf_trace;

/// Fixed date format for exported dates (ISO-8601 calendar date, UTC)
pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";

const DELIMITER: char = ',';
const DELIMITER_SUBSTITUTE: &str = ";";

/// A single exported value
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(Option<String>),
    Date(Option<DateTime<Utc>>),
}

impl Cell {
    fn render(&self) -> String {
        match self {
            Cell::Text(value) => value.clone().unwrap_or_default(),
            Cell::Date(value) => value
                .map(|at| at.format(EXPORT_DATE_FORMAT).to_string())
                .unwrap_or_default(),
        }
    }
}

/// A labelled column and how to read it from a record
pub struct Column<T> {
    pub label: &'static str,
    pub value: fn(&T) -> Cell,
}

impl<T> Column<T> {
    pub fn new(label: &'static str, value: fn(&T) -> Cell) -> Self {
        Self { label, value }
    }
}

/// Output flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CsvStyle {
    /// Commas inside values become semicolons; no quoting. Embedded
    /// newlines are written through unchanged.
    #[default]
    Legacy,
    /// RFC 4180 quoting
    Quoted,
}

/// Columns of the enquiry export: `Name,Email,Phone,Subject,Message,Date`
pub fn enquiry_columns() -> Vec<Column<Enquiry>> {
    vec![
        Column::new("Name", |e: &Enquiry| Cell::Text(e.name.clone())),
        Column::new("Email", |e: &Enquiry| Cell::Text(e.email.clone())),
        Column::new("Phone", |e: &Enquiry| Cell::Text(e.phone_number.clone())),
        Column::new("Subject", |e: &Enquiry| Cell::Text(e.subject.clone())),
        Column::new("Message", |e: &Enquiry| Cell::Text(e.message.clone())),
        Column::new("Date", |e: &Enquiry| Cell::Date(e.created_at)),
    ]
}

/// Render `records` in the legacy style: header row, then one line per record
pub fn to_csv<T>(records: &[T], columns: &[Column<T>]) -> String {
    let header = columns
        .iter()
        .map(|c| sanitize(c.label))
        .collect::<Vec<_>>()
        .join(",");

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(header);

    for record in records {
        let line = columns
            .iter()
            .map(|c| sanitize(&(c.value)(record).render()))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(line);
    }

    perf_trace!("Rendered {} CSV rows", records.len());
    lines.join("\n")
}

/// Render `records` in the requested style
pub fn to_csv_with_style<T>(records: &[T], columns: &[Column<T>], style: CsvStyle) -> Result<String> {
    match style {
        CsvStyle::Legacy => Ok(to_csv(records, columns)),
        CsvStyle::Quoted => to_quoted_csv(records, columns),
    }
}

fn to_quoted_csv<T>(records: &[T], columns: &[Column<T>]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(columns.iter().map(|c| c.label))
        .context("Failed to write CSV header")?;

    for record in records {
        writer
            .write_record(columns.iter().map(|c| (c.value)(record).render()))
            .context("Failed to write CSV row")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush CSV output: {}", e.error()))?;
    let mut text = String::from_utf8(bytes).context("CSV output is not valid UTF-8")?;

    // Match the legacy layout: no terminator after the last line
    if text.ends_with('\n') {
        text.pop();
    }

    Ok(text)
}

fn sanitize(value: &str) -> String {
    value.replace(DELIMITER, DELIMITER_SUBSTITUTE)
}
