//! CSV import and export of the contact table.
//!
//! Import accepts what spreadsheet tools produce: an optional UTF-8 byte-order
//! mark, comma, semicolon, tab or pipe delimiters, quoted cells and blank
//! lines. Export always writes comma-separated UTF-8 with a byte-order mark so
//! Excel opens Arabic text correctly.

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use log::{info, warn};

use crate::config::{ExportNames, StatusLabels};
use crate::error::{Error, Result};
use crate::model::Dataset;

const BOM: char = '\u{feff}';

/// Header of the trailing status column in a status-inclusive export.
pub const STATUS_HEADER: &str = "sent";

/// Picks the delimiter that occurs most often, outside quotes, on the first
/// non-blank line. Falls back to a comma.
pub fn detect_delimiter(text: &str) -> u8 {
    let line = text.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    let mut best = b',';
    let mut best_count = 0;
    for delimiter in [b',', b';', b'\t', b'|'] {
        let mut quoted = false;
        let count = line
            .bytes()
            .filter(|&b| {
                if b == b'"' {
                    quoted = !quoted;
                }
                !quoted && b == delimiter
            })
            .count();
        if count > best_count {
            best = delimiter;
            best_count = count;
        }
    }
    best
}

/// Reads the header and the data rows, cells in header order.
fn read_table(text: &str) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(detect_delimiter(text))
        .from_reader(text.as_bytes());

    let mut records = reader.records();
    let columns: Vec<String> = match records.next() {
        Some(header) => header?.iter().map(str::to_string).collect(),
        None => return Ok((Vec::new(), Vec::new())),
    };

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        if record.iter().skip(columns.len()).any(|cell| !cell.is_empty()) {
            warn!(
                "line {} has {} cells but the header has {}, dropping the extra cells",
                record.position().map_or(0, |p| p.line()),
                record.len(),
                columns.len()
            );
        }
        rows.push(
            record
                .iter()
                .take(columns.len())
                .map(str::to_string)
                .collect(),
        );
    }
    Ok((columns, rows))
}

/// Parses CSV text into a dataset. Every row starts unsent.
pub fn parse(text: &str) -> Result<Dataset> {
    let (columns, rows) = read_table(text)?;
    let dataset = Dataset::from_rows(columns, rows.into_iter().map(|r| (r, false)).collect())?;
    info!(
        "imported {} rows with {} columns",
        dataset.len(),
        dataset.columns().len()
    );
    Ok(dataset)
}

/// Checks that uploaded bytes are UTF-8 text.
pub fn decode(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| {
        Error::parse(format!(
            "file is not UTF-8 text (invalid byte at offset {})",
            e.valid_up_to()
        ))
    })
}

/// Parses raw file bytes, which must be UTF-8.
pub fn parse_bytes(bytes: &[u8]) -> Result<Dataset> {
    parse(decode(bytes)?)
}

/// Parses a status-inclusive export back, restoring each row's `sent` flag
/// from a trailing `sent` column. Without that column this is [`parse`].
pub fn parse_with_status(text: &str, labels: &StatusLabels) -> Result<Dataset> {
    let (mut columns, rows) = read_table(text)?;
    if columns.len() < 2 || columns.last().map(String::as_str) != Some(STATUS_HEADER) {
        return Dataset::from_rows(columns, rows.into_iter().map(|r| (r, false)).collect());
    }

    let status_idx = columns.len() - 1;
    columns.truncate(status_idx);
    let rows = rows
        .into_iter()
        .map(|mut cells| {
            let sent = cells.get(status_idx).is_some_and(|c| labels.is_yes(c));
            cells.truncate(status_idx);
            (cells, sent)
        })
        .collect();
    let dataset = Dataset::from_rows(columns, rows)?;
    info!(
        "restored {} rows with {} columns and their send status",
        dataset.len(),
        dataset.columns().len()
    );
    Ok(dataset)
}

/// Writes the dataset as CSV, optionally followed by a status column.
pub fn serialize(dataset: &Dataset, include_status: bool, labels: &StatusLabels) -> Result<String> {
    let mut out = String::from(BOM);
    if dataset.is_empty() {
        return Ok(out);
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    let columns = dataset.columns();
    if include_status {
        writer.write_record(columns.iter().map(String::as_str).chain([STATUS_HEADER]))?;
    } else {
        writer.write_record(columns)?;
    }
    for row in dataset.rows() {
        if include_status {
            writer.write_record(row.values_in(columns).chain([labels.label(row.sent)]))?;
        } else {
            writer.write_record(row.values_in(columns))?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::parse(e.to_string()))?;
    let body = String::from_utf8(bytes).map_err(|e| Error::parse(e.to_string()))?;
    out.push_str(&body);
    Ok(out)
}

/// Download name for an export.
pub fn export_file_name(include_status: bool, names: &ExportNames) -> &str {
    if include_status {
        &names.with_status
    } else {
        &names.plain
    }
}
