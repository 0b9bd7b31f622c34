//! Header-driven CSV reading.

use std::fs;
use std::path::Path;

use csv::{ErrorKind, ReaderBuilder, StringRecord};
use fof_model::FlatRecord;

use crate::error::{IngestError, Result};
use crate::table::FlatTable;

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

fn csv_error(path: &Path, err: csv::Error) -> IngestError {
    let line = err.position().map_or(0, csv::Position::line);
    let message = err.to_string();
    match err.into_kind() {
        ErrorKind::Io(source) => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        _ => IngestError::MalformedRow {
            path: path.to_path_buf(),
            line,
            message,
        },
    }
}

#[derive(Debug, PartialEq, Eq)]
struct QuoteError {
    line: u64,
    message: &'static str,
}

#[derive(Clone, Copy)]
enum Quoting {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Check quoting the `csv` reader would silently accept and drop the
/// whitespace that leads a field, so `  "a,b"` still reads as a quoted field.
///
/// A `"` inside an unquoted field, text after a closing quote, and a quoted
/// field left open at end of input are all errors. The reported line is the
/// 1-based line on which the offending record starts.
fn prepare_input(bytes: &[u8]) -> std::result::Result<Vec<u8>, QuoteError> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let mut out = Vec::with_capacity(bytes.len());
    let mut state = Quoting::FieldStart;
    let mut line = 1;
    let mut record_line = 1;

    for &byte in bytes {
        state = match (state, byte) {
            (Quoting::Quoted, b'"') => Quoting::QuoteInQuoted,
            (Quoting::Quoted, b'\n') => {
                line += 1;
                Quoting::Quoted
            }
            (Quoting::Quoted, _) => Quoting::Quoted,
            (Quoting::QuoteInQuoted, b'"') => Quoting::Quoted,
            (_, b'\n') => {
                line += 1;
                record_line = line;
                Quoting::FieldStart
            }
            (_, b',' | b'\r') => Quoting::FieldStart,
            (Quoting::FieldStart, b' ' | b'\t') => continue,
            (Quoting::FieldStart, b'"') => Quoting::Quoted,
            (Quoting::Unquoted, b'"') => {
                return Err(QuoteError {
                    line: record_line,
                    message: "bare \" in non-quoted field",
                });
            }
            (Quoting::QuoteInQuoted, _) => {
                return Err(QuoteError {
                    line: record_line,
                    message: "extraneous \" after quoted field",
                });
            }
            (Quoting::FieldStart | Quoting::Unquoted, _) => Quoting::Unquoted,
        };
        out.push(byte);
    }

    if matches!(state, Quoting::Quoted) {
        return Err(QuoteError {
            line: record_line,
            message: "quoted field is never closed",
        });
    }
    Ok(out)
}

/// Read a CSV file whose first row names the columns.
///
/// Cells are trimmed. Short rows are padded with empty values and surplus
/// fields are dropped. A zero-byte or header-only file yields no records.
/// Unbalanced quoting fails with the line of the offending record.
pub fn read_table(path: &Path) -> Result<FlatTable> {
    let bytes = prepare_input(&read_bytes(path)?).map_err(|err| IngestError::MalformedRow {
        path: path.to_path_buf(),
        line: err.line,
        message: err.message.to_string(),
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes.as_slice());

    let mut rows = reader.records();
    let headers: Vec<String> = match rows.next() {
        Some(first) => first
            .map_err(|e| csv_error(path, e))?
            .iter()
            .map(normalize_header)
            .collect(),
        None => {
            tracing::debug!(path = %path.display(), "empty CSV file");
            return Ok(FlatTable::default());
        }
    };

    let mut records = Vec::new();
    for row in rows {
        let row = row.map_err(|e| csv_error(path, e))?;
        records.push(flatten_row(path, &headers, &row));
    }

    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = records.len(),
        "read CSV file"
    );
    Ok(FlatTable { headers, records })
}

/// Read only the data rows of a CSV file.
pub fn read_records(path: &Path) -> Result<Vec<FlatRecord>> {
    read_table(path).map(|table| table.records)
}

fn flatten_row(path: &Path, headers: &[String], row: &StringRecord) -> FlatRecord {
    if row.len() > headers.len() {
        tracing::warn!(
            path = %path.display(),
            line = row.position().map_or(0, csv::Position::line),
            expected = headers.len(),
            found = row.len(),
            "ignoring surplus fields"
        );
    }
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| (header.as_str(), row.get(index).map_or("", str::trim)))
        .collect()
}
