//! Whole-file CSV rewriting through the atomic writer.

use std::path::Path;

use csv::Writer;
use fof_model::FlatRecord;

use crate::error::{IngestError, Result};

/// Write `records` under `headers`, replacing `path` atomically.
///
/// Values are looked up by header; a record without a value for some header
/// writes an empty cell there. Columns a record has but `headers` lacks are
/// not written.
pub fn write_records<H: AsRef<str>>(
    path: &Path,
    headers: &[H],
    records: &[FlatRecord],
) -> Result<()> {
    if headers.is_empty() {
        return Err(IngestError::EmptyHeaders {
            path: path.to_path_buf(),
        });
    }

    let bytes = serialize(path, headers, records)?;
    fof_common::write_atomic(path, &bytes)?;

    tracing::info!(
        path = %path.display(),
        rows = records.len(),
        "saved CSV file"
    );
    Ok(())
}

fn serialize<H: AsRef<str>>(path: &Path, headers: &[H], records: &[FlatRecord]) -> Result<Vec<u8>> {
    let write_error = |message: String| IngestError::CsvWrite {
        path: path.to_path_buf(),
        message,
    };

    let mut writer = Writer::from_writer(Vec::new());
    writer
        .write_record(headers.iter().map(AsRef::as_ref))
        .map_err(|e| write_error(e.to_string()))?;
    for record in records {
        writer
            .write_record(
                headers
                    .iter()
                    .map(|header| record.get(header.as_ref()).unwrap_or("")),
            )
            .map_err(|e| write_error(e.to_string()))?;
    }
    writer.into_inner().map_err(|e| write_error(e.to_string()))
}
