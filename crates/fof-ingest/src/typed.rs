//! Typed load/save built from the CSV codec and the schema mapper.

use std::path::Path;

use fof_model::Record;

use crate::error::{IngestError, Result};
use crate::reader::read_records;
use crate::writer::write_records;

/// Load every row of `path` as a record of kind `R`.
pub fn load_records<R: Record>(path: &Path) -> Result<Vec<R>> {
    let rows = read_records(path)?;
    let records = fof_map::decode_all::<R>(&rows).map_err(|source| IngestError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        record = R::LABEL,
        count = records.len(),
        "loaded records"
    );
    Ok(records)
}

/// Save `records` to `path` using the full column schema of `R`.
///
/// Zero records produce a header-only file.
pub fn save_records<R: Record>(path: &Path, records: &[R]) -> Result<()> {
    let rows = fof_map::encode_all(records).map_err(|source| IngestError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    let headers = fof_map::header_list::<R>();
    write_records(path, headers.as_slice(), &rows)
}
