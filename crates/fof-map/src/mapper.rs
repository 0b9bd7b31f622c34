//! Schema-driven conversion between [`FlatRecord`] rows and typed records.

use fof_model::{FieldSchema, FlatRecord, ModelError, Record};

use crate::error::{MapError, Result};
use crate::value::{format_cell, parse_cell};

/// Row number of the first data row; the header occupies row 1.
pub const FIRST_DATA_ROW: usize = 2;

/// Column names of `R` in schema order.
pub fn header_list<R: Record>() -> Vec<&'static str> {
    R::columns()
}

/// Build a typed record from a flat row.
///
/// Columns that are missing or empty leave the field at its zero value.
/// Columns not named by the schema are ignored.
pub fn decode<R: Record>(flat: &FlatRecord) -> Result<R> {
    let mut record = R::default();
    for field in R::schema() {
        let Some(raw) = flat.get(field.column).filter(|raw| !raw.is_empty()) else {
            continue;
        };
        let value = parse_cell(field.kind, raw).map_err(|reason| invalid(field, raw, reason))?;
        record
            .set_field(field.name, value)
            .map_err(|err| match err {
                ModelError::OutOfRange { .. } => invalid(field, raw, err.to_string()),
                other => MapError::UnsupportedType {
                    field: field.name,
                    expected: field.kind,
                    found: other.to_string(),
                },
            })?;
    }
    Ok(record)
}

/// Flatten a typed record into a row holding every schema column.
pub fn encode<R: Record>(record: &R) -> Result<FlatRecord> {
    let mut flat = FlatRecord::with_capacity(R::schema().len());
    for field in R::schema() {
        let value = record
            .field(field.name)
            .ok_or_else(|| MapError::UnsupportedType {
                field: field.name,
                expected: field.kind,
                found: "no value".to_string(),
            })?;
        if value.kind() != field.kind {
            return Err(MapError::UnsupportedType {
                field: field.name,
                expected: field.kind,
                found: value.kind().to_string(),
            });
        }
        flat.insert(field.column, format_cell(&value));
    }
    Ok(flat)
}

/// Decode a batch of rows, tagging failures with their CSV row number.
pub fn decode_all<R: Record>(rows: &[FlatRecord]) -> Result<Vec<R>> {
    let records = rows
        .iter()
        .enumerate()
        .map(|(index, row)| decode::<R>(row).map_err(|err| at_row::<R>(index, err)))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(record = R::LABEL, count = records.len(), "decoded rows");
    Ok(records)
}

pub fn encode_all<R: Record>(records: &[R]) -> Result<Vec<FlatRecord>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| encode(record).map_err(|err| at_row::<R>(index, err)))
        .collect()
}

fn invalid(field: &FieldSchema, raw: &str, reason: String) -> MapError {
    MapError::InvalidValue {
        field: field.name,
        column: field.column,
        kind: field.kind,
        value: raw.to_string(),
        reason,
    }
}

fn at_row<R: Record>(index: usize, err: MapError) -> MapError {
    MapError::Row {
        record: R::LABEL,
        row: index + FIRST_DATA_ROW,
        source: Box::new(err),
    }
}
