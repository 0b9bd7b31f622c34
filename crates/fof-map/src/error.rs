use fof_model::FieldKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    /// A present, non-empty cell could not be parsed as the field's type.
    #[error("field {field} (column {column}): invalid {kind} value '{value}': {reason}")]
    InvalidValue {
        field: &'static str,
        column: &'static str,
        kind: FieldKind,
        value: String,
        reason: String,
    },

    /// The record produced a value that does not match its declared type.
    #[error("field {field}: unsupported field type (schema declares {expected}, found {found})")]
    UnsupportedType {
        field: &'static str,
        expected: FieldKind,
        found: String,
    },

    /// Wraps an error with the CSV row it came from (header is row 1).
    #[error("error converting {record} at row {row}: {source}")]
    Row {
        record: &'static str,
        row: usize,
        #[source]
        source: Box<MapError>,
    },
}

impl MapError {
    /// Name of the field that failed, looking through row context.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidValue { field, .. } | Self::UnsupportedType { field, .. } => field,
            Self::Row { source, .. } => source.field(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MapError>;
