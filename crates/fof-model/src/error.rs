use thiserror::Error;

use crate::schema::FieldKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("expected {expected} value, found {found}")]
    TypeMismatch { expected: FieldKind, found: FieldKind },
    #[error("value {value} does not fit in {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },
    #[error("{record} has no field named '{field}'")]
    UnknownField { record: &'static str, field: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
