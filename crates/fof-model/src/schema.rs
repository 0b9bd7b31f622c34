//! Field schema metadata shared by every record kind.
//!
//! Each record kind carries a static table of [`FieldSchema`] entries that
//! pairs a Rust field with its external CSV column and semantic type. The
//! table is generated by [`define_record!`](crate::define_record) so adding a
//! column only means adding one line to the record definition.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Semantic type of a field as seen by the CSV schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Int,
    Real,
    Text,
    Bool,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Int => "integer",
            FieldKind::Real => "real",
            FieldKind::Text => "string",
            FieldKind::Bool => "boolean",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field value, tagged with its semantic type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    Int(i64),
    Real(f64),
    Text(String),
    Bool(bool),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Int(_) => FieldKind::Int,
            FieldValue::Real(_) => FieldKind::Real,
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Bool(_) => FieldKind::Bool,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(i64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Real(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Schema entry binding a record field to its external column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    /// Rust field name (snake_case).
    pub name: &'static str,
    /// Column name in the CSV header.
    pub column: &'static str,
    pub kind: FieldKind,
}

/// Rust types that can back a schema field.
pub trait FieldType: Sized {
    const KIND: FieldKind;

    fn to_value(&self) -> FieldValue;

    fn from_value(value: FieldValue) -> Result<Self>;
}

fn mismatch(expected: FieldKind, value: &FieldValue) -> ModelError {
    ModelError::TypeMismatch {
        expected,
        found: value.kind(),
    }
}

impl FieldType for i32 {
    const KIND: FieldKind = FieldKind::Int;

    fn to_value(&self) -> FieldValue {
        FieldValue::Int(i64::from(*self))
    }

    fn from_value(value: FieldValue) -> Result<Self> {
        match value {
            FieldValue::Int(raw) => i32::try_from(raw).map_err(|_| ModelError::OutOfRange {
                value: raw,
                min: i64::from(i32::MIN),
                max: i64::from(i32::MAX),
            }),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}

impl FieldType for i64 {
    const KIND: FieldKind = FieldKind::Int;

    fn to_value(&self) -> FieldValue {
        FieldValue::Int(*self)
    }

    fn from_value(value: FieldValue) -> Result<Self> {
        match value {
            FieldValue::Int(raw) => Ok(raw),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}

impl FieldType for f64 {
    const KIND: FieldKind = FieldKind::Real;

    fn to_value(&self) -> FieldValue {
        FieldValue::Real(*self)
    }

    fn from_value(value: FieldValue) -> Result<Self> {
        match value {
            FieldValue::Real(raw) => Ok(raw),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}

impl FieldType for String {
    const KIND: FieldKind = FieldKind::Text;

    fn to_value(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }

    fn from_value(value: FieldValue) -> Result<Self> {
        match value {
            FieldValue::Text(raw) => Ok(raw),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}

impl FieldType for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn to_value(&self) -> FieldValue {
        FieldValue::Bool(*self)
    }

    fn from_value(value: FieldValue) -> Result<Self> {
        match value {
            FieldValue::Bool(raw) => Ok(raw),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}

/// A typed record with a static column schema.
///
/// Implemented through [`define_record!`](crate::define_record); the mapper
/// in `fof-map` only ever talks to records through this trait.
pub trait Record: Default + Clone {
    /// Short lowercase label used in messages ("player", "coach", ...).
    const LABEL: &'static str;

    fn schema() -> &'static [FieldSchema];

    /// Read a field by its Rust name.
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Assign a field by its Rust name.
    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<()>;

    fn columns() -> Vec<&'static str> {
        Self::schema().iter().map(|field| field.column).collect()
    }

    fn field_for_column(column: &str) -> Option<&'static FieldSchema> {
        Self::schema().iter().find(|field| field.column == column)
    }
}

/// Declare a record struct together with its column schema.
///
/// A field without `=> "COLUMN"` is a plain struct field: it is left out of
/// the schema and is not reachable through `field`/`set_field`, so its type
/// does not need to implement [`FieldType`].
///
/// ```
/// use fof_model::{Record, define_record};
///
/// define_record! {
///     #[derive(Debug, Clone, Default, PartialEq)]
///     pub struct Stadium as "stadium" {
///         name: String => "NAME",
///         capacity: i32 => "CAPACITY",
///         renovations: Vec<u16>,
///     }
/// }
///
/// assert_eq!(Stadium::columns(), vec!["NAME", "CAPACITY"]);
/// assert!(Stadium::default().field("renovations").is_none());
/// ```
#[macro_export]
macro_rules! define_record {
    (@mapped $column:literal) => {};
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident as $label:literal {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty $(=> $column:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl $crate::schema::Record for $name {
            const LABEL: &'static str = $label;

            fn schema() -> &'static [$crate::schema::FieldSchema] {
                const SCHEMA: &[$crate::schema::FieldSchema] = &[
                    $($(
                        $crate::schema::FieldSchema {
                            name: stringify!($field),
                            column: $column,
                            kind: <$ty as $crate::schema::FieldType>::KIND,
                        },
                    )?)*
                ];
                SCHEMA
            }

            fn field(&self, name: &str) -> ::std::option::Option<$crate::schema::FieldValue> {
                $($(
                    $crate::define_record!(@mapped $column);
                    if name == stringify!($field) {
                        return ::std::option::Option::Some(
                            $crate::schema::FieldType::to_value(&self.$field),
                        );
                    }
                )?)*
                ::std::option::Option::None
            }

            fn set_field(
                &mut self,
                name: &str,
                value: $crate::schema::FieldValue,
            ) -> ::std::result::Result<(), $crate::ModelError> {
                $($(
                    $crate::define_record!(@mapped $column);
                    if name == stringify!($field) {
                        self.$field = <$ty as $crate::schema::FieldType>::from_value(value)?;
                        return ::std::result::Result::Ok(());
                    }
                )?)*
                ::std::result::Result::Err($crate::ModelError::UnknownField {
                    record: $label,
                    field: name.to_string(),
                })
            }
        }
    };
}
