//! Conversion between flat CSV rows and typed league records.
//!
//! Everything here is driven by the static schema each record exposes
//! through [`fof_model::Record`]; there is no per-kind mapping code.

pub mod error;
pub mod mapper;
pub mod value;

pub use error::{MapError, Result};
pub use mapper::{FIRST_DATA_ROW, decode, decode_all, encode, encode_all, header_list};
pub use value::{format_cell, parse_bool, parse_cell};
