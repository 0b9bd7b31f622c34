//! CSV codec for league data files.
//!
//! Reading is header driven and tolerant of ragged rows; writing always
//! replaces the whole file through [`fof_common::write_atomic`].

pub mod error;
pub mod reader;
pub mod table;
pub mod typed;
pub mod writer;

pub use error::{IngestError, Result};
pub use reader::{read_records, read_table};
pub use table::FlatTable;
pub use typed::{load_records, save_records};
pub use writer::write_records;
