//! Data model for FOF9 custom league files.
//!
//! Typed records (players, coaches, teams, league info) are declared with
//! [`define_record!`], which also emits the static column schema the mapper
//! and CSV codec rely on.

pub mod coach;
pub mod error;
pub mod flat;
pub mod league;
pub mod player;
pub mod project;
pub mod reference;
pub mod schema;
pub mod team;

pub use coach::{Coach, CoachPosition};
pub use error::{ModelError, Result};
pub use flat::FlatRecord;
pub use league::LeagueInfo;
pub use player::Player;
pub use project::{FileRole, PROJECT_EXTENSION, PROJECT_FORMAT_VERSION, ProjectDescriptor};
pub use reference::{POSITIONS, Position, PositionUnit, ReferenceData};
pub use schema::{FieldKind, FieldSchema, FieldType, FieldValue, Record};
pub use team::{Rgb, Team};
