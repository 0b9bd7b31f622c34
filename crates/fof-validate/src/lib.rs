//! Field rules and per-record game constraints.
//!
//! Violations are data: every validator returns a [`ValidationResult`] and
//! never fails. Field names in results use the editor's display keys
//! (`"Height"`, `"TeamID"`), which are also the keys the single-field
//! validators accept.

pub mod coach;
pub mod league;
pub mod player;
pub mod result;
pub mod rules;
pub mod team;

pub use coach::{validate_coach, validate_coach_field};
pub use league::validate_league_info;
pub use player::{validate_player, validate_player_field};
pub use result::{ValidationError, ValidationResult};
pub use rules::{
    Bound, Rule, day_range, int_max, int_min, int_range, max_length, min_length, month_range,
    non_negative, one_of, positive, required, rgb_component, validate_field, year_range,
};
pub use team::{validate_team, validate_team_field};
