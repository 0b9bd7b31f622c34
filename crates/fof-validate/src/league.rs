//! Sanity checks for the league info row.

use fof_model::LeagueInfo;

use crate::result::ValidationResult;
use crate::rules::{non_negative, positive, required, validate_field, year_range};

pub fn validate_league_info(info: &LeagueInfo) -> ValidationResult {
    let mut result = validate_field(
        "ScheduleID",
        info.schedule_id.as_str(),
        &[required("Schedule ID is required")],
    );
    if !info.schedule_id.trim().is_empty() && !info.has_valid_schedule_id() {
        result.add_error("ScheduleID", "must have the form teams_divisions_games");
    }
    result.merge(validate_field("BaseYear", &info.base_year, &[year_range(1920, 2100)]));
    result.merge(validate_field("SalaryCap", &info.salary_cap, &[positive()]));
    for (field, value) in [
        ("Minimum", info.minimum),
        ("Salary1", info.salary1),
        ("Salary2", info.salary2),
        ("Salary3", info.salary3),
        ("Salary45", info.salary45),
        ("Salary789", info.salary789),
        ("Salary10", info.salary10),
    ] {
        result.merge(validate_field(field, &value, &[non_negative()]));
    }
    result
}
