//! Game constraints for team records.

use fof_model::{FieldValue, Team};

use crate::result::ValidationResult;
use crate::rules::{
    Rule, int_range, max_length, min_length, non_negative, required, rgb_component,
    validate_field, year_range,
};

fn text_rules(field: &str, value: &str) -> Vec<Rule<str>> {
    match field {
        "TeamName" => vec![required("Team name is required"), min_length(1), max_length(50)],
        "NickName" => vec![required("Nickname is required"), min_length(1), max_length(50)],
        "Abbreviation" => vec![required("Abbreviation is required"), min_length(2), max_length(5)],
        "FutureName" if !value.is_empty() => vec![max_length(50)],
        "FutureAbbr" if !value.is_empty() => vec![max_length(5)],
        _ => Vec::new(),
    }
}

fn int_rules(field: &str, value: i64) -> Vec<Rule<i64>> {
    match field {
        "Year" => vec![year_range(1920, 2100)],
        "TeamID" => vec![int_range(0, 31)],
        "Conference" => vec![int_range(0, 1)],
        "Division" => vec![int_range(0, 3)],
        "City" | "Attendance" => vec![non_negative()],
        "PrimaryRed" | "PrimaryGreen" | "PrimaryBlue" | "SecondaryRed" | "SecondaryGreen"
        | "SecondaryBlue" => vec![rgb_component()],
        // 0 outdoor / grass, 1 dome / artificial, 2 retractable / hybrid.
        "Roof" | "Turf" | "FutureRoof" | "FutureTurf" => vec![int_range(0, 2)],
        "Built" if value != 0 => vec![year_range(1900, 2100)],
        "Capacity" | "FutureCap" => vec![int_range(1000, 200_000)],
        "Luxury" | "FutureLuxury" => vec![int_range(0, 500)],
        "Condition" => vec![int_range(1, 10)],
        "Support" => vec![int_range(0, 100)],
        _ => Vec::new(),
    }
}

fn check_text(field: &str, value: &str) -> ValidationResult {
    validate_field(field, value, &text_rules(field, value))
}

fn check_int(field: &str, value: i32) -> ValidationResult {
    let value = i64::from(value);
    validate_field(field, &value, &int_rules(field, value))
}

pub fn validate_team(team: &Team) -> ValidationResult {
    let mut result = ValidationResult::new();
    result.merge(check_text("TeamName", &team.team_name));
    result.merge(check_text("NickName", &team.nick_name));
    result.merge(check_text("Abbreviation", &team.abbreviation));
    for (field, value) in [
        ("Year", team.year),
        ("TeamID", team.team_id),
        ("Conference", team.conference),
        ("Division", team.division),
        ("City", team.city),
        ("PrimaryRed", team.primary_red),
        ("PrimaryGreen", team.primary_green),
        ("PrimaryBlue", team.primary_blue),
        ("SecondaryRed", team.secondary_red),
        ("SecondaryGreen", team.secondary_green),
        ("SecondaryBlue", team.secondary_blue),
        ("Roof", team.roof),
        ("Turf", team.turf),
        ("Built", team.built),
        ("Capacity", team.capacity),
        ("Luxury", team.luxury),
        ("Condition", team.condition),
    ] {
        result.merge(check_int(field, value));
    }

    if team.attendance > team.capacity {
        result.add_error("Attendance", "cannot exceed stadium capacity");
    } else {
        result.merge(check_int("Attendance", team.attendance));
    }
    result.merge(check_int("Support", team.support));

    // Future stadium fields only matter while a stadium plan is active.
    if team.plan != 0 {
        result.merge(check_text("FutureName", &team.future_name));
        result.merge(check_text("FutureAbbr", &team.future_abbr));
        result.merge(check_int("FutureRoof", team.future_roof));
        result.merge(check_int("FutureTurf", team.future_turf));
        if team.future_cap != 0 {
            result.merge(check_int("FutureCap", team.future_cap));
        }
        result.merge(check_int("FutureLuxury", team.future_luxury));
    }
    result
}

/// Single-field check. Attendance is only checked for sign here since the
/// capacity is not known.
pub fn validate_team_field(field: &str, value: &FieldValue) -> ValidationResult {
    match value {
        FieldValue::Text(text) => validate_field(field, text.as_str(), &text_rules(field, text)),
        FieldValue::Int(number) => validate_field(field, number, &int_rules(field, *number)),
        FieldValue::Real(_) | FieldValue::Bool(_) => ValidationResult::new(),
    }
}
