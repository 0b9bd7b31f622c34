//! Game constraints for coach records.

use fof_model::{Coach, FieldValue};

use crate::result::ValidationResult;
use crate::rules::{
    Rule, day_range, int_range, max_length, min_length, month_range, non_negative, required,
    validate_field, year_range,
};

fn text_rules(field: &str, value: &str) -> Vec<Rule<str>> {
    match field {
        "FirstName" => vec![required("First name is required"), min_length(1), max_length(50)],
        "LastName" => vec![required("Last name is required"), min_length(1), max_length(50)],
        "BirthCity" | "College" if !value.is_empty() => vec![max_length(50)],
        _ => Vec::new(),
    }
}

fn int_rules(field: &str, value: i64) -> Vec<Rule<i64>> {
    match field {
        "Team" => vec![int_range(0, 31)],
        "Position" => vec![int_range(0, 4)],
        "PositionGroup" => vec![non_negative()],
        "BirthMonth" if value != 0 => vec![month_range()],
        "BirthDay" if value != 0 => vec![day_range()],
        "BirthYear" if value != 0 => vec![year_range(1920, 2020)],
        "BirthCityID" | "CollegeID" if value != 0 => vec![non_negative()],
        "OffensiveStyle" => vec![int_range(0, 6)],
        "DefensiveStyle" => vec![int_range(0, 4)],
        // Units of $10,000.
        "PayScale" => vec![int_range(0, 9999)],
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

pub fn validate_coach(coach: &Coach) -> ValidationResult {
    let mut result = ValidationResult::new();
    result.merge(check_text("FirstName", &coach.first_name));
    result.merge(check_text("LastName", &coach.last_name));
    for (field, value) in [
        ("Team", coach.team),
        ("Position", coach.position),
        ("PositionGroup", coach.position_group),
        ("BirthMonth", coach.birth_month),
        ("BirthDay", coach.birth_day),
        ("BirthYear", coach.birth_year),
    ] {
        result.merge(check_int(field, value));
    }
    result.merge(check_text("BirthCity", &coach.birth_city));
    result.merge(check_int("BirthCityID", coach.birth_city_id));
    result.merge(check_text("College", &coach.college));
    for (field, value) in [
        ("CollegeID", coach.college_id),
        ("OffensiveStyle", coach.offensive_style),
        ("DefensiveStyle", coach.defensive_style),
        ("PayScale", coach.pay_scale),
    ] {
        result.merge(check_int(field, value));
    }
    result
}

pub fn validate_coach_field(field: &str, value: &FieldValue) -> ValidationResult {
    match value {
        FieldValue::Text(text) => validate_field(field, text.as_str(), &text_rules(field, text)),
        FieldValue::Int(number) => validate_field(field, number, &int_rules(field, *number)),
        FieldValue::Real(_) | FieldValue::Bool(_) => ValidationResult::new(),
    }
}
