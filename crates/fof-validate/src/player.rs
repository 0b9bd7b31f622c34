//! Game constraints for player records.

use fof_model::{FieldValue, Player};

use crate::result::ValidationResult;
use crate::rules::{Rule, int_range, max_length, min_length, required, validate_field, year_range};

fn text_rules(field: &str, value: &str) -> Vec<Rule<str>> {
    match field {
        "FirstName" => vec![required("First name is required"), min_length(1), max_length(50)],
        "LastName" => vec![required("Last name is required"), min_length(1), max_length(50)],
        "College" if !value.is_empty() => vec![max_length(50)],
        _ => Vec::new(),
    }
}

fn int_rules(field: &str, value: i64) -> Vec<Rule<i64>> {
    match field {
        "Team" => vec![int_range(0, 31)],
        "Position" | "PositionKey" => vec![int_range(0, 21)],
        "Uniform" | "OverallRating" => vec![int_range(0, 99)],
        // Inches.
        "Height" => vec![int_range(60, 90)],
        "Weight" => vec![int_range(150, 400)],
        "HandSize" if value != 0 => vec![int_range(7, 12)],
        "ArmLength" if value != 0 => vec![int_range(28, 38)],
        "Experience" => vec![int_range(0, 25)],
        "YearEntry" if value != 0 => vec![year_range(1920, 2100)],
        // 0 = undrafted.
        "RoundDrafted" => vec![int_range(0, 7)],
        "SelectionDrafted" if value != 0 => vec![int_range(1, 300)],
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

pub fn validate_player(player: &Player) -> ValidationResult {
    let mut result = ValidationResult::new();
    result.merge(check_text("FirstName", &player.first_name));
    result.merge(check_text("LastName", &player.last_name));
    for (field, value) in [
        ("Team", player.team),
        ("Position", player.position_key),
        ("Uniform", player.uniform),
        ("OverallRating", player.overall_rating),
        ("Height", player.height),
        ("Weight", player.weight),
        ("HandSize", player.hand_size),
        ("ArmLength", player.arm_length),
        ("Experience", player.experience),
    ] {
        result.merge(check_int(field, value));
    }
    result.merge(check_text("College", &player.college));
    for (field, value) in [
        ("YearEntry", player.year_entry),
        ("RoundDrafted", player.round_drafted),
        ("SelectionDrafted", player.selection_drafted),
    ] {
        result.merge(check_int(field, value));
    }
    result
}

/// Check one edited value. Unknown fields and values of the wrong type are
/// not checked.
pub fn validate_player_field(field: &str, value: &FieldValue) -> ValidationResult {
    match value {
        FieldValue::Text(text) => validate_field(field, text.as_str(), &text_rules(field, text)),
        FieldValue::Int(number) => validate_field(field, number, &int_rules(field, *number)),
        FieldValue::Real(_) | FieldValue::Bool(_) => ValidationResult::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_player() -> Player {
        Player {
            first_name: "Walter".into(),
            last_name: "Payton".into(),
            team: 3,
            position_key: 1,
            uniform: 34,
            overall_rating: 90,
            height: 70,
            weight: 200,
            experience: 4,
            year_entry: 1975,
            round_drafted: 1,
            selection_drafted: 4,
            ..Player::default()
        }
    }

    #[test]
    fn valid_player_passes() {
        let result = validate_player(&valid_player());
        assert!(result.is_valid(), "{:?}", result.errors());
    }

    #[test]
    fn optional_zero_fields_are_skipped() {
        let player = Player {
            hand_size: 0,
            arm_length: 0,
            year_entry: 0,
            selection_drafted: 0,
            college: String::new(),
            ..valid_player()
        };
        assert!(validate_player(&player).is_valid());

        let player = Player {
            hand_size: 5,
            arm_length: 40,
            ..valid_player()
        };
        let result = validate_player(&player);
        assert_eq!(result.error("HandSize"), Some("must be between 7 and 12"));
        assert_eq!(result.error("ArmLength"), Some("must be between 28 and 38"));
    }

    #[test]
    fn blank_name_reports_each_rule() {
        let player = Player {
            first_name: "   ".into(),
            ..valid_player()
        };
        let result = validate_player(&player);
        let messages: Vec<_> = result
            .errors_for("FirstName")
            .map(|error| error.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec!["First name is required", "must be at least 1 characters"]
        );
    }

    #[test]
    fn field_check_matches_record_check() {
        let result = validate_player_field("Weight", &FieldValue::Int(120));
        assert_eq!(result.error("Weight"), Some("must be between 150 and 400"));
        let position = validate_player_field("PositionKey", &FieldValue::Int(22));
        assert!(position.has_error("PositionKey"));
        assert!(validate_player_field("HandSize", &FieldValue::Int(0)).is_valid());
        assert!(validate_player_field("Height", &FieldValue::Text("tall".into())).is_valid());
        assert!(validate_player_field("Nickname", &FieldValue::Int(-5)).is_valid());
    }
}
