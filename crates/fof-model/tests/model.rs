//! Tests for fof-model record schemas and the project descriptor.

use std::collections::BTreeSet;

use fof_model::{
    Coach, FieldKind, FieldValue, LeagueInfo, ModelError, Player, ProjectDescriptor, Record, Team,
};

fn assert_unique_columns<R: Record>() {
    let columns = R::columns();
    let unique: BTreeSet<_> = columns.iter().collect();
    assert_eq!(unique.len(), columns.len(), "{} has duplicate columns", R::LABEL);
}

#[test]
fn schemas_have_unique_columns() {
    assert_unique_columns::<Player>();
    assert_unique_columns::<Coach>();
    assert_unique_columns::<Team>();
    assert_unique_columns::<LeagueInfo>();
}

#[test]
fn schema_sizes_match_game_files() {
    assert_eq!(Player::schema().len(), 74);
    assert_eq!(Coach::schema().len(), 15);
    assert_eq!(Team::schema().len(), 32);
    assert_eq!(LeagueInfo::schema().len(), 10);
}

#[test]
fn coach_schema_follows_declaration_order() {
    let columns = Coach::columns();
    assert_eq!(&columns[..3], &["LASTNAME", "FIRSTNAME", "BIRTHMONTH"]);
    assert_eq!(columns.last(), Some(&"PAYSCALE"));
}

#[test]
fn schema_kinds_follow_rust_types() {
    let last_name = Player::field_for_column("LASTNAME").unwrap();
    assert_eq!(last_name.name, "last_name");
    assert_eq!(last_name.kind, FieldKind::Text);
    let height = Player::field_for_column("HEIGHT").unwrap();
    assert_eq!(height.kind, FieldKind::Int);
    assert!(Player::field_for_column("NOPE").is_none());
}

#[test]
fn field_access_by_name() {
    let mut team = Team::default();
    team.set_field("capacity", FieldValue::Int(65000)).unwrap();
    team.set_field("team_name", FieldValue::from("Chicago")).unwrap();
    assert_eq!(team.capacity, 65000);
    assert_eq!(team.field("team_name"), Some(FieldValue::Text("Chicago".into())));
    assert_eq!(team.field("unknown"), None);
}

#[test]
fn set_field_rejects_unknown_and_mismatched() {
    let mut coach = Coach::default();
    let err = coach.set_field("salary", FieldValue::Int(1)).unwrap_err();
    assert_eq!(
        err,
        ModelError::UnknownField {
            record: "coach",
            field: "salary".into(),
        }
    );
    let err = coach.set_field("team", FieldValue::Bool(true)).unwrap_err();
    assert!(matches!(err, ModelError::TypeMismatch { .. }));
    assert_eq!(coach, Coach::default());
}

#[test]
fn display_names() {
    let player = Player {
        first_name: "Joe".into(),
        last_name: "Montana".into(),
        ..Player::default()
    };
    assert_eq!(player.display_name(), "Joe Montana");
    let team = Team {
        team_name: "San Francisco".into(),
        nick_name: "49ers".into(),
        ..Team::default()
    };
    assert_eq!(team.display_name(), "San Francisco 49ers");
}

#[test]
fn descriptor_serializes_with_camel_case_keys() {
    let mut project = ProjectDescriptor::new("Test League", "test", 2024);
    project
        .user_preferences
        .insert("theme".into(), serde_json::json!("dark"));
    let json = serde_json::to_value(&project).expect("serialize project");
    assert_eq!(json["leagueName"], "Test League");
    assert_eq!(json["baseYear"], 2024);
    assert_eq!(json["csvFiles"]["players"], "data/test_players.csv");
    assert_eq!(json["userPreferences"]["theme"], "dark");

    let round: ProjectDescriptor = serde_json::from_value(json).expect("deserialize project");
    assert_eq!(round, project);
}
