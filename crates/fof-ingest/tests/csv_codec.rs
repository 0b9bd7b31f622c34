//! File-level tests for the CSV codec.

use std::fs;

use fof_common::temp_path_for;
use fof_ingest::{
    IngestError, load_records, read_records, read_table, save_records, write_records,
};
use fof_model::{Coach, FlatRecord, Team};
use proptest::prelude::*;
use tempfile::tempdir;

#[test]
fn header_only_team_file_reads_back_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("teams.csv");

    write_records(&path, &["TEAMID", "TEAMNAME"], &[]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "TEAMID,TEAMNAME\n");
    let table = read_table(&path).unwrap();
    assert_eq!(table.headers, vec!["TEAMID", "TEAMNAME"]);
    assert!(table.is_empty());
    assert!(load_records::<Team>(&path).unwrap().is_empty());
}

#[test]
fn zero_byte_file_has_no_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, b"").unwrap();

    let table = read_table(&path).unwrap();
    assert!(table.headers.is_empty());
    assert!(table.records.is_empty());
}

#[test]
fn missing_file_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.csv");

    let err = read_records(&path).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { path: p } if p == path));
}

#[test]
fn trims_cells_and_strips_bom() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coaches.csv");
    fs::write(
        &path,
        "\u{feff}LASTNAME , FIRSTNAME,TEAM\r\n  Lombardi ,Vince, 12 \r\n",
    )
    .unwrap();

    let coaches: Vec<Coach> = load_records(&path).unwrap();
    assert_eq!(coaches.len(), 1);
    assert_eq!(coaches[0].last_name, "Lombardi");
    assert_eq!(coaches[0].first_name, "Vince");
    assert_eq!(coaches[0].team, 12);
}

#[test]
fn ragged_rows_are_padded_and_truncated() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ragged.csv");
    fs::write(&path, "A,B,C\n1\n1,2,3,4\n").unwrap();

    let records = read_records(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], FlatRecord::from([("A", "1"), ("B", ""), ("C", "")]));
    assert_eq!(records[1], FlatRecord::from([("A", "1"), ("B", "2"), ("C", "3")]));
}

#[test]
fn invalid_utf8_names_the_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, b"A,B\n1,2\n\xff\xfe,3\n").unwrap();

    let err = read_records(&path).unwrap_err();
    match err {
        IngestError::MalformedRow { line, .. } => assert_eq!(line, 3),
        other => panic!("expected malformed row, got {other:?}"),
    }
}

fn malformed_line(contents: &str) -> u64 {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coaches.csv");
    fs::write(&path, contents).unwrap();

    match read_records(&path).unwrap_err() {
        IngestError::MalformedRow { line, .. } => line,
        other => panic!("expected malformed row, got {other:?}"),
    }
}

#[test]
fn unterminated_quote_is_not_swallowed() {
    assert_eq!(malformed_line("LASTNAME,TEAM\nBrown,3\n\"Halas,4\nGrange,5\n"), 3);
}

#[test]
fn bare_quote_in_unquoted_field_is_rejected() {
    assert_eq!(malformed_line("LASTNAME,TEAM\nBr\"own,3\n"), 2);
    assert_eq!(malformed_line("LASTNAME,TEAM\nBrown,3\n\"Halas\"x,4\n"), 3);
}

#[test]
fn quoted_fields_may_span_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coaches.csv");
    fs::write(
        &path,
        "LASTNAME,COLLEGE\n\"Brown\",\"Miami,\nOhio\"\nHalas,\"\"\"Illinois\"\"\"\n",
    )
    .unwrap();

    let coaches: Vec<Coach> = load_records(&path).unwrap();
    assert_eq!(coaches.len(), 2);
    assert_eq!(coaches[0].college, "Miami,\nOhio");
    assert_eq!(coaches[1].college, "\"Illinois\"");
}

#[test]
fn quoted_field_after_leading_spaces() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coaches.csv");
    fs::write(&path, "LASTNAME, COLLEGE\nBrown,  \"Miami, Ohio\"\n").unwrap();

    let coaches: Vec<Coach> = load_records(&path).unwrap();
    assert_eq!(coaches.len(), 1);
    assert_eq!(coaches[0].college, "Miami, Ohio");
}

#[test]
fn decode_failures_carry_path_and_row() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coaches.csv");
    fs::write(&path, "LASTNAME,TEAM\nBrown,3\nHalas,bears\n").unwrap();

    let err = load_records::<Coach>(&path).unwrap_err();
    let message = err.to_string();
    assert!(matches!(err, IngestError::Decode { .. }));
    assert!(message.contains("coaches.csv"), "{message}");
    assert!(message.contains("row 3"), "{message}");
}

#[test]
fn empty_header_list_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let headers: [&str; 0] = [];

    let err = write_records(&path, &headers, &[]).unwrap_err();
    assert!(matches!(err, IngestError::EmptyHeaders { .. }));
    assert!(!path.exists());
}

#[test]
fn rewrite_leaves_no_temp_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("teams.csv");
    let teams = vec![Team {
        team_id: 3,
        team_name: "Chicago".into(),
        nick_name: "Bears".into(),
        capacity: 61500,
        ..Team::default()
    }];

    save_records(&path, &teams).unwrap();
    save_records(&path, &teams[..0]).unwrap();
    save_records(&path, &teams).unwrap();

    assert!(!temp_path_for(&path).exists());
    assert_eq!(load_records::<Team>(&path).unwrap(), teams);
}

#[test]
fn failed_write_keeps_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coaches.csv");
    fs::create_dir(&path).unwrap();
    fs::write(path.join("occupied"), b"x").unwrap();

    let err = save_records::<Coach>(&path, &[Coach::default()]).unwrap_err();
    assert!(matches!(err, IngestError::Write(_)));
    assert!(!temp_path_for(&path).exists());
    assert!(path.join("occupied").exists());
}

fn arb_text() -> impl Strategy<Value = String> {
    "([A-Za-z0-9,'\"]{1,8}( [A-Za-z0-9,'\"]{1,8})?)?"
}

prop_compose! {
    fn arb_coach()(
        names in (arb_text(), arb_text(), arb_text(), arb_text()),
        ids in prop::array::uniform8(any::<i32>()),
        styles in prop::array::uniform3(any::<i32>()),
    ) -> Coach {
        let (last_name, first_name, birth_city, college) = names;
        Coach {
            last_name,
            first_name,
            birth_month: ids[0],
            birth_day: ids[1],
            birth_year: ids[2],
            birth_city,
            birth_city_id: ids[3],
            college,
            college_id: ids[4],
            team: ids[5],
            position: ids[6],
            position_group: ids[7],
            offensive_style: styles[0],
            defensive_style: styles[1],
            pay_scale: styles[2],
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn coach_file_round_trip(coaches in prop::collection::vec(arb_coach(), 0..6)) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("coaches.csv");

        save_records(&path, &coaches).unwrap();
        let back: Vec<Coach> = load_records(&path).unwrap();

        prop_assert_eq!(back, coaches);
        prop_assert!(!temp_path_for(&path).exists());
    }
}
