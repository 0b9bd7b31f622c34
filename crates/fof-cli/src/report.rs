//! Validation report over a whole project.

use fof_map::FIRST_DATA_ROW;
use fof_model::{Coach, LeagueInfo, Player, Team};
use fof_validate::{
    ValidationResult, validate_coach, validate_league_info, validate_player, validate_team,
};
use serde::Serialize;

/// One failed rule, located by record kind and CSV row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub record: &'static str,
    pub row: usize,
    pub name: String,
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub league: String,
    pub players: usize,
    pub coaches: usize,
    pub teams: usize,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new(league: impl Into<String>) -> Self {
        Self {
            league: league.into(),
            ..Self::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn add_players(&mut self, players: &[Player]) {
        self.players = players.len();
        for (index, player) in players.iter().enumerate() {
            self.push("player", index, player.display_name(), validate_player(player));
        }
    }

    pub fn add_coaches(&mut self, coaches: &[Coach]) {
        self.coaches = coaches.len();
        for (index, coach) in coaches.iter().enumerate() {
            self.push("coach", index, coach.display_name(), validate_coach(coach));
        }
    }

    pub fn add_teams(&mut self, teams: &[Team]) {
        self.teams = teams.len();
        for (index, team) in teams.iter().enumerate() {
            self.push("team", index, team.display_name(), validate_team(team));
        }
    }

    pub fn add_league_info(&mut self, rows: &[LeagueInfo]) {
        for (index, info) in rows.iter().enumerate() {
            self.push(
                "league info",
                index,
                info.schedule_id.clone(),
                validate_league_info(info),
            );
        }
    }

    fn push(&mut self, record: &'static str, index: usize, name: String, result: ValidationResult) {
        let row = index + FIRST_DATA_ROW;
        self.violations.extend(result.into_iter().map(|error| Violation {
            record,
            row,
            name: name.trim().to_string(),
            field: error.field,
            message: error.message,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violations_point_at_csv_rows() {
        let valid = Team {
            year: 2024,
            team_name: "Dallas".into(),
            nick_name: "Cowboys".into(),
            abbreviation: "DAL".into(),
            capacity: 80_000,
            condition: 9,
            ..Team::default()
        };
        let crowded = Team {
            attendance: 90_000,
            ..valid.clone()
        };

        let mut report = ValidationReport::new("Test");
        report.add_teams(&[valid, crowded]);

        assert_eq!(report.teams, 2);
        assert_eq!(
            report.violations,
            vec![Violation {
                record: "team",
                row: 3,
                name: "Dallas Cowboys".into(),
                field: "Attendance".into(),
                message: "cannot exceed stadium capacity".into(),
            }]
        );
        assert!(!report.is_valid());
    }

    #[test]
    fn blank_names_are_trimmed() {
        let mut report = ValidationReport::new("Test");
        report.add_coaches(&[Coach::default()]);
        assert!(report.violations.iter().all(|violation| violation.name.is_empty()));
    }
}
