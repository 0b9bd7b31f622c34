//! Lookup tables used when presenting records: positions and teams.

use serde::Serialize;

use crate::Team;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PositionUnit {
    Offense,
    Defense,
    SpecialTeams,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub id: i32,
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub unit: PositionUnit,
}

const fn position(
    id: i32,
    name: &'static str,
    abbreviation: &'static str,
    unit: PositionUnit,
) -> Position {
    Position {
        id,
        name,
        abbreviation,
        unit,
    }
}

/// Player positions as numbered by the game's `POSITION_KEY` column.
pub const POSITIONS: [Position; 22] = [
    position(0, "Quarterback", "QB", PositionUnit::Offense),
    position(1, "Running Back", "RB", PositionUnit::Offense),
    position(2, "Fullback", "FB", PositionUnit::Offense),
    position(3, "Wide Receiver", "WR", PositionUnit::Offense),
    position(4, "Tight End", "TE", PositionUnit::Offense),
    position(5, "Left Tackle", "LT", PositionUnit::Offense),
    position(6, "Left Guard", "LG", PositionUnit::Offense),
    position(7, "Center", "C", PositionUnit::Offense),
    position(8, "Right Guard", "RG", PositionUnit::Offense),
    position(9, "Right Tackle", "RT", PositionUnit::Offense),
    position(10, "Left Defensive End", "LE", PositionUnit::Defense),
    position(11, "Right Defensive End", "RE", PositionUnit::Defense),
    position(12, "Defensive Tackle", "DT", PositionUnit::Defense),
    position(13, "Left Outside Linebacker", "LOLB", PositionUnit::Defense),
    position(14, "Middle Linebacker", "MLB", PositionUnit::Defense),
    position(15, "Right Outside Linebacker", "ROLB", PositionUnit::Defense),
    position(16, "Cornerback", "CB", PositionUnit::Defense),
    position(17, "Free Safety", "FS", PositionUnit::Defense),
    position(18, "Strong Safety", "SS", PositionUnit::Defense),
    position(19, "Kicker", "K", PositionUnit::SpecialTeams),
    position(20, "Punter", "P", PositionUnit::SpecialTeams),
    position(21, "Long Snapper", "LS", PositionUnit::SpecialTeams),
];

pub fn position_by_id(id: i32) -> Option<&'static Position> {
    POSITIONS.iter().find(|position| position.id == id)
}

pub fn position_name(id: i32) -> &'static str {
    position_by_id(id).map_or("Unknown", |position| position.name)
}

pub fn position_abbr(id: i32) -> &'static str {
    position_by_id(id).map_or("??", |position| position.abbreviation)
}

pub fn position_id_by_name(name: &str) -> Option<i32> {
    POSITIONS
        .iter()
        .find(|position| position.name == name)
        .map(|position| position.id)
}

/// Team lookups over the teams currently loaded in a project.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    teams: Vec<Team>,
}

impl ReferenceData {
    pub fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    pub fn team_options(&self) -> Vec<String> {
        self.teams.iter().map(Team::display_name).collect()
    }

    pub fn team_id_by_name(&self, display_name: &str) -> Option<i32> {
        self.teams
            .iter()
            .find(|team| team.display_name() == display_name)
            .map(|team| team.team_id)
    }

    pub fn team_name_by_id(&self, id: i32) -> String {
        self.teams
            .iter()
            .find(|team| team.team_id == id)
            .map_or_else(|| "Unknown Team".to_string(), Team::display_name)
    }
}
