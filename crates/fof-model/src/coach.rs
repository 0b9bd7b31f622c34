use std::fmt;

use serde::{Deserialize, Serialize};

use crate::define_record;

/// Staff role stored in the coach `POSITION` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoachPosition {
    HeadCoach,
    OffensiveCoordinator,
    DefensiveCoordinator,
    SpecialTeamsCoordinator,
    StrengthConditioning,
}

impl CoachPosition {
    pub const ALL: [CoachPosition; 5] = [
        CoachPosition::HeadCoach,
        CoachPosition::OffensiveCoordinator,
        CoachPosition::DefensiveCoordinator,
        CoachPosition::SpecialTeamsCoordinator,
        CoachPosition::StrengthConditioning,
    ];

    pub fn from_id(id: i32) -> Option<Self> {
        usize::try_from(id)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn id(&self) -> i32 {
        match self {
            CoachPosition::HeadCoach => 0,
            CoachPosition::OffensiveCoordinator => 1,
            CoachPosition::DefensiveCoordinator => 2,
            CoachPosition::SpecialTeamsCoordinator => 3,
            CoachPosition::StrengthConditioning => 4,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|position| position.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            CoachPosition::HeadCoach => "Head Coach",
            CoachPosition::OffensiveCoordinator => "Offensive Coordinator",
            CoachPosition::DefensiveCoordinator => "Defensive Coordinator",
            CoachPosition::SpecialTeamsCoordinator => "Special Teams Coordinator",
            CoachPosition::StrengthConditioning => "Strength & Conditioning",
        }
    }
}

impl fmt::Display for CoachPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

define_record! {
    /// A coaching staff member, one row of `<league>_coaches.csv`.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Coach as "coach" {
        last_name: String => "LASTNAME",
        first_name: String => "FIRSTNAME",

        birth_month: i32 => "BIRTHMONTH",
        birth_day: i32 => "BIRTHDAY",
        birth_year: i32 => "BIRTHYEAR",
        birth_city: String => "BIRTHCITY",
        birth_city_id: i32 => "CITYID",
        college: String => "COLLEGE",
        college_id: i32 => "COLLEGEID",

        team: i32 => "TEAM",
        /// See [`CoachPosition`].
        position: i32 => "POSITION",
        position_group: i32 => "POSITIONGROUP",

        /// 0-6.
        offensive_style: i32 => "OFFENSIVESTYLE",
        /// 0-4.
        defensive_style: i32 => "DEFENSIVESTYLE",

        /// Units of $10,000.
        pay_scale: i32 => "PAYSCALE",
    }
}

impl Coach {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn position_name(&self) -> &'static str {
        CoachPosition::from_id(self.position).map_or("Unknown", |position| position.name())
    }
}
