use serde::{Deserialize, Serialize};

use crate::define_record;

/// An 8-bit RGB colour built from a team's colour columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    fn from_components(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn channel(value: i32) -> u8 {
    u8::try_from(value.clamp(0, 255)).unwrap_or(u8::MAX)
}

define_record! {
    /// A franchise, one row of `team_info.csv`.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Team as "team" {
        year: i32 => "YEAR",
        team_id: i32 => "TEAMID",
        team_name: String => "TEAMNAME",
        nick_name: String => "NICKNAME",
        abbreviation: String => "ABBREVIATION",

        conference: i32 => "CONFERENCE",
        division: i32 => "DIVISION",
        /// References `cities.csv`.
        city: i32 => "CITY",

        primary_red: i32 => "PRIMARYRED",
        primary_green: i32 => "PRIMARYGREEN",
        primary_blue: i32 => "PRIMARYBLUE",
        secondary_red: i32 => "SECONDARYRED",
        secondary_green: i32 => "SECONDARYGREEN",
        secondary_blue: i32 => "SECONDARYBLUE",

        /// 0=outdoor, 1=dome, 2=retractable.
        roof: i32 => "ROOF",
        /// 0=grass, 1=artificial, 2=hybrid.
        turf: i32 => "TURF",
        built: i32 => "BUILT",
        capacity: i32 => "CAPACITY",
        luxury: i32 => "LUXURY",
        /// 1-10.
        condition: i32 => "CONDITION",

        attendance: i32 => "ATTENDANCE",
        support: i32 => "SUPPORT",

        /// Non-zero when a new stadium is planned.
        plan: i32 => "PLAN",
        completed: i32 => "COMPLETED",
        future: i32 => "FUTURE",
        future_name: String => "FUTURENAME",
        future_abbr: String => "FUTUREABBR",
        future_roof: i32 => "FUTUREROOF",
        future_turf: i32 => "FUTURETURF",
        future_cap: i32 => "FUTURECAP",
        future_luxury: i32 => "FUTURELUXURY",
        team_contribution: i32 => "TEAMCONTRIBUTION",
    }
}

impl Team {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.team_name, self.nick_name)
    }

    pub fn primary_color(&self) -> Rgb {
        Rgb::from_components(self.primary_red, self.primary_green, self.primary_blue)
    }

    pub fn secondary_color(&self) -> Rgb {
        Rgb::from_components(self.secondary_red, self.secondary_green, self.secondary_blue)
    }
}
