use serde::{Deserialize, Serialize};

use crate::define_record;

define_record! {
    /// League-wide settings, the single row of `<league>_info.csv`.
    ///
    /// Salary figures are in units of $10,000; the cap is in units of
    /// $100,000.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LeagueInfo as "league info" {
        /// `teams_divisions_games`, e.g. `32_8_17`.
        schedule_id: String => "SCHEDULEID",
        base_year: i32 => "BASE_YEAR",
        salary_cap: i32 => "SALARYCAP",

        minimum: i32 => "MINIMUM",
        salary1: i32 => "SALARY1",
        salary2: i32 => "SALARY2",
        salary3: i32 => "SALARY3",
        salary45: i32 => "SALARY45",
        salary789: i32 => "SALARY789",
        salary10: i32 => "SALARY10",
    }
}

impl LeagueInfo {
    /// League settings the game ships with: 32 teams, 8 divisions, 17 games.
    pub fn with_defaults(base_year: i32) -> Self {
        Self {
            schedule_id: "32_8_17".to_string(),
            base_year,
            salary_cap: 2000,
            minimum: 70,
            salary1: 85,
            salary2: 100,
            salary3: 115,
            salary45: 130,
            salary789: 150,
            salary10: 180,
        }
    }

    /// Minimum salary for a player with the given years of experience.
    ///
    /// The game file has no bucket for six years, so that case (and any
    /// negative value) falls back to the rookie minimum.
    pub fn salary_minimum(&self, experience: i32) -> i32 {
        match experience {
            0 => self.minimum,
            1 => self.salary1,
            2 => self.salary2,
            3 => self.salary3,
            4..=5 => self.salary45,
            7..=9 => self.salary789,
            10.. => self.salary10,
            _ => self.minimum,
        }
    }

    pub fn has_valid_schedule_id(&self) -> bool {
        self.schedule_id.split('_').count() == 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_minimum_buckets() {
        let info = LeagueInfo::with_defaults(2024);
        assert_eq!(info.salary_minimum(0), 70);
        assert_eq!(info.salary_minimum(1), 85);
        assert_eq!(info.salary_minimum(2), 100);
        assert_eq!(info.salary_minimum(3), 115);
        assert_eq!(info.salary_minimum(4), 130);
        assert_eq!(info.salary_minimum(5), 130);
        assert_eq!(info.salary_minimum(7), 150);
        assert_eq!(info.salary_minimum(9), 150);
        assert_eq!(info.salary_minimum(10), 180);
        assert_eq!(info.salary_minimum(25), 180);
    }

    #[test]
    fn six_years_uses_rookie_minimum() {
        let info = LeagueInfo::with_defaults(2024);
        assert_eq!(info.salary_minimum(6), info.minimum);
        assert_eq!(info.salary_minimum(-3), info.minimum);
    }

    #[test]
    fn schedule_id_needs_three_parts() {
        let mut info = LeagueInfo::with_defaults(2024);
        assert!(info.has_valid_schedule_id());
        info.schedule_id = "32_8".to_string();
        assert!(!info.has_valid_schedule_id());
        info.schedule_id = "32_8_17_1".to_string();
        assert!(!info.has_valid_schedule_id());
    }
}
