use serde::{Deserialize, Serialize};

use crate::define_record;

define_record! {
    /// A rostered player, one row of `<league>_players.csv`.
    ///
    /// Skill attributes use `-1` in game files to request auto-generation;
    /// the editor leaves them untouched.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Player as "player" {
        player_id: i32 => "PLAYERID",
        last_name: String => "LASTNAME",
        first_name: String => "FIRSTNAME",

        team: i32 => "TEAM",
        position_key: i32 => "POSITION_KEY",
        uniform: i32 => "UNIFORM",

        /// Inches.
        height: i32 => "HEIGHT",
        /// Pounds.
        weight: i32 => "WEIGHT",
        hand_size: i32 => "HANDSIZE",
        arm_length: i32 => "ARMLENGTH",

        birth_month: i32 => "BIRTHMONTH",
        birth_day: i32 => "BIRTHDAY",
        birth_year: i32 => "BIRTHYEAR",
        /// Editor-only text; the game reads `CITYID`.
        birth_city: String => "BIRTHCITY",
        birth_city_id: i32 => "CITYID",
        /// Editor-only text; the game reads `COLLEGEID`.
        college: String => "COLLEGE",
        college_id: i32 => "COLLEGEID",

        year_entry: i32 => "YEARENTRY",
        round_drafted: i32 => "ROUNDDRAFTED",
        selection_drafted: i32 => "SELECTIONDRAFTED",
        supplemental: i32 => "SUPPLEMENTAL",
        original_team: i32 => "ORIGINALTEAM",

        experience: i32 => "EXPERIENCE",
        year_signed: i32 => "YEARSIGNED",
        play_percentage: i32 => "PLAYPERCENTAGE",
        hall_of_fame_points: i32 => "HALLOFFAMEPOINTS",

        salary_years: i32 => "SALARYYEARS",
        salary_year1: i32 => "SALARYYEAR1",
        bonus_year1: i32 => "BONUSYEAR1",
        salary_year2: i32 => "SALARYYEAR2",
        bonus_year2: i32 => "BONUSYEAR2",
        salary_year3: i32 => "SALARYYEAR3",
        bonus_year3: i32 => "BONUSYEAR3",
        salary_year4: i32 => "SALARYYEAR4",
        bonus_year4: i32 => "BONUSYEAR4",
        salary_year5: i32 => "SALARYYEAR5",
        bonus_year5: i32 => "BONUSYEAR5",

        overall_rating: i32 => "OVERALLRATING",

        skill_speed: i32 => "SKILL_SPEED",
        skill_power: i32 => "SKILL_POWER",
        hole_recognition: i32 => "HOLE_RECOGNITION",
        elusiveness: i32 => "ELUSIVENESS",
        blitz_pickup: i32 => "BLITZ_PICKUP",
        catch_hands: i32 => "CATCH_HANDS",
        adjust_to_ball: i32 => "ADJUST_TO_BALL",
        route_running: i32 => "ROUTE_RUNNING",
        catch_in_traffic: i32 => "CATCH_IN_TRAFFIC",
        defeat_blockers: i32 => "DEFEAT_BLOCKERS",
        secure_handling: i32 => "SECURE_HANDLING",
        run_block_technique: i32 => "RUN_BLOCK_TECHNIQUE",
        pass_block_technique: i32 => "PASS_BLOCK_TECHNIQUE",
        blocking_strength: i32 => "BLOCKING_STRENGTH",
        scheme_acquisition: i32 => "SCHEME_ACQUISITION",
        punt_distance: i32 => "PUNT_DISTANCE",
        punt_hang_time: i32 => "PUNT_HANG_TIME",
        punt_directional: i32 => "PUNT_DIRECTIONAL",
        kickoff_hang_time: i32 => "KICKOFF_HANG_TIME",
        field_goal_accuracy: i32 => "FIELD_GOAL_ACCURACY",
        field_goal_distance: i32 => "FIELD_GOAL_DISTANCE",
        run_defense: i32 => "RUN_DEFENSE",
        pass_rush_technique: i32 => "PASS_RUSH_TECHNIQUE",
        pass_rush_strength: i32 => "PASS_RUSH_STRENGTH",
        pass_defense_man: i32 => "PASS_DEFENSE_MAN",
        pass_defense_physical: i32 => "PASS_DEFENSE_PHYSICAL",
        pass_defense_zone: i32 => "PASS_DEFENSE_ZONE",
        pass_defense_hands: i32 => "PASS_DEFENSE_HANDS",
        defensive_diagnosis: i32 => "DEFENSIVE_DIAGNOSIS",
        special_teams: i32 => "SPECIAL_TEAMS",
        punt_returns: i32 => "PUNT_RETURNS",
        kick_returns: i32 => "KICK_RETURNS",
        long_snapping: i32 => "LONG_SNAPPING",
        kick_holding: i32 => "KICK_HOLDING",
        endurance: i32 => "ENDURANCE",

        /// Determines the draft class.
        base_year: i32 => "BASE_YEAR",
    }
}

impl Player {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
