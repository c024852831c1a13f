use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Player, PlayerRatings, ScoutGrade};
use crate::errors::StatsError;

const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Roster export file from the scouting platform
#[derive(Debug, Deserialize, Serialize)]
pub struct RosterFile {
    pub players: Vec<RosterEntry>,
}

/// Raw roster entry as exported by the scouting platform
///
/// Numbers arrive unvalidated; `to_player` is the single place they are
/// checked before any derived statistic is computed.
#[derive(Debug, Deserialize, Serialize)]
pub struct RosterEntry {
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(rename = "scoutGrade")]
    pub scout_grade: u32,
    #[serde(rename = "regionalRank")]
    pub regional_rank: u32,
    #[serde(rename = "positionRank")]
    pub position_rank: u32,
    #[serde(rename = "countryRank")]
    pub country_rank: u32,
    #[serde(rename = "heightInches", default)]
    pub height_inches: Option<u32>,
    #[serde(rename = "birthDate", default)]
    pub birth_date: Option<String>,
    // Loosely typed upstream; rounded for display only
    #[serde(rename = "weightLbs", default)]
    pub weight_lbs: serde_json::Value,
}

impl RosterEntry {
    pub fn position_name(&self) -> String {
        self.position
            .clone()
            .unwrap_or_else(|| "Unknown".to_string())
    }

    pub fn parsed_birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s, BIRTH_DATE_FORMAT).ok())
    }

    /// Validate the raw numbers into a domain player
    pub fn to_player(&self, max_grade: u32) -> Result<Player, StatsError> {
        Ok(Player {
            name: self.name.clone(),
            position: self.position_name(),
            height_inches: self.height_inches,
            birth_date: self.parsed_birth_date(),
            grade: ScoutGrade::with_max(self.scout_grade, max_grade)?,
            ratings: PlayerRatings::new(
                self.regional_rank,
                self.position_rank,
                self.country_rank,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> RosterEntry {
        serde_json::from_str(
            r#"{
                "name": "Jan Kowalski",
                "position": "Point Guard",
                "scoutGrade": 88,
                "regionalRank": 3,
                "positionRank": 7,
                "countryRank": 12,
                "heightInches": 75,
                "birthDate": "2007-03-02",
                "weightLbs": "182.6"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_deserializes_camel_case_export() {
        let entry = sample_entry();

        assert_eq!(entry.name, "Jan Kowalski");
        assert_eq!(entry.scout_grade, 88);
        assert_eq!(entry.height_inches, Some(75));
        assert_eq!(
            entry.parsed_birth_date(),
            NaiveDate::from_ymd_opt(2007, 3, 2)
        );
    }

    #[test]
    fn test_missing_optionals_get_defaults() {
        let entry: RosterEntry = serde_json::from_str(
            r#"{
                "name": "Unknown Prospect",
                "scoutGrade": 40,
                "regionalRank": 80,
                "positionRank": 90,
                "countryRank": 95
            }"#,
        )
        .unwrap();

        assert_eq!(entry.position_name(), "Unknown");
        assert_eq!(entry.parsed_birth_date(), None);
        assert!(entry.weight_lbs.is_null());
    }

    #[test]
    fn test_to_player_validates_at_the_boundary() {
        let entry = sample_entry();
        let player = entry.to_player(100).unwrap();

        assert_eq!(player.grade.value(), 88);
        assert_eq!(player.ratings.regional_rank.get(), 3);

        let mut bad = sample_entry();
        bad.regional_rank = 0;
        assert!(bad.to_player(100).is_err());

        let bad_grade = sample_entry();
        assert!(bad_grade.to_player(50).is_err());
    }
}
