use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use colored::{ColoredString, Colorize};
use log::info;
use std::path::Path;

use crate::config::settings::AppConfig;
use crate::domain::{Player, ProspectTier};
use crate::format::figures::round_figure_value;
use crate::format::height::format_height;
use crate::format::position::PositionAbbreviator;
use crate::rating::stars::calculate_star_rating;
use crate::roster::{self, RosterEntry};

/// Builds and prints a scouting report for a roster export
pub struct ReportService {
    config: AppConfig,
    abbreviator: PositionAbbreviator,
}

#[derive(Debug)]
struct ReportRow {
    rank: u32,
    name: String,
    position: String,
    height: String,
    weight: String,
    age: String,
    grade: u32,
    stars: f64,
    tier: ProspectTier,
}

impl ReportService {
    pub fn new(config: AppConfig) -> Result<Self> {
        Ok(Self {
            abbreviator: PositionAbbreviator::new()?,
            config,
        })
    }

    pub fn run(&self, input: &Path) -> Result<()> {
        info!("=== Building Scouting Report ===");

        let roster = roster::load_roster(input)?;
        let mut rows = self.build_rows(&roster.players)?;

        // Best grade first
        rows.sort_by(|a, b| a.rank.cmp(&b.rank));

        self.print_table(&rows);
        info!("=== Report Complete ===");
        Ok(())
    }

    fn build_rows(&self, entries: &[RosterEntry]) -> Result<Vec<ReportRow>> {
        let today = Utc::now().date_naive();
        let mut rows = Vec::with_capacity(entries.len());

        for entry in entries {
            let player = entry
                .to_player(self.config.grades.max_grade)
                .with_context(|| format!("Invalid scouting data for {}", entry.name))?;
            rows.push(self.build_row(entry, &player, today));
        }

        Ok(rows)
    }

    fn build_row(&self, entry: &RosterEntry, player: &Player, today: NaiveDate) -> ReportRow {
        let stars = calculate_star_rating(&player.ratings);
        let missing = self.config.report.missing_value;

        ReportRow {
            rank: player.grade.rank(),
            name: player.name.clone(),
            position: self.abbreviator.abbreviate(&player.position),
            height: player
                .height_inches
                .map(format_height)
                .unwrap_or_else(|| missing.to_string()),
            weight: format_weight(&entry.weight_lbs, missing),
            age: player
                .age_on(today)
                .map(|a| a.to_string())
                .unwrap_or_else(|| missing.to_string()),
            grade: player.grade.value(),
            tier: ProspectTier::from_stars(stars),
            stars,
        }
    }

    fn print_table(&self, rows: &[ReportRow]) {
        println!(
            "{}",
            format!(
                "{:>4}  {:<24} {:>3}  {:>6}  {:>6}  {:>3}  {:>5}  {:>5}  {}",
                "RANK", "NAME", "POS", "HEIGHT", "WEIGHT", "AGE", "GRADE", "STARS", "TIER"
            )
            .bold()
        );

        for row in rows {
            println!(
                "{:>4}  {:<24} {:>3}  {:>6}  {:>6}  {:>3}  {:>5}  {:>5.1}  {}",
                row.rank,
                row.name,
                row.position,
                row.height,
                row.weight,
                row.age,
                row.grade,
                row.stars,
                colored_tier(&row.tier)
            );
        }
    }
}

fn format_weight(raw: &serde_json::Value, missing: &str) -> String {
    // The rounder maps garbage to 0; a 0 lb player is equally missing data
    match round_figure_value(raw) {
        0 => missing.to_string(),
        lbs => lbs.to_string(),
    }
}

fn colored_tier(tier: &ProspectTier) -> ColoredString {
    let label = tier.as_str();
    match tier {
        ProspectTier::Elite => label.green(),
        ProspectTier::High => label.cyan(),
        ProspectTier::Solid => label.yellow(),
        ProspectTier::Developing => label.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> RosterEntry {
        serde_json::from_str(
            r#"{
                "name": "Adam Nowak",
                "position": "  Small   Forward ",
                "scoutGrade": 92,
                "regionalRank": 5,
                "positionRank": 10,
                "countryRank": 15,
                "heightInches": 79,
                "birthDate": "2006-01-20",
                "weightLbs": 214.7
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_row_derivation() {
        let service = ReportService::new(AppConfig::new()).unwrap();
        let entry = sample_entry();
        let player = entry.to_player(100).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();

        let row = service.build_row(&entry, &player, today);

        assert_eq!(row.rank, 9);
        assert_eq!(row.position, "SF");
        assert_eq!(row.height, "6'7\"");
        assert_eq!(row.weight, "215");
        assert_eq!(row.age, "20");
        assert_eq!(row.grade, 92);
        // normalized: 0.95, 0.90, 0.85 -> avg 0.90 -> 4.5 stars
        assert_eq!(row.stars, 4.5);
        assert_eq!(row.tier, ProspectTier::Elite);
    }

    #[test]
    fn test_invalid_entry_names_the_player() {
        let service = ReportService::new(AppConfig::new()).unwrap();
        let mut entry = sample_entry();
        entry.country_rank = 500;

        let err = service.build_rows(&[entry]).unwrap_err();
        assert!(err.to_string().contains("Adam Nowak"));
    }
}
