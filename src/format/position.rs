use anyhow::{Context, Result};
use regex::Regex;

use crate::config::positions::get_positions;

/// Maps full position names onto their standard abbreviations
///
/// Unknown positions pass through unchanged so a new or misspelled position
/// never breaks rendering.
pub struct PositionAbbreviator {
    whitespace_regex: Regex,
}

impl PositionAbbreviator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            whitespace_regex: Self::compile_regex()?,
        })
    }

    pub fn abbreviate(&self, position: &str) -> String {
        let normalized = self.normalize_whitespace(position);

        get_positions()
            .iter()
            .find(|p| p.full_name == normalized)
            .map(|p| p.abbreviation.to_string())
            .unwrap_or(normalized)
    }

    /// Trim and collapse inner whitespace runs to a single space
    fn normalize_whitespace(&self, input: &str) -> String {
        self.whitespace_regex
            .replace_all(input.trim(), " ")
            .into_owned()
    }

    fn compile_regex() -> Result<Regex> {
        Regex::new(r"\s+").context("Failed to compile whitespace regex")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abbreviator() -> PositionAbbreviator {
        PositionAbbreviator::new().unwrap()
    }

    #[test]
    fn test_known_positions() {
        let abbr = abbreviator();

        assert_eq!(abbr.abbreviate("Point Guard"), "PG");
        assert_eq!(abbr.abbreviate("Shooting Guard"), "SG");
        assert_eq!(abbr.abbreviate("Small Forward"), "SF");
        assert_eq!(abbr.abbreviate("Power Forward"), "PF");
        assert_eq!(abbr.abbreviate("Center"), "C");
        assert_eq!(abbr.abbreviate("Forward"), "F");
        assert_eq!(abbr.abbreviate("Guard"), "G");
    }

    #[test]
    fn test_whitespace_is_normalized_before_lookup() {
        let abbr = abbreviator();

        assert_eq!(abbr.abbreviate("  Point   Guard "), "PG");
        assert_eq!(abbr.abbreviate("Power\tForward"), "PF");
    }

    #[test]
    fn test_unknown_positions_pass_through() {
        let abbr = abbreviator();

        assert_eq!(abbr.abbreviate("Libero"), "Libero");
        assert_eq!(abbr.abbreviate("  Sixth   Man "), "Sixth Man");
    }
}
