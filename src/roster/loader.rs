use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use super::models::RosterFile;
use crate::errors;

/// Load a roster export from disk
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<RosterFile> {
    let path = path.as_ref();

    let json = fs::read_to_string(path).with_context(|| errors::load_context(path))?;

    let roster: RosterFile =
        serde_json::from_str(&json).with_context(|| errors::parse_context(path))?;

    info!(
        "Loaded {} players from {}",
        roster.players.len(),
        path.display()
    );
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_roster("no/such/roster.json").unwrap_err();
        assert!(err.to_string().contains("no/such/roster.json"));
    }
}
