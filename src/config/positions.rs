/// Basketball position abbreviation table
///
/// This is the closed set of position names the scouting platform emits.
/// Anything outside the table is rendered as-is, so adding a new position
/// only requires a new row here.
#[derive(Debug, Clone)]
pub struct PositionConfig {
    pub full_name: &'static str,
    pub abbreviation: &'static str,
}

impl PositionConfig {
    pub fn new(full_name: &'static str, abbreviation: &'static str) -> Self {
        Self {
            full_name,
            abbreviation,
        }
    }
}

/// Get the list of recognized positions and their standard abbreviations
pub fn get_positions() -> Vec<PositionConfig> {
    vec![
        PositionConfig::new("Point Guard", "PG"),
        PositionConfig::new("Shooting Guard", "SG"),
        PositionConfig::new("Small Forward", "SF"),
        PositionConfig::new("Power Forward", "PF"),
        PositionConfig::new("Center", "C"),
        PositionConfig::new("Forward", "F"),
        PositionConfig::new("Guard", "G"),
    ]
}
