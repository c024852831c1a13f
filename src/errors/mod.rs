use thiserror::Error;

/// Validation failures raised when raw scouting numbers cross into the domain
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("scout grade {grade} is outside [1, {max_grade}]")]
    GradeOutOfRange { grade: u32, max_grade: u32 },

    #[error("ordinal rank {rank} is outside [1, {worst}]")]
    RankOutOfRange { rank: u32, worst: u32 },
}

/// Add context to roster load errors
pub fn load_context(path: &std::path::Path) -> String {
    format!("Failed to read roster file: {}", path.display())
}

/// Add context to roster parse errors
pub fn parse_context(path: &std::path::Path) -> String {
    format!("Failed to parse roster file: {}", path.display())
}
