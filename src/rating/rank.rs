use crate::domain::{DEFAULT_MAX_GRADE, ScoutGrade};
use crate::errors::StatsError;

/// Convert a scout grade into an ordinal rank, 1 being best
///
/// Fails when the grade falls outside [1, max_grade]; no clamping or
/// coercion is attempted.
pub fn calculate_rank(scout_grade: u32, max_grade: u32) -> Result<u32, StatsError> {
    let grade = ScoutGrade::with_max(scout_grade, max_grade)?;
    Ok(grade.rank())
}

/// Rank on the standard 100-point scouting scale
pub fn calculate_default_rank(scout_grade: u32) -> Result<u32, StatsError> {
    calculate_rank(scout_grade, DEFAULT_MAX_GRADE)
}
