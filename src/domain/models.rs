use chrono::NaiveDate;

use crate::errors::StatsError;

/// Top grade of the standard scouting scale
pub const DEFAULT_MAX_GRADE: u32 = 100;

/// Ordinal rank where 1 is best and 100 is worst
///
/// Rank feeds (regional, position, country) all use this scale, so the
/// range check lives here instead of inside every formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrdinalRank(u32);

impl OrdinalRank {
    pub const WORST: u32 = 100;

    pub fn new(rank: u32) -> Result<Self, StatsError> {
        if rank < 1 || rank > Self::WORST {
            return Err(StatsError::RankOutOfRange {
                rank,
                worst: Self::WORST,
            });
        }
        Ok(Self(rank))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Map onto [0, 1): 0.0 for the worst rank, 0.99 for the best
    pub fn normalized(&self) -> f64 {
        (Self::WORST - self.0) as f64 / Self::WORST as f64
    }
}

/// Scout grade in [1, max_grade], higher is better
///
/// The grade carries its scale so `rank()` stays total once the value has
/// been validated at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoutGrade {
    value: u32,
    max_grade: u32,
}

impl ScoutGrade {
    /// Validate a grade on the standard 100-point scale
    pub fn new(value: u32) -> Result<Self, StatsError> {
        Self::with_max(value, DEFAULT_MAX_GRADE)
    }

    /// Validate a grade on a custom scale
    pub fn with_max(value: u32, max_grade: u32) -> Result<Self, StatsError> {
        if value < 1 || value > max_grade {
            return Err(StatsError::GradeOutOfRange {
                grade: value,
                max_grade,
            });
        }
        Ok(Self { value, max_grade })
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn max_grade(&self) -> u32 {
        self.max_grade
    }

    /// Ordinal rank implied by the grade: the top grade maps to rank 1
    pub fn rank(&self) -> u32 {
        self.max_grade - self.value + 1
    }
}

/// The three externally assigned rank feeds for a player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerRatings {
    pub regional_rank: OrdinalRank,
    pub position_rank: OrdinalRank,
    pub country_rank: OrdinalRank,
}

impl PlayerRatings {
    pub fn new(regional: u32, position: u32, country: u32) -> Result<Self, StatsError> {
        Ok(Self {
            regional_rank: OrdinalRank::new(regional)?,
            position_rank: OrdinalRank::new(position)?,
            country_rank: OrdinalRank::new(country)?,
        })
    }
}

/// Display band for a star rating
#[derive(Debug, Clone, PartialEq)]
pub enum ProspectTier {
    Developing, // < 2 stars
    Solid,      // 2 - 2.5 stars
    High,       // 3 - 3.5 stars
    Elite,      // 4+ stars
}

impl ProspectTier {
    pub fn from_stars(stars: f64) -> Self {
        if stars < 2.0 {
            ProspectTier::Developing
        } else if stars < 3.0 {
            ProspectTier::Solid
        } else if stars < 4.0 {
            ProspectTier::High
        } else {
            ProspectTier::Elite
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ProspectTier::Developing => "developing",
            ProspectTier::Solid => "solid",
            ProspectTier::High => "high",
            ProspectTier::Elite => "elite",
        }
    }
}

/// Validated player record, built from a raw roster entry at the boundary
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub position: String,
    pub height_inches: Option<u32>,
    pub birth_date: Option<NaiveDate>,
    pub grade: ScoutGrade,
    pub ratings: PlayerRatings,
}

impl Player {
    pub fn age_on(&self, date: NaiveDate) -> Option<u32> {
        self.birth_date.and_then(|born| date.years_since(born))
    }
}
