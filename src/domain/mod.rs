pub mod models;

pub use models::{
    DEFAULT_MAX_GRADE, OrdinalRank, Player, PlayerRatings, ProspectTier, ScoutGrade,
};
