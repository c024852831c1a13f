pub mod rank;
pub mod stars;

pub use rank::{calculate_default_rank, calculate_rank};
pub use stars::calculate_star_rating;
