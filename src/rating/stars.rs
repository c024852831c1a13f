use crate::domain::PlayerRatings;

const STAR_SCALE: f64 = 5.0;
const HALF_STEPS_PER_STAR: f64 = 2.0;
// The formula bottoms out at 0 for all-worst ranks; display floor is 1 star.
const MIN_STARS: f64 = 1.0;

/// Star rating in [1, 5], in half-star increments
///
/// Averages the three normalized rank feeds and scales onto the 5-star
/// range, rounding to the nearest half star.
pub fn calculate_star_rating(ratings: &PlayerRatings) -> f64 {
    let average = average_normalized(ratings);
    let stars = round_to_half_star(average * STAR_SCALE);
    stars.max(MIN_STARS)
}

fn average_normalized(ratings: &PlayerRatings) -> f64 {
    let sum = ratings.regional_rank.normalized()
        + ratings.position_rank.normalized()
        + ratings.country_rank.normalized();
    sum / 3.0
}

fn round_to_half_star(stars: f64) -> f64 {
    (stars * HALF_STEPS_PER_STAR).round() / HALF_STEPS_PER_STAR
}
