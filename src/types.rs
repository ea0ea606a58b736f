//! Shared primitive types, bounds, and rating helpers.

use chrono::Datelike;

/// Release year of a movie.
pub type Year = i32;
/// User or source rating on a 0-10 scale.
pub type Rating = f64;

/// Earliest accepted release year.
pub const MIN_YEAR: Year = 1888;
/// Lowest accepted rating.
pub const MIN_RATING: Rating = 0.0;
/// Highest accepted rating.
pub const MAX_RATING: Rating = 10.0;

/// Current calendar year in local time, the upper bound for release years.
pub fn current_year() -> Year {
    chrono::Local::now().year()
}

/// Rounds a rating to two decimal places, the precision kept in storage.
pub fn round_rating(rating: Rating) -> Rating {
    (rating * 100.0).round() / 100.0
}

/// True when `year` lies in `[MIN_YEAR, current_year]`.
pub fn year_in_range(year: Year, current_year: Year) -> bool {
    (MIN_YEAR..=current_year).contains(&year)
}

/// True when `rating` lies in `[MIN_RATING, MAX_RATING]`. NaN is never in range.
pub fn rating_in_range(rating: Rating) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}
