use crate::{movie::MovieRecord, types::Rating};

/// Ratings overview of a non-empty snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSummary<'a> {
    pub count: usize,
    pub mean: Rating,
    pub median: Rating,
    pub best: Extremum<'a>,
    pub worst: Extremum<'a>,
}

/// Every record sharing the highest or lowest rating.
#[derive(Debug, Clone, PartialEq)]
pub struct Extremum<'a> {
    pub rating: Rating,
    pub movies: Vec<&'a MovieRecord>,
}

pub fn mean_rating(ratings: &[Rating]) -> Option<Rating> {
    if ratings.is_empty() {
        return None;
    }
    Some(ratings.iter().sum::<Rating>() / ratings.len() as Rating)
}

pub fn median_rating(ratings: &[Rating]) -> Option<Rating> {
    if ratings.is_empty() {
        return None;
    }
    let mut sorted = ratings.to_vec();
    sorted.sort_by(Rating::total_cmp);
    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[middle])
    } else {
        Some((sorted[middle - 1] + sorted[middle]) / 2.0)
    }
}

/// Best and worst sets. Ties are kept, in snapshot order.
pub fn extremes<'a, I>(records: I) -> Option<(Extremum<'a>, Extremum<'a>)>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    let records: Vec<&MovieRecord> = records.into_iter().collect();
    let max = records.iter().map(|r| r.rating).max_by(Rating::total_cmp)?;
    let min = records.iter().map(|r| r.rating).min_by(Rating::total_cmp)?;

    let best = Extremum {
        rating: max,
        movies: records.iter().copied().filter(|r| r.rating == max).collect(),
    };
    let worst = Extremum {
        rating: min,
        movies: records.iter().copied().filter(|r| r.rating == min).collect(),
    };
    Some((best, worst))
}

pub fn summarize<'a, I>(records: I) -> Option<RatingSummary<'a>>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    let records: Vec<&MovieRecord> = records.into_iter().collect();
    let ratings: Vec<Rating> = records.iter().map(|r| r.rating).collect();
    let mean = mean_rating(&ratings)?;
    let median = median_rating(&ratings)?;
    let (best, worst) = extremes(records.iter().copied())?;
    Some(RatingSummary {
        count: records.len(),
        mean,
        median,
        best,
        worst,
    })
}
