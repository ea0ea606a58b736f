use std::cmp::Ordering;

use crate::movie::MovieRecord;

/// Highest rating first; equal ratings ordered by title ascending.
pub fn by_rating<'a, I>(records: I) -> Vec<&'a MovieRecord>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    sorted_desc(records, |a, b| a.rating.total_cmp(&b.rating))
}

/// Newest first; equal years ordered by title ascending.
pub fn by_year<'a, I>(records: I) -> Vec<&'a MovieRecord>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    sorted_desc(records, |a, b| a.year.cmp(&b.year))
}

fn sorted_desc<'a, I, F>(records: I, key: F) -> Vec<&'a MovieRecord>
where
    I: IntoIterator<Item = &'a MovieRecord>,
    F: Fn(&MovieRecord, &MovieRecord) -> Ordering,
{
    let mut out: Vec<&MovieRecord> = records.into_iter().collect();
    out.sort_by(|a, b| key(b, a).then_with(|| a.title.cmp(&b.title)));
    out
}
