//! Search history ordering and aggregation.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

use crate::types::{DailyCount, Id, SearchHistoryEntry};

/// Maximum number of words returned as recent searches.
pub const RECENT_SEARCH_LIMIT: usize = 5;

/// Number of days covered by the words-over-time series.
pub const WORDS_OVER_TIME_DAYS: u32 = 7;

/// Word ids ordered most recent first, each appearing once at its latest
/// occurrence, truncated to `limit`.
///
/// Entries with equal timestamps are ordered by id, later insertions first.
pub fn recent_unique_word_ids<'a, I>(entries: I, limit: usize) -> Vec<Id>
where
    I: IntoIterator<Item = &'a SearchHistoryEntry>,
{
    let mut entries: Vec<&SearchHistoryEntry> = entries.into_iter().collect();
    entries.sort_by(|a, b| (b.timestamp, b.id).cmp(&(a.timestamp, a.id)));

    let mut seen = HashSet::new();
    entries
        .into_iter()
        .map(|e| e.word_id)
        .filter(|id| seen.insert(*id))
        .take(limit)
        .collect()
}

/// Search counts per day for the `days` days ending at `today`, oldest first.
///
/// Dates are labelled like "Oct 19".
pub fn words_over_time<'a, I>(entries: I, today: NaiveDate, days: u32) -> Vec<DailyCount>
where
    I: IntoIterator<Item = &'a SearchHistoryEntry>,
{
    let dates: Vec<NaiveDate> = (0..i64::from(days))
        .rev()
        .map(|offset| today - Duration::days(offset))
        .collect();
    let mut counts = vec![0u32; dates.len()];

    for entry in entries {
        let day = entry.timestamp.date_naive();
        if let Some(idx) = dates.iter().position(|d| *d == day) {
            counts[idx] += 1;
        }
    }

    dates
        .into_iter()
        .zip(counts)
        .map(|(date, count)| DailyCount {
            date: date.format("%b %-d").to_string(),
            count,
        })
        .collect()
}
