//! Streak and activity rules for user progress.

use chrono::{DateTime, Utc};

use crate::types::UserProgress;

/// How an activity event affects the streak counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// Same day as the last activity.
    Unchanged,
    /// Exactly one day after the last activity.
    Extended,
    /// More than one day after the last activity.
    Reset,
}

/// Whole 24-hour periods elapsed between `last_active` and `now`.
///
/// Negative when `now` precedes `last_active`.
pub fn elapsed_days(last_active: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - last_active).num_days()
}

/// Classify an activity at `now` against the previous one.
pub fn streak_change(last_active: DateTime<Utc>, now: DateTime<Utc>) -> StreakChange {
    match elapsed_days(last_active, now) {
        1 => StreakChange::Extended,
        d if d > 1 => StreakChange::Reset,
        _ => StreakChange::Unchanged,
    }
}

/// Apply one learned word at `now` to an existing progress row.
pub fn record_activity(progress: &mut UserProgress, now: DateTime<Utc>) {
    progress.words_learned += 1;

    match streak_change(progress.last_active, now) {
        StreakChange::Extended => progress.streak_days += 1,
        StreakChange::Reset => progress.streak_days = 1,
        StreakChange::Unchanged => {}
    }

    progress.last_active = now;
}
