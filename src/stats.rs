use crate::clock::Clock;
use crate::models::{Note, Statistics};
use chrono::NaiveDate;
use std::collections::BTreeSet;

pub fn build_stats(clock: &impl Clock, notes: &[Note]) -> Statistics {
    let days = distinct_days(clock, notes);

    Statistics {
        total_notes: notes.len(),
        unique_days: days.len(),
        current_streak: current_streak(clock.today(), &days),
    }
}

/// Each note's `date` truncated to midnight in the clock's local zone.
pub fn distinct_days(clock: &impl Clock, notes: &[Note]) -> BTreeSet<NaiveDate> {
    notes.iter().map(|note| clock.local_day(&note.date)).collect()
}

/// Walks the distinct days newest first against `today - i`. A day up to
/// one day away from its expected slot still counts.
fn current_streak(today: NaiveDate, days: &BTreeSet<NaiveDate>) -> usize {
    let mut streak = 0;
    for (offset, day) in days.iter().rev().enumerate() {
        let Some(expected) = today.checked_sub_days(chrono::Days::new(offset as u64)) else {
            break;
        };
        if (*day - expected).num_days().abs() <= 1 {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}
