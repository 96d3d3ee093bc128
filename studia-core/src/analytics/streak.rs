//! Consecutive-day streak calculation.
//!
//! A day counts toward a streak when it has at least one session with
//! `hours > 0`. Zero-hour and malformed entries never extend a streak.

use crate::types::StudySession;
use chrono::{Days, NaiveDate};
use std::collections::BTreeSet;

/// Distinct qualifying dates, oldest first.
///
/// Deduplication happens here, before any walk: multiple sessions on one
/// date collapse to a single day.
fn qualifying_dates(history: &[StudySession]) -> BTreeSet<NaiveDate> {
    history
        .iter()
        .filter(|s| s.qualifies())
        .map(|s| s.date)
        .collect()
}

/// Current consecutive-day streak ending at `today`.
///
/// Walks distinct qualifying dates backward from `today` with an
/// expected-offset counter: the i-th most recent date must be exactly
/// `today - i` days. The first gap terminates the walk. Dates after
/// `today` are discarded first, so a future-dated row can neither extend
/// the streak nor mask an entry logged today.
pub fn current_streak(history: &[StudySession], today: NaiveDate) -> u32 {
    let dates = qualifying_dates(history);

    let mut streak = 0u32;
    for date in dates.iter().rev().filter(|d| **d <= today) {
        let expected = today - Days::new(streak as u64);
        if *date == expected {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// Longest consecutive-day run anywhere in the history.
pub fn longest_streak(history: &[StudySession]) -> u32 {
    let dates = qualifying_dates(history);

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for date in dates {
        run = match prev {
            Some(p) if p + Days::new(1) == date => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(date);
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Mood, StudySession};
    use chrono::Utc;

    fn session(date: NaiveDate, hours: f64) -> StudySession {
        StudySession {
            id: 0,
            date,
            topic: "Math".to_string(),
            hours,
            mood: Some(Mood::Neutral),
            target_hours: 0.0,
            logged_at: Utc::now(),
        }
    }

    fn day(offset: i64) -> NaiveDate {
        today() - chrono::Duration::days(offset)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    #[test]
    fn test_empty_history_is_zero() {
        assert_eq!(current_streak(&[], today()), 0);
        assert_eq!(longest_streak(&[]), 0);
    }

    #[test]
    fn test_three_consecutive_days() {
        let history = vec![session(day(0), 1.0), session(day(1), 2.0), session(day(2), 1.5)];
        assert_eq!(current_streak(&history, today()), 3);
    }

    #[test]
    fn test_gap_terminates_streak() {
        // Sessions at T, T-1, T-2 and another at T-4: the gap at T-3 caps it at 3
        let history = vec![
            session(day(0), 1.0),
            session(day(1), 2.0),
            session(day(2), 1.5),
            session(day(4), 3.0),
        ];
        assert_eq!(current_streak(&history, today()), 3);
    }

    #[test]
    fn test_no_session_today_means_zero() {
        let history = vec![session(day(1), 1.0), session(day(2), 2.0)];
        assert_eq!(current_streak(&history, today()), 0);
    }

    #[test]
    fn test_duplicate_dates_collapse() {
        let history = vec![
            session(day(0), 1.0),
            session(day(0), 2.0),
            session(day(1), 1.0),
        ];
        assert_eq!(current_streak(&history, today()), 2);

        // Adding another session on an already-counted date changes nothing
        let mut more = history.clone();
        more.push(session(day(1), 4.0));
        assert_eq!(current_streak(&more, today()), 2);
    }

    #[test]
    fn test_zero_hour_sessions_do_not_count() {
        let history = vec![session(day(0), 0.0), session(day(1), 2.0)];
        // Today's entry has no hours, so the streak cannot reach back to T-1
        assert_eq!(current_streak(&history, today()), 0);
    }

    #[test]
    fn test_future_dates_do_not_inflate_or_break() {
        // A lone future-dated row yields no streak
        let history = vec![session(day(-3), 2.0)];
        assert_eq!(current_streak(&history, today()), 0);

        // A future-dated row alongside entries for today and yesterday is ignored
        let history = vec![session(day(-3), 2.0), session(day(0), 1.0), session(day(1), 1.0)];
        assert_eq!(current_streak(&history, today()), 2);
    }

    #[test]
    fn test_streak_bounded_by_distinct_qualifying_dates() {
        let history = vec![
            session(day(0), 1.0),
            session(day(0), 1.0),
            session(day(1), 1.0),
            session(day(5), 1.0),
        ];
        let streak = current_streak(&history, today());
        assert!(streak <= 3);
        assert_eq!(streak, 2);
    }

    #[test]
    fn test_longest_streak_mid_history() {
        let history = vec![
            session(day(0), 1.0),
            session(day(5), 1.0),
            session(day(6), 1.0),
            session(day(7), 1.0),
            session(day(8), 1.0),
            session(day(10), 1.0),
        ];
        assert_eq!(longest_streak(&history), 4);
        assert_eq!(current_streak(&history, today()), 1);
    }
}
