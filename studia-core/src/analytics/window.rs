//! Date-window filtering applied before aggregation.

use crate::types::{StudySession, Window};
use chrono::{Datelike, Days, NaiveDate};

/// Filter a history down to the sessions a window admits.
///
/// All comparisons are at day granularity against the supplied `today`:
/// - `All` is the identity.
/// - `Today` keeps sessions dated exactly `today`.
/// - `Week` keeps `today - 7 days ..= today` (a session exactly 7 days old
///   is included).
/// - `Month` keeps sessions in the same calendar month and year as `today`.
///   This is a calendar boundary, not a rolling 30-day cutoff; the policy
///   is fixed here so every caller filters identically.
///
/// Insertion order is preserved.
pub fn filter_window(history: &[StudySession], window: Window, today: NaiveDate) -> Vec<StudySession> {
    history
        .iter()
        .filter(|s| admits(window, s.date, today))
        .cloned()
        .collect()
}

fn admits(window: Window, date: NaiveDate, today: NaiveDate) -> bool {
    match window {
        Window::All => true,
        Window::Today => date == today,
        Window::Week => {
            let cutoff = today - Days::new(7);
            date >= cutoff && date <= today
        }
        Window::Month => date.year() == today.year() && date.month() == today.month(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mood;
    use chrono::Utc;

    fn session(date: NaiveDate) -> StudySession {
        StudySession {
            id: 0,
            date,
            topic: "Math".to_string(),
            hours: 1.0,
            mood: Some(Mood::Neutral),
            target_hours: 0.0,
            logged_at: Utc::now(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    #[test]
    fn test_all_is_identity() {
        let history = vec![
            session(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()),
            session(today()),
            session(NaiveDate::from_ymd_opt(2030, 12, 31).unwrap()),
        ];
        let filtered = filter_window(&history, Window::All, today());
        assert_eq!(filtered.len(), history.len());
    }

    #[test]
    fn test_today_exact_match_only() {
        let history = vec![
            session(today()),
            session(today() - Days::new(1)),
        ];
        let filtered = filter_window(&history, Window::Today, today());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date, today());
    }

    #[test]
    fn test_week_boundary_inclusive() {
        let history = vec![
            session(today() - Days::new(7)),
            session(today() - Days::new(8)),
        ];
        let filtered = filter_window(&history, Window::Week, today());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date, today() - Days::new(7));
    }

    #[test]
    fn test_week_excludes_future_dates() {
        let history = vec![session(today() + Days::new(1)), session(today())];
        let filtered = filter_window(&history, Window::Week, today());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date, today());
    }

    #[test]
    fn test_month_is_calendar_not_rolling() {
        // Feb 28 is within 30 days of Mar 15 but in a different calendar month
        let history = vec![
            session(NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()),
            session(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()),
            session(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()),
        ];
        let filtered = filter_window(&history, Window::Month, today());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    }

    #[test]
    fn test_preserves_insertion_order() {
        let history = vec![
            session(today() - Days::new(2)),
            session(today()),
            session(today() - Days::new(1)),
        ];
        let filtered = filter_window(&history, Window::Week, today());
        let dates: Vec<_> = filtered.iter().map(|s| s.date).collect();
        assert_eq!(
            dates,
            vec![today() - Days::new(2), today(), today() - Days::new(1)]
        );
    }
}
