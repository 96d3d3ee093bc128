//! Dashboard bundle for presentation surfaces.
//!
//! One pure call assembles everything a summary screen renders: the
//! windowed aggregate view, current and longest streaks, and the weekly
//! productivity badge.

use crate::types::{StudySession, Window};
use chrono::NaiveDate;
use serde::Serialize;

use super::streak::{current_streak, longest_streak};
use super::summary::{summarize, AggregateView};
use super::window::filter_window;

/// Productivity badge derived from the trailing week's average hours/day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    /// Weekly average of 3+ hours/day
    OnFire,
    /// Weekly average of 2+ hours/day
    Consistent,
    /// Anything less
    CouldImprove,
}

impl Badge {
    /// Classify a weekly average (hours per studied day).
    pub fn from_weekly_average(avg_hours_per_day: f64) -> Self {
        if avg_hours_per_day >= 3.0 {
            Badge::OnFire
        } else if avg_hours_per_day >= 2.0 {
            Badge::Consistent
        } else {
            Badge::CouldImprove
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Badge::OnFire => "On Fire!",
            Badge::Consistent => "Consistent!",
            Badge::CouldImprove => "Could Improve",
        }
    }
}

/// Everything a dashboard render needs, for one window.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    /// The window the view was filtered to
    pub window: Window,
    /// Aggregates over the filtered history
    pub view: AggregateView,
    /// Consecutive-day streak ending today, over the unfiltered history
    pub current_streak: u32,
    /// Longest consecutive-day run anywhere in the history
    pub longest_streak: u32,
    /// Badge from the trailing week, regardless of the selected window
    pub badge: Badge,
}

/// Compute the dashboard for a window.
///
/// The streaks and the badge always consume the full history: a streak
/// spans real calendar days whatever the display filter, and the badge is
/// defined over the trailing week.
pub fn generate_dashboard(history: &[StudySession], window: Window, today: NaiveDate) -> Dashboard {
    let filtered = filter_window(history, window, today);
    let view = summarize(&filtered);

    let week_view = summarize(&filter_window(history, Window::Week, today));
    let badge = Badge::from_weekly_average(week_view.avg_hours_per_day);

    Dashboard {
        window,
        view,
        current_streak: current_streak(history, today),
        longest_streak: longest_streak(history),
        badge,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mood;
    use chrono::{Days, Utc};

    fn session(date: NaiveDate, hours: f64) -> StudySession {
        StudySession {
            id: 0,
            date,
            topic: "Math".to_string(),
            hours,
            mood: Some(Mood::Happy),
            target_hours: 2.0,
            logged_at: Utc::now(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    #[test]
    fn test_badge_thresholds() {
        assert_eq!(Badge::from_weekly_average(3.5), Badge::OnFire);
        assert_eq!(Badge::from_weekly_average(3.0), Badge::OnFire);
        assert_eq!(Badge::from_weekly_average(2.0), Badge::Consistent);
        assert_eq!(Badge::from_weekly_average(1.9), Badge::CouldImprove);
        assert_eq!(Badge::from_weekly_average(0.0), Badge::CouldImprove);
    }

    #[test]
    fn test_streak_ignores_display_window() {
        // Streak days lie outside the Today window but must still count
        let history = vec![
            session(today(), 1.0),
            session(today() - Days::new(1), 1.0),
            session(today() - Days::new(2), 1.0),
        ];

        let dashboard = generate_dashboard(&history, Window::Today, today());
        assert_eq!(dashboard.view.session_count, 1);
        assert_eq!(dashboard.current_streak, 3);
        assert_eq!(dashboard.longest_streak, 3);
    }

    #[test]
    fn test_badge_from_trailing_week_not_selected_window() {
        // Heavy studying last week only; Today window is empty
        let history = vec![
            session(today() - Days::new(1), 4.0),
            session(today() - Days::new(2), 4.0),
        ];

        let dashboard = generate_dashboard(&history, Window::Today, today());
        assert_eq!(dashboard.view.session_count, 0);
        assert_eq!(dashboard.badge, Badge::OnFire);
    }

    #[test]
    fn test_empty_history_dashboard_is_placeholder_state() {
        let dashboard = generate_dashboard(&[], Window::All, today());
        assert_eq!(dashboard.view.session_count, 0);
        assert_eq!(dashboard.current_streak, 0);
        assert_eq!(dashboard.longest_streak, 0);
        assert_eq!(dashboard.badge, Badge::CouldImprove);
    }
}
