//! Aggregate statistics over a (usually window-filtered) history.

use crate::types::{Mood, StudySession};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-date means of hours and target hours.
///
/// A day with multiple sessions is represented once, averaged rather than
/// summed, so target-vs-actual comparisons stay per-session-scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyAverage {
    pub mean_hours: f64,
    pub mean_target: f64,
}

/// Derived, read-only projection of a filtered history.
///
/// Plain serializable data: chart and widget rendering happens elsewhere,
/// and every `Mood` variant is always present in `mood_counts` so a
/// fixed-order chart never has missing categories.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateView {
    /// Sum of hours over all rows
    pub total_hours: f64,
    /// `total_hours` / distinct qualifying dates, 0 when there are none
    pub avg_hours_per_day: f64,
    /// Row count, zero-hour rows included
    pub session_count: usize,
    /// Sum of hours grouped by trimmed non-empty topic
    pub topic_totals: BTreeMap<String, f64>,
    /// Row count per mood, every variant present
    pub mood_counts: BTreeMap<Mood, u32>,
    /// Per qualifying date: mean hours and mean target over that date's rows
    pub daily_averages: BTreeMap<NaiveDate, DailyAverage>,
}

impl AggregateView {
    /// Zero-valued view rendered as the empty/placeholder state.
    pub fn empty() -> Self {
        Self {
            total_hours: 0.0,
            avg_hours_per_day: 0.0,
            session_count: 0,
            topic_totals: BTreeMap::new(),
            mood_counts: Mood::ALL.iter().map(|m| (*m, 0)).collect(),
            daily_averages: BTreeMap::new(),
        }
    }
}

/// Summarize a filtered history.
///
/// Zero-hour rows count toward `session_count` and contribute harmlessly to
/// hour sums, but are excluded from the distinct-date denominator and the
/// daily averages so a coerced malformed row cannot drag averages down.
/// Empty input yields the zero-valued view, never an error.
pub fn summarize(history: &[StudySession]) -> AggregateView {
    let mut view = AggregateView::empty();
    view.session_count = history.len();

    // (sum of hours, sum of targets, row count) per qualifying date
    let mut per_day: BTreeMap<NaiveDate, (f64, f64, u32)> = BTreeMap::new();

    for session in history {
        view.total_hours += session.hours;

        if let Some(topic) = session.topic_key() {
            *view.topic_totals.entry(topic.to_string()).or_insert(0.0) += session.hours;
        }

        if let Some(mood) = session.mood {
            *view.mood_counts.entry(mood).or_insert(0) += 1;
        }

        if session.qualifies() {
            let entry = per_day.entry(session.date).or_insert((0.0, 0.0, 0));
            entry.0 += session.hours;
            entry.1 += session.target_hours;
            entry.2 += 1;
        }
    }

    // Division-by-zero guard: no qualifying dates means 0, not NaN
    if !per_day.is_empty() {
        view.avg_hours_per_day = view.total_hours / per_day.len() as f64;
    }

    view.daily_averages = per_day
        .into_iter()
        .map(|(date, (hours, target, n))| {
            (
                date,
                DailyAverage {
                    mean_hours: hours / n as f64,
                    mean_target: target / n as f64,
                },
            )
        })
        .collect();

    view
}
