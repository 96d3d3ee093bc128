//! Core domain types for studia
//!
//! These types represent the canonical study-log data model that normalizes
//! entries from all supported input surfaces (CLI form, CSV files).
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Session** | One logged study interval: date, topic, hours, mood, target |
//! | **History** | Insertion-ordered collection of Sessions, append-only |
//! | **Window** | A named date-range filter applied before aggregation |
//! | **Streak** | Consecutive calendar days, ending today, with a qualifying session |
//!
//! Dates are compared at day granularity only. Any time-of-day captured by
//! an input surface is discarded before a session reaches this model; the
//! `logged_at` timestamp records insertion time and never participates in
//! streak or window comparisons.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// Mood
// ============================================

/// How the session felt. Fixed enumeration so mood charts always render
/// the same categories in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Neutral,
    Tired,
    Sleepy,
    Frustrated,
    Excited,
}

impl Mood {
    /// All variants in canonical chart order.
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Neutral,
        Mood::Tired,
        Mood::Sleepy,
        Mood::Frustrated,
        Mood::Excited,
    ];

    /// Returns the identifier used in database and CSV storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Tired => "tired",
            Mood::Sleepy => "sleepy",
            Mood::Frustrated => "frustrated",
            Mood::Excited => "excited",
        }
    }

    /// Returns the display name for this mood
    pub fn display_name(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Tired => "Tired",
            Mood::Sleepy => "Sleepy",
            Mood::Frustrated => "Frustrated",
            Mood::Excited => "Excited",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "neutral" => Ok(Mood::Neutral),
            "tired" => Ok(Mood::Tired),
            "sleepy" => Ok(Mood::Sleepy),
            "frustrated" => Ok(Mood::Frustrated),
            "excited" => Ok(Mood::Excited),
            _ => Err(format!("unknown mood: {}", s)),
        }
    }
}

// ============================================
// Window
// ============================================

/// Named date-range filter applied before aggregation.
///
/// A closed enumeration: an invalid window is unrepresentable, so the
/// aggregator never has to handle one at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Window {
    /// No filtering
    #[default]
    All,
    /// Sessions dated exactly today
    Today,
    /// Sessions dated within the last 7 days (inclusive boundary)
    Week,
    /// Sessions within the same calendar month and year as today
    Month,
}

impl Window {
    pub fn as_str(&self) -> &'static str {
        match self {
            Window::All => "all",
            Window::Today => "today",
            Window::Week => "week",
            Window::Month => "month",
        }
    }

    /// Returns the display name for this window
    pub fn display_name(&self) -> &'static str {
        match self {
            Window::All => "All Time",
            Window::Today => "Today",
            Window::Week => "This Week",
            Window::Month => "This Month",
        }
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Window {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Window::All),
            "today" => Ok(Window::Today),
            "week" => Ok(Window::Week),
            "month" => Ok(Window::Month),
            _ => Err(format!("unknown window: {}", s)),
        }
    }
}

// ============================================
// Sessions
// ============================================

/// One logged study interval.
///
/// `hours` and `target_hours` are non-negative; malformed input is coerced
/// to 0 at the ingest boundary rather than rejected. A session with
/// `hours == 0` still counts toward session totals but never qualifies for
/// streaks or hour-based averages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySession {
    /// Database ID (rowid, auto-incremented)
    pub id: i64,
    /// Calendar day of the session (no time component)
    pub date: NaiveDate,
    /// What was studied
    pub topic: String,
    /// Hours studied
    pub hours: f64,
    /// How it felt (absent rows are excluded from mood counts only)
    pub mood: Option<Mood>,
    /// Daily goal in hours, 0 when none was set
    pub target_hours: f64,
    /// When this row was appended to the store
    pub logged_at: DateTime<Utc>,
}

impl StudySession {
    /// Whether this session counts toward streaks and hour-based averages.
    pub fn qualifies(&self) -> bool {
        self.hours > 0.0
    }

    /// Topic trimmed for grouping, `None` when empty.
    pub fn topic_key(&self) -> Option<&str> {
        let trimmed = self.topic.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

/// A session as captured by an input surface, before it has a rowid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSession {
    pub date: NaiveDate,
    pub topic: String,
    pub hours: f64,
    pub mood: Option<Mood>,
    pub target_hours: f64,
}

impl NewSession {
    /// Clamp numeric fields to the non-negative range the model requires.
    pub fn sanitized(mut self) -> Self {
        if !self.hours.is_finite() || self.hours < 0.0 {
            self.hours = 0.0;
        }
        if !self.target_hours.is_finite() || self.target_hours < 0.0 {
            self.target_hours = 0.0;
        }
        self.topic = self.topic.trim().to_string();
        self
    }
}
