//! Analytics module for studia
//!
//! Derived, read-only views over a session history:
//! - Streak calculation (current and longest consecutive-day runs)
//! - Windowed aggregation (totals, averages, per-topic and per-mood groupings)
//! - Dashboard bundle for presentation surfaces
//! - Target-hours recommendation strategies
//!
//! Every function here is a pure function of `(history, today)`. The caller
//! supplies `today` once per recomputation; nothing in this module reads the
//! wall clock, so results are deterministic and testable without mocking
//! time. The streak always consumes the unfiltered history; a streak spans
//! real calendar days regardless of the active display window.

pub mod dashboard;
pub mod recommend;
pub mod streak;
pub mod summary;
pub mod window;

pub use dashboard::{generate_dashboard, Badge, Dashboard};
pub use recommend::{TargetStrategy, TopicAverage};
pub use streak::{current_streak, longest_streak};
pub use summary::{summarize, AggregateView, DailyAverage};
pub use window::filter_window;
