//! # studia-core
//!
//! Core library for studia - a personal study-habit tracker.
//!
//! This library provides:
//! - Domain types for study sessions, moods, and windows
//! - Database storage layer with SQLite
//! - CSV import/export for flat-file study logs
//! - Analytics: streaks, windowed aggregation, recommendations
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! Data flows through three layers:
//! - **Raw:** CSV study logs on disk (immutable inputs)
//! - **Canonical:** the normalized SQLite `sessions` table
//! - **Derived:** streaks, aggregate views, and recommendations, recomputed
//!   from a full in-memory snapshot on every invocation
//!
//! The derived layer is pure: every analytics function takes the history
//! and `today` as explicit inputs and touches neither the clock nor the
//! store, so a recomputation is deterministic for a given snapshot.
//!
//! ## Example
//!
//! ```rust,no_run
//! use studia_core::{generate_dashboard, Config, Database, Window};
//!
//! let db = Database::open(&Config::database_path()).expect("failed to open database");
//! db.migrate().expect("failed to run migrations");
//!
//! let history = db.load_history().expect("failed to load history");
//! let today = chrono::Local::now().date_naive();
//! let dashboard = generate_dashboard(&history, Window::Week, today);
//! println!("current streak: {} days", dashboard.current_streak);
//! ```

// Re-export commonly used items at the crate root
pub use analytics::{
    current_streak, filter_window, generate_dashboard, longest_streak, summarize, AggregateView,
    Badge, Dashboard, TargetStrategy, TopicAverage,
};
pub use config::Config;
pub use db::Database;
pub use error::{Error, Result};
pub use ingest::{discover_csv_files, export_csv, import_csv, ImportReport};
pub use types::*;

// Public modules
pub mod analytics;
pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod ingest;
pub mod logging;
pub mod types;
