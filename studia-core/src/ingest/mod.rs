//! CSV import/export for study logs
//!
//! The flat-file format is the original `data/study_data.csv` shape:
//!
//! ```text
//! date,topic,hours,mood,target_hours
//! 2026-03-01,Math,2.50,happy,2.00
//! ```
//!
//! ## Design Principles
//!
//! 1. **Resilience**: a malformed line produces a warning and a best-effort
//!    row (or is skipped), never an `Err`; data-quality problems are not
//!    failures.
//! 2. **Coercion over rejection**: unparseable numeric fields become 0,
//!    unknown moods become absent; the row is retained either way.
//! 3. **Stable round-trips**: exports write hours and targets at 2 decimal
//!    places, and re-importing an export reproduces the same analytics.
//!
//! Fields are plain comma-separated with no quoting dialect; topics
//! therefore must not contain commas, which holds for the data this format
//! has ever carried.

use crate::error::{Error, Result};
use crate::format::round2;
use crate::types::{Mood, NewSession, StudySession};
use chrono::NaiveDate;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Column header written by [`export_csv`] and recognized by [`import_csv`].
pub const CSV_HEADER: &str = "date,topic,hours,mood,target_hours";

/// Result of importing a CSV study log.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Rows parsed (possibly with coerced fields)
    pub sessions: Vec<NewSession>,
    /// Non-fatal problems encountered, one entry per affected line
    pub warnings: Vec<String>,
}

impl ImportReport {
    /// Whether any line needed coercion or was skipped.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Import a CSV study log.
///
/// Only I/O failures return `Err`; every per-line problem is recorded as a
/// warning in the report.
pub fn import_csv(path: &Path) -> Result<ImportReport> {
    let content = std::fs::read_to_string(path)?;
    let mut report = ImportReport::default();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        // Header row may appear with any capitalization
        if idx == 0 && trimmed.to_ascii_lowercase().starts_with("date,") {
            continue;
        }

        match parse_line(trimmed, line_no, &mut report.warnings) {
            Some(session) => report.sessions.push(session),
            None => {
                tracing::warn!(line = line_no, "Skipping unparseable study-log line");
            }
        }
    }

    tracing::info!(
        path = %path.display(),
        rows = report.sessions.len(),
        warnings = report.warnings.len(),
        "Imported study log"
    );

    Ok(report)
}

/// Parse one data line; `None` means the line was skipped entirely.
fn parse_line(line: &str, line_no: usize, warnings: &mut Vec<String>) -> Option<NewSession> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();

    if fields.len() < 3 {
        warnings.push(format!(
            "line {}: expected at least date, topic, hours; got {} field(s)",
            line_no,
            fields.len()
        ));
        return None;
    }

    let date = match parse_date(fields[0]) {
        Some(d) => d,
        None => {
            warnings.push(format!("line {}: unparseable date '{}'", line_no, fields[0]));
            return None;
        }
    };

    let topic = fields[1].to_string();
    if topic.is_empty() {
        warnings.push(format!(
            "line {}: empty topic (row kept, excluded from topic totals)",
            line_no
        ));
    }

    let hours = match fields[2].parse::<f64>() {
        Ok(h) if h.is_finite() && h >= 0.0 => h,
        _ => {
            warnings.push(format!(
                "line {}: unparseable hours '{}' coerced to 0",
                line_no, fields[2]
            ));
            0.0
        }
    };

    let mood = match fields.get(3) {
        None | Some(&"") => None,
        Some(raw) => match Mood::from_str(raw) {
            Ok(m) => Some(m),
            Err(_) => {
                warnings.push(format!(
                    "line {}: unknown mood '{}' (row kept, excluded from mood counts)",
                    line_no, raw
                ));
                None
            }
        },
    };

    let target_hours = match fields.get(4) {
        None | Some(&"") => 0.0,
        Some(raw) => match raw.parse::<f64>() {
            Ok(t) if t.is_finite() && t >= 0.0 => t,
            _ => {
                warnings.push(format!(
                    "line {}: unparseable target hours '{}' coerced to 0",
                    line_no, raw
                ));
                0.0
            }
        },
    };

    Some(NewSession {
        date,
        topic,
        hours,
        mood,
        target_hours,
    })
}

/// Accept ISO dates first, then the slash format older exports used.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .ok()
}

/// Export a history to CSV with the 2-decimal rounding policy.
pub fn export_csv(path: &Path, history: &[StudySession]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{}", CSV_HEADER)?;
    for session in history {
        writeln!(
            file,
            "{},{},{:.2},{},{:.2}",
            session.date.format("%Y-%m-%d"),
            session.topic.trim(),
            round2(session.hours),
            session.mood.map(|m| m.as_str()).unwrap_or(""),
            round2(session.target_hours),
        )?;
    }

    tracing::info!(path = %path.display(), rows = history.len(), "Exported study log");
    Ok(())
}

/// Discover importable CSV files under a directory.
pub fn discover_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = dir.join("*.csv");
    let pattern_str = pattern.to_string_lossy();

    let entries = glob::glob(&pattern_str).map_err(|e| Error::Import {
        line: 0,
        message: format!("invalid glob pattern {}: {}", pattern_str, e),
    })?;

    let mut files: Vec<PathBuf> = entries.flatten().collect();
    files.sort();
    Ok(files)
}
