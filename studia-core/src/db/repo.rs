//! Database repository layer
//!
//! Provides query and insert operations for the session store. Reads return
//! the history in insertion order so downstream computations see the same
//! ordering the input surfaces appended.

use crate::error::Result;
use crate::types::{Mood, NewSession, StudySession};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, Row};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

/// Database handle (single connection behind a mutex)
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open or create a database at the given path
    pub fn open(path: &PathBuf) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;

        // WAL mode keeps readers consistent while a single writer appends
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run migrations on this database
    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        super::schema::run_migrations(&conn)
    }

    // ============================================
    // Session operations
    // ============================================

    /// Append a session, returning its rowid.
    ///
    /// Numeric fields are sanitized (negative/non-finite coerced to 0)
    /// before storage; the store never rejects a data-quality problem.
    pub fn insert_session(&self, session: &NewSession) -> Result<i64> {
        let session = session.clone().sanitized();
        let conn = self.conn.lock().unwrap();
        conn.execute(
            r#"
            INSERT INTO sessions (date, topic, hours, mood, target_hours, logged_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                session.date.format("%Y-%m-%d").to_string(),
                session.topic,
                session.hours,
                session.mood.map(|m| m.as_str()),
                session.target_hours,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Append many sessions in one transaction, returning the inserted count.
    pub fn insert_sessions(&self, sessions: &[NewSession]) -> Result<usize> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;
        let logged_at = Utc::now().to_rfc3339();
        {
            let mut stmt = tx.prepare(
                r#"
                INSERT INTO sessions (date, topic, hours, mood, target_hours, logged_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
            )?;
            for session in sessions {
                let session = session.clone().sanitized();
                stmt.execute(params![
                    session.date.format("%Y-%m-%d").to_string(),
                    session.topic,
                    session.hours,
                    session.mood.map(|m| m.as_str()),
                    session.target_hours,
                    logged_at,
                ])?;
            }
        }
        tx.commit()?;
        Ok(sessions.len())
    }

    /// Load the complete history in insertion order.
    ///
    /// Analytics always consume a full, fresh snapshot; filtering happens
    /// in memory afterwards.
    pub fn load_history(&self) -> Result<Vec<StudySession>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, date, topic, hours, mood, target_hours, logged_at
             FROM sessions ORDER BY id",
        )?;
        let sessions = stmt
            .query_map([], Self::row_to_session)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(sessions)
    }

    /// Total number of stored sessions.
    pub fn session_count(&self) -> Result<i64> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM sessions", [], |r| r.get(0))?;
        Ok(count)
    }

    /// Distinct non-empty topics, alphabetical.
    pub fn distinct_topics(&self) -> Result<Vec<String>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT DISTINCT topic FROM sessions WHERE TRIM(topic) != '' ORDER BY topic",
        )?;
        let topics = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(topics)
    }

    fn row_to_session(row: &Row) -> rusqlite::Result<StudySession> {
        let date_str: String = row.get("date")?;
        let mood_str: Option<String> = row.get("mood")?;
        let logged_at_str: String = row.get("logged_at")?;

        Ok(StudySession {
            id: row.get("id")?,
            date: NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    1,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?,
            topic: row.get("topic")?,
            hours: row.get("hours")?,
            // Unknown mood strings are treated as absent, not as failures
            mood: mood_str.and_then(|s| Mood::from_str(&s).ok()),
            target_hours: row.get("target_hours")?,
            logged_at: DateTime::parse_from_rfc3339(&logged_at_str)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn new_session(date: &str, topic: &str, hours: f64) -> NewSession {
        NewSession {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            topic: topic.to_string(),
            hours,
            mood: Some(Mood::Happy),
            target_hours: 2.0,
        }
    }

    fn test_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.migrate().unwrap();
        db
    }

    #[test]
    fn test_insert_and_load_preserves_insertion_order() {
        let db = test_db();
        db.insert_session(&new_session("2026-03-02", "Physics", 3.0))
            .unwrap();
        db.insert_session(&new_session("2026-03-01", "Math", 2.0))
            .unwrap();

        let history = db.load_history().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].topic, "Physics");
        assert_eq!(history[1].topic, "Math");
        assert_eq!(
            history[1].date,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
        );
        assert_eq!(history[0].mood, Some(Mood::Happy));
    }

    #[test]
    fn test_insert_sanitizes_negative_hours() {
        let db = test_db();
        db.insert_session(&new_session("2026-03-01", "Math", -4.0))
            .unwrap();

        let history = db.load_history().unwrap();
        assert_eq!(history[0].hours, 0.0);
    }

    #[test]
    fn test_batch_insert_and_count() {
        let db = test_db();
        let sessions = vec![
            new_session("2026-03-01", "Math", 1.0),
            new_session("2026-03-01", "Math", 2.0),
            new_session("2026-03-02", "History", 1.5),
        ];
        let inserted = db.insert_sessions(&sessions).unwrap();
        assert_eq!(inserted, 3);
        assert_eq!(db.session_count().unwrap(), 3);
    }

    #[test]
    fn test_distinct_topics_sorted() {
        let db = test_db();
        db.insert_session(&new_session("2026-03-01", "Physics", 1.0))
            .unwrap();
        db.insert_session(&new_session("2026-03-02", "Math", 1.0))
            .unwrap();
        db.insert_session(&new_session("2026-03-03", "Math", 1.0))
            .unwrap();

        assert_eq!(db.distinct_topics().unwrap(), vec!["Math", "Physics"]);
    }

    #[test]
    fn test_unknown_mood_string_reads_as_none() {
        let db = test_db();
        db.insert_session(&new_session("2026-03-01", "Math", 1.0))
            .unwrap();
        {
            let conn = db.conn.lock().unwrap();
            conn.execute("UPDATE sessions SET mood = 'grumpy'", [])
                .unwrap();
        }

        let history = db.load_history().unwrap();
        assert_eq!(history[0].mood, None);
    }
}
