//! Database layer for studia
//!
//! This module provides the storage layer using SQLite with:
//! - Schema migrations
//! - Repository pattern for queries
//!
//! The store is append-only from the analytics core's perspective: rows are
//! inserted by input surfaces and read back as a whole history per
//! recomputation; nothing in this crate edits or deletes a session.

pub mod repo;
pub mod schema;

pub use repo::Database;
