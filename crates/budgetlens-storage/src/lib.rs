//! # budgetlens-storage
//!
//! Record Store backends for the prediction engine: a SQLite store with a
//! serialized writer and a round-robin read pool, an in-memory store, and
//! ingestion of the participatory-budget CSV export.

pub mod connection;
pub mod ingest;
pub mod migrations;
pub mod queries;
pub mod store;

pub use connection::DatabaseManager;
pub use ingest::{IngestReport, RejectedRow};
pub use store::{InMemoryRecordStore, SqliteRecordStore};
