//! Queries for the projects table.

use budgetlens_core::errors::StorageError;
use budgetlens_core::models::{normalize_category, PriorityArea, ProjectRecord, ProjectStatus};
use rusqlite::{params, Connection, Row};

use crate::connection::sqlite_err;

const SELECT_COLUMNS: &str =
    "SELECT id, title, budget, year, postal_code, status, priority_area, category FROM projects";

/// Insert records in one transaction, preserving their order. Returns rows inserted.
pub fn insert_batch(conn: &Connection, records: &[ProjectRecord]) -> Result<usize, StorageError> {
    let tx = conn.unchecked_transaction().map_err(sqlite_err)?;
    {
        let mut stmt = tx
            .prepare_cached(
                "INSERT INTO projects
                    (title, budget, year, postal_code, status, priority_area, category, category_key)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )
            .map_err(sqlite_err)?;
        for record in records {
            let budget = i64::try_from(record.budget).map_err(|_| StorageError::SqliteError {
                message: format!("budget {} exceeds storable range", record.budget),
            })?;
            stmt.execute(params![
                record.title,
                budget,
                record.year,
                record.postal_code,
                record.status.as_str(),
                record.priority_area.as_str(),
                record.category,
                normalize_category(&record.category),
            ])
            .map_err(sqlite_err)?;
        }
    }
    tx.commit().map_err(sqlite_err)?;
    Ok(records.len())
}

/// Records of one category in insertion order.
pub fn query_by_category(
    conn: &Connection,
    category: &str,
) -> Result<Vec<ProjectRecord>, StorageError> {
    let sql = format!("{SELECT_COLUMNS} WHERE category_key = ?1 ORDER BY id");
    let mut stmt = conn.prepare_cached(&sql).map_err(sqlite_err)?;
    let rows = stmt
        .query_map(params![normalize_category(category)], raw_row)
        .map_err(sqlite_err)?;
    collect_records(rows)
}

/// Every record in insertion order.
pub fn query_all(conn: &Connection) -> Result<Vec<ProjectRecord>, StorageError> {
    let sql = format!("{SELECT_COLUMNS} ORDER BY id");
    let mut stmt = conn.prepare_cached(&sql).map_err(sqlite_err)?;
    let rows = stmt.query_map([], raw_row).map_err(sqlite_err)?;
    collect_records(rows)
}

/// `(label, count)` per stored label, in order of first appearance.
pub fn category_counts(conn: &Connection) -> Result<Vec<(String, u64)>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT category, COUNT(*) FROM projects GROUP BY category ORDER BY MIN(id)",
        )
        .map_err(sqlite_err)?;
    let rows = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })
        .map_err(sqlite_err)?;
    rows.map(|r| r.map(|(label, n)| (label, n.max(0) as u64)).map_err(sqlite_err))
        .collect()
}

pub fn count(conn: &Connection) -> Result<u64, StorageError> {
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM projects", [], |row| row.get(0))
        .map_err(sqlite_err)?;
    Ok(n.max(0) as u64)
}

/// Delete every record. Returns rows deleted.
pub fn delete_all(conn: &Connection) -> Result<usize, StorageError> {
    conn.execute("DELETE FROM projects", []).map_err(sqlite_err)
}

struct RawRow {
    id: i64,
    title: String,
    budget: i64,
    year: i32,
    postal_code: String,
    status: String,
    priority_area: String,
    category: String,
}

fn raw_row(row: &Row<'_>) -> rusqlite::Result<RawRow> {
    Ok(RawRow {
        id: row.get(0)?,
        title: row.get(1)?,
        budget: row.get(2)?,
        year: row.get(3)?,
        postal_code: row.get(4)?,
        status: row.get(5)?,
        priority_area: row.get(6)?,
        category: row.get(7)?,
    })
}

fn collect_records(
    rows: impl Iterator<Item = rusqlite::Result<RawRow>>,
) -> Result<Vec<ProjectRecord>, StorageError> {
    rows.map(|r| r.map_err(sqlite_err).and_then(into_record))
        .collect()
}

fn into_record(raw: RawRow) -> Result<ProjectRecord, StorageError> {
    let status = ProjectStatus::from_str_opt(&raw.status).ok_or_else(|| {
        StorageError::CorruptRecord {
            rowid: raw.id,
            message: format!("unknown status {:?}", raw.status),
        }
    })?;
    let priority_area = PriorityArea::from_str_opt(&raw.priority_area).ok_or_else(|| {
        StorageError::CorruptRecord {
            rowid: raw.id,
            message: format!("unknown priority area {:?}", raw.priority_area),
        }
    })?;
    let budget = u64::try_from(raw.budget).map_err(|_| StorageError::CorruptRecord {
        rowid: raw.id,
        message: format!("negative budget {}", raw.budget),
    })?;
    Ok(ProjectRecord {
        title: raw.title,
        budget,
        year: raw.year,
        postal_code: raw.postal_code,
        status,
        priority_area,
        category: raw.category,
    })
}
