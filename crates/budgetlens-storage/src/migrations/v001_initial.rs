//! v001: historical project records.
//!
//! `rowid` order is insertion order and is the "original record order"
//! every slice preserves.

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    budget INTEGER NOT NULL CHECK (budget >= 0),
    year INTEGER NOT NULL,
    postal_code TEXT NOT NULL,
    status TEXT NOT NULL CHECK (status IN ('abandoned', 'in_progress', 'completed')),
    priority_area TEXT NOT NULL CHECK (priority_area IN ('high', 'low')),
    category TEXT NOT NULL,
    category_key TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_projects_category_key ON projects(category_key, id);
"#;
