use serde::Serialize;

/// Outcome of one dataset load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestReport {
    pub source: String,
    /// Non-blank data rows seen (header excluded).
    pub rows_read: usize,
    pub rows_accepted: usize,
    pub rejected: Vec<RejectedRow>,
}

impl IngestReport {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    pub fn rows_rejected(&self) -> usize {
        self.rejected.len()
    }

    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedRow {
    /// 1-based line where the row starts.
    pub line: usize,
    pub reason: String,
}
