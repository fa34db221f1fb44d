//! Column mapping from the export to [`ProjectRecord`].

use budgetlens_core::errors::IngestError;
use budgetlens_core::models::{PriorityArea, ProjectRecord, ProjectStatus};

pub const COL_TITLE: &str = "Titre de l'opération";
pub const COL_BUDGET: &str = "Budget global du projet lauréat";
pub const COL_YEAR: &str = "Edition";
pub const COL_POSTAL_CODE: &str = "Arrondissement de l'opération";
pub const COL_STATUS: &str = "Avancement de l'opération";
pub const COL_PRIORITY: &str = "Opération en Quartier Populaire";
pub const COL_CATEGORY: &str = "Thématique";

/// Positions of the required columns in the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetColumns {
    title: usize,
    budget: usize,
    year: usize,
    postal_code: usize,
    status: usize,
    priority: usize,
    category: usize,
}

impl DatasetColumns {
    pub fn resolve(header: &[String]) -> Result<Self, IngestError> {
        let find = |name: &str| {
            header
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| IngestError::MissingColumn {
                    column: name.to_string(),
                })
        };
        Ok(Self {
            title: find(COL_TITLE)?,
            budget: find(COL_BUDGET)?,
            year: find(COL_YEAR)?,
            postal_code: find(COL_POSTAL_CODE)?,
            status: find(COL_STATUS)?,
            priority: find(COL_PRIORITY)?,
            category: find(COL_CATEGORY)?,
        })
    }

    /// Build a record from one data row, or say why the row is rejected.
    pub fn to_record(&self, fields: &[String]) -> Result<ProjectRecord, String> {
        let cell = |idx: usize| fields.get(idx).map(|s| s.trim()).unwrap_or("");

        let title = cell(self.title);
        if title.is_empty() {
            return Err("missing title".to_string());
        }
        let category = cell(self.category);
        if category.is_empty() {
            return Err("missing category".to_string());
        }
        let year = parse_year(cell(self.year))
            .ok_or_else(|| format!("invalid edition year {:?}", cell(self.year)))?;
        let budget = parse_budget(cell(self.budget))
            .ok_or_else(|| format!("invalid budget {:?}", cell(self.budget)))?;

        Ok(ProjectRecord {
            title: title.to_string(),
            budget,
            year,
            postal_code: cell(self.postal_code).to_string(),
            status: ProjectStatus::from_progress_text(cell(self.status)),
            priority_area: PriorityArea::from_flag_text(cell(self.priority)),
            category: category.to_string(),
        })
    }
}

/// Parse an amount such as `"1 250 000 €"` or `"12500,50"`, rounded to the unit.
pub fn parse_budget(raw: &str) -> Option<u64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '€')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    let value: f64 = cleaned.parse().ok()?;
    if !value.is_finite() || value < 0.0 || value >= u64::MAX as f64 {
        return None;
    }
    Some(value.round() as u64)
}

/// Parse an edition year, tolerating a float rendering like `"2019.0"`.
pub fn parse_year(raw: &str) -> Option<i32> {
    if let Ok(year) = raw.parse::<i32>() {
        return Some(year);
    }
    let value: f64 = raw.parse().ok()?;
    if value.fract() == 0.0 && value.is_finite() && value.abs() <= i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}
