//! Historical project records, immutable once ingested.

use serde::{Deserialize, Serialize};

/// Progress status of a historical project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectStatus {
    Abandoned,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [Self::Abandoned, Self::InProgress, Self::Completed];

    /// Stable storage label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abandoned => "abandoned",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Parse a stored label back into a status.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "abandoned" => Some(Self::Abandoned),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Map free-text progress wording from the source dataset.
    ///
    /// `ABANDONN…` wins over `FIN`; anything else, including an empty cell,
    /// counts as in progress.
    pub fn from_progress_text(text: &str) -> Self {
        let upper = text.trim().to_uppercase();
        if upper.contains("ABANDONN") {
            Self::Abandoned
        } else if upper.contains("FIN") {
            Self::Completed
        } else {
            Self::InProgress
        }
    }
}

/// Whether the project sits in a priority neighbourhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriorityArea {
    High,
    Low,
}

impl PriorityArea {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "high" => Some(Self::High),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    /// `Oui` (case-insensitive) marks a priority neighbourhood.
    pub fn from_flag_text(text: &str) -> Self {
        if text.trim().to_lowercase().starts_with("oui") {
            Self::High
        } else {
            Self::Low
        }
    }
}

/// A historical participatory-budget project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub title: String,
    /// Budget in whole currency units.
    pub budget: u64,
    pub year: i32,
    pub postal_code: String,
    pub status: ProjectStatus,
    pub priority_area: PriorityArea,
    pub category: String,
}

impl ProjectRecord {
    /// True when this record belongs to `category` (trimmed, case-insensitive).
    pub fn in_category(&self, category: &str) -> bool {
        normalize_category(&self.category) == normalize_category(category)
    }
}

/// Canonical form of a category label used for matching and cache keys.
pub fn normalize_category(category: &str) -> String {
    category.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_text_mapping() {
        assert_eq!(
            ProjectStatus::from_progress_text("PROJET ABANDONNÉ"),
            ProjectStatus::Abandoned
        );
        assert_eq!(
            ProjectStatus::from_progress_text("11. FIN DE CHANTIER"),
            ProjectStatus::Completed
        );
        assert_eq!(
            ProjectStatus::from_progress_text("4. ETUDES EN COURS"),
            ProjectStatus::InProgress
        );
        assert_eq!(ProjectStatus::from_progress_text(""), ProjectStatus::InProgress);
    }

    #[test]
    fn test_status_label_roundtrip() {
        for status in ProjectStatus::ALL {
            assert_eq!(ProjectStatus::from_str_opt(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_priority_flag() {
        assert_eq!(PriorityArea::from_flag_text("Oui"), PriorityArea::High);
        assert_eq!(PriorityArea::from_flag_text(" non "), PriorityArea::Low);
        assert_eq!(PriorityArea::from_flag_text(""), PriorityArea::Low);
    }

    #[test]
    fn test_category_match_ignores_case_and_padding() {
        let record = ProjectRecord {
            title: "Jardin partagé".to_string(),
            budget: 10_000,
            year: 2019,
            postal_code: "75011".to_string(),
            status: ProjectStatus::Completed,
            priority_area: PriorityArea::Low,
            category: "Environnement".to_string(),
        };
        assert!(record.in_category("  environnement "));
        assert!(!record.in_category("Environ"));
    }
}
