//! Shared fixtures for budgetlens tests: record builders and a sample export.

use std::path::PathBuf;

use budgetlens_core::models::{PriorityArea, ProjectRecord, ProjectStatus};

/// Contents of `data/budget-participatif-sample.csv`.
///
/// 13 data rows: 11 valid (5 Environnement, 3 Sport, 3 Culture et patrimoine),
/// one without a title and one with an unparseable budget.
pub const SAMPLE_CSV: &str = include_str!("../data/budget-participatif-sample.csv");

pub const SAMPLE_VALID_ROWS: usize = 11;
pub const SAMPLE_REJECTED_ROWS: usize = 2;

pub fn sample_csv_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("budget-participatif-sample.csv")
}

/// Builder for a [`ProjectRecord`] with neutral defaults.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: ProjectRecord,
}

impl RecordBuilder {
    pub fn new(category: &str, budget: u64) -> Self {
        Self {
            record: ProjectRecord {
                title: format!("Projet {category} {budget}"),
                budget,
                year: 2020,
                postal_code: "75001".to_string(),
                status: ProjectStatus::InProgress,
                priority_area: PriorityArea::Low,
                category: category.to_string(),
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.record.title = title.to_string();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.record.year = year;
        self
    }

    pub fn postal_code(mut self, postal_code: &str) -> Self {
        self.record.postal_code = postal_code.to_string();
        self
    }

    pub fn status(mut self, status: ProjectStatus) -> Self {
        self.record.status = status;
        self
    }

    pub fn priority(mut self, priority_area: PriorityArea) -> Self {
        self.record.priority_area = priority_area;
        self
    }

    pub fn build(self) -> ProjectRecord {
        self.record
    }
}

pub fn record(category: &str, budget: u64) -> ProjectRecord {
    RecordBuilder::new(category, budget).build()
}

/// Records of one category with the given budgets, titled `"{category} #{i}"`.
pub fn records_with_budgets(category: &str, budgets: &[u64]) -> Vec<ProjectRecord> {
    budgets
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            RecordBuilder::new(category, b)
                .title(&format!("{category} #{i}"))
                .build()
        })
        .collect()
}

/// A small mixed corpus: 4 Environnement, 3 Sport, 1 Culture et patrimoine.
pub fn mixed_corpus() -> Vec<ProjectRecord> {
    vec![
        RecordBuilder::new("Environnement", 150_000)
            .title("Végétaliser la rue")
            .year(2016)
            .postal_code("75011")
            .status(ProjectStatus::Completed)
            .priority(PriorityArea::High)
            .build(),
        RecordBuilder::new("Sport", 900_000)
            .title("Rénovation du gymnase")
            .year(2016)
            .postal_code("75011")
            .status(ProjectStatus::Completed)
            .build(),
        RecordBuilder::new("Environnement", 45_000)
            .title("Jardin partagé")
            .year(2017)
            .postal_code("75020")
            .status(ProjectStatus::Abandoned)
            .priority(PriorityArea::High)
            .build(),
        RecordBuilder::new("Environnement", 12_000)
            .title("Composteurs de quartier")
            .year(2018)
            .postal_code("75011")
            .build(),
        RecordBuilder::new("Sport", 250_000)
            .title("Terrain de basket")
            .year(2018)
            .postal_code("75019")
            .status(ProjectStatus::Abandoned)
            .priority(PriorityArea::High)
            .build(),
        RecordBuilder::new("Culture et patrimoine", 8_000)
            .title("Fresque murale")
            .year(2017)
            .postal_code("75020")
            .status(ProjectStatus::Completed)
            .priority(PriorityArea::High)
            .build(),
        RecordBuilder::new("Environnement", 300_000)
            .title("Arbres et fraîcheur")
            .year(2019)
            .postal_code("75019")
            .status(ProjectStatus::Completed)
            .priority(PriorityArea::High)
            .build(),
        RecordBuilder::new("Sport", 60_000)
            .title("Agrès sportifs")
            .year(2020)
            .postal_code("75015")
            .build(),
    ]
}
