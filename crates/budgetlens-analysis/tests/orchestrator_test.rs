//! Metrics orchestrator against real record stores.

use budgetlens_analysis::{MetricsOptions, MetricsOrchestrator};
use budgetlens_core::config::{BudgetLensConfig, CatalogConfig};
use budgetlens_core::models::ProjectStatus;
use budgetlens_storage::{InMemoryRecordStore, SqliteRecordStore};
use test_fixtures::{mixed_corpus, records_with_budgets, sample_csv_path};

fn catalog(categories: &[&str]) -> CatalogConfig {
    CatalogConfig {
        categories: categories.iter().map(|c| c.to_string()).collect(),
    }
}

#[test]
fn test_four_budget_scenario() {
    let store = InMemoryRecordStore::new(records_with_budgets("Sport", &[1000, 2000, 3000, 4000]));
    let metrics = MetricsOrchestrator::default()
        .assemble(&store, "Sport", 2500)
        .unwrap()
        .unwrap();

    assert_eq!(metrics.number_of_records, 4);
    assert_eq!(metrics.budget.median, Some(2500));
    assert_eq!(metrics.budget.average, Some(2500));
    assert_eq!(metrics.budget.min, Some(1000));
    assert_eq!(metrics.budget.max, Some(4000));
    // 2500 is the Q2/Q3 boundary
    assert_eq!(metrics.budget.position.estimated_budget_quartile, Some(2));
}

#[test]
fn test_catalogued_category_without_records_gets_empty_metrics() {
    let store = InMemoryRecordStore::new(mixed_corpus());
    let orchestrator = MetricsOrchestrator::new(MetricsOptions::default(), catalog(&["Mobilité"]));
    let metrics = orchestrator
        .assemble(&store, "mobilité", 10_000)
        .unwrap()
        .unwrap();

    assert_eq!(metrics.number_of_records, 0);
    assert_eq!(metrics.starting_year, None);
    assert_eq!(metrics.budget.median, None);
    assert!(metrics.budget.position.quartiles.is_empty());
    assert_eq!(metrics.budget.position.estimated_budget_quartile, None);
    assert_eq!(metrics.statuses.pie_chart.total(), 0);
    assert_eq!(metrics.statuses.pie_chart.percentages().sum(), 0);
    assert!(metrics.postal_code_distribution.is_empty());
    // corpus-wide, still present
    assert_eq!(metrics.breakdown_by_category.len(), 3);
    assert!(metrics.breakdown_by_category.iter().all(|b| !b.selected));
}

#[test]
fn test_unknown_category_has_no_metrics() {
    let store = InMemoryRecordStore::new(mixed_corpus());
    let metrics = MetricsOrchestrator::default()
        .assemble(&store, "Astronautique", 10_000)
        .unwrap();
    assert!(metrics.is_none());
}

#[test]
fn test_full_metrics_over_sample_dataset() {
    let store = SqliteRecordStore::open_in_memory().unwrap();
    store.ingest_csv(&sample_csv_path()).unwrap();

    let metrics = MetricsOrchestrator::from_config(&BudgetLensConfig::default())
        .assemble(&store, "Environnement", 100_000)
        .unwrap()
        .unwrap();

    assert_eq!(metrics.starting_year, Some(2016));
    assert_eq!(metrics.ending_year, Some(2021));
    assert_eq!(metrics.number_of_records, 5);
    assert_eq!(metrics.statuses.pie_chart.abandoned, 1);
    assert_eq!(metrics.statuses.pie_chart.completed, 2);
    assert_eq!(metrics.statuses.pie_chart.in_progress, 2);
    assert_eq!(metrics.statuses.abandoned_examples[0].title, "Jardin partagé rue des Vignoles");
    assert_eq!(metrics.statuses.abandoned_examples[0].year, "2017");
    assert_eq!(metrics.priority_area.high_priority, 3);
    assert_eq!(metrics.priority_area.low_priority, 2);
    assert_eq!(metrics.postal_code_distribution[0].postal_code, "75011");
    assert_eq!(metrics.postal_code_distribution[0].count, 2);
    assert_eq!(metrics.budget.median, Some(80_000));
    assert_eq!(metrics.budget.five_most_expensive[0].budget, 300_000);
    assert_eq!(metrics.budget.five_least_expensive[0].budget, 12_000);

    let selected: Vec<&str> = metrics
        .breakdown_by_category
        .iter()
        .filter(|b| b.selected)
        .map(|b| b.category.as_str())
        .collect();
    assert_eq!(selected, vec!["Environnement"]);
    assert_eq!(
        metrics
            .breakdown_by_category
            .iter()
            .map(|b| b.percentage)
            .sum::<u32>(),
        100
    );
}

#[test]
fn test_breakdown_can_be_disabled() {
    let store = InMemoryRecordStore::new(mixed_corpus());
    let options = MetricsOptions {
        include_category_breakdown: false,
        ..MetricsOptions::default()
    };
    let metrics = MetricsOrchestrator::new(options, CatalogConfig::default())
        .assemble(&store, "Sport", 1)
        .unwrap()
        .unwrap();
    assert!(metrics.breakdown_by_category.is_empty());
}

#[test]
fn test_configured_table_sizes() {
    let mut records = records_with_budgets("Sport", &[1, 2, 3, 4, 5, 6, 7, 8]);
    for r in records.iter_mut().take(4) {
        r.status = ProjectStatus::Abandoned;
    }
    let store = InMemoryRecordStore::new(records);
    let options = MetricsOptions {
        top_n: 3,
        abandoned_examples: 2,
        include_category_breakdown: true,
    };
    let metrics = MetricsOrchestrator::new(options, CatalogConfig::default())
        .assemble(&store, "Sport", 1)
        .unwrap()
        .unwrap();
    assert_eq!(metrics.budget.five_most_expensive.len(), 3);
    assert_eq!(metrics.budget.five_least_expensive.len(), 3);
    assert_eq!(metrics.statuses.abandoned_examples.len(), 2);
}

#[test]
fn test_recomputation_is_byte_identical() {
    let store = InMemoryRecordStore::new(mixed_corpus());
    let orchestrator = MetricsOrchestrator::default();
    let first = orchestrator.assemble(&store, "Environnement", 50_000).unwrap();
    let second = orchestrator.assemble(&store, "Environnement", 50_000).unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_rows_without_arrondissement_stay_out_of_postal_distribution() {
    let csv = "Edition;Titre de l'opération;Thématique;Budget global du projet lauréat;Arrondissement de l'opération;Avancement de l'opération;Opération en Quartier Populaire\n\
               2019;Terrain de padel;Sport;40000;;;Non\n\
               2020;Agrès sportifs;Sport;60000;75011;;Non\n";
    let (records, _) = budgetlens_storage::ingest::load_csv_str(csv, "inline").unwrap();
    let store = InMemoryRecordStore::new(records);

    let metrics = MetricsOrchestrator::default()
        .assemble(&store, "Sport", 50_000)
        .unwrap()
        .unwrap();
    assert_eq!(metrics.number_of_records, 2);
    assert_eq!(metrics.postal_code_distribution.len(), 1);
    assert_eq!(metrics.postal_code_distribution[0].postal_code, "75011");
    assert_eq!(metrics.postal_code_distribution[0].count, 1);
}
