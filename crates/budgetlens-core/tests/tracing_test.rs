//! Tests for the budgetlens tracing setup.

use std::sync::Mutex;

use budgetlens_core::tracing::{init_tracing, init_tracing_json};

static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_per_crate_filter_is_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("BUDGETLENS_LOG", "budgetlens_storage=debug,budgetlens_prediction=warn");
    init_tracing();
    std::env::remove_var("BUDGETLENS_LOG");
    tracing::info!("after init");
}

#[test]
fn test_init_is_idempotent_across_formats() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing_json();
    init_tracing();
}
