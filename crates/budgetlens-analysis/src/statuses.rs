//! Status and priority-area counts with abandoned-project examples.

use budgetlens_core::models::{
    PriorityArea, PriorityCounts, ProjectExample, ProjectRecord, ProjectStatus, StatusCounts,
    Statuses,
};

/// Raw counts per status and per priority area, plus the first
/// `max_examples` abandoned records in slice order.
pub fn status_and_priority(
    slice: &[ProjectRecord],
    max_examples: usize,
) -> (Statuses, PriorityCounts) {
    let mut pie_chart = StatusCounts::default();
    let mut priority = PriorityCounts::default();
    let mut abandoned_examples = Vec::new();

    for record in slice {
        match record.status {
            ProjectStatus::Abandoned => {
                pie_chart.abandoned += 1;
                if abandoned_examples.len() < max_examples {
                    abandoned_examples.push(ProjectExample::from(record));
                }
            }
            ProjectStatus::InProgress => pie_chart.in_progress += 1,
            ProjectStatus::Completed => pie_chart.completed += 1,
        }
        match record.priority_area {
            PriorityArea::High => priority.high_priority += 1,
            PriorityArea::Low => priority.low_priority += 1,
        }
    }

    (
        Statuses {
            pie_chart,
            abandoned_examples,
        },
        priority,
    )
}
