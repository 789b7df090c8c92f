//! Cross-table invariants over full pipeline runs.

use slip::core::EventType;
use slip::pipeline::{build_tables, validate_tables};

use crate::fixtures;

#[test]
fn test_tables_align_and_validate_clean() {
    let tables = build_tables(&fixtures::noisy_params(25, 5, 7)).unwrap();

    assert_eq!(tables.tasks.len(), 25);
    assert_eq!(tables.features.len(), 25);
    assert!(validate_tables(&tables.tasks, &tables.events).is_empty());
    for (row, record) in tables.tasks.iter().zip(&tables.features) {
        assert_eq!(row.task_id, record.task_id);
    }
}

#[test]
fn test_block_totals_match_reason_counts() {
    let tables = build_tables(&fixtures::noisy_params(30, 4, 21)).unwrap();
    for record in &tables.features {
        let sum = record.dependencies
            + record.no_resource_available
            + record.skill_mismatch
            + record.external_block
            + record.random_disruption;
        assert_eq!(record.total_blocked_events, sum);
    }
}

#[test]
fn test_events_sorted_by_observed_day_with_flags() {
    let tables = build_tables(&fixtures::noisy_params(20, 4, 3)).unwrap();

    for pair in tables.events.windows(2) {
        assert!(pair[0].observed_day <= pair[1].observed_day);
    }
    for event in &tables.events {
        assert!(event.observed_day >= event.day);
        assert_eq!(event.is_delayed_log, event.observed_day > event.day);
    }
}

#[test]
fn test_delay_labels_match_actual_dates() {
    let tables = build_tables(&fixtures::noisy_params(40, 6, 13)).unwrap();
    for row in &tables.tasks {
        let expected = row.actual_start >= 0
            && row.actual_end >= 0
            && row.actual_end - row.actual_start > i64::from(row.planned_duration);
        assert_eq!(row.delay == 1, expected);
    }
}

#[test]
fn test_progress_counts_match_event_table() {
    let tables = build_tables(&fixtures::quiet_params(10, 3, 17)).unwrap();
    for record in &tables.features {
        let expected = tables
            .events
            .iter()
            .filter(|e| e.task_id == record.task_id && e.event_type == EventType::Progress)
            .count() as u32;
        assert_eq!(record.progress_events, expected);
    }
}

#[test]
fn test_completed_rows_have_consistent_state() {
    let tables = build_tables(&fixtures::noisy_params(30, 5, 41)).unwrap();
    for row in &tables.tasks {
        if row.actual_end >= 0 {
            assert!(row.progress >= 1.0);
            assert!(row.actual_start >= 0);
            assert!(row.actual_end >= row.actual_start);
        }
    }
}
