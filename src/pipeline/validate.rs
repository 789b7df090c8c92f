//! Data quality checks over normalized tables.
//!
//! Validation reports every problem it finds as a human-readable string
//! instead of stopping at the first. The pipeline driver treats a
//! non-empty report as fatal.

use crate::core::MAX_PROGRESS;
use crate::pipeline::ingest::{EventRow, TaskRow};

/// Check task rows for structural problems. Empty when clean.
pub fn validate_tasks(rows: &[TaskRow]) -> Vec<String> {
    let mut problems = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        if row.task_id.is_empty() {
            problems.push(format!("task row {}: empty task_id", i));
            continue;
        }
        if row.planned_duration == 0 {
            problems.push(format!("task {}: planned_duration must be positive", row.task_id));
        }
        if !(1..=5).contains(&row.complexity) {
            problems.push(format!(
                "task {}: complexity {} outside the 1-5 scale",
                row.task_id, row.complexity
            ));
        }
        if row.actual_start >= 0 && row.actual_end >= 0 && row.actual_end < row.actual_start {
            problems.push(format!(
                "task {}: actual_end {} precedes actual_start {}",
                row.task_id, row.actual_end, row.actual_start
            ));
        }
        if row.progress < 0.0 || row.progress > MAX_PROGRESS {
            problems.push(format!(
                "task {}: progress {} outside [0, {}]",
                row.task_id, row.progress, MAX_PROGRESS
            ));
        }
    }

    problems
}

/// Check event rows for structural problems. Empty when clean.
pub fn validate_events(rows: &[EventRow]) -> Vec<String> {
    let mut problems = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        if row.task_id.is_empty() {
            problems.push(format!("event row {}: empty task_id", i));
        }
        if row.observed_day < row.day {
            problems.push(format!(
                "event row {}: observed_day {} precedes day {}",
                i, row.observed_day, row.day
            ));
        }
    }

    problems
}

/// Run every table check and collect the combined report.
pub fn validate_tables(tasks: &[TaskRow], events: &[EventRow]) -> Vec<String> {
    let mut problems = validate_tasks(tasks);
    problems.extend(validate_events(events));
    problems
}
