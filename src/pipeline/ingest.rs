//! Raw table extraction from a finished simulation.
//!
//! Ingestion flattens simulator state into plain row vectors with no
//! cleaning applied; normalization owns the derived columns.

use serde::{Deserialize, Serialize};

use crate::core::{EventLog, EventReason, EventType, Priority, SkillType, Task, TaskStatus};
use crate::sim::Simulator;

/// One task as a flat table row. Unset days are serialized as -1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRow {
    pub task_id: String,
    pub planned_duration: u32,
    pub complexity: u32,
    pub priority: Priority,
    pub required_skill: SkillType,
    pub num_dependencies: usize,
    pub actual_start: i64,
    pub actual_end: i64,
    pub status: TaskStatus,
    pub progress: f64,
    /// Binary delay label; 0 until normalization computes it.
    pub delay: u8,
}

impl TaskRow {
    fn from_task(task: &Task) -> Self {
        Self {
            task_id: task.id.clone(),
            planned_duration: task.planned_duration,
            complexity: task.complexity,
            priority: task.priority,
            required_skill: task.required_skill,
            num_dependencies: task.dependencies.len(),
            actual_start: task.actual_start.map_or(-1, i64::from),
            actual_end: task.actual_end.map_or(-1, i64::from),
            status: task.status,
            progress: task.progress,
            delay: 0,
        }
    }
}

/// One visible event as a flat table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRow {
    pub day: u32,
    pub task_id: String,
    pub event_type: EventType,
    pub reason: Option<EventReason>,
    pub observed_day: u32,
    /// Late-arrival flag; false until normalization recomputes it.
    pub is_delayed_log: bool,
}

impl EventRow {
    fn from_event(event: &EventLog) -> Self {
        Self {
            day: event.day,
            task_id: event.task_id.clone(),
            event_type: event.event_type,
            reason: event.reason,
            observed_day: event.observed_day,
            is_delayed_log: false,
        }
    }
}

/// Flatten final simulator state into raw (tasks, events) tables.
///
/// Rows come out in the simulator's own order: tasks in creation order,
/// events in materialization order.
pub fn ingest(sim: &Simulator) -> (Vec<TaskRow>, Vec<EventRow>) {
    let tasks = sim.tasks().iter().map(TaskRow::from_task).collect();
    let events = sim.logs().iter().map(EventRow::from_event).collect();
    (tasks, events)
}
