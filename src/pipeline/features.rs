//! Feature aggregation from the event table.
//!
//! Turns the noisy per-task event stream into the numeric signals the
//! risk engines consume. Aggregation always uses the true `day` an event
//! happened, never the day it surfaced.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::{EventReason, EventType};
use crate::pipeline::ingest::{EventRow, TaskRow};

/// Per-task numeric signals derived from the event table.
///
/// All fields are non-negative counts or day numbers. The record is
/// recomputed fresh each analysis and never mutated in place by the
/// engines; the what-if engine works on copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub task_id: String,
    /// Blocked events attributed to unmet dependencies.
    pub dependencies: u32,
    /// Blocked events attributed to resource starvation.
    pub no_resource_available: u32,
    /// Blocked events attributed to a skill mismatch.
    pub skill_mismatch: u32,
    /// Blocked events attributed to external factors.
    pub external_block: u32,
    /// Blocked events attributed to random disruptions.
    pub random_disruption: u32,
    /// Sum of the per-reason block counts.
    pub total_blocked_events: u32,
    pub progress_events: u32,
    pub first_progress_day: u32,
    pub last_progress_day: u32,
    pub rework_count: u32,
    /// Largest gap in days between consecutive progress events.
    pub max_progress_gap: u32,
    /// Binary delay label carried over from the task row.
    pub delay: u8,
}

impl FeatureRecord {
    /// An all-zero record for a task.
    pub fn new(task_id: &str) -> Self {
        Self {
            task_id: task_id.to_string(),
            dependencies: 0,
            no_resource_available: 0,
            skill_mismatch: 0,
            external_block: 0,
            random_disruption: 0,
            total_blocked_events: 0,
            progress_events: 0,
            first_progress_day: 0,
            last_progress_day: 0,
            rework_count: 0,
            max_progress_gap: 0,
            delay: 0,
        }
    }

    /// Look up a feature by name. Unknown names read as 0, so scoring
    /// always completes even with partial telemetry.
    pub fn get(&self, field: &str) -> u32 {
        match field {
            "dependencies" => self.dependencies,
            "no_resource_available" => self.no_resource_available,
            "skill_mismatch" => self.skill_mismatch,
            "external_block" => self.external_block,
            "random_disruption" => self.random_disruption,
            "total_blocked_events" => self.total_blocked_events,
            "progress_events" => self.progress_events,
            "first_progress_day" => self.first_progress_day,
            "last_progress_day" => self.last_progress_day,
            "rework_count" => self.rework_count,
            "max_progress_gap" => self.max_progress_gap,
            _ => 0,
        }
    }

    /// Overwrite a feature by name. Unknown names are ignored.
    pub fn set(&mut self, field: &str, value: u32) {
        match field {
            "dependencies" => self.dependencies = value,
            "no_resource_available" => self.no_resource_available = value,
            "skill_mismatch" => self.skill_mismatch = value,
            "external_block" => self.external_block = value,
            "random_disruption" => self.random_disruption = value,
            "total_blocked_events" => self.total_blocked_events = value,
            "progress_events" => self.progress_events = value,
            "first_progress_day" => self.first_progress_day = value,
            "last_progress_day" => self.last_progress_day = value,
            "rework_count" => self.rework_count = value,
            "max_progress_gap" => self.max_progress_gap = value,
            _ => {}
        }
    }
}

#[derive(Default)]
struct BlockCounts {
    dependencies: u32,
    no_resource_available: u32,
    skill_mismatch: u32,
    external_block: u32,
    random_disruption: u32,
}

#[derive(Default)]
struct ProgressStats {
    days: Vec<u32>,
    rework: u32,
}

/// Build one feature record per task row, in task-table order.
///
/// Tasks without matching events get zero-filled records. Rework counts
/// attach to the progress aggregation, so a task with rework events but
/// no progress events reads rework_count 0.
pub fn build_task_features(tasks: &[TaskRow], events: &[EventRow]) -> Vec<FeatureRecord> {
    let mut blocks: HashMap<&str, BlockCounts> = HashMap::new();
    for event in events.iter().filter(|e| e.event_type == EventType::Blocked) {
        let counts = blocks.entry(event.task_id.as_str()).or_default();
        match event.reason {
            Some(EventReason::Dependencies) => counts.dependencies += 1,
            Some(EventReason::NoResourceAvailable) => counts.no_resource_available += 1,
            Some(EventReason::SkillMismatch) => counts.skill_mismatch += 1,
            Some(EventReason::ExternalBlock) => counts.external_block += 1,
            Some(EventReason::RandomDisruption) => counts.random_disruption += 1,
            _ => {}
        }
    }

    let mut progress: HashMap<&str, ProgressStats> = HashMap::new();
    for event in events.iter().filter(|e| e.event_type == EventType::Progress) {
        progress
            .entry(event.task_id.as_str())
            .or_default()
            .days
            .push(event.day);
    }
    for event in events.iter().filter(|e| e.event_type == EventType::Rework) {
        if let Some(stats) = progress.get_mut(event.task_id.as_str()) {
            stats.rework += 1;
        }
    }

    tasks
        .iter()
        .map(|row| {
            let mut record = FeatureRecord::new(&row.task_id);
            record.delay = row.delay;

            if let Some(b) = blocks.get(row.task_id.as_str()) {
                record.dependencies = b.dependencies;
                record.no_resource_available = b.no_resource_available;
                record.skill_mismatch = b.skill_mismatch;
                record.external_block = b.external_block;
                record.random_disruption = b.random_disruption;
                record.total_blocked_events = b.dependencies
                    + b.no_resource_available
                    + b.skill_mismatch
                    + b.external_block
                    + b.random_disruption;
            }

            if let Some(stats) = progress.get(row.task_id.as_str()) {
                let mut days = stats.days.clone();
                days.sort_unstable();

                record.progress_events = days.len() as u32;
                if let (Some(&first), Some(&last)) = (days.first(), days.last()) {
                    record.first_progress_day = first;
                    record.last_progress_day = last;
                }
                let mut gap = 0;
                for pair in days.windows(2) {
                    gap = gap.max(pair[1] - pair[0]);
                }
                record.max_progress_gap = gap;
                record.rework_count = stats.rework;
            }

            record
        })
        .collect()
}
