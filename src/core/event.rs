//! Event log records emitted by the simulator.
//!
//! Every significant per-task transition produces one [`EventLog`]. Records
//! are append-only: once a delayed record materializes into the visible log
//! it is never re-ordered again.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The kinds of transitions the simulator reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Start,
    Progress,
    Blocked,
    Rework,
    Complete,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Start => "start",
            EventType::Progress => "progress",
            EventType::Blocked => "blocked",
            EventType::Rework => "rework",
            EventType::Complete => "complete",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a transition happened, where it is not obvious from the type alone.
///
/// Blocked events always carry a reason; progress events carry
/// `SkillMismatch` when the day's work was penalized; rework events carry
/// `Rework`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventReason {
    Dependencies,
    NoResourceAvailable,
    SkillMismatch,
    ExternalBlock,
    RandomDisruption,
    Rework,
}

impl EventReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventReason::Dependencies => "dependencies",
            EventReason::NoResourceAvailable => "no_resource_available",
            EventReason::SkillMismatch => "skill_mismatch",
            EventReason::ExternalBlock => "external_block",
            EventReason::RandomDisruption => "random_disruption",
            EventReason::Rework => "rework",
        }
    }
}

impl std::fmt::Display for EventReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable record of one simulation event.
///
/// `day` is when the event actually happened; `observed_day` is when it
/// became visible in the log. The two differ only for delayed telemetry,
/// and `observed_day` is never less than `day`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    pub day: u32,
    pub task_id: String,
    pub event_type: EventType,
    pub reason: Option<EventReason>,
    pub observed_day: u32,
}

impl EventLog {
    /// Create a validated event observed on the day it happened.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if the task id is empty.
    pub fn new(
        day: u32,
        task_id: &str,
        event_type: EventType,
        reason: Option<EventReason>,
    ) -> Result<Self> {
        if task_id.is_empty() {
            return Err(Error::Validation(
                "event task_id must be a non-empty string".to_string(),
            ));
        }

        Ok(Self {
            day,
            task_id: task_id.to_string(),
            event_type,
            reason,
            observed_day: day,
        })
    }

    /// Move the visibility of this event to a later day.
    ///
    /// Used by the noise layer for delayed telemetry; the true `day` is
    /// left untouched.
    pub fn observed_on(mut self, observed_day: u32) -> Self {
        self.observed_day = observed_day.max(self.day);
        self
    }

    /// Check if this event became visible later than it happened.
    pub fn is_delayed(&self) -> bool {
        self.observed_day > self.day
    }
}
