//! Task data model for the project simulation.
//!
//! Tasks are the units of work the simulator advances day by day. Each task
//! tracks its planning fields (duration, complexity, priority, skill,
//! dependencies) and its execution state (status, progress, actual dates).

use serde::{Deserialize, Serialize};

use crate::core::skill::SkillType;
use crate::error::{Error, Result};

/// Progress may overshoot 1.0 slightly because the final increment of a day
/// is applied in full before the completion check.
pub const MAX_PROGRESS: f64 = 1.5;

/// Task status in its lifecycle.
///
/// Completed is terminal; the simulator never touches a completed task again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task created but never activated.
    NotStarted,
    /// Task is actively accruing progress.
    InProgress,
    /// Task could not proceed on its most recent day.
    Blocked,
    /// Task reached full progress. Terminal.
    Completed,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::NotStarted => write!(f, "not_started"),
            TaskStatus::InProgress => write!(f, "in_progress"),
            TaskStatus::Blocked => write!(f, "blocked"),
            TaskStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Task priority levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// A project task with planning and execution state.
///
/// Constructed once before a run via [`Task::new`], which validates the
/// planning fields. Only the simulator mutates a task after that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, non-empty.
    pub id: String,
    /// Expected duration in days, > 0.
    pub planned_duration: u32,
    /// Difficulty factor on a 1-5 scale; divides daily progress.
    pub complexity: u32,
    /// Scheduling priority.
    pub priority: Priority,
    /// Skill needed to work the task at full speed.
    pub required_skill: SkillType,
    /// Ids of tasks that must complete before this one may progress.
    pub dependencies: Vec<String>,
    /// Day the task first became active, if it ever did.
    pub actual_start: Option<u32>,
    /// Day the task completed, if it did.
    pub actual_end: Option<u32>,
    /// Completion fraction, 0.0 to [`MAX_PROGRESS`].
    pub progress: f64,
    /// Current lifecycle state.
    pub status: TaskStatus,
}

impl Task {
    /// Create a validated task in its initial state.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if the id is empty, the planned duration
    /// is zero, or the complexity is outside the 1-5 scale.
    pub fn new(
        id: &str,
        planned_duration: u32,
        complexity: u32,
        priority: Priority,
        required_skill: SkillType,
        dependencies: Vec<String>,
    ) -> Result<Self> {
        if id.is_empty() {
            return Err(Error::Validation(
                "task id must be a non-empty string".to_string(),
            ));
        }
        if planned_duration == 0 {
            return Err(Error::Validation(format!(
                "planned_duration must be positive, got: {}",
                planned_duration
            )));
        }
        if !(1..=5).contains(&complexity) {
            return Err(Error::Validation(format!(
                "complexity must be between 1 and 5, got: {}",
                complexity
            )));
        }

        Ok(Self {
            id: id.to_string(),
            planned_duration,
            complexity,
            priority,
            required_skill,
            dependencies,
            actual_start: None,
            actual_end: None,
            progress: 0.0,
            status: TaskStatus::NotStarted,
        })
    }

    /// Check if the task has reached its terminal state.
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Check if the task is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.status == TaskStatus::Blocked
    }

    /// Check if the task has never been activated.
    pub fn can_start(&self) -> bool {
        self.status == TaskStatus::NotStarted
    }
}
