//! Resource data model for the project simulation.
//!
//! Resources are the workers or assets the simulator hands out to tasks.
//! Assignment is day-scoped: the simulator clears every assignment at the
//! end of each day.

use serde::{Deserialize, Serialize};

use crate::core::skill::SkillType;
use crate::error::{Error, Result};

/// Default hours a resource is available per day.
pub const DEFAULT_AVAILABILITY: u32 = 8;

/// An assignable worker or asset with a skill and an efficiency multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique identifier, non-empty.
    pub id: String,
    /// Primary skill of the resource.
    pub skill_type: SkillType,
    /// Work rate multiplier, > 0 (1.0 = nominal).
    pub efficiency: f64,
    /// Hours available per day.
    pub availability: u32,
    /// Id of the task holding this resource today, if any.
    pub assigned_task: Option<String>,
}

impl Resource {
    /// Create a validated, unassigned resource with default availability.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if the id is empty or the efficiency is
    /// not positive.
    pub fn new(id: &str, skill_type: SkillType, efficiency: f64) -> Result<Self> {
        if id.is_empty() {
            return Err(Error::Validation(
                "resource id must be a non-empty string".to_string(),
            ));
        }
        if efficiency <= 0.0 {
            return Err(Error::Validation(format!(
                "efficiency must be positive, got: {}",
                efficiency
            )));
        }

        Ok(Self {
            id: id.to_string(),
            skill_type,
            efficiency,
            availability: DEFAULT_AVAILABILITY,
            assigned_task: None,
        })
    }

    /// Check if the resource is free to take a task today.
    pub fn is_available(&self) -> bool {
        self.assigned_task.is_none()
    }

    /// Hand the resource to a task for the rest of the day.
    pub fn assign(&mut self, task_id: &str) {
        self.assigned_task = Some(task_id.to_string());
    }

    /// Clear the day's assignment.
    pub fn release(&mut self) {
        self.assigned_task = None;
    }
}
