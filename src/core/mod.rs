//! Core domain models for the project simulation.
//!
//! This module contains the fundamental data structures used throughout
//! the system: tasks, resources, event records, skills, and the
//! dependency graph.

pub mod dag;
pub mod event;
pub mod resource;
pub mod skill;
pub mod task;

pub use dag::DependencyGraph;
pub use event::{EventLog, EventReason, EventType};
pub use resource::Resource;
pub use skill::SkillType;
pub use task::{Priority, Task, TaskStatus, MAX_PROGRESS};
