//! Test fixtures for integration tests.
//!
//! Builders for tasks, resources, and pipeline parameters shared across
//! the suites.

use slip::core::{Priority, Resource, SkillType, Task};
use slip::pipeline::TableParams;
use slip::sim::NoiseConfig;

/// A medium-priority dev task with the given dependencies.
pub fn task(id: &str, planned_duration: u32, complexity: u32, deps: &[&str]) -> Task {
    Task::new(
        id,
        planned_duration,
        complexity,
        Priority::Medium,
        SkillType::Dev,
        deps.iter().map(|d| d.to_string()).collect(),
    )
    .expect("valid task")
}

/// A dev resource with neutral efficiency.
pub fn dev_resource(id: &str) -> Resource {
    Resource::new(id, SkillType::Dev, 1.0).expect("valid resource")
}

/// Pipeline parameters with all randomness disabled.
pub fn quiet_params(num_tasks: usize, num_resources: usize, seed: u64) -> TableParams {
    TableParams {
        num_tasks,
        num_resources,
        seed,
        max_days: 200,
        noise: NoiseConfig::quiet(),
    }
}

/// Pipeline parameters with default noise at a chosen scale.
pub fn noisy_params(num_tasks: usize, num_resources: usize, seed: u64) -> TableParams {
    TableParams {
        num_tasks,
        num_resources,
        seed,
        ..TableParams::default()
    }
}
