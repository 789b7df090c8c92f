//! Synthetic sample project generation.
//!
//! Builds a varied but reproducible project for demos and pipeline runs:
//! resources with cycling skills, tasks with randomized complexity,
//! duration, priority, skill, and backward-only dependencies.

use rand::prelude::*;

use crate::core::{Priority, Resource, SkillType, Task};
use crate::error::Result;

/// Default number of tasks in a generated project.
pub const DEFAULT_NUM_TASKS: usize = 50;

/// Default number of resources in a generated project.
pub const DEFAULT_NUM_RESOURCES: usize = 8;

/// Default generation seed.
pub const DEFAULT_SEED: u64 = 42;

/// Generate a sample project from its own RNG seeded with `seed`.
///
/// Resources `R1..Rn` cycle through dev/qa/ops/design; efficiency is
/// uniform in [0.7, 1.3], rounded to two decimals. Tasks `T1..Tn` draw
/// complexity 1..=5, a duration of complexity plus 2..=8 days, weighted
/// priority and skill rolls, and with probability 0.7 between one and
/// three dependencies sampled from the previous ten tasks.
pub fn generate_sample_project(
    num_tasks: usize,
    num_resources: usize,
    seed: u64,
) -> Result<(Vec<Task>, Vec<Resource>)> {
    let mut rng = StdRng::seed_from_u64(seed);

    let skills = [
        SkillType::Dev,
        SkillType::Qa,
        SkillType::Ops,
        SkillType::Design,
    ];
    let mut resources = Vec::with_capacity(num_resources);
    for i in 0..num_resources {
        let efficiency = (rng.gen_range(0.7..1.3_f64) * 100.0).round() / 100.0;
        resources.push(Resource::new(
            &format!("R{}", i + 1),
            skills[i % skills.len()],
            efficiency,
        )?);
    }

    let mut tasks = Vec::with_capacity(num_tasks);
    for i in 0..num_tasks {
        let complexity: u32 = rng.gen_range(1..=5);
        let duration = complexity + rng.gen_range(2..=8);

        let roll: f64 = rng.gen();
        let priority = if roll < 0.2 {
            Priority::High
        } else if roll < 0.7 {
            Priority::Medium
        } else {
            Priority::Low
        };

        let roll: f64 = rng.gen();
        let skill = if roll < 0.5 {
            SkillType::Dev
        } else if roll < 0.75 {
            SkillType::Qa
        } else if roll < 0.9 {
            SkillType::Ops
        } else {
            SkillType::Design
        };

        let mut dependencies: Vec<String> = Vec::new();
        if i > 0 && rng.gen::<f64>() < 0.7 {
            let count = rng.gen_range(1..=3.min(i));
            let window: Vec<String> = (i.saturating_sub(10)..i)
                .map(|j| format!("T{}", j + 1))
                .collect();
            dependencies = window.choose_multiple(&mut rng, count).cloned().collect();
        }

        tasks.push(Task::new(
            &format!("T{}", i + 1),
            duration,
            complexity,
            priority,
            skill,
            dependencies,
        )?);
    }

    Ok((tasks, resources))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DependencyGraph;

    fn task_number(id: &str) -> usize {
        id[1..].parse().unwrap()
    }

    #[test]
    fn test_same_seed_same_project() {
        let (tasks_a, resources_a) = generate_sample_project(30, 5, 42).unwrap();
        let (tasks_b, resources_b) = generate_sample_project(30, 5, 42).unwrap();
        assert_eq!(tasks_a, tasks_b);
        assert_eq!(resources_a, resources_b);
    }

    #[test]
    fn test_counts_and_ids() {
        let (tasks, resources) = generate_sample_project(10, 4, 1).unwrap();
        assert_eq!(tasks.len(), 10);
        assert_eq!(resources.len(), 4);
        assert_eq!(tasks[0].id, "T1");
        assert_eq!(tasks[9].id, "T10");
        assert_eq!(resources[0].id, "R1");
        assert_eq!(resources[3].id, "R4");
    }

    #[test]
    fn test_resource_skills_cycle() {
        let (_, resources) = generate_sample_project(1, 6, 7).unwrap();
        let skills: Vec<SkillType> = resources.iter().map(|r| r.skill_type).collect();
        assert_eq!(
            skills,
            vec![
                SkillType::Dev,
                SkillType::Qa,
                SkillType::Ops,
                SkillType::Design,
                SkillType::Dev,
                SkillType::Qa,
            ]
        );
    }

    #[test]
    fn test_efficiency_bounds_and_rounding() {
        let (_, resources) = generate_sample_project(1, 20, 3).unwrap();
        for r in &resources {
            assert!(r.efficiency >= 0.7 && r.efficiency <= 1.3);
            let cents = r.efficiency * 100.0;
            assert!((cents - cents.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_task_fields_within_bounds() {
        let (tasks, _) = generate_sample_project(50, 8, 42).unwrap();
        for t in &tasks {
            assert!((1..=5).contains(&t.complexity));
            let extra = t.planned_duration - t.complexity;
            assert!((2..=8).contains(&extra));
            assert!(t.dependencies.len() <= 3);
        }
        assert!(tasks[0].dependencies.is_empty());
    }

    #[test]
    fn test_dependencies_reference_earlier_tasks_only() {
        let (tasks, _) = generate_sample_project(50, 8, 42).unwrap();
        for t in &tasks {
            let own = task_number(&t.id);
            for dep in &t.dependencies {
                let dep_number = task_number(dep);
                assert!(dep_number < own);
                assert!(own - dep_number <= 10);
            }
        }
        assert!(DependencyGraph::build(&tasks).is_ok());
    }

    #[test]
    fn test_zero_sizes() {
        let (tasks, resources) = generate_sample_project(0, 0, 1).unwrap();
        assert!(tasks.is_empty());
        assert!(resources.is_empty());
    }
}
