//! Day-by-day project simulation.
//!
//! The simulator advances a set of tasks through discrete days against a
//! shared resource pool, emitting an event record for every significant
//! transition. A noise layer makes the record lossy and late the way real
//! project telemetry is. Identical inputs and seed produce bit-identical
//! logs and final states.

use rand::prelude::*;
use std::collections::HashMap;

use crate::core::{
    DependencyGraph, EventLog, EventReason, EventType, Resource, Task, TaskStatus,
};
use crate::error::Result;
use crate::sim::noise::NoiseConfig;
use crate::{slog_debug, slog_trace};

/// Default horizon for a standalone run, in days.
pub const DEFAULT_MAX_DAYS: u32 = 120;

/// Probability that a surviving log entry is recorded late. Fixed; the
/// configurable noise knobs live in [`NoiseConfig`].
pub const DELAYED_LOG_PROB: f64 = 0.3;

/// Daily progress multiplier when the assigned resource lacks the required
/// skill.
pub const SKILL_PENALTY: f64 = 0.5;

/// Upper bound of the uniform progress regression applied by rework.
pub const MAX_REGRESSION: f64 = 0.2;

/// Discrete-time simulator owning the project state for one run.
///
/// Tasks are processed in creation order every day; all randomness flows
/// through the single owned RNG, in a fixed draw order.
pub struct Simulator {
    tasks: Vec<Task>,
    /// Index from task id to position in `tasks`.
    index: HashMap<String, usize>,
    resources: Vec<Resource>,
    /// Events visible so far, in materialization order.
    logs: Vec<EventLog>,
    /// Delayed events not yet visible; `observed_day` holds the day each
    /// one will surface.
    delayed: Vec<EventLog>,
    day: u32,
    noise: NoiseConfig,
    rng: StdRng,
}

impl Simulator {
    /// Create a simulator over validated inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the noise config is malformed, task ids are not
    /// unique, or the dependencies do not form a DAG over earlier tasks.
    pub fn new(
        tasks: Vec<Task>,
        resources: Vec<Resource>,
        seed: u64,
        noise: NoiseConfig,
    ) -> Result<Self> {
        noise.validate()?;
        DependencyGraph::build(&tasks)?;

        let index = tasks
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.clone(), i))
            .collect();

        slog_debug!(
            "Simulator::new tasks={} resources={} seed={}",
            tasks.len(),
            resources.len(),
            seed
        );

        Ok(Self {
            tasks,
            index,
            resources,
            logs: Vec::new(),
            delayed: Vec::new(),
            day: 0,
            noise,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Advance the simulation by one day.
    pub fn step(&mut self) {
        self.day += 1;
        self.flush_delayed();

        for i in 0..self.tasks.len() {
            if self.tasks[i].is_completed() {
                continue;
            }
            self.advance_task(i);
        }

        // Assignments are day-scoped.
        for resource in &mut self.resources {
            resource.release();
        }
    }

    /// Advance days until every task completes or `max_days` elapse,
    /// whichever comes first.
    pub fn run(&mut self, max_days: u32) {
        for _ in 0..max_days {
            self.step();
            if self.tasks.iter().all(|t| t.is_completed()) {
                break;
            }
        }

        slog_debug!(
            "run finished: day={} completed={}/{} visible={} pending_delayed={}",
            self.day,
            self.tasks.iter().filter(|t| t.is_completed()).count(),
            self.tasks.len(),
            self.logs.len(),
            self.delayed.len()
        );
    }

    /// Run one task through the day's state machine. First match wins.
    fn advance_task(&mut self, i: usize) {
        // 1. External factors can block a task before anything else.
        if self.chance(self.noise.external_block_prob) {
            self.tasks[i].status = TaskStatus::Blocked;
            self.emit(i, EventType::Blocked, Some(EventReason::ExternalBlock));
            return;
        }

        // 2. Every dependency must be completed.
        let waiting = self.tasks[i].dependencies.iter().any(|dep| {
            self.index
                .get(dep)
                .map(|&d| !self.tasks[d].is_completed())
                .unwrap_or(false)
        });
        if waiting {
            self.tasks[i].status = TaskStatus::Blocked;
            self.emit(i, EventType::Blocked, Some(EventReason::Dependencies));
            return;
        }

        // 3. Activation. Resuming after a block is not a fresh start:
        //    actual_start stays unset for a task blocked before it ever
        //    activated, until the completion backfill.
        match self.tasks[i].status {
            TaskStatus::NotStarted => {
                self.tasks[i].actual_start = Some(self.day);
                self.tasks[i].status = TaskStatus::InProgress;
                self.emit(i, EventType::Start, None);
            }
            TaskStatus::Blocked => self.tasks[i].status = TaskStatus::InProgress,
            _ => {}
        }

        // 4. Grab the first idle resource, skill notwithstanding.
        let resource = match self.resources.iter().position(|r| r.is_available()) {
            Some(r) => r,
            None => {
                self.tasks[i].status = TaskStatus::Blocked;
                self.emit(
                    i,
                    EventType::Blocked,
                    Some(EventReason::NoResourceAvailable),
                );
                return;
            }
        };
        let task_id = self.tasks[i].id.clone();
        self.resources[resource].assign(&task_id);

        // 5. A skill mismatch halves the day's progress.
        let mismatch = self.resources[resource].skill_type != self.tasks[i].required_skill;
        let penalty = if mismatch { SKILL_PENALTY } else { 1.0 };

        // 6. A disruption loses the day, but the task stays in progress
        //    and the resource stays consumed.
        if self.chance(self.noise.disruption_prob) {
            self.emit(i, EventType::Blocked, Some(EventReason::RandomDisruption));
            return;
        }

        // 7. Daily progress.
        let base: f64 = self.rng.gen_range(0.05..0.15);
        let increment = base * self.resources[resource].efficiency * penalty
            / self.tasks[i].complexity as f64;
        self.tasks[i].progress += increment;
        let reason = if mismatch {
            Some(EventReason::SkillMismatch)
        } else {
            None
        };
        self.emit(i, EventType::Progress, reason);

        // 8. Rework can claw back some of the progress.
        if self.chance(self.noise.rework_prob) {
            let regression: f64 = self.rng.gen_range(0.05..MAX_REGRESSION);
            self.tasks[i].progress = (self.tasks[i].progress - regression).max(0.0);
            self.emit(i, EventType::Rework, Some(EventReason::Rework));
        }

        // 9. Completion.
        if self.tasks[i].progress >= 1.0 {
            if self.tasks[i].actual_start.is_none() {
                self.tasks[i].actual_start = Some(self.day);
            }
            self.tasks[i].status = TaskStatus::Completed;
            self.tasks[i].actual_end = Some(self.day);
            self.emit(i, EventType::Complete, None);
        }
    }

    /// Pass one candidate event through the noise layer.
    ///
    /// Draw order is part of the reproducibility contract: the drop roll
    /// comes first, then the fixed delay roll, then the delay length.
    fn record(&mut self, event: EventLog) {
        if self.chance(self.noise.log_drop_prob) {
            slog_trace!(
                "event dropped: {} {} day={}",
                event.task_id,
                event.event_type,
                event.day
            );
            return;
        }

        if self.chance(DELAYED_LOG_PROB) {
            let (min, max) = self.noise.log_delay_range;
            let delay = self.rng.gen_range(min..=max);
            self.delayed.push(event.observed_on(self.day + delay));
        } else {
            self.logs.push(event);
        }
    }

    fn emit(&mut self, task: usize, event_type: EventType, reason: Option<EventReason>) {
        let event = EventLog {
            day: self.day,
            task_id: self.tasks[task].id.clone(),
            event_type,
            reason,
            observed_day: self.day,
        };
        self.record(event);
    }

    /// Surface every delayed entry whose observation day has arrived,
    /// preserving enqueue order.
    fn flush_delayed(&mut self) {
        let day = self.day;
        let (ready, pending): (Vec<EventLog>, Vec<EventLog>) =
            self.delayed.drain(..).partition(|e| e.observed_day <= day);
        self.logs.extend(ready);
        self.delayed = pending;
    }

    /// Draw once from the run's RNG against probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// Current day counter; 0 before the first step.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Events visible so far, in materialization order.
    pub fn logs(&self) -> &[EventLog] {
        &self.logs
    }

    /// Task states, in creation order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The resource pool.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Number of delayed entries that have not surfaced yet.
    pub fn pending_delayed(&self) -> usize {
        self.delayed.len()
    }
}
