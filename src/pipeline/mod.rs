//! Data pipeline from raw simulation output to model-ready features.
//!
//! The pipeline runs in fixed stages: generate a project, simulate it,
//! flatten the results into flat rows ([`ingest`]), derive labels and
//! observation flags ([`normalize`]), reject malformed rows
//! ([`validate`]), then aggregate per-task features ([`features`]).

pub mod features;
pub mod ingest;
pub mod normalize;
pub mod validate;

pub use features::{build_task_features, FeatureRecord};
pub use ingest::{ingest, EventRow, TaskRow};
pub use normalize::{normalize_events, normalize_tasks};
pub use validate::{validate_events, validate_tables, validate_tasks};

use serde::{Deserialize, Serialize};

use crate::sim::generate::{DEFAULT_NUM_RESOURCES, DEFAULT_NUM_TASKS, DEFAULT_SEED};
use crate::sim::{generate_sample_project, NoiseConfig, Simulator};
use crate::{slog_debug, Error, Result};

/// Knobs for a full pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableParams {
    pub num_tasks: usize,
    pub num_resources: usize,
    pub seed: u64,
    pub max_days: u32,
    pub noise: NoiseConfig,
}

impl Default for TableParams {
    fn default() -> Self {
        Self {
            num_tasks: DEFAULT_NUM_TASKS,
            num_resources: DEFAULT_NUM_RESOURCES,
            seed: DEFAULT_SEED,
            max_days: 200,
            noise: NoiseConfig::default(),
        }
    }
}

/// The three flat tables a pipeline run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tables {
    pub tasks: Vec<TaskRow>,
    pub events: Vec<EventRow>,
    pub features: Vec<FeatureRecord>,
}

/// Generate, simulate, flatten, clean, and aggregate in one pass.
///
/// Fails if any produced row violates the table contracts, so downstream
/// scoring can assume clean input.
pub fn build_tables(params: &TableParams) -> Result<Tables> {
    let (tasks, resources) =
        generate_sample_project(params.num_tasks, params.num_resources, params.seed)?;
    let mut simulator = Simulator::new(tasks, resources, params.seed, params.noise)?;
    simulator.run(params.max_days);

    let (mut task_rows, mut event_rows) = ingest(&simulator);
    normalize_tasks(&mut task_rows);
    normalize_events(&mut event_rows);

    let problems = validate_tables(&task_rows, &event_rows);
    if !problems.is_empty() {
        return Err(Error::DataQuality { problems });
    }

    let features = build_task_features(&task_rows, &event_rows);
    slog_debug!(
        "built tables: {} tasks, {} events, {} feature rows",
        task_rows.len(),
        event_rows.len(),
        features.len()
    );

    Ok(Tables {
        tasks: task_rows,
        events: event_rows,
        features,
    })
}
