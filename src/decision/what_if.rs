//! Scenario perturbation of task features.
//!
//! Each scenario is a fixed set of integer deltas applied to a copy of a
//! feature record, modelling an intervention like adding a resource. The
//! perturbed record can then be re-scored to estimate the intervention's
//! effect.

use serde::Serialize;

use crate::pipeline::FeatureRecord;
use crate::{Error, Result};

/// A named intervention and its feature deltas.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    /// (feature, delta) pairs; perturbed values floor at zero.
    pub effects: &'static [(&'static str, i64)],
}

const SCENARIOS: [Scenario; 3] = [
    Scenario {
        name: "add_resource",
        description: "Add one resource to the project",
        effects: &[("no_resource_available", -1), ("total_blocked_events", -1)],
    },
    Scenario {
        name: "reduce_dependencies",
        description: "Reduce task coupling through refactoring",
        effects: &[("dependencies", -2), ("total_blocked_events", -1)],
    },
    Scenario {
        name: "improve_process",
        description: "Implement quality improvements and better monitoring",
        effects: &[("rework_count", -1), ("max_progress_gap", -2)],
    },
];

fn find(name: &str) -> Result<&'static Scenario> {
    SCENARIOS
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| Error::UnknownScenario(name.to_string()))
}

/// Apply a scenario's deltas to a copy of the record.
///
/// Every touched field floors at zero. An unrecognized scenario name is
/// an error, never a silent no-op.
pub fn simulate_what_if(record: &FeatureRecord, scenario: &str) -> Result<FeatureRecord> {
    let scenario = find(scenario)?;
    let mut adjusted = record.clone();
    for (field, delta) in scenario.effects {
        let next = (i64::from(adjusted.get(field)) + delta).max(0) as u32;
        adjusted.set(field, next);
    }
    Ok(adjusted)
}

/// All scenario names with their descriptions.
pub fn available_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.name, s.description)).collect()
}

/// Change to a single feature under a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldImpact {
    pub field: String,
    pub original: u32,
    pub new: u32,
    pub change: i64,
}

/// Field-level summary of a scenario applied to one record, without
/// re-running any model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioImpact {
    pub scenario: String,
    pub fields: Vec<FieldImpact>,
}

pub fn estimate_scenario_impact(record: &FeatureRecord, scenario: &str) -> Result<ScenarioImpact> {
    let definition = find(scenario)?;
    let adjusted = simulate_what_if(record, scenario)?;

    let fields = definition
        .effects
        .iter()
        .map(|(field, _)| {
            let original = record.get(field);
            let new = adjusted.get(field);
            FieldImpact {
                field: (*field).to_string(),
                original,
                new,
                change: i64::from(new) - i64::from(original),
            }
        })
        .collect();

    Ok(ScenarioImpact {
        scenario: scenario.to_string(),
        fields,
    })
}
