//! End-to-end analysis: build the tables, train the model, assess every
//! task, and optionally estimate a what-if scenario's effect.

use serde::{Deserialize, Serialize};

use crate::decision::{recommend_actions, simulate_what_if};
use crate::pipeline::{build_tables, TableParams};
use crate::risk::hybrid::round3;
use crate::risk::{
    hybrid_risk_score, DelayPredictor, HeuristicModel, RiskLevel, RiskThresholds, RiskWeights,
};
use crate::{slog_debug, Result};

/// Everything an analysis run needs.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    pub tables: TableParams,
    /// Scenario to estimate on top of the baseline assessment.
    pub what_if: Option<String>,
    pub weights: RiskWeights,
    pub thresholds: RiskThresholds,
}

/// Estimated effect of a what-if scenario on one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatIfImpact {
    pub scenario: String,
    pub new_delay_probability: f64,
    /// Positive when the scenario lowers the delay probability.
    pub probability_reduction: f64,
}

/// Final per-task verdict, serializable for downstream consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskAssessment {
    pub task_id: String,
    pub risk_level: RiskLevel,
    pub risk_score: u32,
    /// Rule component of the combined score, kept for auditability.
    pub rule_score: u32,
    pub delay_probability: f64,
    pub reasons: Vec<String>,
    pub recommended_actions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub what_if_impact: Option<WhatIfImpact>,
}

/// Run a full analysis with the baseline model.
pub fn analyze(options: &AnalysisOptions) -> Result<Vec<TaskAssessment>> {
    let mut model = HeuristicModel::new();
    analyze_with(options, &mut model)
}

/// Run a full analysis with a caller-supplied model.
///
/// The model is trained on this run's feature records before scoring, so
/// assessments always reflect the data they describe.
pub fn analyze_with(
    options: &AnalysisOptions,
    model: &mut dyn DelayPredictor,
) -> Result<Vec<TaskAssessment>> {
    let tables = build_tables(&options.tables)?;
    model.train(&tables.features);
    let probabilities = model.predict_proba(&tables.features);

    let what_if = match &options.what_if {
        Some(scenario) => {
            let perturbed = tables
                .features
                .iter()
                .map(|record| simulate_what_if(record, scenario))
                .collect::<Result<Vec<_>>>()?;
            Some((scenario.clone(), model.predict_proba(&perturbed)))
        }
        None => None,
    };

    let mut assessments = Vec::with_capacity(tables.features.len());
    for (i, record) in tables.features.iter().enumerate() {
        let assessment =
            hybrid_risk_score(record, probabilities[i], options.weights, options.thresholds);

        let what_if_impact = what_if.as_ref().map(|(scenario, new_probs)| WhatIfImpact {
            scenario: scenario.clone(),
            new_delay_probability: round3(new_probs[i]),
            probability_reduction: round3(probabilities[i] - new_probs[i]),
        });

        assessments.push(TaskAssessment {
            task_id: record.task_id.clone(),
            risk_level: assessment.level,
            risk_score: assessment.score,
            rule_score: assessment.rule_score,
            delay_probability: assessment.ml_probability,
            reasons: assessment.reasons.into_iter().map(|r| r.text).collect(),
            recommended_actions: recommend_actions(record),
            what_if_impact,
        });
    }

    let high = assessments
        .iter()
        .filter(|a| a.risk_level == RiskLevel::High)
        .count();
    slog_debug!("analysis complete: {} tasks, {} high risk", assessments.len(), high);

    Ok(assessments)
}

/// Aggregate counts over a set of assessments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_tasks: usize,
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
    pub mean_delay_probability: f64,
}

pub fn summarize(assessments: &[TaskAssessment]) -> AnalysisSummary {
    let mut summary = AnalysisSummary {
        total_tasks: assessments.len(),
        high_risk: 0,
        medium_risk: 0,
        low_risk: 0,
        mean_delay_probability: 0.0,
    };
    for assessment in assessments {
        match assessment.risk_level {
            RiskLevel::High => summary.high_risk += 1,
            RiskLevel::Medium => summary.medium_risk += 1,
            RiskLevel::Low => summary.low_risk += 1,
        }
    }
    if !assessments.is_empty() {
        let total: f64 = assessments.iter().map(|a| a.delay_probability).sum();
        summary.mean_delay_probability = round3(total / assessments.len() as f64);
    }
    summary
}
