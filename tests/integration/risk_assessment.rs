//! Assessment output consistency over real pipeline data.

use slip::analysis::{analyze, summarize, AnalysisOptions};
use slip::risk::{RiskLevel, RiskThresholds};

use crate::fixtures;

fn options(seed: u64) -> AnalysisOptions {
    AnalysisOptions {
        tables: fixtures::noisy_params(30, 4, seed),
        ..AnalysisOptions::default()
    }
}

#[test]
fn test_levels_match_scores_and_thresholds() {
    let thresholds = RiskThresholds::default();
    let assessments = analyze(&options(2)).unwrap();

    for assessment in &assessments {
        assert!(assessment.risk_score <= 100);
        assert!(assessment.rule_score <= 100);
        let expected = if assessment.risk_score >= thresholds.high {
            RiskLevel::High
        } else if assessment.risk_score >= thresholds.medium {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };
        assert_eq!(assessment.risk_level, expected);
    }
}

#[test]
fn test_probabilities_and_actions_always_present() {
    let assessments = analyze(&options(8)).unwrap();
    for assessment in &assessments {
        assert!((0.0..=1.0).contains(&assessment.delay_probability));
        assert!(!assessment.recommended_actions.is_empty());
    }
}

#[test]
fn test_summary_counts_add_up() {
    let assessments = analyze(&options(31)).unwrap();
    let summary = summarize(&assessments);

    assert_eq!(summary.total_tasks, assessments.len());
    assert_eq!(
        summary.high_risk + summary.medium_risk + summary.low_risk,
        summary.total_tasks
    );
    assert!((0.0..=1.0).contains(&summary.mean_delay_probability));
}

#[test]
fn test_assessments_serialize_to_json() {
    let assessments = analyze(&options(5)).unwrap();
    let json = serde_json::to_string(&assessments).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), assessments.len());
    assert!(rows[0].get("task_id").is_some());
    assert!(rows[0].get("risk_level").is_some());
    assert!(rows[0].get("recommended_actions").is_some());
    assert!(rows[0].get("what_if_impact").is_none());
}
