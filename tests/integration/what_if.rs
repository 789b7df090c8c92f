//! Scenario estimation through the full analysis path.

use slip::analysis::{analyze, AnalysisOptions};
use slip::decision::{available_scenarios, simulate_what_if};
use slip::pipeline::build_tables;
use slip::Error;

use crate::fixtures;

fn options_with(scenario: &str) -> AnalysisOptions {
    AnalysisOptions {
        tables: fixtures::noisy_params(20, 3, 14),
        what_if: Some(scenario.to_string()),
        ..AnalysisOptions::default()
    }
}

#[test]
fn test_every_scenario_attaches_impacts() {
    for (name, _) in available_scenarios() {
        let assessments = analyze(&options_with(name)).unwrap();
        for assessment in &assessments {
            let impact = assessment.what_if_impact.as_ref().unwrap();
            assert_eq!(impact.scenario, name);
            assert!((0.0..=1.0).contains(&impact.new_delay_probability));
        }
    }
}

#[test]
fn test_reduction_is_consistent_with_baseline() {
    let baseline = analyze(&AnalysisOptions {
        tables: fixtures::noisy_params(20, 3, 14),
        ..AnalysisOptions::default()
    })
    .unwrap();
    let with_scenario = analyze(&options_with("add_resource")).unwrap();

    for (base, scenario) in baseline.iter().zip(&with_scenario) {
        assert_eq!(base.task_id, scenario.task_id);
        assert_eq!(base.delay_probability, scenario.delay_probability);

        // Both sides are rounded to 3 decimals, so allow rounding slack.
        let impact = scenario.what_if_impact.as_ref().unwrap();
        let expected = base.delay_probability - impact.new_delay_probability;
        assert!((impact.probability_reduction - expected).abs() < 0.002);
    }
}

#[test]
fn test_unknown_scenario_fails_the_run() {
    let err = analyze(&options_with("magic")).unwrap_err();
    assert!(matches!(err, Error::UnknownScenario(name) if name == "magic"));
}

#[test]
fn test_scenarios_only_reduce_their_target_features() {
    let tables = build_tables(&fixtures::noisy_params(25, 4, 6)).unwrap();
    for record in &tables.features {
        let adjusted = simulate_what_if(record, "add_resource").unwrap();

        assert!(adjusted.no_resource_available <= record.no_resource_available);
        assert!(record.no_resource_available - adjusted.no_resource_available <= 1);
        assert!(adjusted.total_blocked_events <= record.total_blocked_events);
        assert_eq!(adjusted.dependencies, record.dependencies);
        assert_eq!(adjusted.rework_count, record.rework_count);
        assert_eq!(adjusted.delay, record.delay);
    }
}
