//! Decision support on top of the risk assessments: what-if scenarios,
//! recommended actions, and plain-language explanations.

pub mod actions;
pub mod explain;
pub mod what_if;

pub use actions::{recommend_actions, ActionPriority};
pub use explain::explain_risk;
pub use what_if::{
    available_scenarios, estimate_scenario_impact, simulate_what_if, FieldImpact, Scenario,
    ScenarioImpact,
};
