//! Action recommendations derived from the rule table.

use std::fmt;

use crate::pipeline::FeatureRecord;
use crate::risk::rule_definitions;

/// Urgency of a recommended action. Ordering puts High first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ActionPriority {
    High,
    Medium,
}

impl ActionPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionPriority::High => "HIGH",
            ActionPriority::Medium => "MEDIUM",
        }
    }
}

impl fmt::Display for ActionPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Action per rule feature. Thresholds come from the rule table so the
/// two stay consistent.
const ACTIONS: [(&str, ActionPriority, &str); 5] = [
    (
        "total_blocked_events",
        ActionPriority::High,
        "Conduct root cause analysis for recurring blocks",
    ),
    (
        "dependencies",
        ActionPriority::Medium,
        "Review and reduce task dependencies if possible",
    ),
    (
        "no_resource_available",
        ActionPriority::High,
        "Allocate additional resources to this task",
    ),
    (
        "rework_count",
        ActionPriority::Medium,
        "Investigate quality issues causing rework",
    ),
    (
        "max_progress_gap",
        ActionPriority::Medium,
        "Increase monitoring frequency or enforce daily updates",
    ),
];

/// Recommend actions for a record, formatted `[PRIORITY] action`.
///
/// Triggered actions sort High before Medium, stable within a priority.
/// A record that triggers nothing gets a single monitoring fallback.
pub fn recommend_actions(record: &FeatureRecord) -> Vec<String> {
    let mut triggered: Vec<(ActionPriority, &str)> = Vec::new();
    for rule in rule_definitions() {
        if record.get(rule.feature) < rule.threshold {
            continue;
        }
        if let Some((_, priority, action)) = ACTIONS.iter().find(|(f, _, _)| *f == rule.feature) {
            triggered.push((*priority, action));
        }
    }
    triggered.sort_by_key(|(priority, _)| *priority);

    if triggered.is_empty() {
        return vec!["Continue monitoring – no immediate action required".to_string()];
    }
    triggered
        .into_iter()
        .map(|(priority, action)| format!("[{}] {}", priority, action))
        .collect()
}
