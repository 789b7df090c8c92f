//! Threshold rules that turn task features into an auditable score.

use serde::{Deserialize, Serialize};

use crate::pipeline::FeatureRecord;

/// Highest score the rule engine reports.
pub const MAX_RULE_SCORE: u32 = 100;

/// Weight class of a triggered rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
}

/// One threshold rule. Fires when the named feature reaches `threshold`.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub feature: &'static str,
    pub threshold: u32,
    pub points: u32,
    pub severity: Severity,
    pub text: &'static str,
}

/// The rule table. Order is significant: reasons and the derived action
/// recommendations follow declaration order.
const RULES: [Rule; 5] = [
    Rule {
        feature: "total_blocked_events",
        threshold: 3,
        points: 25,
        severity: Severity::Critical,
        text: "Frequent task blocking (3+ events)",
    },
    Rule {
        feature: "dependencies",
        threshold: 2,
        points: 15,
        severity: Severity::Warning,
        text: "Heavy dependency constraints (2+ deps)",
    },
    Rule {
        feature: "no_resource_available",
        threshold: 1,
        points: 20,
        severity: Severity::Critical,
        text: "Insufficient resource availability",
    },
    Rule {
        feature: "rework_count",
        threshold: 2,
        points: 15,
        severity: Severity::Warning,
        text: "Repeated rework events (2+ occurrences)",
    },
    Rule {
        feature: "max_progress_gap",
        threshold: 4,
        points: 15,
        severity: Severity::Warning,
        text: "Long progress stagnation (4+ days)",
    },
];

/// Why a rule fired, in user-facing form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    pub text: String,
    pub severity: Severity,
}

/// Score a record against the rule table.
///
/// Returns the score clamped to [0, [`MAX_RULE_SCORE`]] and one reason per
/// fired rule, in table order.
pub fn rule_based_risk(record: &FeatureRecord) -> (u32, Vec<Reason>) {
    let mut score = 0;
    let mut reasons = Vec::new();
    for rule in &RULES {
        if record.get(rule.feature) >= rule.threshold {
            score += rule.points;
            reasons.push(Reason {
                text: rule.text.to_string(),
                severity: rule.severity,
            });
        }
    }
    (score.min(MAX_RULE_SCORE), reasons)
}

/// The rule table itself, for audit output and action derivation.
pub fn rule_definitions() -> &'static [Rule] {
    &RULES
}
