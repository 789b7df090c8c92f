//! Human-readable explanations of a task's risk signals.

use std::cmp::Ordering;

use crate::pipeline::FeatureRecord;
use crate::risk::{rule_definitions, DelayPredictor};

/// Explain a record's risk.
///
/// One line per triggered rule with the observed count, then a single
/// line naming the model's strongest drivers present in this record.
/// When none of the top features have nonzero values, the line lists the
/// top factor names instead so the output is never empty of model
/// context.
pub fn explain_risk(record: &FeatureRecord, model: &dyn DelayPredictor) -> Vec<String> {
    let mut lines = Vec::new();
    for rule in rule_definitions() {
        let value = record.get(rule.feature);
        if value >= rule.threshold {
            lines.push(format!("{} ({} occurrences)", rule.text, value));
        }
    }

    let mut importance = model.feature_importance();
    importance.sort_by(|a, b| {
        b.1.abs()
            .partial_cmp(&a.1.abs())
            .unwrap_or(Ordering::Equal)
    });
    importance.truncate(3);

    let drivers: Vec<String> = importance
        .iter()
        .filter(|(name, _)| record.get(name) > 0)
        .map(|(name, weight)| {
            let direction = match weight.partial_cmp(&0.0) {
                Some(Ordering::Greater) => "increases risk",
                Some(Ordering::Less) => "decreases risk",
                _ => "neutral",
            };
            format!(
                "{} = {} ({})",
                name.replace('_', " "),
                record.get(name),
                direction
            )
        })
        .collect();

    if drivers.is_empty() {
        let names: Vec<String> = importance
            .iter()
            .map(|(name, _)| name.replace('_', " "))
            .collect();
        lines.push(format!("Top ML risk factors: {}", names.join(", ")));
    } else {
        lines.push(format!("ML risk drivers: {}", drivers.join(", ")));
    }

    lines
}
