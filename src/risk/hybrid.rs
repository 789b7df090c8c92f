//! Blends the rule score with a model probability into one risk level.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pipeline::FeatureRecord;
use crate::risk::rules::{rule_based_risk, Reason};

pub const DEFAULT_RULE_WEIGHT: f64 = 0.6;
pub const DEFAULT_ML_WEIGHT: f64 = 0.4;
pub const DEFAULT_HIGH_THRESHOLD: u32 = 70;
pub const DEFAULT_MEDIUM_THRESHOLD: u32 = 40;

/// Relative weight of the rule score versus the model probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskWeights {
    pub rule_weight: f64,
    pub ml_weight: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            rule_weight: DEFAULT_RULE_WEIGHT,
            ml_weight: DEFAULT_ML_WEIGHT,
        }
    }
}

/// Score cutoffs separating the three risk levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    pub high: u32,
    pub medium: u32,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            high: DEFAULT_HIGH_THRESHOLD,
            medium: DEFAULT_MEDIUM_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Combined assessment for one task record, carrying the inputs that
/// produced it so the score can be audited later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u32,
    pub level: RiskLevel,
    pub rule_score: u32,
    pub ml_probability: f64,
    pub weights: RiskWeights,
    pub thresholds: RiskThresholds,
    pub reasons: Vec<Reason>,
}

/// Blend the rule score with a model probability.
///
/// `final = floor(rule_weight * rule_score + ml_weight * probability * 100)`
/// clamped to [0, 100]. The probability is clamped to [0, 1] before use and
/// reported rounded to three decimals.
pub fn hybrid_risk_score(
    record: &FeatureRecord,
    ml_probability: f64,
    weights: RiskWeights,
    thresholds: RiskThresholds,
) -> RiskAssessment {
    let (rule_score, reasons) = rule_based_risk(record);
    let probability = ml_probability.clamp(0.0, 1.0);

    let combined =
        weights.rule_weight * f64::from(rule_score) + weights.ml_weight * probability * 100.0;
    let score = (combined.floor() as i64).clamp(0, 100) as u32;

    let level = if score >= thresholds.high {
        RiskLevel::High
    } else if score >= thresholds.medium {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    RiskAssessment {
        score,
        level,
        rule_score,
        ml_probability: round3(probability),
        weights,
        thresholds,
        reasons,
    }
}

/// Round to three decimal places for reporting.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
