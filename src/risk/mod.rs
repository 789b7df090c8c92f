//! Risk scoring: transparent threshold rules, a baseline probability
//! model, and the hybrid blend of the two.

pub mod hybrid;
pub mod predictor;
pub mod rules;

pub use hybrid::{
    hybrid_risk_score, RiskAssessment, RiskLevel, RiskThresholds, RiskWeights,
    DEFAULT_HIGH_THRESHOLD, DEFAULT_MEDIUM_THRESHOLD, DEFAULT_ML_WEIGHT, DEFAULT_RULE_WEIGHT,
};
pub use predictor::{DelayPredictor, HeuristicModel, FEATURE_COLS};
pub use rules::{rule_based_risk, rule_definitions, Reason, Rule, Severity, MAX_RULE_SCORE};
