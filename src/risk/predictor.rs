//! Delay probability models.
//!
//! [`DelayPredictor`] is the seam a real trained model would plug into.
//! [`HeuristicModel`] is the shipped baseline: fixed feature weights,
//! per-column standardization learned at train time, and a logistic
//! squash. Deterministic by construction, so analysis output is stable
//! across runs.

use crate::pipeline::FeatureRecord;

/// Feature columns the models consume, in weight order.
pub const FEATURE_COLS: [&str; 7] = [
    "total_blocked_events",
    "dependencies",
    "no_resource_available",
    "external_block",
    "random_disruption",
    "rework_count",
    "max_progress_gap",
];

/// Fixed non-negative weights, aligned with [`FEATURE_COLS`].
const WEIGHTS: [f64; 7] = [0.25, 0.12, 0.18, 0.08, 0.08, 0.15, 0.14];

/// Spread floor so standardization never divides by zero.
const MIN_SPREAD: f64 = 1.0;

/// A model that estimates per-task delay probabilities.
pub trait DelayPredictor {
    /// Fit the model, replacing any prior fit.
    fn train(&mut self, features: &[FeatureRecord]);

    /// One probability in [0, 1] per input row, order preserved.
    fn predict_proba(&self, features: &[FeatureRecord]) -> Vec<f64>;

    /// Signed per-feature weights, larger magnitude means more influence.
    fn feature_importance(&self) -> Vec<(String, f64)>;
}

#[derive(Debug, Clone, Copy)]
struct ColumnStats {
    mean: f64,
    spread: f64,
    /// +1 when delayed tasks average above the overall mean, else -1.
    direction: f64,
}

/// Deterministic baseline predictor.
///
/// Training captures each column's overall mean, standard deviation, and
/// whether the delayed class sits above or below the overall mean. An
/// untrained model scores the raw weighted sum instead, so prediction
/// always completes.
#[derive(Debug, Clone, Default)]
pub struct HeuristicModel {
    stats: Option<[ColumnStats; 7]>,
}

impl HeuristicModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_trained(&self) -> bool {
        self.stats.is_some()
    }

    fn weighted_sum(&self, record: &FeatureRecord) -> f64 {
        FEATURE_COLS
            .iter()
            .zip(WEIGHTS)
            .enumerate()
            .map(|(i, (col, weight))| {
                let value = f64::from(record.get(col));
                match &self.stats {
                    Some(stats) => {
                        let s = stats[i];
                        weight * s.direction * (value - s.mean) / s.spread
                    }
                    None => weight * value,
                }
            })
            .sum()
    }
}

impl DelayPredictor for HeuristicModel {
    fn train(&mut self, features: &[FeatureRecord]) {
        if features.is_empty() {
            self.stats = None;
            return;
        }

        let n = features.len() as f64;
        let delayed: Vec<&FeatureRecord> = features.iter().filter(|r| r.delay == 1).collect();

        let mut stats = [ColumnStats {
            mean: 0.0,
            spread: MIN_SPREAD,
            direction: 1.0,
        }; 7];

        for (i, col) in FEATURE_COLS.iter().enumerate() {
            let values: Vec<f64> = features.iter().map(|r| f64::from(r.get(col))).collect();
            let mean = values.iter().sum::<f64>() / n;
            let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
            let spread = variance.sqrt().max(MIN_SPREAD);

            let delayed_mean = if delayed.is_empty() {
                mean
            } else {
                delayed.iter().map(|r| f64::from(r.get(col))).sum::<f64>() / delayed.len() as f64
            };
            let direction = if delayed_mean >= mean { 1.0 } else { -1.0 };

            stats[i] = ColumnStats {
                mean,
                spread,
                direction,
            };
        }

        self.stats = Some(stats);
    }

    fn predict_proba(&self, features: &[FeatureRecord]) -> Vec<f64> {
        features
            .iter()
            .map(|record| logistic(self.weighted_sum(record)).clamp(0.0, 1.0))
            .collect()
    }

    fn feature_importance(&self) -> Vec<(String, f64)> {
        FEATURE_COLS
            .iter()
            .zip(WEIGHTS)
            .enumerate()
            .map(|(i, (col, weight))| {
                let importance = match &self.stats {
                    Some(stats) => weight * stats[i].direction * stats[i].spread,
                    None => weight,
                };
                (col.to_string(), importance)
            })
            .collect()
    }
}

fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
