//! Noise configuration for the simulator.
//!
//! The noise knobs inject the messiness of a real project into a run:
//! random disruptions, rework regressions, external blocks, and lossy,
//! late-arriving telemetry.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Probabilities and ranges for the stochastic layer of a simulation run.
///
/// All probabilities are per task per day except `log_drop_prob`, which is
/// per recorded event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Chance a day of work is lost to a random disruption.
    pub disruption_prob: f64,
    /// Chance a day's progress is followed by a rework regression.
    pub rework_prob: f64,
    /// Chance a task is blocked by an external factor before anything else.
    pub external_block_prob: f64,
    /// Chance a recorded event is silently dropped from the log.
    pub log_drop_prob: f64,
    /// Inclusive range of days a delayed log entry arrives late by.
    pub log_delay_range: (u32, u32),
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            disruption_prob: 0.1,
            rework_prob: 0.05,
            external_block_prob: 0.05,
            log_drop_prob: 0.15,
            log_delay_range: (1, 3),
        }
    }
}

impl NoiseConfig {
    /// A configuration with every probability zeroed and a one-day delay
    /// window, for baseline runs and deterministic tests.
    pub fn quiet() -> Self {
        Self {
            disruption_prob: 0.0,
            rework_prob: 0.0,
            external_block_prob: 0.0,
            log_drop_prob: 0.0,
            log_delay_range: (1, 1),
        }
    }

    /// Check that all probabilities are within [0, 1] and the delay range
    /// is ordered.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        let probs = [
            ("disruption_prob", self.disruption_prob),
            ("rework_prob", self.rework_prob),
            ("external_block_prob", self.external_block_prob),
            ("log_drop_prob", self.log_drop_prob),
        ];
        for (name, p) in probs {
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::Validation(format!(
                    "{} must be within [0, 1], got: {}",
                    name, p
                )));
            }
        }

        let (min, max) = self.log_delay_range;
        if min > max {
            return Err(Error::Validation(format!(
                "log_delay_range min {} exceeds max {}",
                min, max
            )));
        }

        Ok(())
    }
}
