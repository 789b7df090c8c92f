//! Integration test suite for slip.
//!
//! These tests exercise the full path from project generation through
//! simulation, feature aggregation, and risk assessment, crossing the
//! module boundaries the inline unit tests stay inside.
//!
//! # Test Categories
//!
//! - `determinism`: Seeded reproducibility end to end
//! - `pipeline_integrity`: Cross-table invariants on real runs
//! - `risk_assessment`: Assessment output consistency
//! - `what_if`: Scenario estimation through the analysis path
//! - `config_io`: Configuration parsing and file round-trips

mod fixtures;

mod determinism;
mod pipeline_integrity;
mod risk_assessment;
mod what_if;
mod config_io;
