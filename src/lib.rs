pub mod analysis;
pub mod config;
pub mod core;
pub mod decision;
pub mod error;
pub mod log;
pub mod pipeline;
pub mod risk;
pub mod sim;

pub use analysis::{
    analyze, analyze_with, summarize, AnalysisOptions, AnalysisSummary, TaskAssessment,
};
pub use error::{Error, Result};
