//! Discrete-time project simulation: noise model, day loop, and sample
//! project generation.

pub mod generate;
pub mod noise;
pub mod simulator;

pub use generate::generate_sample_project;
pub use noise::NoiseConfig;
pub use simulator::Simulator;
