//! Simulation engine, parameters and run statistics.
//!
//! - `Simulation`: owns the array and its generator and runs generations
//! - `SimulationParams`: the serde-backed parameter record
//! - `SimStats`, `GenerationReport`, `ArraySummary`: counters and snapshots

pub mod engine;
pub mod parameters;
pub mod statistics;

pub use engine::Simulation;
pub use parameters::SimulationParams;
pub use statistics::{ArraySummary, GenerationReport, SimStats};
