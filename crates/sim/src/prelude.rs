//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use censim_sim::prelude::*;
//!
//! let mut sim = Simulation::init(1000, Some(42));
//! sim.run(10);
//! let mut colorizer = Colorizer::new(42);
//! let color = colorizer.get_color(&sim.array()[0]);
//! assert_eq!(color.a, 255);
//! ```

pub use crate::base::{Nucleotide, RepeatUnit, DEFAULT_MONOMER, REPEAT_SIZE};
pub use crate::color::{Colorizer, Rgba};
pub use crate::errors;
pub use crate::genome::RepeatArray;
pub use crate::random::{CountDistribution, SizeDistribution, Xorshift32};
pub use crate::simulation::{ArraySummary, GenerationReport, SimStats, Simulation, SimulationParams};
