//! # Simulation Crate
//!
//! The `censim-sim` crate models the generation-by-generation evolution of a
//! tandem satellite repeat array and renders each repeat unit as a color.
//! It includes modules for the array and its units, the substitution and
//! indel processes, the simulation engine, uniqueness statistics, the
//! projection colorizer and FASTA import/export.

pub mod analysis;
pub mod base;
pub mod color;
pub mod errors;
pub mod evolution;
pub mod genome;
pub mod prelude;
pub mod random;
pub mod simulation;
pub mod storage;

pub use base::{Nucleotide, RepeatUnit, REPEAT_SIZE};
