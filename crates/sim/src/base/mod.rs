//! Base types for repeat unit representation.
//!
//! This module provides the nucleotide alphabet and the fixed-length
//! `RepeatUnit` that makes up a satellite array.

mod nucleotide;
mod unit;

pub use nucleotide::Nucleotide;
pub use unit::{RepeatUnit, DEFAULT_MONOMER, REPEAT_SIZE};
