//! Evolution module: the per-generation mutation processes.
//!
//! - **Substitution**: single-base replacements inside one unit
//! - **Indel**: tandem duplication and deletion of whole-unit runs, with
//!   optional hard bounds and elastic pull toward a target size

pub mod mutation;

pub use mutation::{IndelModel, IndelOutcome, IndelTally, SubstitutionModel};
