//! Read-only measurements over a repeat array.

pub mod uniqueness;

pub use uniqueness::{
    count_unique, diversity, exact_unique_count, unique_sequences, unit_heterozygosity,
};
