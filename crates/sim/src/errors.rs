use std::fmt;
use thiserror::Error;

use crate::base::REPEAT_SIZE;

/// Error returned when attempting to convert an invalid byte/character into
/// a `Nucleotide`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidNucleotide(pub u8);

impl fmt::Display for InvalidNucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid nucleotide byte: {} ('{}')", self.0, self.0 as char)
    }
}

impl std::error::Error for InvalidNucleotide {}

/// Error type for failures when parsing a repeat unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A character was not recognized as a valid nucleotide.
    #[error("Invalid character '{ch}' at position {position}")]
    InvalidChar { ch: char, position: usize },

    /// The unit did not have exactly `REPEAT_SIZE` bases.
    #[error("Repeat unit has {found} bases, expected {expected}")]
    WrongLength { expected: usize, found: usize },
}

impl SequenceError {
    pub(crate) fn wrong_length(found: usize) -> Self {
        Self::WrongLength {
            expected: REPEAT_SIZE,
            found,
        }
    }
}

/// Errors from structural edits on a `RepeatArray`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// The half-open range does not lie inside the array.
    #[error("Invalid unit range [{start}, {end}) for array of {len} units")]
    InvalidRange { start: usize, end: usize, len: usize },
}

/// Errors reported by `SimulationParams::validate`.
///
/// The engine itself never raises these; it clamps at use. Validation exists
/// for configuration loaded from files or the command line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// A probability-like value fell outside `[0, 1]`.
    #[error("Invalid probability for {0}: {1} (must be between 0.0 and 1.0)")]
    InvalidProbability(&'static str, f64),

    /// A rate, mean or shape parameter was negative.
    #[error("Parameter {0} must be non-negative, got {1}")]
    Negative(&'static str, f64),

    /// A value was NaN or infinite.
    #[error("Parameter {0} must be finite, got {1}")]
    NotFinite(&'static str, f64),

    /// The array size bounds are inverted.
    #[error("min_array_size ({min}) exceeds max_array_size ({max})")]
    InvertedBounds { min: usize, max: usize },

    /// Elastic bounding needs a non-zero target to measure deviation against.
    #[error("target_size must be positive when elasticity is enabled")]
    ZeroTarget,
}

/// Errors from reading or writing sequence-record files.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Sequence data appeared before any `>` header line.
    #[error("Malformed record file at line {line}: sequence data before header")]
    MissingHeader { line: usize },

    /// A record carried an invalid repeat unit.
    #[error("Record {record}: {source}")]
    InvalidRecord {
        record: usize,
        #[source]
        source: SequenceError,
    },

    #[error(transparent)]
    Parameters(#[from] ParameterError),
}
