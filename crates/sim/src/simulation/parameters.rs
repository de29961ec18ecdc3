//! Simulation parameters and configuration.
//!
//! [`SimulationParams`] is a plain record: front ends write fields directly
//! (sliders, CLI flags, a JSON file) and the engine re-reads it at the start of
//! every generation. Out-of-range values are clamped where they are used, so
//! an unvalidated record can never crash a run; [`SimulationParams::validate`]
//! is there for callers that want to reject bad input up front.

use crate::base::RepeatUnit;
use crate::errors::{ParameterError, StorageError};
use crate::random::{CountDistribution, SizeDistribution};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default expected indel events per generation.
pub const DEFAULT_INDEL_RATE: f64 = 0.5;
/// Default mean indel size in units.
pub const DEFAULT_INDEL_SIZE_LAMBDA: f64 = 7.6;
/// Default expected substitutions per generation.
pub const DEFAULT_SNP_RATE: f64 = 0.1;
pub const DEFAULT_MIN_ARRAY_SIZE: usize = 300;
pub const DEFAULT_MAX_ARRAY_SIZE: usize = 50_000;
pub const DEFAULT_INITIAL_SIZE: usize = 10_000;
pub const DEFAULT_TARGET_SIZE: usize = 10_000;

/// Parameters for one tandem-array simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Expected substitutions per generation across the whole array
    pub snp_rate: f64,
    /// Expected indel events per generation
    pub indel_rate: f64,
    /// Mean indel size in units
    pub indel_size_lambda: f64,
    /// Collapse threshold and lower hard bound
    pub min_array_size: usize,
    /// Upper hard bound
    pub max_array_size: usize,
    /// Reject indels that would cross the min/max bounds
    pub bounding_enabled: bool,
    /// Size the elastic pull aims for
    pub target_size: usize,
    /// Strength of the elastic pull; 0 disables it
    pub elasticity: f64,
    /// Baseline probability that an indel is a duplication
    pub dup_bias: f64,
    /// Model for per-generation event counts
    pub count_distribution: CountDistribution,
    /// Negative-binomial dispersion (shape)
    pub nb_dispersion: f64,
    /// Model for indel sizes
    pub size_distribution: SizeDistribution,
    /// Power-law tail exponent (lower = heavier tail)
    pub power_law_alpha: f64,
    /// Number of monomer copies in a fresh array
    pub initial_size: usize,
    /// Unit a fresh array is filled with
    pub monomer: RepeatUnit,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            snp_rate: DEFAULT_SNP_RATE,
            indel_rate: DEFAULT_INDEL_RATE,
            indel_size_lambda: DEFAULT_INDEL_SIZE_LAMBDA,
            min_array_size: DEFAULT_MIN_ARRAY_SIZE,
            max_array_size: DEFAULT_MAX_ARRAY_SIZE,
            bounding_enabled: true,
            target_size: DEFAULT_TARGET_SIZE,
            elasticity: 0.0,
            dup_bias: 0.5,
            count_distribution: CountDistribution::default(),
            nb_dispersion: 1.0,
            size_distribution: SizeDistribution::default(),
            power_law_alpha: 2.0,
            initial_size: DEFAULT_INITIAL_SIZE,
            monomer: RepeatUnit::monomer(),
        }
    }
}

impl SimulationParams {
    /// Default parameters with a different starting array size.
    pub fn with_initial_size(initial_size: usize) -> Self {
        Self {
            initial_size,
            ..Self::default()
        }
    }

    /// Check that every field lies in its meaningful range.
    ///
    /// # Errors
    /// Returns the first problem found:
    /// - a non-finite float
    /// - a negative rate, mean, elasticity or dispersion
    /// - `dup_bias` outside `[0, 1]`
    /// - `min_array_size > max_array_size`
    /// - `target_size == 0` while elasticity is enabled
    pub fn validate(&self) -> Result<(), ParameterError> {
        let non_negative = [
            ("snp_rate", self.snp_rate),
            ("indel_rate", self.indel_rate),
            ("indel_size_lambda", self.indel_size_lambda),
            ("elasticity", self.elasticity),
            ("nb_dispersion", self.nb_dispersion),
            ("power_law_alpha", self.power_law_alpha),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() {
                return Err(ParameterError::NotFinite(name, value));
            }
            if value < 0.0 {
                return Err(ParameterError::Negative(name, value));
            }
        }

        if !self.dup_bias.is_finite() {
            return Err(ParameterError::NotFinite("dup_bias", self.dup_bias));
        }
        if !(0.0..=1.0).contains(&self.dup_bias) {
            return Err(ParameterError::InvalidProbability("dup_bias", self.dup_bias));
        }

        if self.min_array_size > self.max_array_size {
            return Err(ParameterError::InvertedBounds {
                min: self.min_array_size,
                max: self.max_array_size,
            });
        }

        if self.elasticity > 0.0 && self.target_size == 0 {
            return Err(ParameterError::ZeroTarget);
        }

        Ok(())
    }

    /// Load parameters from a JSON file and validate them.
    ///
    /// Missing fields take their default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse parameters from JSON text and validate them.
    pub fn from_json_str(text: &str) -> Result<Self, StorageError> {
        let params: Self = serde_json::from_str(text)?;
        params.validate()?;
        Ok(params)
    }

    /// Pretty-printed JSON form of the record.
    pub fn to_json_string(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Whether `monomer` is the built-in CEN178 monomer.
    pub fn uses_default_monomer(&self) -> bool {
        self.monomer == RepeatUnit::monomer()
    }
}
