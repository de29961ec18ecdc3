//! Mutation operators for a tandem repeat array.
//!
//! One generation applies two phases, always in this order:
//!
//! ## Point Substitutions (SNPs)
//! An event count is drawn from the configured count distribution. Each event
//! picks a unit and a position uniformly at random and replaces the base with
//! a different one chosen uniformly from the other three.
//!
//! ## Insertions and Deletions (Indels)
//! Indels act on runs of whole units: a duplication copies `[start, end)` in
//! tandem directly after `end`, a deletion removes the run. Each event draws,
//! in order, its direction, its size and its start index. Events that would
//! run past the end of the array, or (with hard bounding) push the array
//! outside `[min_array_size, max_array_size]`, are skipped rather than
//! truncated or retried.
//!
//! The draw order above is part of the contract: the same seed and parameters
//! always replay the same history.

use crate::base::{Nucleotide, REPEAT_SIZE};
use crate::genome::RepeatArray;
use crate::random::{index, unit_f64, CountDistribution, SizeDistribution};
use crate::simulation::SimulationParams;
use log::trace;
use rand_core::RngCore;

/// Duplication probability range while elastic bounding is active.
pub const ELASTIC_DUP_PROB_RANGE: (f64, f64) = (0.05, 0.95);

/// Single-base substitution process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubstitutionModel {
    /// Expected substitutions per generation for the whole array.
    pub rate: f64,
    pub counts: CountDistribution,
    /// Negative-binomial dispersion; ignored by the Poisson model.
    pub dispersion: f64,
}

impl SubstitutionModel {
    pub fn from_params(params: &SimulationParams) -> Self {
        Self {
            rate: params.snp_rate,
            counts: params.count_distribution,
            dispersion: params.nb_dispersion,
        }
    }

    /// Apply one generation of substitutions in place.
    ///
    /// # Returns
    /// The number of substitutions applied. Zero if the array is empty.
    pub fn apply<R: RngCore + ?Sized>(&self, array: &mut RepeatArray, rng: &mut R) -> u64 {
        let events = self.counts.sample(rng, self.rate, self.dispersion);

        let mut applied = 0;
        for _ in 0..events {
            if array.is_empty() {
                break;
            }
            let unit_idx = index(rng, array.len());
            let pos = index(rng, REPEAT_SIZE);
            if let Some(unit) = array.get_mut(unit_idx) {
                if let Some(old) = unit.get(pos) {
                    let new = different_base(old, rng);
                    if unit.try_set(pos, new).is_some() {
                        applied += 1;
                    }
                }
            }
        }
        applied
    }
}

/// Pick a base uniformly among the three that differ from `old`.
///
/// Rejection sampling over all four bases, so the number of draws consumed
/// varies from call to call.
#[inline]
pub fn different_base<R: RngCore + ?Sized>(old: Nucleotide, rng: &mut R) -> Nucleotide {
    loop {
        let candidate = Nucleotide::ALL[index(rng, Nucleotide::ALL.len())];
        if candidate != old {
            return candidate;
        }
    }
}

/// Hard limits on the array size enforced on individual indel events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBounds {
    pub min: usize,
    pub max: usize,
}

/// Soft pull of the duplication probability toward a target size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elasticity {
    pub target_size: usize,
    pub strength: f64,
}

/// What happened to a single indel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndelOutcome {
    Duplicated(usize),
    Deleted(usize),
    /// The range `[start, start + size)` ran past the end of the array.
    OutOfRange,
    /// Hard bounding rejected the event.
    OutOfBounds,
}

/// Per-generation tally of the indel phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndelTally {
    pub duplications: u64,
    pub deletions: u64,
    pub skipped: u64,
    /// The array was empty when an event came due.
    pub emptied: bool,
}

/// Tandem duplication / deletion process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndelModel {
    /// Expected indel events per generation.
    pub rate: f64,
    pub counts: CountDistribution,
    pub dispersion: f64,
    pub sizes: SizeDistribution,
    /// Mean event size in units.
    pub size_mean: f64,
    /// Tail exponent for power-law sizes.
    pub alpha: f64,
    /// Baseline probability that an event is a duplication.
    pub dup_bias: f64,
    pub bounds: Option<SizeBounds>,
    pub elasticity: Option<Elasticity>,
}

impl IndelModel {
    /// Build the indel process from a parameter record.
    ///
    /// Hard bounds are attached only when `bounding_enabled` is set, and
    /// elasticity only when its strength is positive.
    pub fn from_params(params: &SimulationParams) -> Self {
        let bounds = params.bounding_enabled.then_some(SizeBounds {
            min: params.min_array_size,
            max: params.max_array_size,
        });
        let elasticity = (params.elasticity > 0.0).then_some(Elasticity {
            target_size: params.target_size,
            strength: params.elasticity,
        });

        Self {
            rate: params.indel_rate,
            counts: params.count_distribution,
            dispersion: params.nb_dispersion,
            sizes: params.size_distribution,
            size_mean: params.indel_size_lambda,
            alpha: params.power_law_alpha,
            dup_bias: params.dup_bias,
            bounds,
            elasticity,
        }
    }

    /// Probability that the next event is a duplication, given the current
    /// array length.
    ///
    /// Without elasticity this is `dup_bias` clamped to `[0, 1]`. With it, the
    /// bias is shifted by `-strength * (len - target) / target` and clamped to
    /// [`ELASTIC_DUP_PROB_RANGE`], so an oversized array leans toward
    /// deletion and an undersized one toward duplication. A zero target is
    /// treated as 1.
    pub fn duplication_probability(&self, len: usize) -> f64 {
        let bias = if self.dup_bias.is_nan() { 0.5 } else { self.dup_bias };
        match self.elasticity {
            None => bias.clamp(0.0, 1.0),
            Some(Elasticity { target_size, strength }) => {
                let target = target_size.max(1) as f64;
                let deviation = (len as f64 - target) / target;
                let (lo, hi) = ELASTIC_DUP_PROB_RANGE;
                let p = bias - strength * deviation;
                if p.is_nan() {
                    0.5
                } else {
                    p.clamp(lo, hi)
                }
            }
        }
    }

    /// Apply one generation of indels in place.
    ///
    /// Stops early, setting `emptied`, if an event comes due while the array
    /// is empty.
    pub fn apply<R: RngCore + ?Sized>(&self, array: &mut RepeatArray, rng: &mut R) -> IndelTally {
        let events = self.counts.sample(rng, self.rate, self.dispersion);
        let mut tally = IndelTally::default();

        for _ in 0..events {
            if array.is_empty() {
                tally.emptied = true;
                break;
            }
            match self.apply_event(array, rng) {
                IndelOutcome::Duplicated(_) => tally.duplications += 1,
                IndelOutcome::Deleted(_) => tally.deletions += 1,
                IndelOutcome::OutOfRange | IndelOutcome::OutOfBounds => tally.skipped += 1,
            }
        }
        tally
    }

    /// Draw and apply a single event on a non-empty array.
    pub fn apply_event<R: RngCore + ?Sized>(
        &self,
        array: &mut RepeatArray,
        rng: &mut R,
    ) -> IndelOutcome {
        let len = array.len();
        let is_dup = unit_f64(rng) < self.duplication_probability(len);
        let size = self.sizes.sample(rng, self.size_mean, self.alpha);
        let start = index(rng, len);

        let end = match start.checked_add(size) {
            Some(end) if end <= len => end,
            _ => {
                trace!("skipping indel at {start} (size {size}): past end of {len} units");
                return IndelOutcome::OutOfRange;
            }
        };

        if let Some(bounds) = self.bounds {
            let rejected = if is_dup {
                len + size > bounds.max
            } else {
                len - size < bounds.min
            };
            if rejected {
                trace!(
                    "skipping {} of {size} units: array of {len} would leave [{}, {}]",
                    if is_dup { "duplication" } else { "deletion" },
                    bounds.min,
                    bounds.max
                );
                return IndelOutcome::OutOfBounds;
            }
        }

        let result = if is_dup {
            array.duplicate(start, end).map(|()| IndelOutcome::Duplicated(size))
        } else {
            array.delete(start, end).map(|()| IndelOutcome::Deleted(size))
        };
        result.unwrap_or_else(|err| {
            trace!("skipping indel: {err}");
            IndelOutcome::OutOfRange
        })
    }
}
