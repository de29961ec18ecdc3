//! Probability distributions used by the mutation model and the colorizer.
//!
//! Every sampler draws its uniforms through [`unit_f64`], so the exact stream
//! consumed from a [`Xorshift32`](super::Xorshift32) is fixed by the algorithm
//! chosen here and runs are reproducible from a seed. The samplers accept any
//! `RngCore`, however, and the stateless ones implement
//! `rand_distr::Distribution`.
//!
//! Invalid parameters never fail: non-positive means degenerate to the
//! smallest legal result (0 events, or a size of 1 unit).

use super::xorshift::unit_f64;
use rand_core::RngCore;
use rand_distr::Distribution;
use serde::{Deserialize, Serialize};

/// Lower bound applied to the power-law tail exponent.
pub const MIN_POWER_LAW_ALPHA: f64 = 1.01;

/// Draw a pair of independent standard normal deviates (Marsaglia polar form
/// of the Box-Muller transform).
fn polar_pair<R: RngCore + ?Sized>(rng: &mut R) -> (f64, f64) {
    loop {
        let u = 2.0 * unit_f64(rng) - 1.0;
        let v = 2.0 * unit_f64(rng) - 1.0;
        let s = u * u + v * v;
        if s > 0.0 && s < 1.0 {
            let mul = (-2.0 * s.ln() / s).sqrt();
            return (u * mul, v * mul);
        }
    }
}

/// A single standard normal deviate; the second value of the pair is dropped.
pub fn standard_normal<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    polar_pair(rng).0
}

/// Standard normal sampler that keeps the second deviate of each pair.
///
/// Every other call is served from the cached spare without touching the
/// generator. The spare is an implementation detail; callers should not
/// depend on which calls consume uniforms.
#[derive(Debug, Clone, Default)]
pub struct GaussianSampler {
    spare: Option<f64>,
}

impl GaussianSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> f64 {
        if let Some(spare) = self.spare.take() {
            return spare;
        }
        let (first, second) = polar_pair(rng);
        self.spare = Some(second);
        first
    }
}

/// Largest rate drawn in a single Knuth pass. `e^-lambda` underflows near 745.
pub const POISSON_CHUNK: f64 = 500.0;

/// Poisson distribution sampled by Knuth's multiplication method.
///
/// Multiplies uniforms until the running product drops to `e^-lambda`.
/// Rates above [`POISSON_CHUNK`] are split into chunks of at most that size
/// and the per-chunk draws summed. Cost grows linearly with `lambda`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson {
    lambda: f64,
}

impl Poisson {
    pub fn new(lambda: f64) -> Self {
        Self { lambda }
    }
}

impl Distribution<u64> for Poisson {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        // Also rejects NaN and infinity.
        if !(self.lambda > 0.0) || !self.lambda.is_finite() {
            return 0;
        }

        let mut remaining = self.lambda;
        let mut total = 0u64;
        while remaining > POISSON_CHUNK {
            total += knuth_poisson(rng, POISSON_CHUNK);
            remaining -= POISSON_CHUNK;
        }
        total + knuth_poisson(rng, remaining)
    }
}

fn knuth_poisson<R: RngCore + ?Sized>(rng: &mut R, lambda: f64) -> u64 {
    let limit = (-lambda).exp();
    let mut k = 0u64;
    let mut product = 1.0;
    loop {
        k += 1;
        product *= unit_f64(rng);
        if product <= limit {
            return k - 1;
        }
    }
}

/// Gamma distribution (shape/scale) via Marsaglia and Tsang.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamma {
    shape: f64,
    scale: f64,
}

impl Gamma {
    pub fn new(shape: f64, scale: f64) -> Self {
        Self { shape, scale }
    }
}

impl Distribution<f64> for Gamma {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if !(self.shape > 0.0 && self.scale > 0.0) {
            return 0.0;
        }

        if self.shape < 1.0 {
            // Gamma(a) = Gamma(a + 1) * U^(1/a)
            let boosted = Gamma::new(self.shape + 1.0, self.scale).sample(rng);
            return boosted * unit_f64(rng).powf(1.0 / self.shape);
        }

        let d = self.shape - 1.0 / 3.0;
        let c = 1.0 / (9.0 * d).sqrt();
        loop {
            let x = standard_normal(rng);
            let t = 1.0 + c * x;
            if t <= 0.0 {
                continue;
            }
            let v = t * t * t;
            let u = unit_f64(rng);
            let x2 = x * x;
            if u < 1.0 - 0.0331 * x2 * x2 || u.ln() < 0.5 * x2 + d * (1.0 - v + v.ln()) {
                return d * v * self.scale;
            }
        }
    }
}

/// Negative binomial as a Gamma-Poisson mixture with the given mean.
///
/// Smaller `dispersion` means more overdispersion (variance is
/// `mean + mean^2 / dispersion`). A non-positive dispersion falls back to a
/// plain Poisson with the same mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NegativeBinomial {
    mean: f64,
    dispersion: f64,
}

impl NegativeBinomial {
    pub fn new(mean: f64, dispersion: f64) -> Self {
        Self { mean, dispersion }
    }
}

impl Distribution<u64> for NegativeBinomial {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        if !(self.mean > 0.0) {
            return 0;
        }
        if !(self.dispersion > 0.0) {
            return Poisson::new(self.mean).sample(rng);
        }
        let lambda = Gamma::new(self.dispersion, self.mean / self.dispersion).sample(rng);
        Poisson::new(lambda).sample(rng)
    }
}

/// Geometric distribution parameterized by its mean, floored at 1.
///
/// Success probability is `1 / (1 + mean)`; small events dominate and the
/// tail decays exponentially.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometric {
    mean: f64,
}

impl Geometric {
    pub fn new(mean: f64) -> Self {
        Self { mean }
    }
}

impl Distribution<u64> for Geometric {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        if !(self.mean > 0.0) {
            return 1;
        }
        let p = 1.0 / (1.0 + self.mean);
        let u = unit_f64(rng).max(f64::MIN_POSITIVE);
        let failures = (u.ln() / (-p).ln_1p()).floor();
        (failures as u64).max(1)
    }
}

/// Pareto (power-law) distribution parameterized by its mean, floored at 1.
///
/// `alpha` is the tail exponent, clamped to at least
/// [`MIN_POWER_LAW_ALPHA`]; lower values give heavier tails. The scale is
/// chosen so that the continuous distribution has the requested mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLaw {
    mean: f64,
    alpha: f64,
}

impl PowerLaw {
    pub fn new(mean: f64, alpha: f64) -> Self {
        let alpha = if alpha.is_nan() {
            MIN_POWER_LAW_ALPHA
        } else {
            alpha.max(MIN_POWER_LAW_ALPHA)
        };
        Self { mean, alpha }
    }

    /// The scale (minimum value) of the continuous distribution.
    pub fn scale(&self) -> f64 {
        self.mean * (self.alpha - 1.0) / self.alpha
    }
}

impl Distribution<u64> for PowerLaw {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        if !(self.mean > 0.0) {
            return 1;
        }
        let u = (1.0 - unit_f64(rng)).max(f64::MIN_POSITIVE);
        let x = self.scale() / u.powf(1.0 / self.alpha);
        // Float-to-int casts saturate, so an extreme draw becomes u64::MAX.
        (x.floor() as u64).max(1)
    }
}

/// Model for the number of mutation events per generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountDistribution {
    /// Variance equals the mean.
    #[default]
    Poisson,
    /// Overdispersed counts (variance exceeds the mean).
    NegativeBinomial,
}

impl CountDistribution {
    /// Draw an event count with the given mean. May be 0.
    pub fn sample<R: RngCore + ?Sized>(self, rng: &mut R, mean: f64, dispersion: f64) -> u64 {
        match self {
            Self::Poisson => Poisson::new(mean).sample(rng),
            Self::NegativeBinomial => NegativeBinomial::new(mean, dispersion).sample(rng),
        }
    }
}

/// Model for the number of units affected by one indel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeDistribution {
    /// Sizes cluster around the mean.
    #[default]
    Poisson,
    /// Exponential decay; small events most likely.
    Geometric,
    /// Heavy tail; rare very large events.
    PowerLaw,
}

impl SizeDistribution {
    /// Draw an indel size with the given mean. Always at least 1.
    ///
    /// `alpha` is only used by the power-law model.
    pub fn sample<R: RngCore + ?Sized>(self, rng: &mut R, mean: f64, alpha: f64) -> usize {
        let raw = match self {
            Self::Poisson => Poisson::new(mean).sample(rng),
            Self::Geometric => Geometric::new(mean).sample(rng),
            Self::PowerLaw => PowerLaw::new(mean, alpha).sample(rng),
        };
        usize::try_from(raw).unwrap_or(usize::MAX).max(1)
    }
}
