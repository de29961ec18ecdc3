//! Seedable random source and the samplers built on it.
//!
//! - [`Xorshift32`]: the reproducible 32-bit generator owned by each engine
//! - [`distributions`]: Poisson, Gamma, negative binomial, geometric,
//!   power-law and Gaussian samplers, plus the count/size model selectors

pub mod distributions;
mod xorshift;

pub use distributions::{CountDistribution, GaussianSampler, SizeDistribution};
pub use xorshift::{index, unit_f64, Xorshift32};
