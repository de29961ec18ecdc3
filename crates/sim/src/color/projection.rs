//! Random orthogonal projection from one-hot sequence space to three channels.

use crate::base::{Nucleotide, RepeatUnit, REPEAT_SIZE};
use crate::random::{index, GaussianSampler, Xorshift32};
use rand_core::RngCore;

/// Length of a one-hot encoded unit: four slots per position.
pub const ENCODING_SIZE: usize = REPEAT_SIZE * 4;

/// Number of output channels.
pub const CHANNELS: usize = 3;

/// Synthetic units drawn when estimating normalization bounds.
pub const BOUNDS_SAMPLES: usize = 1000;
const LOW_RANK: usize = 10;
const HIGH_RANK: usize = 989;
const BOUNDS_PAD: f64 = 0.5;
/// Offset added to the generator state before sampling the bounds.
const BOUNDS_RESEED_OFFSET: u32 = 1000;

/// One-hot encoding: position `i` holding base `b` sets slot `4 * i + b`.
pub fn one_hot_encode(unit: &RepeatUnit) -> Vec<f64> {
    let mut out = vec![0.0; ENCODING_SIZE];
    for (i, base) in unit.as_slice().iter().enumerate() {
        out[i * 4 + base.to_index() as usize] = 1.0;
    }
    out
}

/// A fixed `ENCODING_SIZE x 3` matrix with orthonormal columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    rows: Vec<[f64; CHANNELS]>,
}

impl Projection {
    /// Fill the matrix row by row with standard normal deviates, then
    /// orthonormalize the columns.
    pub fn gaussian<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut gauss = GaussianSampler::new();
        let rows = (0..ENCODING_SIZE)
            .map(|_| {
                let mut row = [0.0; CHANNELS];
                for value in &mut row {
                    *value = gauss.sample(rng);
                }
                row
            })
            .collect();
        let mut projection = Self { rows };
        projection.orthogonalize();
        projection
    }

    /// Gram-Schmidt over the three columns, in order.
    ///
    /// Each column has its component along every earlier column removed and is
    /// then scaled to unit length. A column whose residual is zero stays zero.
    fn orthogonalize(&mut self) {
        for col in 0..CHANNELS {
            for prev in 0..col {
                let (dot, norm_sq) = self.rows.iter().fold((0.0, 0.0), |(dot, norm_sq), row| {
                    (dot + row[col] * row[prev], norm_sq + row[prev] * row[prev])
                });
                if norm_sq > 0.0 {
                    let scale = dot / norm_sq;
                    for row in &mut self.rows {
                        row[col] -= scale * row[prev];
                    }
                }
            }

            let norm = self.column_norm(col);
            if norm > 0.0 {
                for row in &mut self.rows {
                    row[col] /= norm;
                }
            }
        }
    }

    /// Euclidean norm of column `col`.
    pub fn column_norm(&self, col: usize) -> f64 {
        self.rows.iter().map(|row| row[col] * row[col]).sum::<f64>().sqrt()
    }

    /// Dot product of two columns.
    pub fn column_dot(&self, a: usize, b: usize) -> f64 {
        self.rows.iter().map(|row| row[a] * row[b]).sum()
    }

    /// Matrix rows, one per one-hot slot.
    pub fn rows(&self) -> &[[f64; CHANNELS]] {
        &self.rows
    }

    /// Project a unit without materializing its one-hot vector.
    ///
    /// Only one slot per position is set, so the product reduces to summing
    /// one matrix row per base.
    pub fn project(&self, unit: &RepeatUnit) -> [f64; CHANNELS] {
        let mut out = [0.0; CHANNELS];
        for (i, base) in unit.as_slice().iter().enumerate() {
            let row = &self.rows[i * 4 + base.to_index() as usize];
            for (acc, &w) in out.iter_mut().zip(row) {
                *acc += w;
            }
        }
        out
    }

    /// Project an arbitrary encoded vector as a dense matrix product.
    ///
    /// This is the reference form of [`Projection::project`], which skips the
    /// zero slots of a one-hot encoding. Tests and benches compare the two.
    /// Slots past `ENCODING_SIZE` are ignored.
    pub fn project_encoded(&self, encoding: &[f64]) -> [f64; CHANNELS] {
        let mut out = [0.0; CHANNELS];
        for (&x, row) in encoding.iter().zip(&self.rows) {
            for (acc, &w) in out.iter_mut().zip(row) {
                *acc += x * w;
            }
        }
        out
    }
}

/// Per-channel normalization range, fixed once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelBounds {
    pub min: [f64; CHANNELS],
    pub max: [f64; CHANNELS],
}

impl ChannelBounds {
    /// Estimate bounds from [`BOUNDS_SAMPLES`] uniformly random units.
    ///
    /// The sampling generator is seeded from `rng`'s current state plus a
    /// fixed offset. Each channel's bound is the 1st/99th percentile of the
    /// projected samples, padded by half a unit on either side.
    pub fn estimate(projection: &Projection, rng: &Xorshift32) -> Self {
        let mut sampler = Xorshift32::new(rng.state().wrapping_add(BOUNDS_RESEED_OFFSET));

        let mut channels: [Vec<f64>; CHANNELS] =
            std::array::from_fn(|_| Vec::with_capacity(BOUNDS_SAMPLES));
        let mut bases = [Nucleotide::A; REPEAT_SIZE];
        for _ in 0..BOUNDS_SAMPLES {
            for slot in &mut bases {
                *slot = Nucleotide::ALL[index(&mut sampler, Nucleotide::ALL.len())];
            }
            let unit = RepeatUnit::from_array(bases);
            for (values, raw) in channels.iter_mut().zip(projection.project(&unit)) {
                values.push(raw);
            }
        }

        let mut min = [0.0; CHANNELS];
        let mut max = [0.0; CHANNELS];
        for (ch, values) in channels.iter_mut().enumerate() {
            values.sort_by(f64::total_cmp);
            min[ch] = values[LOW_RANK] - BOUNDS_PAD;
            max[ch] = values[HIGH_RANK] + BOUNDS_PAD;
        }
        Self { min, max }
    }

    /// Map raw projections into `[0, 1]` per channel, clamping at both ends.
    ///
    /// A channel with a non-positive range is only clamped.
    pub fn normalize(&self, raw: [f64; CHANNELS]) -> [f64; CHANNELS] {
        let mut out = raw;
        for (ch, value) in out.iter_mut().enumerate() {
            let range = self.max[ch] - self.min[ch];
            if range > 0.0 {
                *value = (*value - self.min[ch]) / range;
            }
            *value = value.clamp(0.0, 1.0);
        }
        out
    }
}
