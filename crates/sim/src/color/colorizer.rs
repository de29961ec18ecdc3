use super::cache::{ColorCache, DEFAULT_CACHE_CAPACITY};
use super::projection::{ChannelBounds, Projection, CHANNELS};
use crate::base::RepeatUnit;
use crate::random::Xorshift32;
use log::debug;
use serde::{Deserialize, Serialize};

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Deterministic unit-to-color mapping.
///
/// Construction draws a Gaussian `ENCODING_SIZE x 3` matrix from its own
/// generator, orthonormalizes it and fixes per-channel bounds from a synthetic
/// sample. Neither changes afterwards, so a unit's color depends only on its
/// bases and the seed. Colors are memoized by unit hash in a fixed-size cache.
#[derive(Debug, Clone)]
pub struct Colorizer {
    seed: u32,
    projection: Projection,
    bounds: ChannelBounds,
    cache: ColorCache,
}

impl Colorizer {
    /// Build a colorizer with the default cache size.
    pub fn new(seed: u32) -> Self {
        Self::with_cache_capacity(seed, DEFAULT_CACHE_CAPACITY)
    }

    /// Build a colorizer with a cache of `capacity` slots.
    pub fn with_cache_capacity(seed: u32, capacity: usize) -> Self {
        let mut rng = Xorshift32::new(seed);
        let projection = Projection::gaussian(&mut rng);
        let bounds = ChannelBounds::estimate(&projection, &rng);
        debug!(
            "Colorizer seed {seed}: bounds min {:?} max {:?}",
            bounds.min, bounds.max
        );
        Self {
            seed,
            projection,
            bounds,
            cache: ColorCache::with_capacity(capacity),
        }
    }

    /// Color for `unit`, served from the cache when its hash is present.
    pub fn get_color(&mut self, unit: &RepeatUnit) -> Rgba {
        let hash = unit.fnv1a();
        if let Some(color) = self.cache.get(hash) {
            return color;
        }
        let color = self.compute_color(unit);
        self.cache.insert(hash, color);
        color
    }

    /// Color for `unit` computed from scratch, bypassing the cache.
    pub fn compute_color(&self, unit: &RepeatUnit) -> Rgba {
        let [r, g, b] = self.bounds.normalize(self.raw_projection(unit));
        Rgba::opaque(to_channel(r), to_channel(g), to_channel(b))
    }

    /// Unnormalized projection of `unit` onto the three channels.
    pub fn raw_projection(&self, unit: &RepeatUnit) -> [f64; CHANNELS] {
        self.projection.project(unit)
    }

    /// Drop every cached color. Capacity is unchanged.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn bounds(&self) -> &ChannelBounds {
        &self.bounds
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn cache_capacity(&self) -> usize {
        self.cache.capacity()
    }
}

/// Scale a `[0, 1]` value to a byte, truncating.
#[inline]
fn to_channel(value: f64) -> u8 {
    (value * 255.0) as u8
}
