//! Sequence colorizer.
//!
//! Maps a repeat unit to an RGBA color through a fixed random orthogonal
//! projection of its one-hot encoding:
//! - [`Projection`]: the seeded `ENCODING_SIZE x 3` orthonormal matrix
//! - [`ChannelBounds`]: percentile-based per-channel normalization range
//! - [`ColorCache`]: open-addressed hash-to-color memo
//! - [`Colorizer`]: ties the three together behind `get_color`

mod cache;
mod colorizer;
mod projection;

pub use cache::{ColorCache, DEFAULT_CACHE_CAPACITY};
pub use colorizer::{Colorizer, Rgba};
pub use projection::{
    one_hot_encode, ChannelBounds, Projection, BOUNDS_SAMPLES, CHANNELS, ENCODING_SIZE,
};
