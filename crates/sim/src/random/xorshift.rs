use rand_core::{impls, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// Replacement for the all-zero state, which xorshift can never leave.
const ZERO_SEED_REPLACEMENT: u32 = 0x9E37_79B9;

/// 32-bit xorshift generator (shift triple 13/17/5).
///
/// Small, fast and fully reproducible: two generators built from the same
/// seed yield identical streams. Each engine owns its own instance, so the
/// colorizer's stream is independent of the evolution stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Create a generator from a 32-bit seed.
    ///
    /// A zero seed is replaced with a fixed non-zero constant.
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { ZERO_SEED_REPLACEMENT } else { seed };
        Self { state }
    }

    /// Current internal state. Feeding it back into `new` resumes the stream.
    #[inline]
    pub fn state(&self) -> u32 {
        self.state
    }

    #[inline(always)]
    fn advance(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl RngCore for Xorshift32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.advance()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Xorshift32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// Uniform float in `[0, 1]` built from the low 31 bits of one draw.
#[inline]
pub fn unit_f64<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    const MASK: u32 = 0x7FFF_FFFF;
    f64::from(rng.next_u32() & MASK) / f64::from(MASK)
}

/// Uniform index in `[0, n)` by modulo reduction. Returns 0 when `n == 0`.
#[inline]
pub fn index<R: RngCore + ?Sized>(rng: &mut R, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    rng.next_u32() as usize % n
}
