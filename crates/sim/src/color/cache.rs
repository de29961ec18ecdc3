//! Open-addressed hash-to-color cache.
//!
//! Keys are 32-bit unit hashes and 0 marks an empty slot, so a unit hashing to
//! 0 is never cached. Lookups trust the hash: a colliding unit gets the color
//! of whichever unit was cached first. The table never resizes or evicts;
//! once three quarters full it stops accepting entries.

use super::Rgba;

/// Default number of cache slots.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

const EMPTY: u32 = 0;

#[derive(Debug, Clone)]
pub struct ColorCache {
    hashes: Vec<u32>,
    colors: Vec<Rgba>,
    len: usize,
}

impl ColorCache {
    /// Create a cache with `capacity` slots (at least 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            hashes: vec![EMPTY; capacity],
            colors: vec![Rgba::default(); capacity],
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.hashes.len()
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the cache has reached its 75% load limit.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len >= self.capacity() * 3 / 4
    }

    #[inline]
    fn home(&self, hash: u32) -> usize {
        hash as usize % self.capacity()
    }

    /// Look up `hash`, probing at most `capacity` slots.
    pub fn get(&self, hash: u32) -> Option<Rgba> {
        if hash == EMPTY {
            return None;
        }
        let cap = self.capacity();
        let mut idx = self.home(hash);
        for _ in 0..cap {
            match self.hashes[idx] {
                EMPTY => return None,
                h if h == hash => return Some(self.colors[idx]),
                _ => idx = (idx + 1) % cap,
            }
        }
        None
    }

    /// Store `color` under `hash` in the first empty slot from its home slot.
    ///
    /// # Returns
    /// `false` if the cache is at its load limit or `hash` is the empty
    /// sentinel; nothing is stored in that case.
    pub fn insert(&mut self, hash: u32, color: Rgba) -> bool {
        if hash == EMPTY || self.is_full() {
            return false;
        }
        let cap = self.capacity();
        let mut idx = self.home(hash);
        // Load stays below 3/4, so an empty slot is always reachable.
        for _ in 0..cap {
            if self.hashes[idx] == EMPTY {
                self.hashes[idx] = hash;
                self.colors[idx] = color;
                self.len += 1;
                return true;
            }
            idx = (idx + 1) % cap;
        }
        false
    }

    /// Mark every slot empty. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.hashes.fill(EMPTY);
        self.len = 0;
    }
}

impl Default for ColorCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}
