use crate::base::RepeatUnit;
pub use crate::errors::ArrayError;
use std::ops::Index;

/// An ordered, growable array of repeat units.
///
/// Every slot owns its unit; duplicating a range deep-copies the units so no
/// two slots share storage. Capacity grows by doubling and never shrinks for
/// the lifetime of the array, so repeated duplicate/delete cycles do not
/// reallocate once the array has reached its peak size.
///
/// Both structural edits shift the tail of the array and are O(n) in the
/// number of units after the affected range.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RepeatArray {
    units: Vec<RepeatUnit>,
}

impl RepeatArray {
    /// Create an empty array.
    pub fn new() -> Self {
        Self { units: Vec::new() }
    }

    /// Create an empty array with room for `capacity` units.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            units: Vec::with_capacity(capacity),
        }
    }

    /// Create an array of `count` independent copies of `unit`, with twice
    /// that many slots reserved.
    pub fn filled(unit: &RepeatUnit, count: usize) -> Self {
        let mut units = Vec::with_capacity(count.saturating_mul(2).max(1));
        units.extend((0..count).map(|_| unit.clone()));
        Self { units }
    }

    /// Take ownership of existing units, in order.
    pub fn from_units(units: Vec<RepeatUnit>) -> Self {
        Self { units }
    }

    /// Number of units currently in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.units.capacity()
    }

    /// Return the unit at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&RepeatUnit> {
        self.units.get(index)
    }

    /// Mutable access to the unit at `index` (for substitutions).
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut RepeatUnit> {
        self.units.get_mut(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[RepeatUnit] {
        &self.units
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RepeatUnit> {
        self.units.iter()
    }

    /// Tandem duplication: copy `[start, end)` and splice the copies in
    /// directly after `end`.
    ///
    /// ```text
    /// before:          [A][B][C][D][E]
    /// duplicate(1, 3): [A][B][C][B][C][D][E]
    /// ```
    pub fn duplicate(&mut self, start: usize, end: usize) -> Result<(), ArrayError> {
        self.check_range(start, end)?;
        let count = end - start;
        if count == 0 {
            return Ok(());
        }

        self.reserve_doubling(self.units.len() + count);
        let copies: Vec<RepeatUnit> = self.units[start..end].to_vec();
        self.units.splice(end..end, copies);
        Ok(())
    }

    /// Remove `[start, end)`, shifting later units left.
    ///
    /// ```text
    /// before:       [A][B][C][D][E]
    /// delete(1, 3): [A][D][E]
    /// ```
    pub fn delete(&mut self, start: usize, end: usize) -> Result<(), ArrayError> {
        self.check_range(start, end)?;
        self.units.drain(start..end);
        Ok(())
    }

    fn check_range(&self, start: usize, end: usize) -> Result<(), ArrayError> {
        if start > end || end > self.units.len() {
            return Err(ArrayError::InvalidRange {
                start,
                end,
                len: self.units.len(),
            });
        }
        Ok(())
    }

    /// Grow capacity geometrically until it holds `needed` units.
    fn reserve_doubling(&mut self, needed: usize) {
        let capacity = self.units.capacity();
        if needed <= capacity {
            return;
        }
        let mut new_capacity = capacity.max(1);
        while new_capacity < needed {
            new_capacity = new_capacity.saturating_mul(2);
        }
        self.units.reserve_exact(new_capacity - self.units.len());
    }
}

impl Index<usize> for RepeatArray {
    type Output = RepeatUnit;

    fn index(&self, index: usize) -> &Self::Output {
        &self.units[index]
    }
}

impl<'a> IntoIterator for &'a RepeatArray {
    type Item = &'a RepeatUnit;
    type IntoIter = std::slice::Iter<'a, RepeatUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

impl FromIterator<RepeatUnit> for RepeatArray {
    fn from_iter<I: IntoIterator<Item = RepeatUnit>>(iter: I) -> Self {
        Self::from_units(iter.into_iter().collect())
    }
}
