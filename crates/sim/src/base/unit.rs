use super::Nucleotide;
use crate::errors::SequenceError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of bases in every repeat unit.
pub const REPEAT_SIZE: usize = 178;

/// The CEN178 satellite monomer used to seed a fresh array.
pub const DEFAULT_MONOMER: &str = "AGTATAAGAACTTAAACCGCAACCCGATCTTAAAAGCCTAAGTAGTGTTTCCTTGTTAGAAGACACAAAGCCAAAGACTCATATGGACTTTGGCTACACCATGAAAGCTTTGAGAAGCAAGAAGAAGGTTGGTTAGTGTTTTGGAGTCGAATATGACTTGATGTCATGTGTATGATTG";

const _: () = assert!(DEFAULT_MONOMER.len() == REPEAT_SIZE);

const DEFAULT_MONOMER_BASES: [Nucleotide; REPEAT_SIZE] = {
    let bytes = DEFAULT_MONOMER.as_bytes();
    let mut out = [Nucleotide::A; REPEAT_SIZE];
    let mut i = 0;
    while i < REPEAT_SIZE {
        out[i] = match Nucleotide::from_ascii(bytes[i]) {
            Some(base) => base,
            None => panic!("DEFAULT_MONOMER contains a non-ACGT byte"),
        };
        i += 1;
    }
    out
};

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// One repeat unit: exactly `REPEAT_SIZE` bases.
///
/// The bases live in their own heap allocation so that splicing a
/// `RepeatArray` moves pointers rather than whole units. The length is fixed
/// by the type; the only in-place edit is a single-base substitution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepeatUnit(Box<[Nucleotide; REPEAT_SIZE]>);

impl RepeatUnit {
    /// A unit with every position set to `base`.
    pub fn uniform(base: Nucleotide) -> Self {
        Self(Box::new([base; REPEAT_SIZE]))
    }

    /// A copy of the CEN178 default monomer.
    pub fn monomer() -> Self {
        Self(Box::new(DEFAULT_MONOMER_BASES))
    }

    /// Build a unit from an owned array of bases.
    pub fn from_array(bases: [Nucleotide; REPEAT_SIZE]) -> Self {
        Self(Box::new(bases))
    }

    /// Build a unit from a slice of exactly `REPEAT_SIZE` bases.
    pub fn from_nucleotides(bases: &[Nucleotide]) -> Result<Self, SequenceError> {
        let array: [Nucleotide; REPEAT_SIZE] = bases
            .try_into()
            .map_err(|_| SequenceError::wrong_length(bases.len()))?;
        Ok(Self(Box::new(array)))
    }

    /// Number of bases (always `REPEAT_SIZE`).
    #[inline(always)]
    pub const fn len(&self) -> usize {
        REPEAT_SIZE
    }

    /// Always `false`; provided for symmetry with `len`.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Return the base at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Nucleotide> {
        self.0.get(index).copied()
    }

    /// Replace the base at `index` and return the previous one, or `None`
    /// (leaving the unit untouched) if `index` is out of range.
    #[inline]
    pub fn try_set(&mut self, index: usize, base: Nucleotide) -> Option<Nucleotide> {
        self.0
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, base))
    }

    /// Replace the base at `index` and return the previous one.
    ///
    /// # Panics
    /// Panics if `index >= REPEAT_SIZE` (matching slice indexing). Use
    /// [`RepeatUnit::try_set`] for a checked edit.
    #[inline]
    pub fn set(&mut self, index: usize, base: Nucleotide) -> Nucleotide {
        std::mem::replace(&mut self.0[index], base)
    }

    /// Borrow the bases.
    #[inline]
    pub fn as_slice(&self) -> &[Nucleotide] {
        &self.0[..]
    }

    /// Iterate over the uppercase ASCII bytes of the unit.
    pub fn ascii_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().map(|base| base.to_ascii())
    }

    /// 32-bit FNV-1a hash over the ASCII text of the unit.
    ///
    /// Used as the identity key by the uniqueness tracker and the color
    /// cache. Distinct units can collide; callers treat equal hashes as
    /// equal units.
    pub fn fnv1a(&self) -> u32 {
        self.ascii_bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
            (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
        })
    }
}

impl Default for RepeatUnit {
    fn default() -> Self {
        Self::monomer()
    }
}

impl fmt::Display for RepeatUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &nuc in self.0.iter() {
            write!(f, "{}", nuc.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for RepeatUnit {
    type Err = SequenceError;

    /// Parse exactly `REPEAT_SIZE` ASCII bases, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != REPEAT_SIZE {
            return Err(SequenceError::wrong_length(s.chars().count()));
        }

        let mut bases = [Nucleotide::A; REPEAT_SIZE];
        for (position, (slot, &byte)) in bases.iter_mut().zip(bytes).enumerate() {
            *slot = Nucleotide::from_ascii(byte).ok_or(SequenceError::InvalidChar {
                ch: byte as char,
                position,
            })?;
        }
        Ok(Self(Box::new(bases)))
    }
}

impl Serialize for RepeatUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RepeatUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
