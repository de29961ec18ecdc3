//! Distinct-unit counting and diversity ratios.
//!
//! [`count_unique`] is the fast tracker used for per-generation reporting. It
//! identifies units by their 32-bit FNV-1a hash alone, so two different units
//! that collide are counted once. With ~10^4 units the chance of any collision
//! is around 1%, which is accepted for a progress metric. [`unique_sequences`]
//! and [`exact_unique_count`] compare full unit contents and are the ones to
//! use when correctness matters.

use crate::base::RepeatUnit;
use crate::genome::RepeatArray;
use std::collections::HashMap;

/// Number of distinct unit hashes in `array`.
///
/// Builds a transient open-addressed table of `2 * len` slots with linear
/// probing; a slot value of 0 means empty. A unit whose hash is itself 0 is
/// tracked by a separate flag so it is counted once like any other.
pub fn count_unique(array: &RepeatArray) -> usize {
    let n = array.len();
    if n == 0 {
        return 0;
    }

    let table_size = n * 2;
    let mut seen = vec![0u32; table_size];
    let mut zero_seen = false;
    let mut unique = 0;

    for unit in array {
        let hash = unit.fnv1a();
        if hash == 0 {
            if !zero_seen {
                zero_seen = true;
                unique += 1;
            }
            continue;
        }

        let mut idx = hash as usize % table_size;
        // Load never exceeds one half, so an empty slot always exists.
        while seen[idx] != 0 && seen[idx] != hash {
            idx = (idx + 1) % table_size;
        }
        if seen[idx] == 0 {
            seen[idx] = hash;
            unique += 1;
        }
    }
    unique
}

/// Fraction of units that are distinct: `count_unique / len`, or 0 for an
/// empty array.
///
/// Lies in `(0, 1]` for any non-empty array and equals `1 / len` when every
/// unit is identical.
pub fn diversity(array: &RepeatArray) -> f64 {
    if array.is_empty() {
        return 0.0;
    }
    count_unique(array) as f64 / array.len() as f64
}

/// Exact distinct units with their copy numbers.
pub fn unique_sequences(array: &RepeatArray) -> HashMap<&RepeatUnit, usize> {
    let mut counts: HashMap<&RepeatUnit, usize> = HashMap::new();
    for unit in array {
        *counts.entry(unit).or_insert(0) += 1;
    }
    counts
}

/// Number of distinct units, comparing full contents.
pub fn exact_unique_count(array: &RepeatArray) -> usize {
    unique_sequences(array).len()
}

/// Expected heterozygosity over distinct units, with the small-sample
/// correction: `n/(n-1) * (1 - sum(p_i^2))`.
///
/// This is the probability that two units drawn without replacement differ.
/// 0 for arrays shorter than 2 and for fully homogeneous arrays.
pub fn unit_heterozygosity(array: &RepeatArray) -> f64 {
    let n = array.len();
    if n < 2 {
        return 0.0;
    }
    let sum_squared_freqs: f64 = unique_sequences(array)
        .values()
        .map(|&count| {
            let freq = count as f64 / n as f64;
            freq * freq
        })
        .sum();
    let correction = n as f64 / (n - 1) as f64;
    (correction * (1.0 - sum_squared_freqs)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Nucleotide;

    fn variant(label: usize) -> RepeatUnit {
        let mut unit = RepeatUnit::monomer();
        let old = unit.get(label).unwrap();
        let new = Nucleotide::ALL
            .into_iter()
            .find(|&b| b != old)
            .unwrap();
        unit.set(label, new);
        unit
    }

    #[test]
    fn test_empty_array() {
        let array = RepeatArray::new();
        assert_eq!(count_unique(&array), 0);
        assert_eq!(diversity(&array), 0.0);
        assert_eq!(exact_unique_count(&array), 0);
        assert_eq!(unit_heterozygosity(&array), 0.0);
    }

    #[test]
    fn test_homogeneous_array() {
        let array = RepeatArray::filled(&RepeatUnit::monomer(), 250);
        assert_eq!(count_unique(&array), 1);
        assert!((diversity(&array) - 1.0 / 250.0).abs() < 1e-12);
        assert_eq!(unit_heterozygosity(&array), 0.0);
    }

    #[test]
    fn test_all_distinct() {
        let array: RepeatArray = (0..100).map(variant).collect();
        assert_eq!(count_unique(&array), 100);
        assert_eq!(exact_unique_count(&array), 100);
        assert_eq!(diversity(&array), 1.0);
    }

    #[test]
    fn test_mixed_counts_agree_with_exact() {
        let mut units = Vec::new();
        for i in 0..30 {
            units.push(variant(i % 7));
        }
        units.push(RepeatUnit::monomer());
        let array = RepeatArray::from_units(units);

        // Hash-based count can only undercount; here there are no collisions.
        assert_eq!(count_unique(&array), 8);
        assert_eq!(exact_unique_count(&array), 8);

        let counts = unique_sequences(&array);
        assert_eq!(counts[&RepeatUnit::monomer()], 1);
        assert_eq!(counts.values().sum::<usize>(), 31);
    }

    #[test]
    fn test_heterozygosity_two_equal_classes() {
        let mut units = vec![RepeatUnit::monomer(); 10];
        units.extend(vec![variant(0); 10]);
        let array = RepeatArray::from_units(units);
        assert!((unit_heterozygosity(&array) - 20.0 / 19.0 * 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_heterozygosity_small_arrays() {
        let single = RepeatArray::from_units(vec![RepeatUnit::monomer()]);
        assert_eq!(unit_heterozygosity(&single), 0.0);

        // Two different units always differ when drawn without replacement.
        let pair = RepeatArray::from_units(vec![RepeatUnit::monomer(), variant(0)]);
        assert!((unit_heterozygosity(&pair) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_diversity_in_unit_interval() {
        let array: RepeatArray = (0..40).map(|i| variant(i % 3)).collect();
        let d = diversity(&array);
        assert!(d > 0.0 && d <= 1.0);
        assert!((d - 3.0 / 40.0).abs() < 1e-12);
    }
}
