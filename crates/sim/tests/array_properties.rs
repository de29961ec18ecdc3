//! Property tests for structural edits on `RepeatArray`.

use censim_sim::genome::RepeatArray;
use censim_sim::{Nucleotide, RepeatUnit};
use proptest::prelude::*;

/// `n` distinct units, told apart by their leading bases.
fn labelled(n: usize) -> RepeatArray {
    (0..n)
        .map(|i| {
            let mut unit = RepeatUnit::uniform(Nucleotide::A);
            let mut label = i;
            for pos in 0..6 {
                unit.set(pos, Nucleotide::ALL[label % 4]);
                label /= 4;
            }
            unit
        })
        .collect()
}

fn array_and_range() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..60)
        .prop_flat_map(|n| (Just(n), 0..=n))
        .prop_flat_map(|(n, start)| (Just(n), Just(start), start..=n))
}

proptest! {
    #[test]
    fn duplicate_then_delete_restores((n, start, end) in array_and_range()) {
        let original = labelled(n);
        let mut array = original.clone();

        array.duplicate(start, end).unwrap();
        prop_assert_eq!(array.len(), n + (end - start));
        array.delete(end, end + (end - start)).unwrap();

        prop_assert_eq!(array, original);
    }

    #[test]
    fn duplicate_places_copy_after_range((n, start, end) in array_and_range()) {
        let original = labelled(n);
        let mut array = original.clone();
        array.duplicate(start, end).unwrap();

        let count = end - start;
        for i in 0..end {
            prop_assert_eq!(&array[i], &original[i]);
        }
        for i in 0..count {
            prop_assert_eq!(&array[end + i], &original[start + i]);
        }
        for i in end..n {
            prop_assert_eq!(&array[i + count], &original[i]);
        }
    }

    #[test]
    fn delete_shifts_tail_left((n, start, end) in array_and_range()) {
        let original = labelled(n);
        let mut array = original.clone();
        let capacity = array.capacity();
        array.delete(start, end).unwrap();

        prop_assert_eq!(array.len(), n - (end - start));
        prop_assert_eq!(&array.as_slice()[..start], &original.as_slice()[..start]);
        prop_assert_eq!(&array.as_slice()[start..], &original.as_slice()[end..]);
        prop_assert_eq!(array.capacity(), capacity);
    }

    #[test]
    fn out_of_range_edits_rejected(n in 0usize..30, extra in 1usize..10) {
        let mut array = labelled(n);
        let before = array.clone();
        prop_assert!(array.duplicate(0, n + extra).is_err());
        prop_assert!(array.delete(n.saturating_sub(1), n + extra).is_err());
        prop_assert_eq!(array, before);
    }
}
