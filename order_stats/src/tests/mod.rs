use std::num::NonZeroUsize;

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::{
    BoundedSelector, RunningMedian, kth_largest, kth_smallest, kth_smallest_by_extraction,
    sort_k_sorted,
};

const SEEDS: [u64; 3] = [3, 2024, 0xfeed];

fn random_values(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(-1_000..1_000)).collect()
}

/// Sorted data where each element is nudged at most `k` positions away
fn displaced(rng: &mut StdRng, len: usize, k: usize) -> Vec<i64> {
    let mut values: Vec<i64> = (0..len as i64).collect();
    for chunk in values.chunks_mut(k + 1) {
        chunk.shuffle(rng);
    }
    values
}

#[test]
fn test_selection_agrees_with_sorting() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let values = random_values(&mut rng, 300);
        let mut sorted = values.clone();
        sorted.sort();

        for rank in [1, 2, 17, 150, 299, 300] {
            let k = NonZeroUsize::new(rank).unwrap();
            assert_eq!(kth_smallest(values.clone(), k), Ok(sorted[rank - 1]));
            assert_eq!(kth_smallest_by_extraction(values.clone(), k), Ok(sorted[rank - 1]));
            assert_eq!(kth_largest(values.clone(), k), Ok(sorted[sorted.len() - rank]));
        }
    }
}

#[test]
fn test_selector_streams_match_sorted_prefix() {
    let mut rng = StdRng::seed_from_u64(11);
    let values = random_values(&mut rng, 500);
    let mut sorted = values.clone();
    sorted.sort();

    let mut selector = BoundedSelector::smallest(NonZeroUsize::new(25).unwrap());
    selector.extend(values);

    assert_eq!(selector.into_sorted_vec(), sorted[..25].to_vec());
}

#[test]
fn test_k_sorted_reconstruction() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        for k in [0, 1, 3, 8] {
            let input = displaced(&mut rng, 200, k);
            let expected: Vec<i64> = (0..200).collect();
            assert_eq!(sort_k_sorted(input, k), expected);
        }
    }
}

#[test]
fn test_running_median_agrees_with_sorting() {
    let mut rng = StdRng::seed_from_u64(5);
    let values = random_values(&mut rng, 120);

    let mut median = RunningMedian::new();
    for (seen, value) in values.iter().enumerate() {
        median.push(*value);

        let mut prefix = values[..=seen].to_vec();
        prefix.sort();
        let middle = prefix.len() / 2;
        let expected = if prefix.len() % 2 == 1 {
            prefix[middle] as f64
        } else {
            (prefix[middle - 1] + prefix[middle]) as f64 / 2.0
        };

        let found = match median.median().unwrap() {
            crate::Median::Single(value) => *value as f64,
            crate::Median::Pair(low, high) => (low + high) as f64 / 2.0,
        };
        assert_eq!(found, expected);
    }
}
