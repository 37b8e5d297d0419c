use pretty_assertions::assert_eq;
use rand::Rng;
use rstest::rstest;

use crate::{
    Heap, HeapError, Mode,
    tests::{SEEDS, random_values, seeded_rng, sorted},
};

const STEPS: usize = 2_000;

fn best(shadow: &[i32], mode: Mode) -> Option<i32> {
    match mode {
        Mode::Min => shadow.iter().min().copied(),
        Mode::Max => shadow.iter().max().copied(),
    }
}

fn take_one(shadow: &mut Vec<i32>, value: i32) {
    let index = shadow
        .iter()
        .position(|v| *v == value)
        .expect("heap returned a value it never held");
    shadow.swap_remove(index);
}

/// Runs a random mix of every mutating operation against a plain `Vec` kept alongside the heap,
/// checking heap order, size accounting and the root after every step.
fn run_sequence(seed: u64, mode: Mode) {
    let mut rng = seeded_rng(seed);
    let initial_len = rng.gen_range(0..40);
    let initial = random_values(&mut rng, initial_len);

    let mut heap = Heap::build(initial.clone(), mode);
    let mut shadow = initial;
    assert!(heap.is_heap_ordered());
    assert_eq!(heap.size(), shadow.len());

    for _ in 0..STEPS {
        let before = heap.size();
        let value = rng.gen_range(-60..60);
        match rng.gen_range(0..7) {
            0 | 1 => {
                heap.insert_key(value);
                shadow.push(value);
                assert_eq!(heap.size(), before + 1);
            }
            2 => match heap.extract_top() {
                Ok(top) => {
                    assert_eq!(Some(top), best(&shadow, mode));
                    take_one(&mut shadow, top);
                    assert_eq!(heap.size(), before - 1);
                }
                Err(e) => {
                    assert_eq!(e, HeapError::Empty);
                    assert!(shadow.is_empty());
                }
            },
            3 => match heap.replace_top(value) {
                Ok(previous) => {
                    assert_eq!(Some(previous), best(&shadow, mode));
                    take_one(&mut shadow, previous);
                    shadow.push(value);
                    assert_eq!(heap.size(), before);
                }
                Err(e) => {
                    assert_eq!(e, HeapError::Empty);
                    assert!(shadow.is_empty());
                }
            },
            4 => {
                let out = heap.push_pop(value);
                shadow.push(value);
                take_one(&mut shadow, out);
                assert_eq!(heap.size(), before);
            }
            5 if before > 0 => {
                let position = rng.gen_range(0..before);
                let previous = heap.update_key(position, value).unwrap();
                take_one(&mut shadow, previous);
                shadow.push(value);
                assert_eq!(heap.size(), before);
            }
            6 if before > 0 => {
                let position = rng.gen_range(0..before);
                let removed = heap.remove_at(position).unwrap();
                take_one(&mut shadow, removed);
                assert_eq!(heap.size(), before - 1);
            }
            _ => {
                assert_eq!(heap.peek().ok().copied(), best(&shadow, mode));
                assert_eq!(heap.size(), before);
            }
        }

        assert!(heap.is_heap_ordered(), "heap order broken with seed {seed}");
        assert_eq!(heap.size(), shadow.len());
        assert_eq!(heap.peek().ok().copied(), best(&shadow, mode));
    }

    let expected = match mode {
        Mode::Min => sorted(shadow),
        Mode::Max => sorted(shadow).into_iter().rev().collect(),
    };
    assert_eq!(heap.into_iter_sorted().collect::<Vec<_>>(), expected);
}

#[rstest]
fn test_random_operation_sequences(
    #[values(Mode::Min, Mode::Max)] mode: Mode,
    #[values(0, 1, 2, 3)] seed_index: usize,
) {
    run_sequence(SEEDS[seed_index], mode);
}

#[test]
fn test_sorted_extraction_matches_sort() {
    for seed in SEEDS {
        let mut rng = seeded_rng(seed);
        let values = random_values(&mut rng, 500);

        let ascending = Heap::build(values.clone(), Mode::Min).into_sorted_vec();
        let descending = Heap::build(values.clone(), Mode::Max).into_sorted_vec();

        let expected = sorted(values);
        assert_eq!(ascending, expected);
        assert_eq!(descending, expected.into_iter().rev().collect::<Vec<_>>());
    }
}

#[test]
fn test_build_is_valid_on_presorted_input() {
    for len in 0..50 {
        let ascending: Vec<i32> = (0..len).collect();
        let descending: Vec<i32> = (0..len).rev().collect();
        for mode in [Mode::Min, Mode::Max] {
            assert!(Heap::build(ascending.clone(), mode).is_heap_ordered());
            assert!(Heap::build(descending.clone(), mode).is_heap_ordered());
        }
    }
}
