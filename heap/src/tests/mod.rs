use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

mod operation_sequences;

pub const SEEDS: [u64; 4] = [7, 42, 1337, 0xdead_beef];

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Small value range so duplicates show up often
pub fn random_values(rng: &mut StdRng, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(-50..50)).collect()
}

pub fn sorted(mut values: Vec<i32>) -> Vec<i32> {
    values.sort();
    values
}
