//! Deterministic input synthesis for tests, benchmarks, and the dev
//! binaries. Pairs are generated from a seed so every run of a benchmark or
//! sweep sees identical inputs.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Shape of a generated input pair.
#[derive(Debug, Clone)]
pub struct PairSpec {
    pub first_len: usize,
    pub second_len: usize,
    /// Length of the run copied into both strings. The longest common
    /// substring of the pair is therefore at least this long.
    pub planted: usize,
    /// Code units the random filler draws from. A small alphabet produces
    /// dense incidental matches, a large one keeps runs short.
    pub alphabet: &'static [u8],
}

impl Default for PairSpec {
    fn default() -> Self {
        PairSpec {
            first_len: 256,
            second_len: 256,
            planted: 32,
            alphabet: b"abcdefghijklmnopqrstuvwxyz",
        }
    }
}

/// Generate a pair of random strings sharing one planted run.
///
/// `planted` is clamped to the shorter of the two lengths. The run is
/// overwritten at an independent random offset in each string, so lengths
/// come out exactly as requested.
pub fn generate_pair(seed: u64, spec: &PairSpec) -> (String, String) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let planted = spec.planted.min(spec.first_len).min(spec.second_len);
    let run: Vec<u8> = (0..planted)
        .map(|_| spec.alphabet[rng.gen_range(0..spec.alphabet.len())])
        .collect();
    let first = plant(&mut rng, spec.first_len, &run, spec.alphabet);
    let second = plant(&mut rng, spec.second_len, &run, spec.alphabet);
    (first, second)
}

/// Random text of `len` code units drawn from `alphabet`, for callers that
/// drive their own generator.
pub fn random_text(rng: &mut impl Rng, len: usize, alphabet: &[u8]) -> String {
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

fn plant(rng: &mut impl Rng, len: usize, run: &[u8], alphabet: &[u8]) -> String {
    let mut text: Vec<u8> = (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect();
    if !run.is_empty() && run.len() <= len {
        let at = rng.gen_range(0..=len - run.len());
        text[at..at + run.len()].copy_from_slice(run);
    }
    text.into_iter().map(|b| b as char).collect()
}
