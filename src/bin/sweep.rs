use commonsub::fixture::{PairSpec, generate_pair};
use commonsub::{brute, table};
use std::time::Instant;

// Match density is the cost driver for the scanning matcher: the smaller
// the alphabet, the longer the incidental runs it has to extend. The
// tabulated matcher pays for every cell regardless.
fn run_case(len: usize, alphabet: &'static [u8]) {
    let spec = PairSpec {
        first_len: len,
        second_len: len,
        planted: len / 8,
        alphabet,
    };
    let (first, second) = generate_pair(42, &spec);

    let t0 = Instant::now();
    let hit_b = brute::longest_common_substring(&first, &second);
    let dur_b = t0.elapsed();

    let t1 = Instant::now();
    let hit_t = table::longest_common_substring(&first, &second);
    let dur_t = t1.elapsed();

    assert_eq!(hit_b, hit_t);
    println!(
        "len={len} alphabet={} hit_len={} brute={dur_b:?} table={dur_t:?}",
        alphabet.len(),
        hit_b.len()
    );
}

fn main() {
    let alphabets: [&'static [u8]; 3] = [b"ab", b"abcdef", b"abcdefghijklmnopqrstuvwxyz"];
    let lens = [64usize, 256, 1024];
    for &alphabet in &alphabets {
        for &len in &lens {
            run_case(len, alphabet);
        }
    }
}
