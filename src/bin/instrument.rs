use commonsub::fixture::{PairSpec, generate_pair};
use commonsub::{brute, instrumentation, table};
use std::time::Instant;

fn run_case(first: &str, second: &str) {
    instrumentation::reset_counters();
    let t0 = Instant::now();
    let hit = brute::longest_common_substring(first, second);
    let dur_b = t0.elapsed();
    let (_, chars, _) = instrumentation::counters_snapshot();
    println!(
        "brute: time={dur_b:?} hit_len={} chars_compared={chars}",
        hit.len()
    );

    instrumentation::reset_counters();
    let t1 = Instant::now();
    let hit = table::longest_common_substring(first, second);
    let dur_t = t1.elapsed();
    let (_, _, cells) = instrumentation::counters_snapshot();
    println!(
        "table: time={dur_t:?} hit_len={} cells_filled={cells} cells_total={}",
        hit.len(),
        first.chars().count() * second.chars().count()
    );
}

fn main() {
    for &(len, planted) in &[(128usize, 16usize), (512, 48), (1024, 96)] {
        let spec = PairSpec {
            first_len: len,
            second_len: len,
            planted,
            ..PairSpec::default()
        };
        let (first, second) = generate_pair(42, &spec);
        println!("case len={len} planted={planted}");
        run_case(&first, &second);
    }
}
