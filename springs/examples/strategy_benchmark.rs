//! Benchmark comparing memo backends and dispatch strategies.
//!
//! Run with: cargo run --example strategy_benchmark --release
//!
//! Generates a deterministic batch of random condition records (20 springs,
//! up to 6 groups, like real puzzle input) and counts them:
//! - without a memo table (folded records only, it is exponential)
//! - with the hash map memo, sequentially
//! - with every dispatch strategy on the unfolded records

use springs::memo::NoCacheBackend;
use springs::progress::Silent;
use springs::{Dispatcher, Problem, Record, Spring, Strategy, default_threads};
use std::time::Instant;

const RECORDS: usize = 1000;

/// Small xorshift generator so the batch is identical on every run.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

fn random_record(rng: &mut XorShift) -> Record {
    let springs = (0..20)
        .map(|_| match rng.below(3) {
            0 => Spring::Operational,
            1 => Spring::Unknown,
            _ => Spring::Damaged,
        })
        .collect();
    let groups = (0..1 + rng.below(6))
        .map(|_| 1 + rng.below(4) as u16)
        .collect();
    Record::new(springs, groups)
}

fn problems(records: &[Record], unfold: usize) -> Vec<Problem> {
    records
        .iter()
        .map(|record| record.unfold(unfold).problem().unwrap())
        .collect()
}

fn main() {
    println!("Arrangement Counter Benchmark");
    println!("=============================");

    let mut rng = XorShift(0x5eed_cafe_f00d_d00d);
    let records: Vec<Record> = (0..RECORDS).map(|_| random_record(&mut rng)).collect();
    let folded = problems(&records, 1);
    let unfolded = problems(&records, 5);
    println!("{} records, {} threads available\n", RECORDS, default_threads());

    println!("=== Folded records ===");

    let start = Instant::now();
    let no_cache: u64 = folded
        .iter()
        .map(|problem| problem.count_with(NoCacheBackend).0)
        .sum::<Result<u64, _>>()
        .unwrap();
    println!("NoCacheBackend:              {:?}", start.elapsed());

    let start = Instant::now();
    let memoized: u64 = folded
        .iter()
        .map(Problem::count)
        .sum::<Result<u64, _>>()
        .unwrap();
    println!("HashMapBackend:              {:?}", start.elapsed());

    assert_eq!(no_cache, memoized, "memoization changed the result");
    println!("Sum: {}\n", memoized);

    println!("=== Unfolded records ===");

    let mut sums = Vec::new();
    for strategy in [Strategy::Sequential, Strategy::Workers, Strategy::Rayon] {
        let dispatcher = Dispatcher::new(strategy, default_threads());
        let start = Instant::now();
        let sum = dispatcher.sum(&unfolded, &Silent).unwrap();
        println!("{:<28} {:?}", format!("{:?}:", strategy), start.elapsed());
        sums.push(sum);
    }

    assert!(
        sums.windows(2).all(|w| w[0] == w[1]),
        "strategies disagree: {:?}",
        sums
    );
    println!("Sum: {}", sums[0]);
}
