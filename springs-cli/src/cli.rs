//! CLI argument parsing using clap

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// How counting work is spread over threads
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum StrategyArg {
    /// No parallelization; count every record in the main thread
    Sequential,
    /// Fixed pool of worker threads fed through a bounded queue (default)
    #[default]
    Workers,
    /// Rayon thread pool with a parallel iterator
    Rayon,
}

impl From<StrategyArg> for springs::Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Sequential => springs::Strategy::Sequential,
            StrategyArg::Workers => springs::Strategy::Workers,
            StrategyArg::Rayon => springs::Strategy::Rayon,
        }
    }
}

/// Hot springs arrangement counter
#[derive(Parser, Debug)]
#[command(name = "springs", about = "Count damaged spring arrangements", version)]
pub struct Args {
    /// Puzzle input file, one record per line ("-" reads stdin)
    #[arg(default_value = "input.txt")]
    pub input: PathBuf,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Unfold factor applied to every record in part 2
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u16).range(1..))]
    pub unfold: u16,

    /// Number of worker threads (defaults to twice the available cores)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization strategy: sequential, workers, or rayon
    #[arg(long, value_enum, default_value = "workers")]
    pub strategy: StrategyArg,

    /// Expected answer for part 1; a different answer is an error
    #[arg(long)]
    pub expect_part1: Option<u64>,

    /// Expected answer for part 2; a different answer is an error
    #[arg(long)]
    pub expect_part2: Option<u64>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Log more (-v: debug, -vv: trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
