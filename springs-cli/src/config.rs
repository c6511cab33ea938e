//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use crate::input::InputSource;
use log::LevelFilter;
use springs::puzzle::{Options, Part};
use springs::{Dispatcher, Strategy};

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Where to read the records from
    pub input: InputSource,
    /// Parts to run, in order
    pub parts: Vec<Part>,
    /// Unfold factor for part 2
    pub unfold: usize,
    /// Number of threads for counting
    pub thread_count: usize,
    /// Parallelization strategy
    pub strategy: Strategy,
    /// Expected answers, checked after solving
    pub expect_part1: Option<u64>,
    pub expect_part2: Option<u64>,
    /// Quiet mode
    pub quiet: bool,
    /// Default log level (RUST_LOG overrides it)
    pub log_level: LevelFilter,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let parts = match args.part {
            Some(n) => vec![
                Part::from_number(n)
                    .ok_or_else(|| CliError::Config(format!("Invalid part: {n}")))?,
            ],
            None => Part::ALL.to_vec(),
        };

        let thread_count = match args.threads {
            Some(0) => {
                return Err(CliError::Config(
                    "Thread count must be at least 1".to_string(),
                ));
            }
            Some(n) => n,
            None => springs::default_threads(),
        };

        Ok(Config {
            input: InputSource::from_path(&args.input),
            parts,
            unfold: usize::from(args.unfold),
            thread_count,
            strategy: args.strategy.into(),
            expect_part1: args.expect_part1,
            expect_part2: args.expect_part2,
            quiet: args.quiet,
            log_level: log_level(args.quiet, args.verbose),
        })
    }

    /// Solver options for the library
    pub fn options(&self) -> Options {
        Options {
            unfold: Some(self.unfold),
            dispatcher: Dispatcher::new(self.strategy, self.thread_count),
        }
    }

    /// Expected answer for a part, if one was given
    pub fn expected(&self, part: Part) -> Option<u64> {
        match part {
            Part::One => self.expect_part1,
            Part::Two => self.expect_part2,
        }
    }
}

fn log_level(quiet: bool, verbose: u8) -> LevelFilter {
    match (quiet, verbose) {
        (true, 0) => LevelFilter::Warn,
        (false, 0) => LevelFilter::Info,
        (_, 1) => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn config(args: &[&str]) -> Result<Config, CliError> {
        let args = Args::try_parse_from(std::iter::once("springs").chain(args.iter().copied()))
            .unwrap();
        Config::from_args(args)
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.input, InputSource::File(PathBuf::from("input.txt")));
        assert_eq!(config.parts, vec![Part::One, Part::Two]);
        assert_eq!(config.unfold, 5);
        assert_eq!(config.thread_count, springs::default_threads());
        assert_eq!(config.strategy, Strategy::Workers);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_single_part_and_stdin() {
        let config = config(&["-", "-p", "2", "--threads", "3"]).unwrap();
        assert_eq!(config.input, InputSource::Stdin);
        assert_eq!(config.parts, vec![Part::Two]);

        let options = config.options();
        assert_eq!(options.unfold, Some(5));
        assert_eq!(options.dispatcher.threads(), 3);
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert!(matches!(
            config(&["--threads", "0"]),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_expected_answers() {
        let config = config(&["--expect-part1", "21"]).unwrap();
        assert_eq!(config.expected(Part::One), Some(21));
        assert_eq!(config.expected(Part::Two), None);
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(true, 0), LevelFilter::Warn);
        assert_eq!(log_level(false, 1), LevelFilter::Debug);
        assert_eq!(log_level(true, 2), LevelFilter::Trace);
        assert_eq!(log_level(false, 5), LevelFilter::Trace);
    }
}
