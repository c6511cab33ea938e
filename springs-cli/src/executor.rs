//! Background executor for running puzzle parts

use crate::config::Config;
use crate::error::{CliError, ExecutorError};
use log::debug;
use springs::SolveError;
use springs::progress::LogProgress;
use springs::puzzle::{self, Options, Part, Solution};
use std::sync::mpsc::Sender;

/// Result of running one part
#[derive(Debug)]
pub struct PartOutcome {
    pub part: Part,
    pub result: Result<Solution, SolveError>,
    /// Answer the user expects, if any
    pub expected: Option<u64>,
}

/// Comparison of an answer with the expected one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing to compare against
    Unchecked,
    Correct,
    Mismatch { expected: u64 },
}

impl PartOutcome {
    /// Verdict for a solved part; `None` if solving failed
    pub fn verdict(&self) -> Option<Verdict> {
        let solution = self.result.as_ref().ok()?;
        Some(match self.expected {
            None => Verdict::Unchecked,
            Some(expected) if expected == solution.answer => Verdict::Correct,
            Some(expected) => Verdict::Mismatch { expected },
        })
    }

    /// Turn the outcome into the answer, or the error it represents
    pub fn into_answer(self) -> Result<u64, CliError> {
        let part = self.part;
        let solution = self
            .result
            .map_err(|source| CliError::Solve { part, source })?;
        match self.expected {
            Some(expected) if expected != solution.answer => Err(CliError::AnswerMismatch {
                part,
                expected,
                actual: solution.answer,
            }),
            _ => Ok(solution.answer),
        }
    }
}

/// Runs the requested parts over one input
pub struct Executor {
    input: String,
    parts: Vec<Part>,
    options: Options,
    expected: [Option<u64>; 2],
}

impl Executor {
    /// Create a new executor from config and the already loaded input
    pub fn new(input: String, config: &Config) -> Self {
        Self {
            input,
            parts: config.parts.clone(),
            options: config.options(),
            expected: [config.expected(Part::One), config.expected(Part::Two)],
        }
    }

    /// Parts this executor will run, in order
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Solve every part in order and send each outcome to the channel
    pub fn execute(&self, tx: Sender<PartOutcome>) -> Result<(), ExecutorError> {
        for &part in &self.parts {
            debug!(
                "{part}: {:?} strategy on {} threads",
                self.options.dispatcher.strategy(),
                self.options.dispatcher.threads()
            );
            let progress = LogProgress::new(part.to_string());
            let outcome = PartOutcome {
                part,
                result: puzzle::solve(&self.input, part, &self.options, &progress),
                expected: self.expected[usize::from(part.number() - 1)],
            };
            tx.send(outcome).map_err(|_| ExecutorError::ChannelSend)?;
        }
        Ok(())
    }
}
