//! Error types for the arrangement counter

use thiserror::Error;

/// Error type for a single malformed condition record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Pattern contains a character outside `.`, `?` and `#`
    #[error("invalid spring {found:?} at column {column}")]
    InvalidSpring { found: char, column: usize },
    /// No space-separated group list after the pattern
    #[error("missing group sizes")]
    MissingGroups,
    /// A group size is not a positive integer
    #[error("invalid group size {0:?}")]
    InvalidGroup(String),
}

/// Error type for parsing a whole puzzle input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A line failed to parse
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: RecordError,
    },
}

/// Error type for building packed runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// The run does not fit into the packed representation
    #[error("run of {len} springs exceeds the maximum of {max}")]
    TooLong { len: usize, max: usize },
}

/// Error type for counting the arrangements of a single record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountError {
    /// The record could not be turned into packed runs
    #[error(transparent)]
    Run(#[from] RunError),
    /// The count does not fit into a `u64`
    #[error("arrangement count does not fit in 64 bits")]
    Overflow,
}

/// Error type for distributing problems over worker threads
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Thread pool could not be built
    #[error("thread pool creation failed: {0}")]
    ThreadPool(String),
    /// A worker thread panicked before reporting its results
    #[error("worker {0} panicked")]
    WorkerPanicked(usize),
    /// The rayon pool propagated a panic from one of its threads
    #[error("thread pool panicked while counting")]
    PoolPanicked,
    /// Counting one problem overflowed
    #[error("arrangement count of problem {index} does not fit in 64 bits")]
    Overflow { index: usize },
    /// The sum over all problems overflowed
    #[error("sum of arrangement counts does not fit in 64 bits")]
    SumOverflow,
    /// Workers stopped before every problem was counted
    #[error("only {counted} of {total} problems were counted")]
    Incomplete { counted: usize, total: usize },
}

/// Error type for solving a puzzle part
#[derive(Debug, Error)]
pub enum SolveError {
    /// Input could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    /// A record could not be turned into packed runs
    #[error("record on line {line}: {source}")]
    Run {
        line: usize,
        #[source]
        source: RunError,
    },
    /// The arrangement count of a record overflowed
    #[error("record on line {line}: arrangement count does not fit in 64 bits")]
    Overflow { line: usize },
    /// Dispatching the problems failed
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}
