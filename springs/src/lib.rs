//! Hot Springs arrangement counter
//!
//! Counts the ways damaged springs can be placed in a condition record such as
//! `?###???????? 3,2,1`, where `?` is unknown, `#` damaged and `.` operational,
//! and the numbers are the sizes of the contiguous damaged groups.
//!
//! # Overview
//!
//! This library provides:
//! - Bit-packed runs of unknown/damaged springs with O(1) queries ([`Run`])
//! - Canonical memo keys for counter states ([`StateKey`])
//! - A memoized recursive counter over pluggable memo backends ([`Arrangements`])
//! - A dispatcher that spreads independent records over worker threads ([`Dispatcher`])
//! - Part one / part two solving of a whole puzzle input ([`puzzle`])
//!
//! # Quick Example
//!
//! ```
//! use springs::Record;
//!
//! let record: Record = ".??..??...?##. 1,1,3".parse().unwrap();
//! assert_eq!(record.arrangements().unwrap(), 4);
//! assert_eq!(record.unfold(5).arrangements().unwrap(), 16384);
//! ```
//!
//! # Whole Inputs
//!
//! ```
//! use springs::progress::Silent;
//! use springs::puzzle::{solve, Options, Part};
//! use springs::{Dispatcher, Strategy};
//!
//! let options = Options {
//!     unfold: None,
//!     dispatcher: Dispatcher::new(Strategy::Workers, 4),
//! };
//! let solution = solve("???.### 1,1,3\n?###???????? 3,2,1\n", Part::One, &options, &Silent).unwrap();
//! assert_eq!(solution.answer, 11);
//! ```

mod brute;
mod counter;
mod dispatch;
mod error;
mod key;
mod record;
mod run;

pub mod memo;
pub mod progress;
pub mod puzzle;

// Re-export public API
pub use brute::{MAX_UNKNOWNS, brute_force};
pub use counter::{Arrangements, Memo, Problem, count};
pub use dispatch::{DEFAULT_QUEUE_CAPACITY, Dispatcher, Strategy, default_threads};
pub use error::{CountError, DispatchError, ParseError, RecordError, RunError, SolveError};
pub use key::StateKey;
pub use record::{Record, Spring, parse_records, records};
pub use run::{Cell, MAX_RUN_LEN, Run};
