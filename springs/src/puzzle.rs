//! Puzzle driver: parse a whole input, unfold for part two, dispatch, sum.

use chrono::{DateTime, TimeDelta, Utc};

use crate::counter::Problem;
use crate::dispatch::Dispatcher;
use crate::error::{DispatchError, SolveError};
use crate::progress::Progress;
use crate::record::records;

/// Unfold factor of part two.
pub const DEFAULT_UNFOLD: usize = 5;

/// Puzzle part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    /// Records as written
    One,
    /// Records unfolded before counting
    Two,
}

impl Part {
    pub const ALL: [Part; 2] = [Part::One, Part::Two];

    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }

    pub fn from_number(number: u8) -> Option<Part> {
        match number {
            1 => Some(Part::One),
            2 => Some(Part::Two),
            _ => None,
        }
    }
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Part {}", self.number())
    }
}

/// How a part is solved.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Unfold factor applied in part two
    pub unfold: Option<usize>,
    pub dispatcher: Dispatcher,
}

impl Options {
    fn unfold_factor(&self, part: Part) -> usize {
        match part {
            Part::One => 1,
            Part::Two => self.unfold.unwrap_or(DEFAULT_UNFOLD),
        }
    }
}

/// Answer of a part, with timing of its phases
#[derive(Debug, Clone)]
pub struct Solution {
    pub part: Part,
    pub answer: u64,
    /// When parsing started (UTC)
    pub parse_start: DateTime<Utc>,
    /// When parsing completed and counting started (UTC)
    pub parse_end: DateTime<Utc>,
    /// When counting completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl Solution {
    pub fn parse_duration(&self) -> TimeDelta {
        self.parse_end - self.parse_start
    }

    pub fn solve_duration(&self) -> TimeDelta {
        self.solve_end - self.parse_end
    }
}

/// Parses `input` and turns every record into a problem, unfolded `unfold` times.
///
/// # Errors
///
/// Fails on the first malformed line or on a run that does not fit the packed
/// encoding, reporting the offending line number.
pub fn problems(input: &str, unfold: usize) -> Result<Vec<Problem>, SolveError> {
    numbered_problems(input, unfold).map(|(_, problems)| problems)
}

/// Like [`problems`], also returning the input line of every problem.
fn numbered_problems(
    input: &str,
    unfold: usize,
) -> Result<(Vec<usize>, Vec<Problem>), SolveError> {
    let numbered = records(input)
        .map(|item| {
            let (line, record) = item?;
            record
                .unfold(unfold)
                .problem()
                .map(|problem| (line, problem))
                .map_err(|source| SolveError::Run { line, source })
        })
        .collect::<Result<Vec<_>, SolveError>>()?;
    Ok(numbered.into_iter().unzip())
}

/// Solves one part of the puzzle for `input`.
///
/// # Example
///
/// ```rust
/// use springs::progress::Silent;
/// use springs::puzzle::{solve, Options, Part};
///
/// let input = "???.### 1,1,3\n.??..??...?##. 1,1,3\n";
/// let options = Options::default();
/// assert_eq!(solve(input, Part::One, &options, &Silent).unwrap().answer, 5);
/// assert_eq!(solve(input, Part::Two, &options, &Silent).unwrap().answer, 16385);
/// ```
pub fn solve(
    input: &str,
    part: Part,
    options: &Options,
    progress: &dyn Progress,
) -> Result<Solution, SolveError> {
    let parse_start = Utc::now();
    let (lines, problems) = numbered_problems(input, options.unfold_factor(part))?;
    let parse_end = Utc::now();

    let answer = options
        .dispatcher
        .sum(&problems, progress)
        .map_err(|err| match err {
            DispatchError::Overflow { index } => SolveError::Overflow { line: lines[index] },
            other => SolveError::Dispatch(other),
        })?;
    let solve_end = Utc::now();

    Ok(Solution {
        part,
        answer,
        parse_start,
        parse_end,
        solve_end,
    })
}
