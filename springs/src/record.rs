//! Condition records: parsing, unfolding and conversion into runs.
//!
//! A record line looks like `???.### 1,1,3`: a pattern over `.` (operational),
//! `?` (unknown) and `#` (damaged), a space, and the comma-separated sizes of
//! the contiguous damaged groups.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::counter::Problem;
use crate::error::{CountError, ParseError, RecordError, RunError};
use crate::run::{Cell, Run};

/// A single spring of a condition record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spring {
    Operational,
    Unknown,
    Damaged,
}

impl Spring {
    pub fn as_char(self) -> char {
        match self {
            Spring::Operational => '.',
            Spring::Unknown => '?',
            Spring::Damaged => '#',
        }
    }
}

impl TryFrom<char> for Spring {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(Spring::Operational),
            '?' => Ok(Spring::Unknown),
            '#' => Ok(Spring::Damaged),
            other => Err(other),
        }
    }
}

/// One line of puzzle input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    springs: Vec<Spring>,
    groups: Vec<u16>,
}

impl Record {
    pub fn new(springs: Vec<Spring>, groups: Vec<u16>) -> Self {
        Self { springs, groups }
    }

    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    pub fn groups(&self) -> &[u16] {
        &self.groups
    }

    /// Repeats the pattern `factor` times joined by `?`, and the groups
    /// `factor` times.
    ///
    /// `unfold(1)` returns an identical record; `unfold(0)` an empty one.
    pub fn unfold(&self, factor: usize) -> Record {
        let springs = vec![self.springs.as_slice(); factor].join(&Spring::Unknown);
        let groups = self.groups.repeat(factor);
        Record { springs, groups }
    }

    /// Splits the pattern into its maximal non-operational runs.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::TooLong`] when a run does not fit the packed encoding.
    pub fn problem(&self) -> Result<Problem, RunError> {
        let runs = self
            .springs
            .split(|spring| *spring == Spring::Operational)
            .filter(|chunk| !chunk.is_empty())
            .map(|chunk| {
                let cells = chunk
                    .iter()
                    .map(|spring| match spring {
                        Spring::Damaged => Cell::Damaged,
                        _ => Cell::Unknown,
                    })
                    .collect_vec();
                Run::new(&cells)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Problem::new(runs, self.groups.clone()))
    }

    /// Number of valid arrangements of this record.
    pub fn arrangements(&self) -> Result<u64, CountError> {
        self.problem()?.count()
    }
}

impl FromStr for Record {
    type Err = RecordError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        // Only trailing whitespace is dropped; a leading space means an empty pattern.
        let (pattern, groups) = line
            .trim_end()
            .split_once(' ')
            .ok_or(RecordError::MissingGroups)?;

        let springs = pattern
            .chars()
            .enumerate()
            .map(|(i, c)| {
                Spring::try_from(c).map_err(|found| RecordError::InvalidSpring {
                    found,
                    column: i + 1,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let groups = groups
            .trim()
            .split(',')
            .map(|raw| match raw.trim().parse::<u16>() {
                Ok(size) if size > 0 => Ok(size),
                _ => Err(RecordError::InvalidGroup(raw.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Record { springs, groups })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern: String = self.springs.iter().map(|s| s.as_char()).collect();
        write!(f, "{} {}", pattern, self.groups.iter().join(","))
    }
}

/// Parses every non-blank line of `input`, yielding 1-based line numbers.
pub fn records(input: &str) -> impl Iterator<Item = Result<(usize, Record), ParseError>> + '_ {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            line.parse::<Record>()
                .map(|record| (idx + 1, record))
                .map_err(|source| ParseError::Line {
                    line: idx + 1,
                    source,
                })
        })
}

/// Parses a whole puzzle input, stopping at the first malformed line.
pub fn parse_records(input: &str) -> Result<Vec<Record>, ParseError> {
    records(input).map_ok(|(_, record)| record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let record: Record = "???.### 1,1,3".parse().unwrap();
        assert_eq!(record.springs().len(), 7);
        assert_eq!(record.springs()[3], Spring::Operational);
        assert_eq!(record.springs()[4], Spring::Damaged);
        assert_eq!(record.groups(), &[1, 1, 3]);
        assert_eq!(record.to_string(), "???.### 1,1,3");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "??x.# 1,1".parse::<Record>(),
            Err(RecordError::InvalidSpring {
                found: 'x',
                column: 3
            })
        );
        assert_eq!(
            "???.###".parse::<Record>(),
            Err(RecordError::MissingGroups)
        );
        assert_eq!(
            "???.### 1,a,3".parse::<Record>(),
            Err(RecordError::InvalidGroup("a".to_string()))
        );
        assert_eq!(
            "???.### 1,0".parse::<Record>(),
            Err(RecordError::InvalidGroup("0".to_string()))
        );
        assert_eq!(
            "???.### 1,,3".parse::<Record>(),
            Err(RecordError::InvalidGroup("".to_string()))
        );
    }

    #[test]
    fn test_parse_records_reports_line() {
        let input = "???.### 1,1,3\n\n.??..??...?##. 1,1,3\n?#? 1,-1\n";
        assert_eq!(
            parse_records(input),
            Err(ParseError::Line {
                line: 4,
                source: RecordError::InvalidGroup("-1".to_string()),
            })
        );

        let records = parse_records("???.### 1,1,3\n\n.#. 1\n").unwrap();
        assert_eq!(records.len(), 2);
        let numbered: Vec<usize> = records_lines("???.### 1,1,3\n\n.#. 1\n");
        assert_eq!(numbered, vec![1, 3]);
    }

    fn records_lines(input: &str) -> Vec<usize> {
        records(input).map(|r| r.unwrap().0).collect()
    }

    #[test]
    fn test_unfold() {
        let record: Record = ".# 1".parse().unwrap();
        assert_eq!(record.unfold(5).to_string(), ".#?.#?.#?.#?.# 1,1,1,1,1");
        assert_eq!(record.unfold(1), record);

        let record: Record = "???.### 1,1,3".parse().unwrap();
        assert_eq!(
            record.unfold(5).to_string(),
            "???.###????.###????.###????.###????.### 1,1,3,1,1,3,1,1,3,1,1,3,1,1,3"
        );
    }

    #[test]
    fn test_problem_runs() {
        let record: Record = "..??..#?#.?.. 1,1".parse().unwrap();
        let problem = record.problem().unwrap();
        let runs: Vec<String> = problem.runs.iter().map(|r| r.to_string()).collect();
        assert_eq!(runs, vec!["??", "#?#", "?"]);
        assert_eq!(problem.groups, vec![1, 1]);
    }

    #[test]
    fn test_problem_too_long() {
        let line = format!("{} 1", "?".repeat(121));
        let record: Record = line.parse().unwrap();
        assert_eq!(
            record.problem(),
            Err(RunError::TooLong { len: 121, max: 120 })
        );
        assert_eq!(
            record.arrangements(),
            Err(CountError::Run(RunError::TooLong { len: 121, max: 120 }))
        );
    }

    #[test]
    fn test_empty_pattern_and_trailing_space() {
        let record: Record = " 1".parse().unwrap();
        assert!(record.springs().is_empty());
        assert_eq!(record.groups(), &[1]);
        assert_eq!(record.arrangements(), Ok(0));

        let record: Record = "???.### 1,1,3 \t".parse().unwrap();
        assert_eq!(record.groups(), &[1, 1, 3]);
        assert_eq!(record.arrangements(), Ok(1));
    }

    #[test]
    fn test_arrangements_overflow() {
        let record: Record = ".??..??...?##. 1,1,3".parse().unwrap();
        assert_eq!(record.unfold(21).arrangements(), Ok(1 << 62));
        assert_eq!(record.unfold(22).arrangements(), Err(CountError::Overflow));
    }

    #[test]
    fn test_arrangements() {
        let cases = [
            ("???.### 1,1,3", 1, 1),
            (".??..??...?##. 1,1,3", 4, 16384),
            ("?#?#?#?#?#?#?#? 1,3,1,6", 1, 1),
            ("????.#...#... 4,1,1", 1, 16),
            ("????.######..#####. 1,6,5", 4, 2500),
            ("?###???????? 3,2,1", 10, 506250),
        ];
        for (line, folded, unfolded) in cases {
            let record: Record = line.parse().unwrap();
            assert_eq!(record.arrangements(), Ok(folded), "{line}");
            assert_eq!(record.unfold(5).arrangements(), Ok(unfolded), "{line} unfolded");
        }
    }
}
