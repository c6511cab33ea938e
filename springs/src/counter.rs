//! Memoized arrangement counting.
//!
//! Given the runs of a record (operational springs already stripped) and the
//! ordered damaged-group sizes, counts the ways to place every group so that
//! each damaged cell is covered by exactly one group and groups are separated
//! by at least one operational spring.
//!
//! Each step either shortens the front run or consumes a group, so the
//! recursion always terminates. The memo table turns the exponential search
//! into one evaluation per distinct `(runs, groups)` suffix.
//!
//! Counts are added with overflow checks; a count past `u64::MAX` is reported
//! as [`CountError::Overflow`] instead of wrapping.

use std::cmp::Ordering;

use crate::error::CountError;
use crate::key::StateKey;
use crate::memo::{Backend, HashMapBackend};
use crate::run::{Cell, Run};

/// Default memo table of the counter.
pub type Memo = HashMapBackend<StateKey, u64>;

const MEMO_CAPACITY: usize = 1024;

/// One independent counting task: the runs of a record and its groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub runs: Vec<Run>,
    pub groups: Vec<u16>,
}

impl Problem {
    pub fn new(runs: Vec<Run>, groups: Vec<u16>) -> Self {
        Self { runs, groups }
    }

    /// Counts arrangements with a fresh memo table.
    pub fn count(&self) -> Result<u64, CountError> {
        self.count_with(Memo::with_capacity(MEMO_CAPACITY)).0
    }

    /// Counts arrangements on top of `memo`, handing the table back afterwards.
    pub fn count_with<B: Backend<StateKey, u64>>(&self, memo: B) -> (Result<u64, CountError>, B) {
        let mut counter = Arrangements::new(memo);
        let count = counter.count(&self.runs, &self.groups);
        (count, counter.into_memo())
    }
}

/// Recursive arrangement counter over a memo [`Backend`].
///
/// A counter is meant for a single problem instance. Reusing it for another
/// instance is correct (keys encode the full state) but keeps the previous
/// entries alive.
///
/// # Example
///
/// ```rust
/// use springs::{Arrangements, Record};
/// use springs::memo::HashMapBackend;
///
/// let problem = "?###???????? 3,2,1".parse::<Record>().unwrap().problem().unwrap();
/// let mut counter = Arrangements::new(HashMapBackend::new());
/// assert_eq!(counter.count(&problem.runs, &problem.groups), Ok(10));
/// ```
pub struct Arrangements<B> {
    memo: B,
}

impl Arrangements<Memo> {
    /// Counter backed by a fresh hash map.
    pub fn memoized() -> Self {
        Self::new(Memo::with_capacity(MEMO_CAPACITY))
    }
}

impl<B: Backend<StateKey, u64>> Arrangements<B> {
    pub fn new(memo: B) -> Self {
        Self { memo }
    }

    pub fn memo(&self) -> &B {
        &self.memo
    }

    pub fn into_memo(self) -> B {
        self.memo
    }

    /// Number of ways to place `groups` into `runs`.
    ///
    /// Group sizes must be positive.
    pub fn count(&mut self, runs: &[Run], groups: &[u16]) -> Result<u64, CountError> {
        let (run, group) = match (runs.first(), groups.first()) {
            (None, None) => return Ok(1),
            (None, Some(_)) => return Ok(0),
            // Leftover runs must all be able to turn fully operational.
            (Some(_), None) => return Ok(u64::from(!runs.iter().any(Run::has_damaged))),
            (Some(&run), Some(&group)) => (run, usize::from(group)),
        };
        debug_assert!(group > 0, "group sizes are positive");

        let key = StateKey::new(runs, groups);
        if let Some(&cached) = self.memo.get(&key) {
            return Ok(cached);
        }

        let total = match run.len().cmp(&group) {
            Ordering::Less if run.has_damaged() => 0,
            Ordering::Less => self.count(&runs[1..], groups)?,
            Ordering::Equal => {
                let skip = if run.has_damaged() {
                    0
                } else {
                    self.count(&runs[1..], groups)?
                };
                checked_add(skip, self.count(&runs[1..], &groups[1..])?)?
            }
            Ordering::Greater => {
                let mut total = 0;
                // Leading cell operational: the group starts further right.
                if run.first() == Cell::Unknown {
                    total = self.count_with_front(run.shift(1), &runs[1..], groups)?;
                }
                // Group at the front of the run, followed by an operational cell.
                if run.get(group) == Cell::Unknown {
                    let placed =
                        self.count_with_front(run.shift(group + 1), &runs[1..], &groups[1..])?;
                    total = checked_add(total, placed)?;
                }
                total
            }
        };

        self.memo.insert(key, total);
        Ok(total)
    }

    fn count_with_front(
        &mut self,
        front: Run,
        rest: &[Run],
        groups: &[u16],
    ) -> Result<u64, CountError> {
        if front.is_empty() {
            return self.count(rest, groups);
        }
        let mut runs = Vec::with_capacity(rest.len() + 1);
        runs.push(front);
        runs.extend_from_slice(rest);
        self.count(&runs, groups)
    }
}

fn checked_add(a: u64, b: u64) -> Result<u64, CountError> {
    a.checked_add(b).ok_or(CountError::Overflow)
}

/// Counts arrangements of `groups` in `runs` with a fresh memo table.
pub fn count(runs: &[Run], groups: &[u16]) -> Result<u64, CountError> {
    Arrangements::memoized().count(runs, groups)
}
