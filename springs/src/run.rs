//! Bit-packed runs of unknown and damaged springs.
//!
//! A [`Run`] is a maximal block of a condition record with the operational
//! springs stripped out, so each cell is either [`Cell::Unknown`] or
//! [`Cell::Damaged`]. The whole run lives in a single `u128`:
//!
//! ```text
//!  127       120 119                                   0
//! +-------------+--------------------------------------+
//! |   length    |  cells, bit i = cell i (1 = damaged)  |
//! +-------------+--------------------------------------+
//! ```
//!
//! Every query and [`Run::shift`] is a handful of integer operations.

use std::fmt;

use crate::error::RunError;

/// Maximum number of cells a single run can hold.
pub const MAX_RUN_LEN: usize = 120;

const LEN_SHIFT: u32 = 120;
const CELL_MASK: u128 = (1u128 << LEN_SHIFT) - 1;

/// State of a single cell inside a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Unknown,
    Damaged,
}

/// A contiguous block of unknown/damaged cells packed into 128 bits.
///
/// Runs are values: [`Run::shift`] returns a new run and leaves `self` alone.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Run {
    packed: u128,
}

impl Run {
    /// The zero-length run.
    pub const EMPTY: Run = Run { packed: 0 };

    /// Packs `cells` into a run.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::TooLong`] when more than [`MAX_RUN_LEN`] cells are given.
    pub fn new(cells: &[Cell]) -> Result<Self, RunError> {
        if cells.len() > MAX_RUN_LEN {
            return Err(RunError::TooLong {
                len: cells.len(),
                max: MAX_RUN_LEN,
            });
        }

        let bits = cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Damaged)
            .fold(0u128, |bits, (i, _)| bits | (1u128 << i));

        Ok(Self::from_parts(bits, cells.len()))
    }

    fn from_parts(bits: u128, len: usize) -> Self {
        Self {
            packed: (bits & CELL_MASK) | (len as u128) << LEN_SHIFT,
        }
    }

    fn bits(&self) -> u128 {
        self.packed & CELL_MASK
    }

    /// Number of cells remaining.
    pub fn len(&self) -> usize {
        (self.packed >> LEN_SHIFT) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether any cell of the run is damaged.
    ///
    /// A run with a damaged cell has to host at least one group; it can never be
    /// skipped as a whole.
    pub fn has_damaged(&self) -> bool {
        self.bits() != 0
    }

    /// State of the leading cell. An empty run reads as unknown.
    pub fn first(&self) -> Cell {
        self.get(0)
    }

    /// State of the `n`-th cell, counted from the front.
    ///
    /// Cells at or past [`Run::len`] read as [`Cell::Unknown`].
    pub fn get(&self, n: usize) -> Cell {
        if n < self.len() && (self.bits() >> n) & 1 == 1 {
            Cell::Damaged
        } else {
            Cell::Unknown
        }
    }

    /// Returns the run with its first `n` cells removed.
    ///
    /// Shifting by the full length or more yields [`Run::EMPTY`].
    pub fn shift(&self, n: usize) -> Run {
        let len = self.len();
        if n >= len {
            return Run::EMPTY;
        }
        Self::from_parts(self.bits() >> n, len - n)
    }

    /// The packed representation, used for canonical state keys.
    pub fn to_le_bytes(&self) -> [u8; 16] {
        self.packed.to_le_bytes()
    }
}

impl fmt::Debug for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Run({self})")
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (0..self.len()).try_for_each(|i| match self.get(i) {
            Cell::Unknown => f.write_str("?"),
            Cell::Damaged => f.write_str("#"),
        })
    }
}
