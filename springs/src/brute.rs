//! Exhaustive reference counter.
//!
//! Tries every operational/damaged assignment of the unknown springs and keeps
//! the ones whose damaged groups match. Exponential, only meant as an oracle
//! for small records.

use crate::record::{Record, Spring};

/// Records with more unknown springs than this are refused.
pub const MAX_UNKNOWNS: usize = 24;

/// Counts arrangements by enumeration.
///
/// Returns `None` if the record has more than [`MAX_UNKNOWNS`] unknown springs.
pub fn brute_force(record: &Record) -> Option<u64> {
    let unknowns: Vec<usize> = record
        .springs()
        .iter()
        .enumerate()
        .filter(|(_, spring)| **spring == Spring::Unknown)
        .map(|(i, _)| i)
        .collect();
    if unknowns.len() > MAX_UNKNOWNS {
        return None;
    }

    let mut springs = record.springs().to_vec();
    let count = (0u32..(1 << unknowns.len()))
        .filter(|mask| {
            for (bit, &i) in unknowns.iter().enumerate() {
                springs[i] = if (mask >> bit) & 1 == 1 {
                    Spring::Damaged
                } else {
                    Spring::Operational
                };
            }
            damaged_groups(&springs) == record.groups()
        })
        .count();

    Some(count as u64)
}

/// Lengths of the contiguous damaged blocks, left to right.
fn damaged_groups(springs: &[Spring]) -> Vec<u16> {
    springs
        .split(|spring| *spring != Spring::Damaged)
        .filter(|block| !block.is_empty())
        .map(|block| block.len() as u16)
        .collect()
}
