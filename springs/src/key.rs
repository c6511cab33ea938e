//! Canonical memo keys for counter states.

use crate::run::Run;

/// Byte-exact serialization of a `(runs, groups)` counter state.
///
/// Layout, all little endian:
///
/// ```text
/// [run count: u32][run 0: 16 bytes]...[group count: u32][group 0: u16]...
/// ```
///
/// Counts are fixed width, so two keys compare equal exactly when the states
/// they were built from are identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey(Box<[u8]>);

impl StateKey {
    pub fn new(runs: &[Run], groups: &[u16]) -> Self {
        let mut buf = Vec::with_capacity(8 + runs.len() * 16 + groups.len() * 2);

        buf.extend_from_slice(&(runs.len() as u32).to_le_bytes());
        for run in runs {
            buf.extend_from_slice(&run.to_le_bytes());
        }

        buf.extend_from_slice(&(groups.len() as u32).to_le_bytes());
        for group in groups {
            buf.extend_from_slice(&group.to_le_bytes());
        }

        Self(buf.into_boxed_slice())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
