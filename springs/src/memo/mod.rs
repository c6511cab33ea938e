//! Memo tables for the arrangement counter
//!
//! The counter never talks to a `HashMap` directly; it goes through a
//! [`Backend`], so the same recursion can run memoized or as the plain
//! exponential search.
//!
//! # Backend Types
//!
//! - [`HashMapBackend`]: Supports arbitrary hashable index types (the default memo table)
//! - [`NoCacheBackend`]: Stores nothing, every lookup misses
//!
//! # Scope
//!
//! A memo table belongs to exactly one problem instance. Keys are only
//! meaningful inside the state space of the instance that produced them, so
//! tables are never shared between instances or threads.
//!
//! # Example
//!
//! ```rust
//! use springs::memo::{Backend, HashMapBackend};
//!
//! let mut memo: HashMapBackend<&str, u64> = HashMapBackend::new();
//! assert_eq!(memo.get(&"a"), None);
//!
//! memo.insert("a", 42);
//! assert_eq!(memo.get(&"a"), Some(&42));
//! assert_eq!(memo.len(), 1);
//! ```

mod backend;

pub use backend::{Backend, HashMapBackend, NoCacheBackend};

#[cfg(test)]
mod tests;
