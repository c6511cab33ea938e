//! Storage backends for memo tables.

use std::collections::HashMap;
use std::hash::Hash;

/// A storage backend for memoized values.
///
/// # Contract
///
/// - `get` returns the value stored by the latest `insert` for that index
/// - `insert` on an existing index replaces the value
/// - A backend may decline to store anything; callers must treat a miss as
///   "compute it"
pub trait Backend<I, K> {
    /// Returns the cached value for the given index, if any.
    fn get(&self, index: &I) -> Option<&K>;

    /// Stores a computed value.
    fn insert(&mut self, index: I, value: K);

    /// Number of cached entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached entry.
    fn clear(&mut self);
}

/// A HashMap-based backend for arbitrary hashable indices.
///
/// This backend supports any index type that implements `Hash + Eq`.
/// It is suitable for sparse indices or non-integer index types.
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    data: HashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    /// Creates a new empty HashMapBackend.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Creates a new HashMapBackend with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: HashMap::with_capacity(capacity),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K> {
        self.data.get(index)
    }

    fn insert(&mut self, index: I, value: K) {
        self.data.insert(index, value);
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}

/// A backend that never caches.
///
/// Every `get` misses, so a computation running on top of it re-evaluates every
/// sub-problem. Useful for checking that memoization does not change results.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCacheBackend;

impl NoCacheBackend {
    pub fn new() -> Self {
        Self
    }
}

impl<I, K> Backend<I, K> for NoCacheBackend {
    fn get(&self, _index: &I) -> Option<&K> {
        None
    }

    fn insert(&mut self, _index: I, _value: K) {}

    fn len(&self) -> usize {
        0
    }

    fn clear(&mut self) {}
}
