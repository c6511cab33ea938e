//! Tests for the memo backends.

use super::*;

#[test]
fn test_hashmap_backend_insert_and_get() {
    let mut backend: HashMapBackend<String, i32> = HashMapBackend::new();

    backend.insert("key1".to_string(), 42);
    assert_eq!(backend.get(&"key1".to_string()), Some(&42));

    // Get returns None for uncached key
    assert_eq!(backend.get(&"key2".to_string()), None);

    // Insert different key - should not affect existing
    backend.insert("key2".to_string(), 100);
    assert_eq!(backend.get(&"key2".to_string()), Some(&100));
    assert_eq!(backend.get(&"key1".to_string()), Some(&42));
    assert_eq!(backend.len(), 2);
}

#[test]
fn test_hashmap_backend_overwrite() {
    let mut backend: HashMapBackend<u8, u64> = HashMapBackend::with_capacity(4);

    backend.insert(1, 10);
    backend.insert(1, 20);
    assert_eq!(backend.get(&1), Some(&20));
    assert_eq!(backend.len(), 1);
}

#[test]
fn test_hashmap_backend_clear() {
    let mut backend: HashMapBackend<u8, u64> = HashMapBackend::default();
    assert!(backend.is_empty());

    backend.insert(1, 10);
    backend.insert(2, 20);
    assert!(!backend.is_empty());

    backend.clear();
    assert!(backend.is_empty());
    assert_eq!(backend.get(&1), None);
}

#[test]
fn test_no_cache_backend_never_hits() {
    let mut backend = NoCacheBackend::new();

    Backend::<u8, u64>::insert(&mut backend, 1, 10);
    assert_eq!(Backend::<u8, u64>::get(&backend, &1), None);
    assert_eq!(Backend::<u8, u64>::len(&backend), 0);
    assert!(Backend::<u8, u64>::is_empty(&backend));
}
