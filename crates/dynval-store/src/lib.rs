//! Generic key/value store layered directly on the standard `HashMap`.
//!
//! [`Store`] is a thin wrapper with presence, match-against-stored-value,
//! and bulk-copy operations. It carries no invariants beyond "last write for
//! a key wins"; keys and values are compared with their native `Eq` /
//! `PartialEq` contracts, not with any cross-width equality.
//!
#![deny(missing_docs)]

use std::collections::hash_map;
use std::collections::HashMap;
use std::hash::Hash;

/// A mapping from key to value with last-write-wins semantics.
#[derive(Debug, Clone)]
pub struct Store<K, V> {
    inner: HashMap<K, V>,
}

impl<K: Eq + Hash, V> Store<K, V> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: K, value: V) {
        self.inner.insert(key, value);
    }

    /// Borrows the value stored under `key`, if any.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    /// True iff some value is stored under `key`.
    pub fn has(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    /// True iff the value stored under `key` equals `value` by native
    /// equality.
    pub fn has_match(&self, key: &K, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.inner.get(key).map_or(false, |stored| stored == value)
    }

    /// Removes and returns the value stored under `key`, if any.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.inner.remove(key)
    }

    /// Copies every entry of `src` into this store, overwriting on key
    /// collision.
    pub fn clone_from_store(&mut self, src: &Store<K, V>)
    where
        K: Clone,
        V: Clone,
    {
        for (key, value) in &src.inner {
            self.inner.insert(key.clone(), value.clone());
        }
    }

    /// Moves every entry of a raw map into this store, overwriting on key
    /// collision.
    pub fn extend_from_map(&mut self, src: HashMap<K, V>) {
        self.inner.extend(src);
    }

    /// Borrows the underlying map.
    pub fn as_map(&self) -> &HashMap<K, V> {
        &self.inner
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True iff nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over entries in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.inner.iter()
    }
}

impl<K: Eq + Hash, V> Default for Store<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> From<HashMap<K, V>> for Store<K, V> {
    fn from(inner: HashMap<K, V>) -> Self {
        Self { inner }
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Store<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash, V> Extend<(K, V)> for Store<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<'a, K: Eq + Hash, V> IntoIterator for &'a Store<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<K: Eq + Hash, V> IntoIterator for Store<K, V> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}
