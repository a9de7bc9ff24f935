//! Ordered map over the red-black tree engine.

use std::fmt;
use std::ops::Index;

use corral_forest::{Pos, RbTree};

use crate::error::Error;

/// An ordered key/value map with unique keys.
#[derive(Clone)]
pub struct Map<K, V> {
    tree: RbTree<K, V>,
}

impl<K, V> Map<K, V> {
    pub fn new() -> Self {
        Self { tree: RbTree::new() }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.tree.max_size()
    }

    pub fn entry_at(&self, pos: Pos) -> Option<(&K, &V)> {
        self.tree.entry_at(pos)
    }

    pub fn first_pos(&self) -> Pos {
        self.tree.first_pos()
    }

    pub fn last_pos(&self) -> Pos {
        self.tree.last_pos()
    }

    pub fn next_pos(&self, pos: Pos) -> Pos {
        self.tree.next_pos(pos)
    }

    pub fn prev_pos(&self, pos: Pos) -> Pos {
        self.tree.prev_pos(pos)
    }

    pub fn erase(&mut self, pos: Pos) -> bool {
        self.tree.erase(pos)
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    pub fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree);
    }

    /// Double-ended iterator over `(&K, &V)` in ascending key order.
    pub fn iter(&self) -> corral_forest::Iter<'_, K, V> {
        self.tree.iter()
    }
}

impl<K: Ord, V> Map<K, V> {
    /// Inserts the pair; on a duplicate key returns the existing
    /// position with `false` and leaves the stored value untouched.
    pub fn insert(&mut self, key: K, value: V) -> (Pos, bool) {
        self.tree.insert(key, value)
    }

    /// Inserts, or replaces the value under an existing key. The
    /// replacement erases and reinserts, so the old position dies with
    /// the old value.
    pub fn insert_or_assign(&mut self, key: K, value: V) -> (Pos, bool) {
        let existing = self.tree.find(&key);
        if existing.is_end() {
            self.tree.insert(key, value)
        } else {
            self.tree.erase(existing);
            let (pos, _) = self.tree.insert(key, value);
            (pos, false)
        }
    }

    pub fn find(&self, key: &K) -> Pos {
        self.tree.find(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.tree.contains(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.tree.get_mut(key)
    }

    /// Checked access by key.
    pub fn at(&self, key: &K) -> Result<&V, Error> {
        self.tree.get(key).ok_or(Error::KeyNotFound)
    }

    pub fn at_mut(&mut self, key: &K) -> Result<&mut V, Error> {
        self.tree.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Value under `key`, inserting `f()` first when absent.
    pub fn get_or_insert_with(&mut self, key: K, f: impl FnOnce() -> V) -> &mut V {
        let pos = self.tree.find(&key);
        let pos = if pos.is_end() {
            self.tree.insert(key, f()).0
        } else {
            pos
        };
        self.tree
            .value_at_mut(pos)
            .expect("freshly located position is live")
    }

    /// Value under `key`, inserting a default one when absent.
    pub fn get_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    /// Moves every entry of `other` into `self`; entries whose key is
    /// already present are dropped, and `other` is left empty.
    pub fn merge(&mut self, other: &mut Self) {
        self.tree.merge(&mut other.tree);
    }

    /// Inserts each pair in sequence order, returning the per-pair
    /// results.
    pub fn insert_many<I: IntoIterator<Item = (K, V)>>(&mut self, pairs: I) -> Vec<(Pos, bool)> {
        pairs
            .into_iter()
            .map(|(key, value)| self.insert(key, value))
            .collect()
    }
}

impl<K, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Map<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Unchecked access; panics on an absent key. Use [`Map::at`] for the
/// checked form.
impl<K: Ord, V> Index<&K> for Map<K, V> {
    type Output = V;

    fn index(&self, key: &K) -> &V {
        match self.tree.get(key) {
            Some(value) => value,
            None => panic!("key not found"),
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for Map<K, V> {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for Map<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a Map<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = corral_forest::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = corral_forest::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}
