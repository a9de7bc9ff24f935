//! Ordered set of unique keys over the red-black tree engine.

use std::fmt;

use corral_forest::{Pos, RbTree};

/// An ordered set; duplicate inserts are rejected.
#[derive(Clone)]
pub struct Set<K> {
    tree: RbTree<K, ()>,
}

impl<K> Set<K> {
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

    pub fn key_at(&self, pos: Pos) -> Option<&K> {
        self.tree.key_at(pos)
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

    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            inner: self.tree.iter(),
        }
    }
}

impl<K: Ord> Set<K> {
    /// Inserts `key`; on a duplicate returns the existing position with
    /// `false` and leaves the set untouched.
    pub fn insert(&mut self, key: K) -> (Pos, bool) {
        self.tree.insert(key, ())
    }

    pub fn find(&self, key: &K) -> Pos {
        self.tree.find(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.tree.contains(key)
    }

    /// Moves every element of `other` into `self`; keys already present
    /// are dropped, and `other` is left empty.
    pub fn merge(&mut self, other: &mut Self) {
        self.tree.merge(&mut other.tree);
    }

    /// Inserts each key in sequence order, returning the per-key
    /// results.
    pub fn insert_many<I: IntoIterator<Item = K>>(&mut self, keys: I) -> Vec<(Pos, bool)> {
        keys.into_iter().map(|key| self.insert(key)).collect()
    }
}

impl<K> Default for Set<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for Set<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord, const N: usize> From<[K; N]> for Set<K> {
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<K: Ord> FromIterator<K> for Set<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K: Ord> Extend<K> for Set<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

/// Double-ended iterator over set keys in ascending order.
pub struct Iter<'a, K> {
    inner: corral_forest::Iter<'a, K, ()>,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn over(inner: corral_forest::Iter<'a, K, ()>) -> Self {
        Self { inner }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K> DoubleEndedIterator for Iter<'a, K> {
    fn next_back(&mut self) -> Option<&'a K> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<'a, K> IntoIterator for &'a Set<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

/// Consuming iterator in ascending order.
pub struct IntoIter<K> {
    inner: corral_forest::IntoIter<K, ()>,
}

impl<K> IntoIter<K> {
    pub(crate) fn over(inner: corral_forest::IntoIter<K, ()>) -> Self {
        Self { inner }
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}

impl<K> IntoIterator for Set<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> IntoIter<K> {
        IntoIter {
            inner: self.tree.into_iter(),
        }
    }
}
