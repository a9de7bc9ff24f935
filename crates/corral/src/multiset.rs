//! Ordered multiset: like [`Set`] but duplicates are kept.
//!
//! [`Set`]: crate::Set

use std::fmt;

use corral_forest::{Pos, RbTree};

/// An ordered multiset; every insert succeeds and equal keys sit next
/// to each other in insertion order.
#[derive(Clone)]
pub struct MultiSet<K> {
    tree: RbTree<K, ()>,
}

impl<K> MultiSet<K> {
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

    /// Erases one element; other duplicates of the same key stay.
    pub fn erase(&mut self, pos: Pos) -> bool {
        self.tree.erase(pos)
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    pub fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree);
    }

    pub fn iter(&self) -> crate::set::Iter<'_, K> {
        // Same shape as the set iterator; reuse it.
        crate::set::Iter::over(self.tree.iter())
    }
}

impl<K: Ord> MultiSet<K> {
    /// Inserts unconditionally and returns the new element's position.
    pub fn insert(&mut self, key: K) -> Pos {
        self.tree.insert_multi(key, ())
    }

    /// Position of the first occurrence of `key`, or end.
    pub fn find(&self, key: &K) -> Pos {
        let pos = self.tree.lower_bound(key);
        match self.tree.key_at(pos) {
            Some(k) if k == key => pos,
            _ => Pos::end(),
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        !self.find(key).is_end()
    }

    /// Number of elements equal to `key`.
    pub fn count(&self, key: &K) -> usize {
        let (mut pos, upper) = self.equal_range(key);
        let mut n = 0;
        while pos != upper {
            n += 1;
            pos = self.tree.next_pos(pos);
        }
        n
    }

    /// First position not less than `key`.
    pub fn lower_bound(&self, key: &K) -> Pos {
        self.tree.lower_bound(key)
    }

    /// First position greater than `key`.
    pub fn upper_bound(&self, key: &K) -> Pos {
        self.tree.upper_bound(key)
    }

    /// Half-open run of elements equal to `key`.
    pub fn equal_range(&self, key: &K) -> (Pos, Pos) {
        (self.lower_bound(key), self.upper_bound(key))
    }

    /// Moves every element of `other` into `self`, duplicates included;
    /// `other` is left empty.
    pub fn merge(&mut self, other: &mut Self) {
        self.tree.merge_multi(&mut other.tree);
    }

    /// Inserts each key in sequence order, returning the positions.
    pub fn insert_many<I: IntoIterator<Item = K>>(&mut self, keys: I) -> Vec<Pos> {
        keys.into_iter().map(|key| self.insert(key)).collect()
    }
}

impl<K> Default for MultiSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for MultiSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord, const N: usize> From<[K; N]> for MultiSet<K> {
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<K: Ord> FromIterator<K> for MultiSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K: Ord> Extend<K> for MultiSet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a MultiSet<K> {
    type Item = &'a K;
    type IntoIter = crate::set::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> IntoIterator for MultiSet<K> {
    type Item = K;
    type IntoIter = crate::set::IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        crate::set::IntoIter::over(self.tree.into_iter())
    }
}
