//! The balanced ordered tree: arena, root, cached extrema and the
//! position/iteration layer the containers build on.

use std::fmt;

use crate::balance::{fix_insert, unlink};
use crate::check;
use crate::node::{get_l, get_r, set_l, set_p, set_r, Arena};
use crate::walk;

/// A position inside a tree: a live node, or the one-past-last `end`
/// position.
///
/// Positions are invalidated by erasing the node they refer to (and by
/// `clear`); passing a stale position to [`RbTree::erase`] is a checked
/// no-op as long as the slot has not been reused.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Pos(pub(crate) Option<u32>);

impl Pos {
    /// The end position.
    pub fn end() -> Pos {
        Pos(None)
    }

    pub fn is_end(&self) -> bool {
        self.0.is_none()
    }
}

/// Red-black tree keyed by `K`, carrying one `V` per node.
///
/// `insert` enforces unique keys; `insert_multi` admits duplicates and
/// backs the multiset. The tree caches its minimum and maximum nodes so
/// `first_pos`/`last_pos` are O(1) and stepping backward from the end
/// position lands on the last element.
#[derive(Clone)]
pub struct RbTree<K, V> {
    arena: Arena<K, V>,
    root: Option<u32>,
    min: Option<u32>,
    max: Option<u32>,
}

impl<K, V> RbTree<K, V> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            min: None,
            max: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Theoretical capacity bound: how many nodes fit in the address
    /// space.
    pub fn max_size(&self) -> usize {
        usize::MAX / std::mem::size_of::<crate::node::RbNode<K, V>>().max(1)
    }

    /// Position of the smallest key, or end when empty.
    pub fn first_pos(&self) -> Pos {
        Pos(self.min)
    }

    /// Position of the largest key, or end when empty.
    pub fn last_pos(&self) -> Pos {
        Pos(self.max)
    }

    pub fn end_pos(&self) -> Pos {
        Pos(None)
    }

    /// In-order successor of `pos`; stepping past the last element (or
    /// from end) yields end.
    pub fn next_pos(&self, pos: Pos) -> Pos {
        match pos.0 {
            Some(i) if self.arena.get(i).is_some() => Pos(walk::next(&self.arena, i)),
            _ => Pos(None),
        }
    }

    /// In-order predecessor of `pos`; stepping backward from end yields
    /// the last element.
    pub fn prev_pos(&self, pos: Pos) -> Pos {
        match pos.0 {
            Some(i) if self.arena.get(i).is_some() => Pos(walk::prev(&self.arena, i)),
            _ => Pos(self.max),
        }
    }

    pub fn key_at(&self, pos: Pos) -> Option<&K> {
        self.arena.get(pos.0?).map(|n| &n.key)
    }

    pub fn value_at(&self, pos: Pos) -> Option<&V> {
        self.arena.get(pos.0?).map(|n| &n.value)
    }

    pub fn value_at_mut(&mut self, pos: Pos) -> Option<&mut V> {
        let i = pos.0?;
        self.arena.get(i)?;
        Some(&mut self.arena.node_mut(i).value)
    }

    pub fn entry_at(&self, pos: Pos) -> Option<(&K, &V)> {
        self.arena.get(pos.0?).map(|n| (&n.key, &n.value))
    }

    /// Double-ended in-order iterator over `(&K, &V)`.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            arena: &self.arena,
            front: self.min,
            back: self.max,
            remaining: self.len(),
        }
    }

    /// Drops every node; the root becomes empty.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.min = None;
        self.max = None;
    }

    /// O(1) structural swap with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    fn attach(&mut self, n: u32, parent: Option<u32>, left: bool) {
        match parent {
            None => self.root = Some(n),
            Some(p) => {
                if left {
                    set_l(&mut self.arena, p, Some(n));
                } else {
                    set_r(&mut self.arena, p, Some(n));
                }
                set_p(&mut self.arena, n, Some(p));
            }
        }
        fix_insert(&mut self.arena, &mut self.root, n);
    }

    fn update_extrema_after_insert(&mut self, n: u32)
    where
        K: Ord,
    {
        match self.min {
            None => self.min = Some(n),
            Some(m) => {
                if self.arena.node(n).key < self.arena.node(m).key {
                    self.min = Some(n);
                }
            }
        }
        match self.max {
            None => self.max = Some(n),
            Some(m) => {
                // Equal keys descend right, so an equal insert becomes
                // the new rightmost among its duplicates.
                if self.arena.node(n).key >= self.arena.node(m).key {
                    self.max = Some(n);
                }
            }
        }
    }

    /// Detaches and releases the node at `i`, keeping the extrema
    /// caches consistent. Returns the node's key/value.
    fn take_at(&mut self, i: u32) -> (K, V) {
        if self.min == Some(i) {
            self.min = walk::next(&self.arena, i);
        }
        if self.max == Some(i) {
            self.max = walk::prev(&self.arena, i);
        }
        unlink(&mut self.arena, &mut self.root, i);
        let kv = self.arena.release(i);
        if self.root.is_none() {
            self.min = None;
            self.max = None;
        }
        kv
    }

    /// Removes the node at `pos`. No-op returning `false` for end or
    /// invalid positions.
    pub fn erase(&mut self, pos: Pos) -> bool {
        let Some(i) = pos.0 else {
            return false;
        };
        if self.arena.get(i).is_none() {
            return false;
        }
        self.take_at(i);
        true
    }

    /// Removes and returns the smallest entry.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let i = self.min?;
        Some(self.take_at(i))
    }
}

impl<K: Ord, V> RbTree<K, V> {
    /// Inserts `key`, rejecting duplicates.
    ///
    /// Returns the position of the key and whether a new node was
    /// created; on a duplicate the existing node is left untouched.
    pub fn insert(&mut self, key: K, value: V) -> (Pos, bool) {
        let mut parent = None;
        let mut left = false;
        let mut curr = self.root;
        while let Some(i) = curr {
            match key.cmp(&self.arena.node(i).key) {
                std::cmp::Ordering::Equal => return (Pos(Some(i)), false),
                std::cmp::Ordering::Less => {
                    parent = Some(i);
                    left = true;
                    curr = get_l(&self.arena, i);
                }
                std::cmp::Ordering::Greater => {
                    parent = Some(i);
                    left = false;
                    curr = get_r(&self.arena, i);
                }
            }
        }
        let n = self.arena.alloc(key, value);
        self.attach(n, parent, left);
        self.update_extrema_after_insert(n);
        (Pos(Some(n)), true)
    }

    /// Unconditional insertion: equal keys descend right, so every call
    /// creates a node. Backs the multiset.
    pub fn insert_multi(&mut self, key: K, value: V) -> Pos {
        let mut parent = None;
        let mut left = false;
        let mut curr = self.root;
        while let Some(i) = curr {
            if key < self.arena.node(i).key {
                parent = Some(i);
                left = true;
                curr = get_l(&self.arena, i);
            } else {
                parent = Some(i);
                left = false;
                curr = get_r(&self.arena, i);
            }
        }
        let n = self.arena.alloc(key, value);
        self.attach(n, parent, left);
        self.update_extrema_after_insert(n);
        Pos(Some(n))
    }

    /// BST descent by `Ord`; end when absent.
    pub fn find(&self, key: &K) -> Pos {
        let mut curr = self.root;
        while let Some(i) = curr {
            match key.cmp(&self.arena.node(i).key) {
                std::cmp::Ordering::Equal => return Pos(Some(i)),
                std::cmp::Ordering::Less => curr = get_l(&self.arena, i),
                std::cmp::Ordering::Greater => curr = get_r(&self.arena, i),
            }
        }
        Pos(None)
    }

    pub fn contains(&self, key: &K) -> bool {
        !self.find(key).is_end()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.value_at(self.find(key))
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let pos = self.find(key);
        self.value_at_mut(pos)
    }

    /// First position whose key is not less than `key`.
    pub fn lower_bound(&self, key: &K) -> Pos {
        let mut curr = self.root;
        let mut result = None;
        while let Some(i) = curr {
            if &self.arena.node(i).key >= key {
                result = Some(i);
                curr = get_l(&self.arena, i);
            } else {
                curr = get_r(&self.arena, i);
            }
        }
        Pos(result)
    }

    /// First position whose key is greater than `key`.
    pub fn upper_bound(&self, key: &K) -> Pos {
        let mut curr = self.root;
        let mut result = None;
        while let Some(i) = curr {
            if &self.arena.node(i).key > key {
                result = Some(i);
                curr = get_l(&self.arena, i);
            } else {
                curr = get_r(&self.arena, i);
            }
        }
        Pos(result)
    }

    /// Moves every element of `other` into `self`, rejecting keys that
    /// already exist. `other` is left empty either way.
    pub fn merge(&mut self, other: &mut Self) {
        while let Some((key, value)) = other.pop_first() {
            self.insert(key, value);
        }
    }

    /// Moves every element of `other` into `self`, keeping duplicates.
    pub fn merge_multi(&mut self, other: &mut Self) {
        while let Some((key, value)) = other.pop_first() {
            self.insert_multi(key, value);
        }
    }

    /// Verifies the red-black invariants, link integrity, key order and
    /// the extrema caches.
    pub fn check(&self) -> Result<(), String> {
        check::check(&self.arena, self.root, self.min, self.max)
    }
}

impl<K, V> Default for RbTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RbTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Double-ended in-order iterator.
pub struct Iter<'a, K, V> {
    arena: &'a Arena<K, V>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.front?;
        self.remaining -= 1;
        self.front = walk::next(self.arena, i);
        let node = self.arena.node(i);
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.back?;
        self.remaining -= 1;
        self.back = walk::prev(self.arena, i);
        let node = self.arena.node(i);
        Some((&node.key, &node.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a RbTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// Consuming in-order iterator; repeatedly pops the smallest entry.
pub struct IntoIter<K, V> {
    tree: RbTree<K, V>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.tree.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.len(), Some(self.tree.len()))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> IntoIterator for RbTree<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter { tree: self }
    }
}
