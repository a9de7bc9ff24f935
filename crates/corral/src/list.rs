//! Doubly linked list over a slot arena with a permanent sentinel.
//!
//! Slot 0 holds the sentinel for the whole life of the list; it closes
//! the ring (`sentinel.next` is the first element, `sentinel.prev` the
//! last) and doubles as the end position. Links are plain `u32` indices
//! into the arena, so the prev/next cycle never involves ownership.

use std::fmt;

const SENTINEL: u32 = 0;

/// A position inside a list; [`Pos::is_end`] reports the sentinel.
///
/// Erasing a node invalidates positions referring to it; every other
/// position survives arbitrary splicing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Pos(u32);

impl Pos {
    pub fn is_end(&self) -> bool {
        self.0 == SENTINEL
    }
}

#[derive(Clone, Debug)]
struct ListNode<T> {
    prev: u32,
    next: u32,
    // `None` only in the sentinel.
    value: Option<T>,
}

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(ListNode<T>),
    Vacant { next_free: Option<u32> },
}

/// Doubly linked list with value semantics.
#[derive(Clone)]
pub struct List<T> {
    slots: Vec<Slot<T>>,
    free: Option<u32>,
    len: usize,
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self {
            slots: vec![Slot::Occupied(ListNode {
                prev: SENTINEL,
                next: SENTINEL,
                value: None,
            })],
            free: None,
            len: 0,
        }
    }

    /// `n` default-constructed elements.
    pub fn with_len(n: usize) -> Self
    where
        T: Default,
    {
        let mut list = Self::new();
        for _ in 0..n {
            list.push_back(T::default());
        }
        list
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn max_size(&self) -> usize {
        usize::MAX / std::mem::size_of::<ListNode<T>>().max(1)
    }

    fn node(&self, idx: u32) -> &ListNode<T> {
        match &self.slots[idx as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("vacant list slot {idx}"),
        }
    }

    fn node_mut(&mut self, idx: u32) -> &mut ListNode<T> {
        match &mut self.slots[idx as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("vacant list slot {idx}"),
        }
    }

    fn is_live(&self, idx: u32) -> bool {
        matches!(
            self.slots.get(idx as usize),
            Some(Slot::Occupied(_))
        )
    }

    fn alloc(&mut self, value: T) -> u32 {
        self.len += 1;
        let node = ListNode {
            prev: SENTINEL,
            next: SENTINEL,
            value: Some(value),
        };
        match self.free {
            Some(idx) => {
                let next_free = match self.slots[idx as usize] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at occupied slot"),
                };
                self.free = next_free;
                self.slots[idx as usize] = Slot::Occupied(node);
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                (self.slots.len() - 1) as u32
            }
        }
    }

    fn release(&mut self, idx: u32) -> Option<T> {
        let slot = std::mem::replace(
            &mut self.slots[idx as usize],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        match slot {
            Slot::Occupied(node) => {
                self.free = Some(idx);
                self.len -= 1;
                node.value
            }
            Slot::Vacant { .. } => unreachable!("release of vacant slot"),
        }
    }

    /// Position of the first element; end when empty.
    pub fn first_pos(&self) -> Pos {
        Pos(self.node(SENTINEL).next)
    }

    /// Position of the last element; end when empty.
    pub fn last_pos(&self) -> Pos {
        Pos(self.node(SENTINEL).prev)
    }

    pub fn end_pos(&self) -> Pos {
        Pos(SENTINEL)
    }

    /// Steps forward; the ring passes through the end position between
    /// the last and first elements.
    pub fn next_pos(&self, pos: Pos) -> Pos {
        if self.is_live(pos.0) {
            Pos(self.node(pos.0).next)
        } else {
            Pos(SENTINEL)
        }
    }

    pub fn prev_pos(&self, pos: Pos) -> Pos {
        if self.is_live(pos.0) {
            Pos(self.node(pos.0).prev)
        } else {
            Pos(SENTINEL)
        }
    }

    /// Value at `pos`; `None` for the end or an invalidated position.
    pub fn value(&self, pos: Pos) -> Option<&T> {
        match self.slots.get(pos.0 as usize) {
            Some(Slot::Occupied(node)) => node.value.as_ref(),
            _ => None,
        }
    }

    pub fn value_mut(&mut self, pos: Pos) -> Option<&mut T> {
        match self.slots.get_mut(pos.0 as usize) {
            Some(Slot::Occupied(node)) => node.value.as_mut(),
            _ => None,
        }
    }

    pub fn front(&self) -> Option<&T> {
        self.value(self.first_pos())
    }

    pub fn back(&self) -> Option<&T> {
        self.value(self.last_pos())
    }

    /// Splices a new node before `pos` and returns its position. An
    /// invalidated `pos` is treated as the end.
    pub fn insert(&mut self, pos: Pos, value: T) -> Pos {
        let at = if self.is_live(pos.0) { pos.0 } else { SENTINEL };
        let n = self.alloc(value);
        let before = self.node(at).prev;
        self.node_mut(n).prev = before;
        self.node_mut(n).next = at;
        self.node_mut(before).next = n;
        self.node_mut(at).prev = n;
        Pos(n)
    }

    /// Unlinks the node at `pos`. Erasing the end position (or a stale
    /// one) is a checked no-op.
    pub fn erase(&mut self, pos: Pos) -> Option<T> {
        if pos.0 == SENTINEL || !self.is_live(pos.0) {
            return None;
        }
        let (prev, next) = {
            let node = self.node(pos.0);
            (node.prev, node.next)
        };
        self.node_mut(prev).next = next;
        self.node_mut(next).prev = prev;
        self.release(pos.0)
    }

    pub fn push_back(&mut self, value: T) {
        self.insert(Pos(SENTINEL), value);
    }

    pub fn push_front(&mut self, value: T) {
        let first = self.first_pos();
        self.insert(first, value);
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.erase(self.last_pos())
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.erase(self.first_pos())
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.slots.push(Slot::Occupied(ListNode {
            prev: SENTINEL,
            next: SENTINEL,
            value: None,
        }));
        self.free = None;
        self.len = 0;
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Single pass flipping every node's prev/next, sentinel included.
    pub fn reverse(&mut self) {
        let mut curr = SENTINEL;
        loop {
            let node = self.node_mut(curr);
            std::mem::swap(&mut node.prev, &mut node.next);
            // After the swap the original forward link sits in `prev`.
            curr = node.prev;
            if curr == SENTINEL {
                break;
            }
        }
    }

    /// Collapses runs of consecutive equal elements to one.
    pub fn unique(&mut self)
    where
        T: PartialEq,
    {
        let mut curr = self.first_pos();
        while !curr.is_end() {
            let next = self.next_pos(curr);
            if next.is_end() {
                break;
            }
            if self.value(curr) == self.value(next) {
                self.erase(next);
            } else {
                curr = next;
            }
        }
    }

    /// Moves every element of `other` before `pos`, preserving order.
    /// `other` is left empty.
    pub fn splice(&mut self, pos: Pos, other: &mut Self) {
        while let Some(value) = other.pop_front() {
            self.insert(pos, value);
        }
    }

    /// Inserts a sequence before `pos`, in sequence order.
    pub fn insert_many<I: IntoIterator<Item = T>>(&mut self, pos: Pos, values: I) {
        for value in values {
            self.insert(pos, value);
        }
    }

    pub fn insert_many_back<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.push_back(value);
        }
    }

    /// Inserts a sequence at the front; the final front-to-back order
    /// matches the sequence order.
    pub fn insert_many_front<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let first = self.first_pos();
        for value in values {
            self.insert(first, value);
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.node(SENTINEL).next,
            back: self.node(SENTINEL).prev,
            remaining: self.len,
        }
    }
}

impl<T: Ord> List<T> {
    /// Stable merge of two sorted lists; elements of `self` precede
    /// equal elements of `other`, and `other` is left empty.
    pub fn merge(&mut self, other: &mut Self) {
        let mut curr = self.first_pos();
        while let Some(value) = other.pop_front() {
            loop {
                match self.value(curr) {
                    Some(existing) if existing <= &value => curr = self.next_pos(curr),
                    _ => break,
                }
            }
            self.insert(curr, value);
        }
    }

    /// Stable merge sort: split at the midpoint, sort both halves,
    /// merge.
    pub fn sort(&mut self) {
        if self.len <= 1 {
            return;
        }
        let mut left = Self::new();
        for _ in 0..self.len / 2 {
            if let Some(value) = self.pop_front() {
                left.push_back(value);
            }
        }
        left.sort();
        self.sort();
        // `left` holds the earlier half; merging into it keeps equal
        // elements in their original order.
        std::mem::swap(self, &mut left);
        self.merge(&mut left);
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(values: [T; N]) -> Self {
        let mut list = Self::new();
        list.insert_many_back(values);
        list
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.insert_many_back(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_many_back(iter);
    }
}

/// Double-ended iterator over list elements.
pub struct Iter<'a, T> {
    list: &'a List<T>,
    front: u32,
    back: u32,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let node = self.list.node(self.front);
        self.front = node.next;
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let node = self.list.node(self.back);
        self.back = node.prev;
        node.value.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Consuming iterator; pops from the front.
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}
