//! FIFO adaptor over [`List`].

use std::fmt;

use crate::list::List;

/// First-in, first-out queue; pushes at the back, pops from the front.
#[derive(Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: List<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self { items: List::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.items.push_back(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Enqueues each value in sequence order.
    pub fn insert_many_back<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.items.insert_many_back(values);
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("items", &self.items).finish()
    }
}

impl<T, const N: usize> From<[T; N]> for Queue<T> {
    fn from(values: [T; N]) -> Self {
        let mut queue = Self::new();
        for value in values {
            queue.push(value);
        }
        queue
    }
}
