//! LIFO adaptor over [`List`].

use std::fmt;

use crate::list::List;

/// Last-in, first-out stack; the top is the back of the underlying
/// list.
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: List<T>,
}

impl<T> Stack<T> {
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
        self.items.pop_back()
    }

    pub fn top(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Pushes each value in sequence order; the last one ends on top.
    pub fn insert_many_front<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.items.insert_many_back(values);
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("items", &self.items).finish()
    }
}

/// The last array element ends on top.
impl<T, const N: usize> From<[T; N]> for Stack<T> {
    fn from(values: [T; N]) -> Self {
        let mut stack = Self::new();
        for value in values {
            stack.push(value);
        }
        stack
    }
}
