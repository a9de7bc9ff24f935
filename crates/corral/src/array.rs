//! Fixed-size array with checked accessors.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::Error;

/// A fixed-size array of `N` elements, stored inline.
#[derive(Clone, PartialEq, Eq)]
pub struct Array<T, const N: usize> {
    items: [T; N],
}

impl<T, const N: usize> Array<T, N> {
    pub fn new() -> Self
    where
        T: Default,
    {
        Self {
            items: std::array::from_fn(|_| T::default()),
        }
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn max_size(&self) -> usize {
        N
    }

    pub fn at(&self, pos: usize) -> Result<&T, Error> {
        self.items
            .get(pos)
            .ok_or(Error::OutOfRange { index: pos, len: N })
    }

    pub fn at_mut(&mut self, pos: usize) -> Result<&mut T, Error> {
        self.items
            .get_mut(pos)
            .ok_or(Error::OutOfRange { index: pos, len: N })
    }

    pub fn front(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn back(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn data(&self) -> &[T] {
        &self.items
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Overwrites every element with a clone of `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.items.fill(value);
    }
}

impl<T: Default, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Array<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

/// Unchecked access; panics when out of bounds.
impl<T, const N: usize> Index<usize> for Array<T, N> {
    type Output = T;

    fn index(&self, pos: usize) -> &T {
        &self.items[pos]
    }
}

impl<T, const N: usize> IndexMut<usize> for Array<T, N> {
    fn index_mut(&mut self, pos: usize) -> &mut T {
        &mut self.items[pos]
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T, N> {
    fn from(items: [T; N]) -> Self {
        Self { items }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Array<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, const N: usize> IntoIterator for Array<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
