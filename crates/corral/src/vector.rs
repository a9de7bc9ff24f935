//! Contiguous growable array with auto-doubling capacity.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::Error;

/// Default capacity of a freshly constructed vector.
const INITIAL_CAPACITY: usize = 5;

/// A contiguous growable buffer.
///
/// The buffer starts with room for [`INITIAL_CAPACITY`] elements and
/// doubles whenever an insertion finds it full; [`Vector::reserve`] and
/// [`Vector::shrink_to_fit`] resize it explicitly. Growth moves every
/// element, so positions held across a growing insertion are offsets to
/// recompute, not stable references.
pub struct Vector<T> {
    buf: Vec<T>,
}

impl<T> Vector<T> {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// `n` default-constructed elements.
    pub fn with_len(n: usize) -> Self
    where
        T: Default,
    {
        let mut buf = Vec::with_capacity(n.max(INITIAL_CAPACITY));
        buf.extend(std::iter::repeat_with(T::default).take(n));
        Self { buf }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn max_size(&self) -> usize {
        usize::MAX / std::mem::size_of::<T>().max(1)
    }

    /// Grows the buffer to hold at least `n` elements; no-op when the
    /// capacity already suffices.
    pub fn reserve(&mut self, n: usize) {
        if n > self.buf.capacity() {
            self.buf.reserve_exact(n - self.buf.len());
        }
    }

    pub fn shrink_to_fit(&mut self) {
        self.buf.shrink_to_fit();
    }

    fn ensure_room(&mut self) {
        if self.buf.len() == self.buf.capacity() {
            let doubled = (self.buf.capacity() * 2).max(INITIAL_CAPACITY);
            self.buf.reserve_exact(doubled - self.buf.len());
        }
    }

    pub fn push_back(&mut self, value: T) {
        self.ensure_room();
        self.buf.push(value);
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.buf.pop()
    }

    /// Inserts `value` at offset `pos`, shifting `[pos..]` one slot
    /// right. Rejects `pos > len`.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<usize, Error> {
        if pos > self.buf.len() {
            return Err(Error::OutOfRange {
                index: pos,
                len: self.buf.len(),
            });
        }
        self.ensure_room();
        self.buf.insert(pos, value);
        Ok(pos)
    }

    /// Removes the element at `pos`, shifting the tail left. Silent
    /// no-op when out of range.
    pub fn erase(&mut self, pos: usize) -> Option<T> {
        if pos < self.buf.len() {
            Some(self.buf.remove(pos))
        } else {
            None
        }
    }

    pub fn at(&self, pos: usize) -> Result<&T, Error> {
        self.buf.get(pos).ok_or(Error::OutOfRange {
            index: pos,
            len: self.buf.len(),
        })
    }

    pub fn at_mut(&mut self, pos: usize) -> Result<&mut T, Error> {
        let len = self.buf.len();
        self.buf
            .get_mut(pos)
            .ok_or(Error::OutOfRange { index: pos, len })
    }

    pub fn front(&self) -> Option<&T> {
        self.buf.first()
    }

    pub fn back(&self) -> Option<&T> {
        self.buf.last()
    }

    /// Slice view of the live elements.
    pub fn data(&self) -> &[T] {
        &self.buf
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.buf
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.buf.iter()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Inserts a sequence at `pos`, in sequence order. Rejects
    /// `pos > len` before consuming anything.
    pub fn insert_many<I: IntoIterator<Item = T>>(
        &mut self,
        pos: usize,
        values: I,
    ) -> Result<(), Error> {
        if pos > self.buf.len() {
            return Err(Error::OutOfRange {
                index: pos,
                len: self.buf.len(),
            });
        }
        for (offset, value) in values.into_iter().enumerate() {
            self.ensure_room();
            self.buf.insert(pos + offset, value);
        }
        Ok(())
    }

    pub fn insert_many_back<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.push_back(value);
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.buf.len().max(INITIAL_CAPACITY));
        buf.extend(self.buf.iter().cloned());
        Self { buf }
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buf.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}

impl<T: Eq> Eq for Vector<T> {}

/// Unchecked access; panics when out of bounds. Use [`Vector::at`] for
/// the checked form.
impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, pos: usize) -> &T {
        &self.buf[pos]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, pos: usize) -> &mut T {
        &mut self.buf[pos]
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(values: [T; N]) -> Self {
        let mut v = Self::new();
        v.insert_many_back(values);
        v
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.insert_many_back(iter);
        v
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_many_back(iter);
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}
