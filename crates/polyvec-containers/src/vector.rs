//! Owned, resizable storage with bounds-checked access.
//!
//! `Vector<T>` is the backing store of both polynomial representations.
//! Positions outside `[0, len)` are a contract violation: `at` and the
//! `Index` impls panic, while `try_at` reports a [`ContainerError`].

use std::ops::{Index, IndexMut};

use crate::error::ContainerError;

/// A resizable sequence of `T`.
///
/// Cloning performs a deep copy; two vectors never share storage.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Vector<T> {
    items: Vec<T>,
}

impl<T: Clone + Default> Vector<T> {
    /// Creates a vector of `len` default-valued slots.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            items: vec![T::default(); len],
        }
    }

    /// Changes the logical length.
    ///
    /// Elements up to `min(old, new)` are preserved; new slots are
    /// default-initialized.
    pub fn resize(&mut self, len: usize) {
        self.items.resize(len, T::default());
    }
}

impl<T> Vector<T> {
    /// Wraps an existing `Vec` without copying.
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[must_use]
    pub fn at(&self, i: usize) -> &T {
        assert!(
            i < self.items.len(),
            "index {i} out of range for vector of length {}",
            self.items.len()
        );
        &self.items[i]
    }

    /// Returns a mutable reference to the element at position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn at_mut(&mut self, i: usize) -> &mut T {
        let len = self.items.len();
        assert!(i < len, "index {i} out of range for vector of length {len}");
        &mut self.items[i]
    }

    /// Returns the element at position `i`, or an error if out of range.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::OutOfRange`] if `i >= self.len()`.
    pub fn try_at(&self, i: usize) -> Result<&T, ContainerError> {
        self.items.get(i).ok_or(ContainerError::OutOfRange {
            index: i,
            len: self.items.len(),
        })
    }

    /// Appends an element, growing the vector by one.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Returns an iterator over the elements in position order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the vector, returning the underlying `Vec`.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        self.at(i)
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        self.at_mut(i)
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
