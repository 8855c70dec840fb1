//! Index/value pairs.

use std::fmt;

/// A value tagged with a non-negative index.
///
/// Used as the element type of sparse storage, where `index` is the
/// position the value would occupy in the equivalent dense sequence.
/// The pair is immutable once constructed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct IndexedValue<T> {
    index: usize,
    value: T,
}

impl<T> IndexedValue<T> {
    /// Creates a new pair.
    #[must_use]
    pub const fn new(index: usize, value: T) -> Self {
        Self { index, value }
    }

    /// Returns the index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the pair, returning `(index, value)`.
    #[must_use]
    pub fn into_parts(self) -> (usize, T) {
        (self.index, self.value)
    }
}

impl<T> From<(usize, T)> for IndexedValue<T> {
    fn from((index, value): (usize, T)) -> Self {
        Self::new(index, value)
    }
}

impl<T: fmt::Display> fmt::Display for IndexedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{})", self.index, self.value)
    }
}
