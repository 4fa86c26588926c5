//! Iteration over and conversion into [`DynArray`].
//!
//! Borrowed iteration reuses the slice iterators; owned iteration detaches
//! the live elements into a `Vec` and drains that, dropping the spare
//! capacity's leftover values up front.

use crate::array::DynArray;

/// Owning iterator over the live elements of a [`DynArray`].
///
/// Created by [`IntoIterator::into_iter`] on a `DynArray<T>` by value.
/// Yields the elements of `[0, len)` in order; anything left unconsumed is
/// dropped with the iterator.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> std::iter::FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.into_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    /// Collects with length and capacity both equal to the sequence length.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> From<Vec<T>> for DynArray<T> {
    /// Adopts the vector's elements; capacity equals the length exactly.
    fn from(v: Vec<T>) -> Self {
        Self::from_boxed(v.into_boxed_slice())
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    /// Moves the array's elements in; length and capacity are `N`.
    fn from(values: [T; N]) -> Self {
        Self::from(Vec::from(values))
    }
}

impl<T: Clone> From<&[T]> for DynArray<T> {
    /// Clones the slice's elements; length and capacity match the slice.
    fn from(values: &[T]) -> Self {
        Self::from(values.to_vec())
    }
}
