//! The growable array container.
//!
//! [`DynArray`] pairs an [`OwnedBuf`] with a live-length counter. The
//! buffer's allocated length *is* the capacity; the counter marks how much
//! of it belongs to the logical sequence. Growth allocates a fresh buffer
//! of the target capacity, moves the live elements across, and drops the
//! old buffer — elements are never copied unless the caller asked for a
//! clone.

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use dynarray_buf::OwnedBuf;

use crate::error::ArrayError;

/// A contiguous growable sequence with amortised doubling growth.
///
/// See the [crate docs](crate) for the storage model and the reference
/// invalidation rules. Highlights:
///
/// - `capacity()` never shrinks; only [`clear`](Self::clear),
///   [`resize`](Self::resize) to a smaller length, and
///   [`pop`](Self::pop)/[`remove`](Self::remove) reduce the length.
/// - Slots between the length and the capacity hold unspecified leftover
///   values that are not part of the sequence.
/// - When full, [`push`](Self::push) and [`insert`](Self::insert) grow to
///   `2 × len` (or 1 from empty); [`resize`](Self::resize) and
///   [`reserve`](Self::reserve) grow to exactly the requested amount.
pub struct DynArray<T> {
    /// Backing storage; its allocated length is the capacity.
    buf: OwnedBuf<T>,
    /// Live element count, `<= buf.len()`.
    len: usize,
}

impl<T> DynArray<T> {
    /// Create an empty array with capacity 0. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buf: OwnedBuf::empty(),
            len: 0,
        }
    }

    /// Create an array of `len` default-valued elements.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self {
            buf: OwnedBuf::new(len),
            len,
        }
    }

    /// Create an empty array with at least `cap` slots pre-allocated.
    ///
    /// The capacity is exactly `cap`; the length is 0.
    pub fn with_capacity(cap: usize) -> Self
    where
        T: Default,
    {
        Self {
            buf: OwnedBuf::new(cap),
            len: 0,
        }
    }

    /// Create an array of `len` clones of `value`.
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let boxed = vec![value; len].into_boxed_slice();
        Self {
            buf: OwnedBuf::from_boxed(boxed),
            len,
        }
    }

    /// Create an array of `len` elements, consuming `value` for the first.
    ///
    /// The first slot receives `value` by move; every later slot is
    /// default-valued. (The source is treated as reset to its default
    /// after each placement, so only the first placement sees it.)
    pub fn from_value(len: usize, value: T) -> Self
    where
        T: Default,
    {
        let mut arr = Self::with_len(len);
        if len > 0 {
            arr.buf[0] = value;
        }
        arr
    }

    /// Adopt a boxed slice as both the contents and the exact capacity.
    pub(crate) fn from_boxed(boxed: Box<[T]>) -> Self {
        let len = boxed.len();
        Self {
            buf: OwnedBuf::from_boxed(boxed),
            len,
        }
    }

    /// Live element count.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Allocated slot count; always `>= len()`.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// True when the length is 0 (capacity may still be nonzero).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The live elements `[0, len)` as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.buf.as_slice()[..self.len]
    }

    /// The live elements `[0, len)` as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.buf.as_mut_slice()[..len]
    }

    /// Checked access: `Err(ArrayError::OutOfRange)` when `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        self.as_slice().get(index).ok_or(ArrayError::OutOfRange {
            index,
            len: self.len,
        })
    }

    /// Checked mutable access; same contract as [`at`](Self::at).
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Iterate over the live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the live elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Set the length to 0. Capacity and buffer are retained; the former
    /// elements stay in their slots as unspecified leftovers.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Resize to `new_len` elements.
    ///
    /// Shrinking just reduces the length. Growing within capacity resets
    /// the newly exposed slots to default values. Growing beyond capacity
    /// reallocates to exactly `new_len`.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        if new_len <= self.len {
            self.len = new_len;
            return;
        }
        if new_len <= self.capacity() {
            // Leftover values from earlier operations live here; reset them.
            for slot in &mut self.buf.as_mut_slice()[self.len..new_len] {
                *slot = T::default();
            }
        } else {
            self.reallocate_to(new_len);
        }
        self.len = new_len;
    }

    /// Append `value`, growing the capacity first when full.
    pub fn push(&mut self, value: T)
    where
        T: Default,
    {
        if self.len == self.capacity() {
            self.grow_one();
        }
        self.buf[self.len] = value;
        self.len += 1;
    }

    /// Insert `value` at `index`, shifting `[index, len)` right one slot.
    ///
    /// Returns a reference to the inserted element. Grows with the same
    /// doubling policy as [`push`](Self::push) when full.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T
    where
        T: Default,
    {
        assert!(
            index <= self.len,
            "insert index {index} out of range for length {len}",
            len = self.len
        );
        if self.len == self.capacity() {
            self.grow_one();
        }
        {
            let slots = self.buf.as_mut_slice();
            // Pull the spare slot at `len` around to `index`, shifting the
            // tail right and preserving order.
            slots[index..=self.len].rotate_right(1);
            slots[index] = value;
        }
        self.len += 1;
        &mut self.buf[index]
    }

    /// Remove and return the last element, or `None` when empty.
    ///
    /// The vacated slot is left holding a default value, in the
    /// unspecified `[len, capacity)` region.
    pub fn pop(&mut self) -> Option<T>
    where
        T: Default,
    {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(mem::take(&mut self.buf[self.len]))
    }

    /// Remove and return the element at `index`, shifting `[index + 1,
    /// len)` left one slot.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T
    where
        T: Default,
    {
        assert!(
            index < self.len,
            "remove index {index} out of range for length {len}",
            len = self.len
        );
        self.buf.as_mut_slice()[index..self.len].rotate_left(1);
        self.len -= 1;
        mem::take(&mut self.buf[self.len])
    }

    /// Grow the capacity to exactly `new_cap` when `new_cap > capacity()`;
    /// otherwise a no-op. Never shrinks.
    pub fn reserve(&mut self, new_cap: usize)
    where
        T: Default,
    {
        if new_cap > self.capacity() {
            self.reallocate_to(new_cap);
        }
    }

    /// Exchange contents (buffer and length) with `other` in constant
    /// time, no allocation.
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Move the contents out of `self`, leaving it empty with capacity 0.
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    /// Convert into a `Vec` of the live elements. The spare capacity and
    /// its leftover values are dropped.
    pub fn into_vec(mut self) -> Vec<T> {
        let len = self.len;
        let mut v = self.buf.release().map_or_else(Vec::new, Vec::from);
        v.truncate(len);
        v
    }

    /// Doubling growth for a single-element append: `2 × len`, or 1 from
    /// empty. Only called when `len == capacity`.
    fn grow_one(&mut self)
    where
        T: Default,
    {
        let new_cap = if self.len == 0 { 1 } else { self.len * 2 };
        self.reallocate_to(new_cap);
    }

    /// Reallocate to exactly `new_cap` slots, moving the live elements
    /// into the fresh buffer. The old buffer is dropped once the new one
    /// is adopted.
    fn reallocate_to(&mut self, new_cap: usize)
    where
        T: Default,
    {
        debug_assert!(new_cap >= self.len);
        let mut fresh = OwnedBuf::new(new_cap);
        fresh.as_mut_slice()[..self.len].swap_with_slice(&mut self.buf.as_mut_slice()[..self.len]);
        self.buf = fresh;
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Clone for DynArray<T> {
    /// Deep copy preserving the source's *capacity*, not just its length.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity());
        copy.buf.as_mut_slice()[..self.len].clone_from_slice(self.as_slice());
        copy.len = self.len;
        copy
    }

    /// When `source` is empty, clears self without touching the buffer;
    /// otherwise builds a full copy and swaps it in.
    fn clone_from(&mut self, source: &Self) {
        if source.is_empty() {
            self.clear();
        } else {
            let mut copy = source.clone();
            self.swap(&mut copy);
        }
    }
}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`. Use [`DynArray::at`] for a checked,
    /// recoverable access.
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: PartialOrd> PartialOrd for DynArray<T> {
    /// Lexicographic element comparison; a strict prefix is smaller.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for DynArray<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynArray<T> {
    /// Renders the sequence as `{ e0 e1 … }` (empty: `{ }`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for item in self.as_slice() {
            write!(f, "{item} ")?;
        }
        write!(f, "}}")
    }
}
