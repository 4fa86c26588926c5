//! Exclusive ownership of a fixed-length heap array.
//!
//! [`OwnedBuf`] owns zero or one contiguous heap allocation of `T`. A
//! zero-length buffer is represented as "no allocation at all" rather than
//! an allocated empty block, so the unallocated state and the zero-sized
//! state are the same state.
//!
//! The type deliberately does not implement `Clone`: cloning would create
//! two owners of one logical allocation. Ownership moves with the value,
//! or explicitly via [`OwnedBuf::release`], [`OwnedBuf::take`], and
//! [`OwnedBuf::swap`].
//!
//! Every allocated slot holds a real, initialised `T` (allocation goes
//! through [`OwnedBuf::new`], which default-fills, or adopts an existing
//! boxed slice). There is no uninitialised memory anywhere, which is why
//! this crate forbids `unsafe` outright.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::mem;
use std::ops::{Index, IndexMut};

/// An exclusively-owned, fixed-length heap array of `T`.
///
/// Invariant: either unallocated, or owns a block of exactly the length it
/// was constructed with. The length never changes after construction; a
/// container that needs to grow allocates a new `OwnedBuf` and swaps it in.
///
/// Not safe for concurrent mutation from multiple threads without external
/// synchronization; `&mut` exclusivity is the only guard.
#[derive(Debug)]
pub struct OwnedBuf<T> {
    /// The allocation, or `None` when unallocated.
    slots: Option<Box<[T]>>,
}

impl<T> OwnedBuf<T> {
    /// Create an unallocated buffer.
    pub const fn empty() -> Self {
        Self { slots: None }
    }

    /// Allocate `len` default-initialised elements.
    ///
    /// `len == 0` yields the unallocated state — no heap allocation is
    /// made for an empty buffer.
    pub fn new(len: usize) -> Self
    where
        T: Default,
    {
        if len == 0 {
            return Self::empty();
        }
        Self {
            slots: Some((0..len).map(|_| T::default()).collect()),
        }
    }

    /// Adopt an already-allocated array.
    ///
    /// A zero-length slice is normalised to the unallocated state, keeping
    /// the "empty means no allocation" invariant.
    pub fn from_boxed(boxed: Box<[T]>) -> Self {
        if boxed.is_empty() {
            return Self::empty();
        }
        Self { slots: Some(boxed) }
    }

    /// Give up ownership of the allocation, leaving self unallocated.
    ///
    /// Returns `None` if there was nothing to release. After this call the
    /// buffer's drop is a no-op, so the allocation is freed exactly once —
    /// by whoever now holds the returned box.
    pub fn release(&mut self) -> Option<Box<[T]>> {
        self.slots.take()
    }

    /// Move the whole buffer out of `self`, leaving self unallocated.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Exchange allocations with `other` in constant time, no allocation.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.slots, &mut other.slots);
    }

    /// Allocated length in elements (0 when unallocated).
    pub fn len(&self) -> usize {
        self.slots.as_ref().map_or(0, |s| s.len())
    }

    /// True when no allocation is owned.
    pub fn is_empty(&self) -> bool {
        self.slots.is_none()
    }

    /// True iff currently owning an allocation.
    pub fn is_allocated(&self) -> bool {
        self.slots.is_some()
    }

    /// The whole allocated region as a slice (empty when unallocated).
    pub fn as_slice(&self) -> &[T] {
        self.slots.as_deref().unwrap_or(&[])
    }

    /// The whole allocated region as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.slots.as_deref_mut().unwrap_or(&mut [])
    }
}

impl<T> Default for OwnedBuf<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Index<usize> for OwnedBuf<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`. Indexing an unallocated buffer always
    /// panics.
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for OwnedBuf<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_owns_nothing() {
        let buf: OwnedBuf<i32> = OwnedBuf::empty();
        assert!(!buf.is_allocated());
        assert_eq!(buf.len(), 0);
        assert!(buf.as_slice().is_empty());
    }

    #[test]
    fn new_zero_len_is_unallocated() {
        let buf: OwnedBuf<i32> = OwnedBuf::new(0);
        assert!(!buf.is_allocated());
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn new_default_fills_every_slot() {
        let buf: OwnedBuf<i32> = OwnedBuf::new(5);
        assert!(buf.is_allocated());
        assert_eq!(buf.len(), 5);
        assert!(buf.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn from_boxed_adopts_allocation() {
        let buf = OwnedBuf::from_boxed(vec![1, 2, 3].into_boxed_slice());
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn from_boxed_normalises_zero_len() {
        let buf: OwnedBuf<i32> = OwnedBuf::from_boxed(Vec::new().into_boxed_slice());
        assert!(!buf.is_allocated());
    }

    #[test]
    fn index_reads_and_writes() {
        let mut buf: OwnedBuf<i32> = OwnedBuf::new(3);
        buf[0] = 10;
        buf[2] = 30;
        assert_eq!(buf[0], 10);
        assert_eq!(buf[1], 0);
        assert_eq!(buf[2], 30);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_past_len_panics() {
        let buf: OwnedBuf<i32> = OwnedBuf::new(3);
        let _ = buf[3];
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_unallocated_panics() {
        let buf: OwnedBuf<i32> = OwnedBuf::empty();
        let _ = buf[0];
    }

    #[test]
    fn release_transfers_ownership_and_empties() {
        let mut buf = OwnedBuf::from_boxed(vec![7, 8].into_boxed_slice());
        let boxed = buf.release().unwrap();
        assert_eq!(&*boxed, &[7, 8]);
        assert!(!buf.is_allocated());
        // A second release has nothing left to give up.
        assert!(buf.release().is_none());
    }

    #[test]
    fn take_moves_allocation_out() {
        let mut a = OwnedBuf::from_boxed(vec![1, 2].into_boxed_slice());
        let b = a.take();
        assert!(!a.is_allocated());
        assert_eq!(b.as_slice(), &[1, 2]);
    }

    #[test]
    fn swap_exchanges_allocations() {
        let mut a = OwnedBuf::from_boxed(vec![1].into_boxed_slice());
        let mut b: OwnedBuf<i32> = OwnedBuf::new(4);
        a.swap(&mut b);
        assert_eq!(a.len(), 4);
        assert_eq!(b.as_slice(), &[1]);
    }

    #[test]
    fn default_is_unallocated() {
        let buf: OwnedBuf<String> = OwnedBuf::default();
        assert!(!buf.is_allocated());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn len_matches_construction(len in 0usize..256) {
                let buf: OwnedBuf<u8> = OwnedBuf::new(len);
                prop_assert_eq!(buf.len(), len);
                prop_assert_eq!(buf.is_allocated(), len > 0);
            }

            #[test]
            fn release_round_trips(values in proptest::collection::vec(any::<i32>(), 1..64)) {
                let mut buf = OwnedBuf::from_boxed(values.clone().into_boxed_slice());
                let boxed = buf.release().unwrap();
                prop_assert_eq!(boxed.into_vec(), values);
                prop_assert!(!buf.is_allocated());
            }
        }
    }
}
