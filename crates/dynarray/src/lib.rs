//! A growable array container over an exclusively-owned heap buffer.
//!
//! [`DynArray`] is a contiguous sequence with amortised doubling growth,
//! built on [`OwnedBuf`] from the `dynarray-buf` crate. The buffer owns
//! the allocation; the container tracks the live length and drives
//! reallocation.
//!
//! # Storage model
//!
//! Every allocated slot holds a real, initialised `T`. Slots at indices
//! `[len, capacity)` exist but hold unspecified leftover values that are
//! not part of the logical sequence. Because growth allocates fresh
//! default-filled storage, sized constructors and every growing operation
//! require `T: Default` — a per-method bound, so read-only use of a
//! `DynArray<T>` built from an existing sequence has no bounds at all.
//!
//! # Reference invalidation
//!
//! Any reference or iterator borrowed from the array is tied to the borrow
//! of the array itself, so the compiler rejects use across a mutation.
//! There is no runtime invalidation tracking, and none is needed.
//!
//! # Threading
//!
//! Single-threaded by design. The type is `Send`/`Sync` exactly when `T`
//! is, and concurrent mutation requires external synchronization — `&mut`
//! exclusivity is the only internal guard.
//!
//! # Quick start
//!
//! ```
//! use dynarray::DynArray;
//!
//! let mut arr: DynArray<i32> = DynArray::new();
//! arr.push(1);
//! arr.push(2);
//! arr.push(3);
//! assert_eq!(arr.as_slice(), &[1, 2, 3]);
//! assert_eq!(arr.capacity(), 4); // 0 → 1 → 2 → 4 doubling growth
//!
//! arr.insert(1, 9);
//! assert_eq!(format!("{arr}"), "{ 1 9 2 3 }");
//! assert_eq!(arr.remove(1), 9);
//! assert_eq!(arr.pop(), Some(3));
//! assert_eq!(arr.as_slice(), &[1, 2]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod error;
pub mod iter;

pub use array::DynArray;
pub use dynarray_buf::OwnedBuf;
pub use error::ArrayError;
pub use iter::IntoIter;
