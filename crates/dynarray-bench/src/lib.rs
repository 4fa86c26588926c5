//! Benchmark workloads for the dynarray container.
//!
//! Provides pre-built inputs shared by the bench targets so that every
//! benchmark measures the same data shapes:
//!
//! - [`sequential_values`]: `0..n` as `i32`
//! - [`prefilled`]: a [`DynArray`] built by `n` sequential pushes

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarray::DynArray;

/// The values `0..n`, the standard fill pattern for the benches.
pub fn sequential_values(n: usize) -> Vec<i32> {
    (0..n as i32).collect()
}

/// A `DynArray` built by `n` sequential pushes (so capacity reflects the
/// doubling growth path, not an exact-fit allocation).
pub fn prefilled(n: usize) -> DynArray<i32> {
    let mut arr = DynArray::new();
    for v in sequential_values(n) {
        arr.push(v);
    }
    arr
}
