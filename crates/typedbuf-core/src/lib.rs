//! # typedbuf-core
//!
//! Growable, double-ended, fixed-width-element buffer over a contiguous
//! allocation, with value-kind coercion on every write and an adaptive
//! integer sort that switches between distribution counting and
//! comparison sorting per call.

pub mod buffer;
pub mod constants;
pub mod element;
pub mod error;
mod ops;
pub(crate) mod sort;
pub mod value;

// Re-exports
pub use buffer::TypedBuffer;
pub use constants::MIN_CAPACITY;
pub use element::{BigInt64, BigUint64, Element};
pub use error::BufferError;
pub use value::{Value, ValueKind};

/// Sort a copy of `values` ascending with the buffer's default sort.
///
/// Convenience for one-shot use. For repeated mutation and sorting,
/// build a [`TypedBuffer`] directly.
///
/// # Example
/// ```
/// assert_eq!(typedbuf_core::sorted(&[3i32, 1, 2]), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn sorted<E: Element>(values: &[E]) -> Vec<E> {
    let mut buf = TypedBuffer::from_slice(values);
    buf.sort();
    buf.to_vec()
}
