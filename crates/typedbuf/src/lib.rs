//! # typedbuf
//!
//! Thin configuration over `typedbuf-core`: the family of concrete
//! element-type buffers (8/16/32-bit signed and unsigned integers,
//! floats, and 64-bit big-integer storage) and the factory selecting
//! among them.
//!
//! # Example
//! ```
//! use typedbuf::Int32Buffer;
//!
//! let mut buf = Int32Buffer::with_len(0)?;
//! buf.push(3)?;
//! buf.push(1)?;
//! buf.push(2)?;
//! buf.sort();
//! assert_eq!(buf.to_vec(), vec![1, 2, 3]);
//! # Ok::<(), typedbuf::BufferError>(())
//! ```

pub mod factory;
pub mod types;

// Re-exports
pub use factory::{DynBuffer, ElementType};
pub use typedbuf_core::{
    BigInt64, BigUint64, BufferError, Element, TypedBuffer, Value, ValueKind, MIN_CAPACITY,
};
pub use types::{
    BigInt64Buffer, BigUint64Buffer, Float32Buffer, Float64Buffer, Int16Buffer, Int32Buffer,
    Int8Buffer, Uint16Buffer, Uint32Buffer, Uint8Buffer,
};
