//! Concrete element-type aliases over the generic buffer.
//!
//! One alias per storage width and value kind. The width and kind live
//! on the element type itself, so these are plain aliases rather than
//! wrapper structs.

use typedbuf_core::{BigInt64, BigUint64, TypedBuffer};

/// 8-bit signed integers.
pub type Int8Buffer = TypedBuffer<i8>;

/// 16-bit signed integers.
pub type Int16Buffer = TypedBuffer<i16>;

/// 32-bit signed integers.
pub type Int32Buffer = TypedBuffer<i32>;

/// 8-bit unsigned integers.
pub type Uint8Buffer = TypedBuffer<u8>;

/// 16-bit unsigned integers.
pub type Uint16Buffer = TypedBuffer<u16>;

/// 32-bit unsigned integers.
pub type Uint32Buffer = TypedBuffer<u32>;

/// 32-bit floats.
pub type Float32Buffer = TypedBuffer<f32>;

/// 64-bit floats.
pub type Float64Buffer = TypedBuffer<f64>;

/// 8-byte storage surfaced as arbitrary-precision signed integers.
pub type BigInt64Buffer = TypedBuffer<BigInt64>;

/// 8-byte storage surfaced as arbitrary-precision unsigned integers.
pub type BigUint64Buffer = TypedBuffer<BigUint64>;
