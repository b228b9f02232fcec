//! External value domain and the shared numeric-coercion helpers.
//!
//! Callers hand values to a buffer as a [`Value`]: either a machine
//! number or an arbitrary-precision integer. Each element type turns a
//! `Value` into its storage representation through the helpers here;
//! the two kinds are a closed enum, so coercion is an explicit match
//! rather than runtime type inspection.

use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{FromPrimitive, One, ToPrimitive};

use crate::error::BufferError;

/// Logical numeric domain an element is coerced into before storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Ordinary machine numerics (integers and floats).
    Number,
    /// Arbitrary-precision integers.
    BigInt,
}

impl ValueKind {
    /// Human-readable name, used in error messages and factory output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Number => "machine-number",
            ValueKind::BigInt => "arbitrary-precision-integer",
        }
    }
}

/// A value offered to (or read out of) a buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Machine number.
    Number(f64),
    /// Arbitrary-precision integer.
    Big(BigInt),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Big(b) => write!(f, "{b}"),
        }
    }
}

// Primitives that embed exactly in f64 convert to the machine-number
// kind; 64-bit and wider integers go through BigInt so no bits are lost.
macro_rules! value_from_number {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Number(f64::from(n))
            }
        }
    )*};
}
value_from_number!(f64, f32, i8, i16, i32, u8, u16, u32);

macro_rules! value_from_big {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Big(BigInt::from(n))
            }
        }
    )*};
}
value_from_big!(i64, u64, i128, u128);

impl From<BigInt> for Value {
    fn from(b: BigInt) -> Self {
        Value::Big(b)
    }
}

impl From<&BigInt> for Value {
    fn from(b: &BigInt) -> Self {
        Value::Big(b.clone())
    }
}

/// Truncate a machine number toward zero and wrap it to the low `bits`
/// bits, ToIntN-style: non-finite inputs wrap to 0.
///
/// Magnitudes at or above 2^84 are exact multiples of 2^64 in `f64`
/// (the mantissa has 52 fractional bits), so their low 64 bits are all
/// zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn wrap_number(n: f64, bits: u32) -> u64 {
    debug_assert!(bits <= 64);
    if !n.is_finite() {
        return 0;
    }
    let t = n.trunc();
    if t.abs() >= 2f64.powi(84) {
        return 0;
    }
    let modulus = 1i128 << bits;
    (t as i128).rem_euclid(modulus) as u64
}

/// Wrap an arbitrary-precision integer to its low `bits` bits.
pub(crate) fn wrap_big(b: &BigInt, bits: u32) -> u64 {
    let modulus = BigInt::one() << bits;
    b.mod_floor(&modulus).to_u64().unwrap_or(0)
}

/// Widen a machine number into an exact arbitrary-precision integer.
///
/// A fractional or non-finite number has no integer reading and fails
/// with `InvalidType`.
pub(crate) fn exact_big_from_number(n: f64) -> Result<BigInt, BufferError> {
    if n.is_finite() && n.fract() == 0.0 {
        if let Some(b) = BigInt::from_f64(n) {
            return Ok(b);
        }
    }
    Err(BufferError::InvalidType(format!(
        "{n} has no arbitrary-precision-integer representation"
    )))
}

/// Approximate an arbitrary-precision integer as `f64`.
pub(crate) fn big_to_float(b: &BigInt) -> Result<f64, BufferError> {
    b.to_f64().ok_or_else(|| {
        BufferError::InvalidType(format!("{b} has no machine-number representation"))
    })
}
