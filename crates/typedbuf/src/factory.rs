//! Typed factory: an element-type tag resolved to a concrete buffer.
//!
//! Replaces tag-string dispatch with a closed enum. `FromStr` keeps the
//! tag spellings for callers that still hold strings; everything else
//! resolves at compile time.

use std::fmt;
use std::str::FromStr;

use typedbuf_core::{BufferError, Element, Value, ValueKind};

use crate::types::{
    BigInt64Buffer, BigUint64Buffer, Float32Buffer, Float64Buffer, Int16Buffer, Int32Buffer,
    Int8Buffer, Uint16Buffer, Uint32Buffer, Uint8Buffer,
};

/// Tag for each concrete element type the factory can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// 8-bit signed integers.
    Int8,
    /// 16-bit signed integers.
    Int16,
    /// 32-bit signed integers.
    Int32,
    /// 8-bit unsigned integers.
    Uint8,
    /// 16-bit unsigned integers.
    Uint16,
    /// 32-bit unsigned integers.
    Uint32,
    /// 32-bit floats.
    Float32,
    /// 64-bit floats.
    Float64,
    /// Arbitrary-precision signed integers in 8-byte storage.
    BigInt64,
    /// Arbitrary-precision unsigned integers in 8-byte storage.
    BigUint64,
}

impl ElementType {
    /// Every buildable element type.
    pub const ALL: [ElementType; 10] = [
        ElementType::Int8,
        ElementType::Int16,
        ElementType::Int32,
        ElementType::Uint8,
        ElementType::Uint16,
        ElementType::Uint32,
        ElementType::Float32,
        ElementType::Float64,
        ElementType::BigInt64,
        ElementType::BigUint64,
    ];

    /// Canonical tag name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ElementType::Int8 => "Int8",
            ElementType::Int16 => "Int16",
            ElementType::Int32 => "Int32",
            ElementType::Uint8 => "Uint8",
            ElementType::Uint16 => "Uint16",
            ElementType::Uint32 => "Uint32",
            ElementType::Float32 => "Float32",
            ElementType::Float64 => "Float64",
            ElementType::BigInt64 => "BigInt64",
            ElementType::BigUint64 => "BigUint64",
        }
    }

    /// Element byte width of the built buffer.
    #[must_use]
    pub fn width(self) -> usize {
        match self {
            ElementType::Int8 | ElementType::Uint8 => 1,
            ElementType::Int16 | ElementType::Uint16 => 2,
            ElementType::Int32 | ElementType::Uint32 | ElementType::Float32 => 4,
            ElementType::Float64 | ElementType::BigInt64 | ElementType::BigUint64 => 8,
        }
    }

    /// Value kind of the built buffer.
    #[must_use]
    pub fn kind(self) -> ValueKind {
        match self {
            ElementType::BigInt64 | ElementType::BigUint64 => ValueKind::BigInt,
            _ => ValueKind::Number,
        }
    }

    /// Build a buffer of `len` zero elements of this type.
    pub fn new_buffer(self, len: usize) -> Result<DynBuffer, BufferError> {
        Ok(match self {
            ElementType::Int8 => DynBuffer::Int8(Int8Buffer::with_len(len)?),
            ElementType::Int16 => DynBuffer::Int16(Int16Buffer::with_len(len)?),
            ElementType::Int32 => DynBuffer::Int32(Int32Buffer::with_len(len)?),
            ElementType::Uint8 => DynBuffer::Uint8(Uint8Buffer::with_len(len)?),
            ElementType::Uint16 => DynBuffer::Uint16(Uint16Buffer::with_len(len)?),
            ElementType::Uint32 => DynBuffer::Uint32(Uint32Buffer::with_len(len)?),
            ElementType::Float32 => DynBuffer::Float32(Float32Buffer::with_len(len)?),
            ElementType::Float64 => DynBuffer::Float64(Float64Buffer::with_len(len)?),
            ElementType::BigInt64 => DynBuffer::BigInt64(BigInt64Buffer::with_len(len)?),
            ElementType::BigUint64 => DynBuffer::BigUint64(BigUint64Buffer::with_len(len)?),
        })
    }
}

impl Default for ElementType {
    fn default() -> Self {
        ElementType::Int32
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementType {
    type Err = BufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Int8" => Ok(ElementType::Int8),
            "Int16" => Ok(ElementType::Int16),
            "Int32" => Ok(ElementType::Int32),
            "Uint8" => Ok(ElementType::Uint8),
            "Uint16" => Ok(ElementType::Uint16),
            "Uint32" => Ok(ElementType::Uint32),
            "Float32" => Ok(ElementType::Float32),
            "Float64" => Ok(ElementType::Float64),
            // Short spellings accepted alongside the canonical tags.
            "BigInt" | "BigInt64" => Ok(ElementType::BigInt64),
            "BigUint" | "BigUint64" => Ok(ElementType::BigUint64),
            _ => Err(BufferError::InvalidArgument(format!(
                "unknown element type: {s}"
            ))),
        }
    }
}

/// A buffer of any element type, built by [`ElementType::new_buffer`].
///
/// Exposes the value-domain surface shared by every concrete type;
/// code that needs element-typed access or caller comparators should
/// hold the concrete buffer instead.
#[derive(Debug, Clone, PartialEq)]
pub enum DynBuffer {
    /// 8-bit signed integers.
    Int8(Int8Buffer),
    /// 16-bit signed integers.
    Int16(Int16Buffer),
    /// 32-bit signed integers.
    Int32(Int32Buffer),
    /// 8-bit unsigned integers.
    Uint8(Uint8Buffer),
    /// 16-bit unsigned integers.
    Uint16(Uint16Buffer),
    /// 32-bit unsigned integers.
    Uint32(Uint32Buffer),
    /// 32-bit floats.
    Float32(Float32Buffer),
    /// 64-bit floats.
    Float64(Float64Buffer),
    /// Arbitrary-precision signed integers.
    BigInt64(BigInt64Buffer),
    /// Arbitrary-precision unsigned integers.
    BigUint64(BigUint64Buffer),
}

macro_rules! for_each_buffer {
    ($self:expr, $buf:ident => $body:expr) => {
        match $self {
            DynBuffer::Int8($buf) => $body,
            DynBuffer::Int16($buf) => $body,
            DynBuffer::Int32($buf) => $body,
            DynBuffer::Uint8($buf) => $body,
            DynBuffer::Uint16($buf) => $body,
            DynBuffer::Uint32($buf) => $body,
            DynBuffer::Float32($buf) => $body,
            DynBuffer::Float64($buf) => $body,
            DynBuffer::BigInt64($buf) => $body,
            DynBuffer::BigUint64($buf) => $body,
        }
    };
}

impl DynBuffer {
    /// The tag this buffer was built from.
    #[must_use]
    pub fn element_type(&self) -> ElementType {
        match self {
            DynBuffer::Int8(_) => ElementType::Int8,
            DynBuffer::Int16(_) => ElementType::Int16,
            DynBuffer::Int32(_) => ElementType::Int32,
            DynBuffer::Uint8(_) => ElementType::Uint8,
            DynBuffer::Uint16(_) => ElementType::Uint16,
            DynBuffer::Uint32(_) => ElementType::Uint32,
            DynBuffer::Float32(_) => ElementType::Float32,
            DynBuffer::Float64(_) => ElementType::Float64,
            DynBuffer::BigInt64(_) => ElementType::BigInt64,
            DynBuffer::BigUint64(_) => ElementType::BigUint64,
        }
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        for_each_buffer!(self, buf => buf.len())
    }

    /// Whether the live window is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        for_each_buffer!(self, buf => buf.is_empty())
    }

    /// Total elements the current allocation can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        for_each_buffer!(self, buf => buf.capacity())
    }

    /// Fixed byte width of one element.
    #[must_use]
    pub fn element_width(&self) -> usize {
        for_each_buffer!(self, buf => buf.element_width())
    }

    /// Value kind externally supplied values are coerced into.
    #[must_use]
    pub fn value_kind(&self) -> ValueKind {
        for_each_buffer!(self, buf => buf.value_kind())
    }

    /// Logical value at `index`; negative indexes count from the end.
    #[must_use]
    pub fn at(&self, index: isize) -> Option<Value> {
        for_each_buffer!(self, buf => buf.at(index).map(Element::into_value))
    }

    /// Store a value at `index` with the sparse-fill extension rule.
    /// Returns the stored value in its logical domain.
    pub fn set(&mut self, index: usize, value: Value) -> Result<Value, BufferError> {
        for_each_buffer!(self, buf => buf.set(index, value).map(Element::into_value))
    }

    /// Append a value at the logical end.
    pub fn push(&mut self, value: Value) -> Result<Value, BufferError> {
        for_each_buffer!(self, buf => buf.push(value).map(Element::into_value))
    }

    /// Remove and return the last value.
    pub fn pop(&mut self) -> Result<Value, BufferError> {
        for_each_buffer!(self, buf => buf.pop().map(Element::into_value))
    }

    /// Remove and return the first value.
    pub fn shift(&mut self) -> Result<Value, BufferError> {
        for_each_buffer!(self, buf => buf.shift().map(Element::into_value))
    }

    /// Insert a value ahead of the first element.
    pub fn unshift(&mut self, value: Value) -> Result<Value, BufferError> {
        for_each_buffer!(self, buf => buf.unshift(value).map(Element::into_value))
    }

    /// Sort the live window ascending in place.
    pub fn sort(&mut self) {
        for_each_buffer!(self, buf => buf.sort());
    }

    /// Reverse the live window in place.
    pub fn reverse(&mut self) {
        for_each_buffer!(self, buf => buf.reverse());
    }

    /// Release slack: reallocate to `max(len, MIN_CAPACITY)`.
    pub fn compact(&mut self) -> Result<(), BufferError> {
        for_each_buffer!(self, buf => buf.compact())
    }

    /// Index of the first element equal to `value` under the coercion
    /// rule.
    #[must_use]
    pub fn index_of(&self, value: Value) -> Option<usize> {
        for_each_buffer!(self, buf => buf.index_of(value))
    }

    /// Whether any element equals `value` under the coercion rule.
    #[must_use]
    pub fn contains(&self, value: Value) -> bool {
        for_each_buffer!(self, buf => buf.contains(value))
    }

    /// Join the elements' logical values with `separator`.
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        for_each_buffer!(self, buf => buf.join(separator))
    }

    /// Copy of the live window in the logical domain.
    #[must_use]
    pub fn to_values(&self) -> Vec<Value> {
        for_each_buffer!(self, buf => buf.iter().map(|x| x.into_value()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn builds_every_type_with_width_and_kind() {
        for ty in ElementType::ALL {
            let buf = ty.new_buffer(3).unwrap();
            assert_eq!(buf.element_type(), ty);
            assert_eq!(buf.element_width(), ty.width());
            assert_eq!(buf.value_kind(), ty.kind());
            assert_eq!(buf.len(), 3);
        }
    }

    #[test]
    fn parses_canonical_and_short_tags() {
        for ty in ElementType::ALL {
            assert_eq!(ty.name().parse::<ElementType>().unwrap(), ty);
        }
        assert_eq!("BigInt".parse::<ElementType>().unwrap(), ElementType::BigInt64);
        assert_eq!("BigUint".parse::<ElementType>().unwrap(), ElementType::BigUint64);
    }

    #[test]
    fn unknown_tag_is_an_invalid_argument() {
        let err = "Complex128".parse::<ElementType>().unwrap_err();
        assert!(matches!(err, BufferError::InvalidArgument(_)));
    }

    #[test]
    fn default_type_is_int32() {
        assert_eq!(ElementType::default(), ElementType::Int32);
    }

    #[test]
    fn dispatch_round_trips_machine_numbers() {
        let mut buf = ElementType::Uint8.new_buffer(0).unwrap();
        buf.push(Value::Number(300.0)).unwrap();
        buf.push(Value::Number(5.0)).unwrap();
        assert_eq!(buf.at(0), Some(Value::Number(44.0)));
        assert_eq!(buf.pop().unwrap(), Value::Number(5.0));
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn dispatch_surfaces_bigints() {
        let mut buf = ElementType::BigInt64.new_buffer(0).unwrap();
        buf.push(Value::Big(BigInt::from(-5))).unwrap();
        assert_eq!(buf.at(0), Some(Value::Big(BigInt::from(-5))));
        assert!(buf.push(Value::Number(0.5)).is_err());
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn dispatch_sorts_and_joins() {
        let mut buf = ElementType::Int32.new_buffer(0).unwrap();
        for n in [3.0, 1.0, 2.0] {
            buf.push(Value::Number(n)).unwrap();
        }
        buf.sort();
        assert_eq!(buf.join(","), "1,2,3");
        buf.reverse();
        assert_eq!(buf.join(","), "3,2,1");
    }

    #[test]
    fn dispatch_searches_with_coercion() {
        let mut buf = ElementType::Int16.new_buffer(0).unwrap();
        buf.push(Value::Number(7.0)).unwrap();
        assert!(buf.contains(Value::Number(7.2))); // truncates to 7
        assert_eq!(buf.index_of(Value::Number(8.0)), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(ElementType::Float32.to_string(), "Float32");
        assert_eq!(ElementType::BigUint64.to_string(), "BigUint64");
    }
}
