//! Error type for buffer operations.

/// Error type for `TypedBuffer` operations.
///
/// All variants are synchronous and recoverable. An operation that
/// fails leaves the buffer untouched: no length, offset, or element
/// change happens before the fallible step has succeeded.
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    /// A construction or factory argument outside the representable domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A value that cannot be coerced into the buffer's value kind.
    #[error("invalid type: {0}")]
    InvalidType(String),

    /// `pop` or `shift` on a zero-length buffer.
    #[error("container is empty")]
    EmptyContainer,

    /// The backing allocation could not be grown.
    #[error("allocation of {0} bytes failed")]
    ResourceExhausted(usize),
}
