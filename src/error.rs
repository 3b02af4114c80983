//! Error types for lazy stream operations
//!
//! Almost every stream operation is total: running off the end of a stream is
//! signalled by the empty stream, not by an error. The few accessors that must
//! produce a value report failure through [`StreamError`].

use thiserror::Error;

/// Main error type for stream operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// Indexed access ran past the last element.
    /// `len` is the number of elements that were actually present.
    #[error("Index out of bounds: index {index} but stream has {len} element(s)")]
    IndexOutOfBounds { index: usize, len: usize },

    /// An accessor that needs at least one element was called on an empty stream
    #[error("Empty stream: `{operation}` needs at least one element")]
    EmptyStream { operation: &'static str },

    /// A bounded enumeration whose step can never reach its limit
    #[error("Invalid step: enumeration from {start} towards {limit} never terminates")]
    InvalidStep { start: String, limit: String },
}

/// Result type for stream operations
pub type StreamResult<T> = Result<T, StreamError>;
