//! SeqError: Unified error type for lazyseq public APIs
//!
//! Argument validation and misuse of exhausted sequences are reported through
//! this type instead of panicking. Failures raised by caller-supplied
//! callbacks can be carried in [`SeqError::Producer`] unchanged.

use thiserror::Error;

/// Boxed error raised by a caller-supplied callback.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Unified error type for lazyseq operations.
#[derive(Debug, Error)]
pub enum SeqError {
    /// A numeric argument was outside its valid range (e.g. a chunk size or
    /// top-K capacity of zero).
    #[error("invalid argument: {what} must be positive, got {value}")]
    InvalidArgument { what: &'static str, value: i64 },
    /// An element was requested from a cursor or sequence that has ended.
    #[error("illegal state: {0}")]
    IllegalState(&'static str),
    /// A producer, predicate or comparator callback failed.
    #[error("producer failed: {0}")]
    Producer(#[source] BoxedError),
    /// A buffer outgrew its documented bound (only raised by invariant checks).
    #[error("invariant violated: {what} holds {len} elements, bound is {bound}")]
    InvariantViolation {
        what: &'static str,
        len: usize,
        bound: usize,
    },
}

impl SeqError {
    /// Wrap a callback failure so it can travel through `SeqError`.
    pub fn producer<E>(err: E) -> Self
    where
        E: Into<BoxedError>,
    {
        SeqError::Producer(err.into())
    }

    /// Convenience constructor for [`SeqError::InvalidArgument`].
    pub(crate) fn invalid(what: &'static str, value: impl TryInto<i64>) -> Self {
        SeqError::InvalidArgument {
            what,
            value: value.try_into().unwrap_or(i64::MAX),
        }
    }
}

/// Reject zero for a count-like argument.
pub(crate) fn ensure_positive(what: &'static str, value: usize) -> Result<usize, SeqError> {
    if value == 0 {
        Err(SeqError::invalid(what, value))
    } else {
        Ok(value)
    }
}
