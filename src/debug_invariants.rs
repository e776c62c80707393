//! Invariant checks for the stateful buffers in this crate.
//!
//! [`ChunkBuffer`](crate::seq::chunk::ChunkBuffer) and
//! [`TopKSelector`](crate::select::topk::TopKSelector) both promise a size
//! bound. The checks run in debug builds, or in release builds with the
//! `check-invariants` / `strict-invariants` features.

use crate::seq_error::SeqError;

/// Structures with a checkable size invariant.
pub trait DebugInvariants {
    /// Panic if an invariant is broken (no-op unless checking is enabled).
    fn debug_assert_invariants(&self);
    /// Report the first broken invariant as [`SeqError::InvariantViolation`].
    fn validate_invariants(&self) -> Result<(), SeqError>;
}

/// `Ok` when `len <= bound`, otherwise an invariant violation naming `what`.
pub(crate) fn check_bound(what: &'static str, len: usize, bound: usize) -> Result<(), SeqError> {
    if len > bound {
        Err(SeqError::InvariantViolation {
            what,
            len,
            bound,
        })
    } else {
        Ok(())
    }
}

/// Run a fallible invariant check and panic with context when checking is on.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
