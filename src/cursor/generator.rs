//! [`GeneratorCursor`]: a thread-safe, memoizing cursor over a producer callback.
//!
//! The producer is called lazily, on the first `probe` or `take` for a given
//! position, and its answer is cached until the element is taken. Probing any
//! number of times therefore costs one producer call per position, and once
//! the producer reports the end it is never called again.
//!
//! All access goes through one [`parking_lot::Mutex`] per cursor, so
//! concurrent `probe`/`take` callers see a serialized view and the producer's
//! side effects happen at most once per element.

use std::fmt;

use parking_lot::Mutex;

use crate::seq_error::SeqError;

/// Memo for the current position.
enum Slot<T> {
    /// Nothing computed for this position yet.
    Pending,
    /// The producer answered with an element that has not been taken.
    Ready(T),
    /// The producer reported the end; sticky.
    Ended,
}

struct CursorState<T, F> {
    producer: F,
    slot: Slot<T>,
}

impl<T, F> CursorState<T, F>
where
    F: FnMut() -> Option<T>,
{
    /// Make sure the slot holds an answer for the current position.
    /// Returns whether that answer is an element.
    #[inline]
    fn fill(&mut self) -> bool {
        if let Slot::Pending = self.slot {
            self.slot = match (self.producer)() {
                Some(item) => Slot::Ready(item),
                None => {
                    log::trace!("generator cursor reached end of input");
                    Slot::Ended
                }
            };
        }
        matches!(self.slot, Slot::Ready(_))
    }

    /// Hand out the memoized element, clearing the memo.
    #[inline]
    fn advance(&mut self) -> Option<T> {
        if !self.fill() {
            return None;
        }
        match std::mem::replace(&mut self.slot, Slot::Pending) {
            Slot::Ready(item) => Some(item),
            other => {
                self.slot = other;
                None
            }
        }
    }
}

/// Stateful pull cursor over a producer callback.
///
/// `F` returns `Some(item)` for each element and `None` once the source is
/// done. Construction does not call the producer.
pub struct GeneratorCursor<T, F> {
    state: Mutex<CursorState<T, F>>,
}

impl<T, F> GeneratorCursor<T, F>
where
    F: FnMut() -> Option<T>,
{
    /// Bind a cursor to `producer`.
    pub fn new(producer: F) -> Self {
        Self {
            state: Mutex::new(CursorState {
                producer,
                slot: Slot::Pending,
            }),
        }
    }

    /// Whether another element is available. Never consumes.
    pub fn probe(&self) -> bool {
        self.state.lock().fill()
    }

    /// Consume and return the next element.
    ///
    /// # Errors
    /// [`SeqError::IllegalState`] if the cursor is exhausted.
    pub fn take_next(&self) -> Result<T, SeqError> {
        self.try_next()
            .ok_or(SeqError::IllegalState("take_next() on an exhausted cursor"))
    }

    /// Probe and take under a single lock acquisition.
    pub fn try_next(&self) -> Option<T> {
        self.state.lock().advance()
    }

    /// `true` once the producer has reported the end.
    ///
    /// Unlike [`probe`](Self::probe) this never calls the producer, so a
    /// fresh cursor reports `false` even if its source is empty.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state.lock().slot, Slot::Ended)
    }

    /// Exclusive-access variant of [`try_next`](Self::try_next); skips locking.
    #[inline]
    pub(crate) fn next_mut(&mut self) -> Option<T> {
        self.state.get_mut().advance()
    }
}

impl<T, F> Iterator for GeneratorCursor<T, F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.next_mut()
    }
}

impl<T, F> std::iter::FusedIterator for GeneratorCursor<T, F> where F: FnMut() -> Option<T> {}

impl<T, F> fmt::Debug for GeneratorCursor<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = match self.state.try_lock() {
            Some(state) => match state.slot {
                Slot::Pending => "pending",
                Slot::Ready(_) => "ready",
                Slot::Ended => "ended",
            },
            None => "<locked>",
        };
        f.debug_struct("GeneratorCursor").field("slot", &slot).finish()
    }
}

static_assertions::assert_impl_all!(GeneratorCursor<u64, fn() -> Option<u64>>: Send, Sync);
