//! Sequences driven by a stateful seed.
//!
//! Useful for things that behave like iterators without implementing
//! [`Iterator`]: a scanner, a tokenizer, a regex matcher. The seed is moved
//! into the sequence and handed to the extraction callback by `&mut` on every
//! pull.

use crate::seq::lazy::LazySeq;
use crate::seq_error::{BoxedError, SeqError};

/// Seed holder returned by [`from_seed`](crate::seq::source::from_seed).
#[derive(Debug, Clone)]
pub struct SeedGenerator<K> {
    seed: K,
}

impl<K> SeedGenerator<K> {
    pub(crate) fn new(seed: K) -> Self {
        Self { seed }
    }

    /// Borrow the seed.
    pub fn seed(&self) -> &K {
        &self.seed
    }

    /// Extract elements with `next`; `None` ends the sequence.
    pub fn stream_optional<'a, T, F>(self, mut next: F) -> LazySeq<'a, T>
    where
        K: Send + 'a,
        T: 'a,
        F: FnMut(&mut K) -> Option<T> + Send + 'a,
    {
        let mut seed = self.seed;
        LazySeq::from_generator(move || next(&mut seed))
    }

    /// Extract elements with `next`; a value equal to `sentinel` ends the
    /// sequence and is not yielded.
    pub fn stream_nullable<'a, T, F>(self, sentinel: T, mut next: F) -> LazySeq<'a, T>
    where
        K: Send + 'a,
        T: PartialEq + Send + 'a,
        F: FnMut(&mut K) -> T + Send + 'a,
    {
        self.stream_optional(move |seed| {
            let item = next(seed);
            (item != sentinel).then_some(item)
        })
    }

    /// Extract elements with a fallible `next`.
    ///
    /// Failures are wrapped in [`SeqError::Producer`] and yielded at the
    /// position where they happened; the sequence is not ended by them.
    pub fn try_stream<'a, T, E, F>(self, mut next: F) -> LazySeq<'a, Result<T, SeqError>>
    where
        K: Send + 'a,
        T: 'a,
        E: Into<BoxedError>,
        F: FnMut(&mut K) -> Result<Option<T>, E> + Send + 'a,
    {
        self.stream_optional(move |seed| next(seed).map_err(SeqError::producer).transpose())
    }

    /// Yield a snapshot of the seed for as long as `pred` holds.
    ///
    /// `pred` may advance the seed (e.g. "find the next match"); each yielded
    /// element is a clone taken right after a successful test.
    pub fn stream_while<'a, P>(self, mut pred: P) -> LazySeq<'a, K>
    where
        K: Clone + Send + 'a,
        P: FnMut(&mut K) -> bool + Send + 'a,
    {
        self.stream_optional(move |seed| pred(seed).then(|| seed.clone()))
    }
}
