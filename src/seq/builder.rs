//! [`SequenceBuilder`]: lazy concatenation of sequences.
//!
//! Sources are kept in append order and only opened once every earlier
//! source is exhausted. [`build`](SequenceBuilder::build) consumes the
//! builder, so a built sequence owns exactly the sources appended before it
//! and later appends (to a new builder) can never reach into it.

use std::collections::VecDeque;
use std::fmt;

use crate::seq::chunk::Chunks;
use crate::seq::lazy::{LazySeq, Supplier};
use crate::seq::source;
use crate::seq_error::SeqError;

/// Accumulates sources into one concatenated [`LazySeq`].
pub struct SequenceBuilder<'a, T> {
    sources: VecDeque<LazySeq<'a, T>>,
}

impl<'a, T: Send + 'a> SequenceBuilder<'a, T> {
    /// Builder with no sources.
    pub fn new() -> Self {
        Self {
            sources: VecDeque::new(),
        }
    }

    /// Builder whose first source is `seq`.
    pub fn from_seq(seq: LazySeq<'a, T>) -> Self {
        Self::new().append(seq)
    }

    /// Number of sources appended so far.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Append in place.
    pub fn push(&mut self, seq: LazySeq<'a, T>) {
        self.sources.push_back(seq);
    }

    /// Append a sequence after everything appended so far.
    pub fn append(mut self, seq: LazySeq<'a, T>) -> Self {
        self.push(seq);
        self
    }

    /// Append the elements of any iterable.
    pub fn append_iter<I>(self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'a,
    {
        self.append(source::from_iterable(items))
    }

    /// Append a fixed list of values.
    pub fn append_values(self, values: Vec<T>) -> Self {
        self.append_iter(values)
    }

    /// Append a generator; `None` ends its contribution.
    pub fn append_generator<F>(self, producer: F) -> Self
    where
        F: FnMut() -> Option<T> + Send + 'a,
    {
        self.append(source::from_generator(producer))
    }

    /// Append a producer of whole sub-sequences, flattened in order.
    ///
    /// `producer` is first called once everything before it is exhausted,
    /// and again each time the sub-sequence it returned runs out.
    pub fn append_lazy<F>(self, producer: F) -> Self
    where
        F: FnMut() -> Option<LazySeq<'a, T>> + Send + 'a,
    {
        self.append(source::from_iterator(
            source::from_generator(producer).flatten(),
        ))
    }

    /// Replace the concatenation so far with its prefix before the first
    /// element matching `pred` (that element is dropped).
    pub fn until<P>(self, pred: P) -> Self
    where
        P: FnMut(&T) -> bool + Send + 'a,
    {
        Self::from_seq(self.build().until(pred))
    }

    /// Group the concatenation into chunks of `size` elements.
    ///
    /// Every chunk but the last has exactly `size` elements; the last has
    /// `1..=size`. Nothing is pulled from the sources until the first chunk
    /// is demanded.
    ///
    /// # Errors
    /// [`SeqError::InvalidArgument`] if `size == 0`.
    pub fn chunk(self, size: usize) -> Result<SequenceBuilder<'a, LazySeq<'a, T>>, SeqError> {
        let chunks = Chunks::new(self.build(), size)?;
        let seqs = chunks.map(|chunk| source::from_iterable(chunk));
        Ok(SequenceBuilder::from_seq(source::from_iterator(seqs)))
    }

    /// Shareable, thread-safe handle over the concatenation.
    pub fn supplier(self) -> Supplier<'a, T> {
        self.build().into_supplier()
    }

    /// The concatenated sequence.
    pub fn build(mut self) -> LazySeq<'a, T> {
        match self.sources.len() {
            0 => LazySeq::empty(),
            1 => self.sources.pop_front().unwrap_or_else(LazySeq::empty),
            n => {
                log::trace!("building concatenation of {n} sources");
                let mut current = self.sources.pop_front().map(LazySeq::into_producer);
                let mut rest = self.sources;
                LazySeq::from_generator(move || {
                    while let Some(producer) = current.as_mut() {
                        if let Some(item) = producer() {
                            return Some(item);
                        }
                        current = rest.pop_front().map(LazySeq::into_producer);
                    }
                    None
                })
            }
        }
    }
}

impl<'a, T: Send + 'a> Default for SequenceBuilder<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SequenceBuilder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceBuilder")
            .field("sources", &self.sources.len())
            .finish()
    }
}
