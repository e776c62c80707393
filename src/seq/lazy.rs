//! [`LazySeq`]: a single-pass, lazily evaluated sequence.
//!
//! Every sequence is backed by a [`GeneratorCursor`] over a boxed producer,
//! whatever it was built from (a generator callback, an iterator, a
//! concatenation, a chunking pass). Nothing is computed until an element is
//! demanded, and a consumed element cannot be replayed.

use std::fmt;
use std::sync::Arc;

use crate::cursor::GeneratorCursor;
use crate::seq::builder::SequenceBuilder;
use crate::seq_error::SeqError;

/// Boxed producer callback backing a [`LazySeq`].
pub type Producer<'a, T> = Box<dyn FnMut() -> Option<T> + Send + 'a>;

/// Lazy, single-pass sequence.
///
/// Implements [`Iterator`], so any adapter from `std` or `itertools` applies.
/// [`probe`](Self::probe) and [`take_next`](Self::take_next) offer the cursor protocol
/// through a shared reference.
pub struct LazySeq<'a, T> {
    cursor: GeneratorCursor<T, Producer<'a, T>>,
}

impl<'a, T: 'a> LazySeq<'a, T> {
    /// Sequence driven by `producer`; `None` ends it.
    ///
    /// This is the primitive constructor: end-of-sequence is always the
    /// explicit `None`, never an in-band value.
    pub fn from_generator<F>(producer: F) -> Self
    where
        F: FnMut() -> Option<T> + Send + 'a,
    {
        Self {
            cursor: GeneratorCursor::new(Box::new(producer)),
        }
    }

    /// Sequence with no elements.
    pub fn empty() -> Self {
        Self::from_generator(|| None)
    }

    /// Whether another element is available, without consuming it.
    pub fn probe(&self) -> bool {
        self.cursor.probe()
    }

    /// Consume the next element.
    ///
    /// # Errors
    /// [`SeqError::IllegalState`] if the sequence has ended.
    pub fn take_next(&self) -> Result<T, SeqError> {
        self.cursor.take_next()
    }

    /// Stop at the first element matching `pred`.
    ///
    /// The matching element is consumed from the source but not yielded:
    /// `[a, b, c, d]` with `pred` true on `c` gives `[a, b]`.
    pub fn until<P>(mut self, mut pred: P) -> LazySeq<'a, T>
    where
        P: FnMut(&T) -> bool + Send + 'a,
        T: Send,
    {
        LazySeq::from_generator(move || match self.next() {
            Some(item) if !pred(&item) => Some(item),
            _ => None,
        })
    }

    /// Start a concatenation with this sequence first.
    pub fn into_builder(self) -> SequenceBuilder<'a, T>
    where
        T: Send,
    {
        SequenceBuilder::from_seq(self)
    }

    /// Shareable handle that hands out this sequence's elements in order.
    pub fn into_supplier(self) -> Supplier<'a, T> {
        Supplier {
            cursor: Arc::new(self.cursor),
        }
    }

    /// Give up the sequence wrapper and keep only its producer.
    pub(crate) fn into_producer(mut self) -> Producer<'a, T>
    where
        T: Send,
    {
        Box::new(move || self.next())
    }
}

impl<T> Iterator for LazySeq<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.cursor.next_mut()
    }
}

impl<T> std::iter::FusedIterator for LazySeq<'_, T> {}

impl<T> fmt::Debug for LazySeq<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySeq")
            .field("cursor", &self.cursor)
            .finish()
    }
}

/// Thread-safe pull handle over a sequence.
///
/// Clones share the same position: every element goes to exactly one caller
/// of [`get`](Self::get), and all callers see `None` once the sequence ends.
pub struct Supplier<'a, T> {
    cursor: Arc<GeneratorCursor<T, Producer<'a, T>>>,
}

impl<T> Supplier<'_, T> {
    /// Next element, or `None` once the underlying sequence has ended.
    pub fn get(&self) -> Option<T> {
        self.cursor.try_next()
    }
}

impl<T> Clone for Supplier<'_, T> {
    fn clone(&self) -> Self {
        Self {
            cursor: Arc::clone(&self.cursor),
        }
    }
}

impl<T> fmt::Debug for Supplier<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Supplier")
            .field("cursor", &self.cursor)
            .finish()
    }
}

static_assertions::assert_impl_all!(LazySeq<'static, String>: Send, Sync);
static_assertions::assert_impl_all!(Supplier<'static, String>: Send, Sync, Clone);
