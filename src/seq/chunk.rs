//! Fixed-size chunking.
//!
//! [`ChunkBuffer`] is a value-level state machine: accepting an element
//! either hands the buffer back ([`Accepted::Open`]) or seals it and hands out
//! the finished chunk together with a fresh buffer of the same capacity
//! ([`Accepted::Sealed`]). [`Chunks`] drives one over any iterator.

use crate::debug_invariants::{DebugInvariants, check_bound};
use crate::seq_error::{SeqError, ensure_positive};

/// Outcome of [`ChunkBuffer::accept`].
#[derive(Debug)]
pub enum Accepted<T> {
    /// Still room left; keep feeding this buffer.
    Open(ChunkBuffer<T>),
    /// The buffer reached capacity and was sealed.
    Sealed {
        /// Exactly `capacity` elements, in arrival order.
        chunk: Vec<T>,
        /// Empty replacement with the same capacity.
        next: ChunkBuffer<T>,
    },
}

/// Append-only buffer that seals itself once it holds `max` elements.
#[derive(Debug, Clone)]
pub struct ChunkBuffer<T> {
    items: Vec<T>,
    max: usize,
}

impl<T> ChunkBuffer<T> {
    /// Empty buffer sealing at `max` elements.
    ///
    /// # Errors
    /// [`SeqError::InvalidArgument`] if `max == 0`.
    pub fn new(max: usize) -> Result<Self, SeqError> {
        let max = ensure_positive("chunk size", max)?;
        Ok(Self::with_capacity_unchecked(max))
    }

    fn with_capacity_unchecked(max: usize) -> Self {
        Self {
            items: Vec::new(),
            max,
        }
    }

    /// Add `item`, sealing the buffer if that fills it.
    pub fn accept(mut self, item: T) -> Accepted<T> {
        self.items.push(item);
        if self.items.len() < self.max {
            return Accepted::Open(self);
        }
        log::trace!("chunk buffer sealed at {} elements", self.max);
        let next = Self::with_capacity_unchecked(self.max);
        Accepted::Sealed {
            chunk: self.items,
            next,
        }
    }

    /// Final partial chunk, or `None` if nothing is buffered.
    pub fn flush(self) -> Option<Vec<T>> {
        (!self.items.is_empty()).then_some(self.items)
    }

    /// Number of buffered elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when nothing is buffered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Size at which the buffer seals.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.max
    }
}

impl<T> DebugInvariants for ChunkBuffer<T> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "ChunkBuffer");
    }

    fn validate_invariants(&self) -> Result<(), SeqError> {
        // an open buffer is always strictly below capacity
        check_bound("open chunk buffer", self.items.len(), self.max.saturating_sub(1))
    }
}

/// Iterator of `Vec<T>` chunks of `size` elements over `source`.
///
/// All chunks but the last hold exactly `size` elements; the last holds
/// `1..=size`. An empty source yields no chunks.
pub struct Chunks<I: Iterator> {
    source: I,
    buffer: Option<ChunkBuffer<I::Item>>,
}

impl<I: Iterator> Chunks<I> {
    /// # Errors
    /// [`SeqError::InvalidArgument`] if `size == 0`.
    pub fn new(source: I, size: usize) -> Result<Self, SeqError> {
        Ok(Self {
            source,
            buffer: Some(ChunkBuffer::new(size)?),
        })
    }
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buffer = self.buffer.take()?;
        loop {
            buffer.debug_assert_invariants();
            let Some(item) = self.source.next() else {
                return buffer.flush();
            };
            match buffer.accept(item) {
                Accepted::Open(open) => buffer = open,
                Accepted::Sealed { chunk, next } => {
                    self.buffer = Some(next);
                    return Some(chunk);
                }
            }
        }
    }
}

impl<I: Iterator> std::iter::FusedIterator for Chunks<I> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_is_rejected() {
        let err = ChunkBuffer::<u8>::new(0).unwrap_err();
        assert!(matches!(err, SeqError::InvalidArgument { value: 0, .. }), "{err}");
        assert!(Chunks::new(0..3, 0).is_err());
    }

    #[test]
    fn buffer_seals_at_capacity() {
        let buf = ChunkBuffer::new(2).unwrap();
        let buf = match buf.accept('a') {
            Accepted::Open(b) => b,
            Accepted::Sealed { .. } => panic!("sealed too early"),
        };
        assert_eq!(buf.len(), 1);
        assert!(buf.validate_invariants().is_ok());
        match buf.accept('b') {
            Accepted::Sealed { chunk, next } => {
                assert_eq!(chunk, vec!['a', 'b']);
                assert!(next.is_empty());
                assert_eq!(next.capacity(), 2);
            }
            Accepted::Open(_) => panic!("should have sealed"),
        }
    }

    #[test]
    fn capacity_one_seals_every_element() {
        let chunks: Vec<_> = Chunks::new("xyz".chars(), 1).unwrap().collect();
        assert_eq!(chunks, vec![vec!['x'], vec!['y'], vec!['z']]);
    }

    #[test]
    fn flush_of_empty_buffer_is_none() {
        assert_eq!(ChunkBuffer::<u8>::new(4).unwrap().flush(), None);
    }

    #[test]
    fn exact_multiple_has_no_trailing_chunk() {
        let chunks: Vec<_> = Chunks::new(1..=6, 3).unwrap().collect();
        assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn partial_tail_is_emitted() {
        let chunks: Vec<_> = Chunks::new(1..=7, 3).unwrap().collect();
        assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
    }

    #[test]
    fn empty_source_has_no_chunks() {
        let mut chunks = Chunks::new(std::iter::empty::<u8>(), 5).unwrap();
        assert_eq!(chunks.next(), None);
        assert_eq!(chunks.next(), None);
    }
}
