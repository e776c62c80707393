#![cfg_attr(docsrs, feature(doc_cfg))]
//! # lazyseq
//!
//! lazyseq turns pull-based element sources (generator callbacks, stateful
//! cursors, "has more / next" protocols, plain iterators) into composable,
//! lazily evaluated sequences, and provides a bounded top-K reducer that can
//! be split and merged for parallel reduction.
//!
//! ## Features
//! - [`GeneratorCursor`]: memoizing `probe`/`take_next` cursor over a producer
//!   callback; the producer runs at most once per element, even under
//!   concurrent access.
//! - [`LazySeq`]: single-pass sequence over a cursor, usable as an
//!   [`Iterator`], plus constructors in [`seq::source`] (generators,
//!   sentinel-terminated generators, fallible generators, seeds, cycles).
//! - [`SequenceBuilder`]: lazy concatenation of heterogeneous sources and
//!   fixed-size chunking.
//! - [`TopKSelector`] and [`top_k_collector`]: keep the `k` best elements
//!   under a comparator with batched eviction and order-independent merge.
//!
//! ## Laziness
//! No constructor or combinator pulls from its source. Errors raised by a
//! producer therefore surface only when the failing element is demanded.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! lazyseq = "0.1"
//! # Optional features:
//! # features = ["rayon", "check-invariants"]
//! ```
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let best: Vec<&str> = top_k_collector(3, |a: &&str, b: &&str| a.cmp(b))
//!     .unwrap()
//!     .reduce_iter(["B", "A", "E", "Z", "C", "Q", "T"])
//!     .collect();
//! assert_eq!(best, ["A", "B", "C"]);
//!
//! let chunks: Vec<Vec<u32>> = from_iterable(1..=5u32)
//!     .into_builder()
//!     .chunk(2)
//!     .unwrap()
//!     .build()
//!     .map(|chunk| chunk.collect())
//!     .collect();
//! assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

pub mod cursor;
pub mod debug_invariants;
pub mod select;
pub mod seq;
pub mod seq_error;

pub use cursor::GeneratorCursor;
pub use debug_invariants::DebugInvariants;
pub use select::{TopKSelector, top_k_collector};
pub use seq::{LazySeq, SequenceBuilder};
pub use seq_error::SeqError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::cursor::GeneratorCursor;
    pub use crate::debug_invariants::DebugInvariants;
    #[cfg(feature = "rayon")]
    pub use crate::select::par_top_k;
    pub use crate::select::{
        Reducer, TopKCollector, TopKConfig, TopKExt, TopKSelector, top_k_collector,
    };
    pub use crate::seq::source::{
        cycle, from_enumeration, from_generator, from_iterable, from_iterator,
        from_nullable_generator, from_seed, lines, try_from_generator,
    };
    pub use crate::seq::{
        Accepted, ChunkBuffer, Chunks, LazySeq, SeedGenerator, SequenceBuilder, Supplier,
    };
    pub use crate::seq_error::SeqError;
}
