//! Lazy sequences and the builders around them.
//!
//! - [`lazy`]: the [`LazySeq`] type and its thread-safe [`Supplier`] handle.
//! - [`source`]: constructors from generators, iterators, seeds and cycles.
//! - [`seed`]: [`SeedGenerator`], sequences driven by a stateful seed.
//! - [`builder`]: [`SequenceBuilder`], lazy concatenation plus chunking.
//! - [`chunk`]: the [`ChunkBuffer`] state machine and the [`Chunks`] adapter.

pub mod builder;
pub mod chunk;
pub mod lazy;
pub mod seed;
pub mod source;

pub use builder::SequenceBuilder;
pub use chunk::{Accepted, ChunkBuffer, Chunks};
pub use lazy::{LazySeq, Producer, Supplier};
pub use seed::SeedGenerator;
