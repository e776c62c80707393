//! Terminal selection over sequences.
//!
//! [`topk`] holds the bounded [`TopKSelector`]; [`reducer`] exposes it as a
//! [`Reducer`] that works as a sequential fold or a parallel map-reduce.

pub mod reducer;
pub mod topk;

#[cfg(feature = "rayon")]
pub use reducer::par_top_k;
pub use reducer::{Reducer, TopKCollector, top_k_collector};
pub use topk::{TopKConfig, TopKExt, TopKSelector};
