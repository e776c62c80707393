//! Memoizing pull cursors over producer callbacks.
//!
//! A cursor turns a "give me the next element or tell me you are done"
//! callback into a `probe`/`take` protocol. See [`GeneratorCursor`].

pub mod generator;

pub use generator::GeneratorCursor;
