//! Bounded top-K selection with batched eviction.
//!
//! [`TopKSelector`] keeps the `k` best elements seen so far, where "best"
//! means smallest under the caller's comparator (so `Ord::cmp` selects the
//! `k` smallest values and a reversed comparator the `k` largest).
//!
//! Elements go into a max-heap whose head is the worst retained element.
//! Instead of evicting on every insert, the heap may grow to `slack * k`
//! elements; crossing that bound triggers a compaction that pops the worst
//! elements until `k` remain. With the default `slack = 2` this costs at most
//! `k` extra elements of memory and gives amortized O(1) eviction per insert.
//!
//! Merging two selectors feeds the retained elements of one into the other.
//! Compaction only discards elements that are worse than `k` retained ones,
//! so the merged result matches a single selector fed every input, whatever
//! the split or merge order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::sync::Arc;

use itertools::Itertools;

use crate::debug_invariants::{DebugInvariants, check_bound};
use crate::seq_error::{SeqError, ensure_positive};

/// Capacity and overshoot settings for a [`TopKSelector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopKConfig {
    /// Number of elements to keep.
    pub k: usize,
    /// Compaction fires once more than `slack * k` elements are held.
    pub slack: usize,
}

impl Default for TopKConfig {
    fn default() -> Self {
        Self { k: 10, slack: 2 }
    }
}

impl TopKConfig {
    /// Config keeping `k` elements with the default slack of 2.
    pub fn with_k(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }

    /// # Errors
    /// [`SeqError::InvalidArgument`] if `k` or `slack` is zero.
    pub fn validate(&self) -> Result<(), SeqError> {
        ensure_positive("top-k capacity", self.k)?;
        ensure_positive("top-k slack", self.slack)?;
        Ok(())
    }

    /// Heap size that triggers compaction.
    #[inline]
    fn high_water(&self) -> usize {
        self.k.saturating_mul(self.slack)
    }
}

/// Heap entry ordered by the shared comparator.
struct Ranked<T, C> {
    item: T,
    order: Arc<C>,
}

impl<T, C> PartialEq for Ranked<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, C> Eq for Ranked<T, C> where C: Fn(&T, &T) -> Ordering {}

impl<T, C> PartialOrd for Ranked<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, C> Ord for Ranked<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn cmp(&self, other: &Self) -> Ordering {
        (self.order)(&self.item, &other.item)
    }
}

/// Retains the `k` best elements under a comparator.
pub struct TopKSelector<T, C> {
    heap: BinaryHeap<Ranked<T, C>>,
    cmp: Arc<C>,
    config: TopKConfig,
    since_compaction: usize,
    compactions: usize,
}

impl<T, C> TopKSelector<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Selector keeping the `k` best elements under `cmp`.
    ///
    /// # Errors
    /// [`SeqError::InvalidArgument`] if `k == 0`.
    pub fn new(k: usize, cmp: C) -> Result<Self, SeqError> {
        Self::with_config(TopKConfig::with_k(k), cmp)
    }

    /// Selector with explicit capacity and slack.
    ///
    /// # Errors
    /// [`SeqError::InvalidArgument`] if `config` does not validate.
    pub fn with_config(config: TopKConfig, cmp: C) -> Result<Self, SeqError> {
        config.validate()?;
        Ok(Self::from_parts(config, Arc::new(cmp)))
    }

    /// Build from an already validated config and a shared comparator.
    pub(crate) fn from_parts(config: TopKConfig, cmp: Arc<C>) -> Self {
        Self {
            heap: BinaryHeap::new(),
            cmp,
            config,
            since_compaction: 0,
            compactions: 0,
        }
    }

    /// Offer one element.
    pub fn insert(&mut self, item: T) {
        self.heap.push(Ranked {
            item,
            order: Arc::clone(&self.cmp),
        });
        self.since_compaction += 1;
        if self.heap.len() > self.config.high_water() {
            self.compact();
        }
    }

    /// Evict the worst elements until at most `k` remain.
    pub fn compact(&mut self) {
        let before = self.heap.len();
        while self.heap.len() > self.config.k {
            self.heap.pop();
        }
        log::debug!(
            "top-k compaction: {before} -> {} elements after {} inserts",
            self.heap.len(),
            self.since_compaction
        );
        self.since_compaction = 0;
        self.compactions += 1;
        self.debug_assert_invariants();
    }

    /// Fold every element retained by `other` into `self`.
    pub fn merge(mut self, other: Self) -> Self {
        log::debug!(
            "merging top-k selectors ({} + {} retained)",
            self.heap.len(),
            other.heap.len()
        );
        for ranked in other.heap.into_vec() {
            self.insert(ranked.item);
        }
        self
    }

    /// Retained elements, best first, at most `k` of them.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let k = self.config.k;
        let cmp = self.cmp;
        self.heap
            .into_vec()
            .into_iter()
            .map(|ranked| ranked.item)
            .sorted_by(|a, b| (*cmp)(a, b))
            .take(k)
            .collect()
    }

    /// Current worst retained element (may be beyond the final `k` before a
    /// compaction).
    pub fn peek_worst(&self) -> Option<&T> {
        self.heap.peek().map(|ranked| &ranked.item)
    }

    /// Number of elements currently held, including any overshoot.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of elements kept in the final result.
    pub fn capacity(&self) -> usize {
        self.config.k
    }

    /// How many compactions have run.
    pub fn compactions(&self) -> usize {
        self.compactions
    }
}

impl<T, C> DebugInvariants for TopKSelector<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "TopKSelector");
    }

    fn validate_invariants(&self) -> Result<(), SeqError> {
        check_bound("top-k heap", self.heap.len(), self.config.high_water())?;
        if self.since_compaction == 0 && self.compactions > 0 {
            check_bound("compacted top-k heap", self.heap.len(), self.config.k)?;
        }
        Ok(())
    }
}

impl<T, C> fmt::Debug for TopKSelector<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TopKSelector")
            .field("config", &self.config)
            .field("len", &self.heap.len())
            .field("compactions", &self.compactions)
            .finish()
    }
}

/// Top-K over any iterator.
pub trait TopKExt: Iterator + Sized {
    /// The `k` best elements under `cmp`, best first.
    ///
    /// # Errors
    /// [`SeqError::InvalidArgument`] if `k == 0`.
    fn top_k<C>(self, k: usize, cmp: C) -> Result<Vec<Self::Item>, SeqError>
    where
        C: Fn(&Self::Item, &Self::Item) -> Ordering,
    {
        let mut selector = TopKSelector::new(k, cmp)?;
        self.for_each(|item| selector.insert(item));
        Ok(selector.into_sorted_vec())
    }
}

impl<I: Iterator> TopKExt for I {}
