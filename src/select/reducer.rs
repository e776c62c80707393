//! Reductions usable as a sequential fold or a parallel map-reduce.
//!
//! A [`Reducer`] splits a reduction into four steps: make an empty
//! accumulator, add one element, combine two accumulators, and turn the final
//! accumulator into the output. `combine` must be associative (and, for
//! order-insensitive outputs, commutative) so any split of the input gives
//! the same answer.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::select::topk::{TopKConfig, TopKSelector};
use crate::seq::lazy::LazySeq;
use crate::seq::source;
use crate::seq_error::SeqError;

/// A four-step reduction over elements of type `T`.
pub trait Reducer<T> {
    /// Intermediate state.
    type Acc;
    /// Final result.
    type Output;

    /// Empty accumulator.
    fn init(&self) -> Self::Acc;
    /// Add one element.
    fn accumulate(&self, acc: Self::Acc, item: T) -> Self::Acc;
    /// Merge two accumulators built over disjoint inputs.
    fn combine(&self, left: Self::Acc, right: Self::Acc) -> Self::Acc;
    /// Produce the result.
    fn finish(&self, acc: Self::Acc) -> Self::Output;

    /// Sequential fold over `items`.
    fn reduce_iter<I>(&self, items: I) -> Self::Output
    where
        I: IntoIterator<Item = T>,
    {
        let acc = items
            .into_iter()
            .fold(self.init(), |acc, item| self.accumulate(acc, item));
        self.finish(acc)
    }

    /// Parallel fold: one accumulator per rayon split, combined pairwise.
    #[cfg(feature = "rayon")]
    fn reduce_par<I>(&self, items: I) -> Self::Output
    where
        I: rayon::iter::IntoParallelIterator<Item = T>,
        Self: Sync,
        Self::Acc: Send,
        T: Send,
    {
        use rayon::iter::ParallelIterator;
        let acc = items
            .into_par_iter()
            .fold(|| self.init(), |acc, item| self.accumulate(acc, item))
            .reduce(|| self.init(), |left, right| self.combine(left, right));
        self.finish(acc)
    }
}

/// [`Reducer`] keeping the `k` best elements under a comparator.
///
/// Output is a [`LazySeq`] over the retained elements, best first.
pub struct TopKCollector<'a, C> {
    config: TopKConfig,
    cmp: Arc<C>,
    _out: PhantomData<&'a ()>,
}

/// Top-K collector keeping `n` elements under `cmp`.
///
/// # Errors
/// [`SeqError::InvalidArgument`] if `n == 0`.
pub fn top_k_collector<'a, C>(n: usize, cmp: C) -> Result<TopKCollector<'a, C>, SeqError> {
    TopKCollector::with_config(TopKConfig::with_k(n), cmp)
}

impl<C> TopKCollector<'_, C> {
    /// Collector with explicit capacity and slack.
    ///
    /// # Errors
    /// [`SeqError::InvalidArgument`] if `config` does not validate.
    pub fn with_config(config: TopKConfig, cmp: C) -> Result<Self, SeqError> {
        config.validate()?;
        Ok(Self {
            config,
            cmp: Arc::new(cmp),
            _out: PhantomData,
        })
    }

    /// The capacity and slack every accumulator is created with.
    pub fn config(&self) -> TopKConfig {
        self.config
    }
}

impl<'a, T, C> Reducer<T> for TopKCollector<'a, C>
where
    T: Send + 'a,
    C: Fn(&T, &T) -> Ordering,
{
    type Acc = TopKSelector<T, C>;
    type Output = LazySeq<'a, T>;

    fn init(&self) -> Self::Acc {
        TopKSelector::from_parts(self.config, Arc::clone(&self.cmp))
    }

    fn accumulate(&self, mut acc: Self::Acc, item: T) -> Self::Acc {
        acc.insert(item);
        acc
    }

    fn combine(&self, left: Self::Acc, right: Self::Acc) -> Self::Acc {
        left.merge(right)
    }

    fn finish(&self, acc: Self::Acc) -> Self::Output {
        source::from_iterable(acc.into_sorted_vec())
    }
}

impl<C> fmt::Debug for TopKCollector<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TopKCollector")
            .field("config", &self.config)
            .finish()
    }
}

/// Parallel top-K over a rayon iterator.
///
/// # Errors
/// [`SeqError::InvalidArgument`] if `k == 0`.
#[cfg(feature = "rayon")]
pub fn par_top_k<I, T, C>(items: I, k: usize, cmp: C) -> Result<Vec<T>, SeqError>
where
    I: rayon::iter::IntoParallelIterator<Item = T>,
    T: Send,
    C: Fn(&T, &T) -> Ordering + Send + Sync,
{
    let collector = top_k_collector(k, cmp)?;
    Ok(collector.reduce_par(items).collect())
}
