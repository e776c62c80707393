//! Constructors adapting pull sources into [`LazySeq`]s.
//!
//! Every constructor here is lazy: no element is produced, and no iterator is
//! advanced, until the resulting sequence is pulled.

use crate::seq::lazy::LazySeq;
use crate::seq::seed::SeedGenerator;

/// Wrap an iterator. Elements and iteration side effects pass through in
/// source order, one pull at a time.
pub fn from_iterator<'a, I>(iter: I) -> LazySeq<'a, I::Item>
where
    I: Iterator + Send + 'a,
    I::Item: 'a,
{
    let mut iter = iter;
    LazySeq::from_generator(move || iter.next())
}

/// Wrap anything iterable (collections, ranges, ...).
pub fn from_iterable<'a, I>(source: I) -> LazySeq<'a, I::Item>
where
    I: IntoIterator,
    I::IntoIter: Send + 'a,
    I::Item: 'a,
{
    from_iterator(source.into_iter())
}

/// Sequence over a generator; `None` ends it.
pub fn from_generator<'a, T, F>(producer: F) -> LazySeq<'a, T>
where
    F: FnMut() -> Option<T> + Send + 'a,
    T: 'a,
{
    LazySeq::from_generator(producer)
}

/// Sequence over a generator that signals its end with an in-band `sentinel`.
///
/// The first produced value equal to `sentinel` ends the sequence and is not
/// yielded. Prefer [`from_generator`] when every value of `T` is meaningful.
pub fn from_nullable_generator<'a, T, F>(sentinel: T, mut producer: F) -> LazySeq<'a, T>
where
    F: FnMut() -> T + Send + 'a,
    T: PartialEq + Send + 'a,
{
    LazySeq::from_generator(move || {
        let item = producer();
        (item != sentinel).then_some(item)
    })
}

/// Sequence over a fallible generator.
///
/// `Ok(Some(x))` yields `Ok(x)`, `Ok(None)` ends the sequence and `Err(e)`
/// yields `Err(e)` at the position where it happened. Nothing is retried; a
/// consumer that keeps pulling after an error calls the producer again.
pub fn try_from_generator<'a, T, E, F>(mut producer: F) -> LazySeq<'a, Result<T, E>>
where
    F: FnMut() -> Result<Option<T>, E> + Send + 'a,
    T: 'a,
    E: 'a,
{
    LazySeq::from_generator(move || producer().transpose())
}

/// Adapter for "has more / next element" protocols that are not iterators.
pub fn from_enumeration<'a, T, H, N>(mut has_more: H, mut next_element: N) -> LazySeq<'a, T>
where
    H: FnMut() -> bool + Send + 'a,
    N: FnMut() -> T + Send + 'a,
    T: 'a,
{
    LazySeq::from_generator(move || has_more().then(&mut next_element))
}

/// Endless repetition of `elements` in order. Consumers must bound it.
///
/// An empty `elements` gives an empty sequence.
pub fn cycle<'a, T>(elements: Vec<T>) -> LazySeq<'a, T>
where
    T: Clone + Send + 'a,
{
    from_iterator(elements.into_iter().cycle())
}

/// Lines of `text`, split on `\n` (a trailing `\r` is dropped too).
pub fn lines(text: &str) -> LazySeq<'_, String> {
    from_iterator(text.lines().map(str::to_owned))
}

/// Start a seed-driven sequence; see [`SeedGenerator`].
pub fn from_seed<K>(seed: K) -> SeedGenerator<K> {
    SeedGenerator::new(seed)
}
