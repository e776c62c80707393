#![allow(dead_code)]
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use lazyseq::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Shared call counter for producer callbacks.
#[derive(Clone, Default)]
pub struct Calls(Arc<AtomicUsize>);

impl Calls {
    pub fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Sequence over `items` whose producer counts every invocation.
pub fn counted<T: Clone + Send + 'static>(items: Vec<T>) -> (Calls, LazySeq<'static, T>) {
    let calls = Calls::default();
    let seen = calls.clone();
    let mut iter = items.into_iter();
    let seq = from_generator(move || {
        seen.bump();
        iter.next()
    });
    (calls, seq)
}

/// Deterministic random vector for a fixed seed.
pub fn random_vec(seed: u64, len: usize, max: u32) -> Vec<u32> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..max)).collect()
}

/// Reference top-k: full sort then truncate.
pub fn sorted_prefix<T: Clone, F>(items: &[T], k: usize, cmp: F) -> Vec<T>
where
    F: Fn(&T, &T) -> std::cmp::Ordering,
{
    let mut all = items.to_vec();
    all.sort_by(|a, b| cmp(a, b));
    all.truncate(k);
    all
}
