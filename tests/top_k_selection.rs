mod util;
use std::cmp::Ordering;

use lazyseq::prelude::*;
use proptest::prelude::*;
use util::*;

fn natural(a: &u32, b: &u32) -> Ordering {
    a.cmp(b)
}

fn descending(a: &u32, b: &u32) -> Ordering {
    b.cmp(a)
}

#[test]
fn letters_example() {
    let out: Vec<&str> = top_k_collector(3, |a: &&str, b: &&str| a.cmp(b))
        .unwrap()
        .reduce_iter(["B", "A", "E", "Z", "C", "Q", "T"])
        .collect();
    assert_eq!(out, vec!["A", "B", "C"]);
}

#[test]
fn collector_over_lazy_sequence() {
    let seq = from_iterable(random_vec(7, 500, 1_000));
    let collector = top_k_collector(10, descending).unwrap();
    let best: Vec<u32> = collector.reduce_iter(seq).collect();
    assert_eq!(best, sorted_prefix(&random_vec(7, 500, 1_000), 10, descending));
}

#[test]
fn zero_k_is_invalid_argument() {
    let err = top_k_collector(0, natural).unwrap_err();
    assert_eq!(err.to_string(), "invalid argument: top-k capacity must be positive, got 0");
}

#[test]
fn selector_memory_stays_within_twice_k() {
    let mut sel = TopKSelector::new(16, natural).unwrap();
    for x in random_vec(11, 5_000, u32::MAX) {
        sel.insert(x);
        assert!(sel.len() <= 32);
    }
    assert!(sel.compactions() > 0);
    sel.debug_assert_invariants();
}

#[test]
fn tree_shaped_merge_matches_sequential() {
    let data = random_vec(3, 1_024, 50);
    let collector = top_k_collector(7, natural).unwrap();
    let mut accs: Vec<_> = data
        .chunks(64)
        .map(|part| {
            part.iter()
                .copied()
                .fold(collector.init(), |acc, x| collector.accumulate(acc, x))
        })
        .collect();
    while accs.len() > 1 {
        let right = accs.pop().unwrap();
        let left = accs.remove(0);
        accs.push(collector.combine(left, right));
    }
    let merged: Vec<u32> = collector.finish(accs.pop().unwrap()).collect();
    assert_eq!(merged, sorted_prefix(&data, 7, natural));
}

#[cfg(feature = "rayon")]
#[test]
fn rayon_reduction_matches_sequential() {
    let data = random_vec(5, 20_000, 1_000_000);
    let par = par_top_k(data.clone(), 12, natural).unwrap();
    assert_eq!(par, sorted_prefix(&data, 12, natural));
}

proptest! {
    #[test]
    fn selector_equals_sort_and_truncate(
        items in proptest::collection::vec(0u32..100, 0..300),
        k in 1usize..20,
    ) {
        let got = items.iter().copied().top_k(k, natural).unwrap();
        prop_assert_eq!(got, sorted_prefix(&items, k, natural));
    }

    #[test]
    fn merge_is_partition_independent(
        items in proptest::collection::vec(0u32..60, 0..200),
        split in any::<prop::sample::Index>(),
        k in 1usize..12,
        reverse in any::<bool>(),
    ) {
        let cmp = if reverse { descending } else { natural };
        let at = split.index(items.len() + 1);
        let (p, q) = items.split_at(at);
        let collector = top_k_collector(k, cmp).unwrap();

        let reduce = |part: &[u32]| {
            part.iter()
                .copied()
                .fold(collector.init(), |acc, x| collector.accumulate(acc, x))
        };
        let pq: Vec<u32> = collector.finish(collector.combine(reduce(p), reduce(q))).collect();
        let qp: Vec<u32> = collector.finish(collector.combine(reduce(q), reduce(p))).collect();
        let whole: Vec<u32> = collector.reduce_iter(items.iter().copied()).collect();

        prop_assert_eq!(&pq, &whole);
        prop_assert_eq!(&qp, &whole);
    }
}
