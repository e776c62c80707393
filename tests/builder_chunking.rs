mod util;
use lazyseq::prelude::*;
use proptest::prelude::*;
use util::*;

#[test]
fn concatenation_defers_second_source() {
    let (first_calls, first) = counted(vec![1, 2, 3]);
    let (second_calls, second) = counted(vec![4, 5]);
    let mut seq = first.into_builder().append(second).build();

    assert_eq!(first_calls.get(), 0);
    for expected in 1..=3 {
        assert_eq!(seq.next(), Some(expected));
        assert_eq!(second_calls.get(), 0, "second source touched early");
    }
    assert_eq!(seq.next(), Some(4));
    assert_eq!(first_calls.get(), 4);
    assert_eq!(second_calls.get(), 1);
    assert_eq!(seq.collect::<Vec<_>>(), vec![5]);
}

#[test]
fn build_snapshots_appended_sources() {
    let builder = from_iterable(vec!['a']).into_builder().append_values(vec!['b']);
    let built = builder.build();
    // a fresh builder cannot reach into an already built sequence
    let other = SequenceBuilder::from_seq(from_iterable(vec!['z'])).build();
    assert_eq!(built.collect::<String>(), "ab");
    assert_eq!(other.collect::<String>(), "z");
}

#[test]
fn chunk_rejects_zero_size() {
    let err = from_iterable(1..4).into_builder().chunk(0).unwrap_err();
    assert!(matches!(err, SeqError::InvalidArgument { what: "chunk size", value: 0 }));
}

#[test]
fn chunk_of_empty_source_is_empty() {
    let chunks = from_iterable(Vec::<u8>::new())
        .into_builder()
        .chunk(3)
        .unwrap()
        .build();
    assert_eq!(chunks.count(), 0);
}

#[test]
fn chunking_is_lazy() {
    let (calls, seq) = counted((0..10).collect::<Vec<u32>>());
    let mut chunks = seq.into_builder().chunk(4).unwrap().build();
    assert_eq!(calls.get(), 0);
    let first: Vec<u32> = chunks.next().unwrap().collect();
    assert_eq!(first, vec![0, 1, 2, 3]);
    assert_eq!(calls.get(), 4);
}

#[test]
fn chunks_can_be_concatenated_further() {
    let chunked = from_iterable(1..=5)
        .into_builder()
        .chunk(2)
        .unwrap()
        .append_values(vec![from_iterable(vec![99])]);
    let sizes: Vec<usize> = chunked.build().map(|c| c.count()).collect();
    assert_eq!(sizes, vec![2, 2, 1, 1]);
}

#[test]
fn supplier_from_builder_drains_in_order() {
    let supplier = from_iterable(vec![1, 2])
        .into_builder()
        .append_iter(vec![3])
        .supplier();
    let drained: Vec<_> = std::iter::from_fn(|| supplier.get()).collect();
    assert_eq!(drained, vec![1, 2, 3]);
}

proptest! {
    #[test]
    fn chunk_counts_and_concatenation(
        items in proptest::collection::vec(any::<i16>(), 0..200),
        size in 1usize..17,
    ) {
        let chunks: Vec<Vec<i16>> = from_iterable(items.clone())
            .into_builder()
            .chunk(size)
            .unwrap()
            .build()
            .map(|c| c.collect())
            .collect();

        prop_assert_eq!(chunks.len(), items.len().div_ceil(size));
        if let Some((last, full)) = chunks.split_last() {
            prop_assert!(full.iter().all(|c| c.len() == size));
            prop_assert!(!last.is_empty() && last.len() <= size);
        }
        let flat: Vec<i16> = chunks.into_iter().flatten().collect();
        prop_assert_eq!(flat, items);
    }

    #[test]
    fn builder_concatenates_in_append_order(
        parts in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..10), 0..6),
    ) {
        let mut builder = SequenceBuilder::new();
        for part in &parts {
            builder.push(from_iterable(part.clone()));
        }
        let out: Vec<u8> = builder.build().collect();
        let expected: Vec<u8> = parts.concat();
        prop_assert_eq!(out, expected);
    }
}
