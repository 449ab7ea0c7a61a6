use fgc_core::GroupProcessor;
use fgc_group::{HeisenbergZ2, HeisenbergZ2BasisKind, Permutation};
use fgc_walk::{
    full_distance_table, pairwise_diameter_histogram, partial_distance_table,
    DiameterSweepOptions, SearchOptions,
};
use proptest::prelude::*;

// A single self-inverse generator only ever reaches itself and the
// identity; everything else legitimately stays unreached.
#[test]
fn non_spanning_singleton_reaches_its_subgroup_only() {
    let processor = HeisenbergZ2::new(1, HeisenbergZ2BasisKind::StandardWithZ).unwrap();
    let x = 1u64;
    let table = partial_distance_table(
        &processor,
        processor.identity(),
        &[x],
        &SearchOptions::default(),
    )
    .unwrap();

    assert_eq!(table.reached(), 2);
    assert_eq!(table.distance_of(&processor, processor.identity()), Some(0));
    assert_eq!(table.distance_of(&processor, x), Some(1));
    assert_eq!(table.distance_of(&processor, 0b100), None);
    assert_eq!(table.max_distance(), 1);
    assert_eq!(table.histogram(), vec![1, 1]);
}

#[test]
fn spanning_basis_agrees_with_the_full_mode() {
    let processor = Permutation::new(4).unwrap();
    let basis = processor.standard_basis(None);
    let options = SearchOptions::default();
    let full = full_distance_table(&processor, processor.identity(), &basis, &options).unwrap();
    let partial =
        partial_distance_table(&processor, processor.identity(), &basis, &options).unwrap();

    assert_eq!(partial.reached(), processor.element_count());
    assert_eq!(partial.histogram(), full.histogram());
    assert_eq!(partial.max_distance(), full.max_distance());
    for i in 0..processor.element_count() {
        let code = processor.ith(i);
        assert_eq!(
            partial.distance_of(&processor, code),
            Some(full.get(i as usize))
        );
    }
}

#[test]
fn histogram_sums_to_the_reached_count() {
    let processor = Permutation::new(4).unwrap();
    // Two arbitrary elements; whatever they span, the invariant holds.
    let basis = [processor.ith(5), processor.ith(17)];
    let table = partial_distance_table(
        &processor,
        processor.identity(),
        &basis,
        &SearchOptions::default(),
    )
    .unwrap();
    assert_eq!(table.histogram().iter().sum::<u64>(), table.reached());
    assert!(table.reached() <= processor.element_count());
}

proptest! {
    // Whatever subgroup a random pair generates, the sparse table is
    // internally consistent: the start is at 0, every reached element at
    // d > 0 has a predecessor one generator earlier, and the histogram
    // accounts for every reached element.
    #[test]
    fn random_pairs_produce_consistent_tables(a in 1u64..24, b in 1u64..24) {
        let processor = Permutation::new(4).unwrap();
        let basis = [processor.ith(a), processor.ith(b)];
        let table = partial_distance_table(
            &processor,
            processor.identity(),
            &basis,
            &SearchOptions::default(),
        )
        .unwrap();

        prop_assert_eq!(table.distance_of(&processor, processor.identity()), Some(0));
        prop_assert_eq!(table.histogram().iter().sum::<u64>(), table.reached());
        for (code, distance) in table.iter() {
            if distance == 0 {
                prop_assert_eq!(code, processor.identity());
                continue;
            }
            let parent_found = table.iter().any(|(parent, parent_distance)| {
                parent_distance == distance - 1
                    && basis
                        .iter()
                        .any(|&generator| processor.product(parent, generator) == code)
            });
            prop_assert!(parent_found, "no parent for {:#x}", code);
        }
    }
}

#[test]
fn pairwise_sweep_counts_every_pair() {
    let processor = HeisenbergZ2::new(1, HeisenbergZ2BasisKind::StandardWithZ).unwrap();
    let count = processor.element_count();
    let pairs = (count - 1) * (count - 2) / 2;

    let sweep = DiameterSweepOptions::default();
    let histogram =
        pairwise_diameter_histogram(&processor, &sweep, &SearchOptions::default()).unwrap();
    assert_eq!(histogram.values().sum::<u64>(), pairs);
    assert!(histogram.keys().all(|&diameter| diameter >= 1));
}

#[test]
fn skipping_non_spanning_pairs_only_removes_entries() {
    let processor = HeisenbergZ2::new(1, HeisenbergZ2BasisKind::StandardWithZ).unwrap();
    let count = processor.element_count();
    let pairs = (count - 1) * (count - 2) / 2;

    let all = pairwise_diameter_histogram(
        &processor,
        &DiameterSweepOptions::default(),
        &SearchOptions::default(),
    )
    .unwrap();
    let spanning_only = pairwise_diameter_histogram(
        &processor,
        &DiameterSweepOptions {
            skip_non_spanning: true,
            ..DiameterSweepOptions::default()
        },
        &SearchOptions::default(),
    )
    .unwrap();

    let total_all: u64 = all.values().sum();
    let total_spanning: u64 = spanning_only.values().sum();
    assert_eq!(total_all, pairs);
    assert!(total_spanning <= total_all);
    for (diameter, count) in &spanning_only {
        assert!(all.get(diameter).copied().unwrap_or(0) >= *count);
    }
}
