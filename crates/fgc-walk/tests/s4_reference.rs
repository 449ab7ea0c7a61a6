use std::collections::{HashMap, VecDeque};

use fgc_core::GroupProcessor;
use fgc_group::Permutation;
use fgc_walk::{full_distance_table, ElementIndex, SearchOptions};

fn brute_force_distances(processor: &dyn GroupProcessor, basis: &[u64]) -> HashMap<u64, i8> {
    let mut distances = HashMap::new();
    let mut queue = VecDeque::new();
    distances.insert(processor.identity(), 0i8);
    queue.push_back(processor.identity());
    while let Some(cur) = queue.pop_front() {
        let distance = distances[&cur];
        for &generator in basis {
            let next = processor.product(cur, generator);
            distances.entry(next).or_insert_with(|| {
                queue.push_back(next);
                distance + 1
            });
        }
    }
    distances
}

// Scenario: symmetric group of degree 4 with adjacent transpositions. The
// word length of a permutation under this basis is its inversion count, so
// the histogram is the Mahonian row [1, 3, 5, 6, 5, 3, 1] with diameter 6.
#[test]
fn degree_four_matches_the_brute_force_reference() {
    let processor = Permutation::new(4).unwrap();
    let basis = processor.standard_basis(None);
    let table = full_distance_table(
        &processor,
        processor.identity(),
        &basis,
        &SearchOptions::default(),
    )
    .unwrap();

    assert_eq!(table.len(), 24);
    assert_eq!(table.discovered(), 24);
    assert!(!table.truncated());
    assert_eq!(table.histogram(), vec![1, 3, 5, 6, 5, 3, 1]);
    assert_eq!(table.max_distance(), 6);

    let reference = brute_force_distances(&processor, &basis);
    let index = ElementIndex::build(&processor);
    for i in 0..processor.element_count() {
        let code = processor.ith(i);
        let slot = index.index_of(&processor, code).unwrap();
        assert_eq!(slot as u64, i, "enumeration index mismatch");
        assert_eq!(table.get(slot), reference[&code], "code {code:#x}");
    }
}

// Every discovered element at distance d > 0 has a predecessor at d - 1
// one generator away.
#[test]
fn distances_have_bfs_parents() {
    let processor = Permutation::new(4).unwrap();
    let basis = processor.standard_basis(None);
    let table = full_distance_table(
        &processor,
        processor.identity(),
        &basis,
        &SearchOptions::default(),
    )
    .unwrap();
    let index = ElementIndex::build(&processor);

    for i in 0..processor.element_count() {
        let code = processor.ith(i);
        let distance = table.get(i as usize);
        assert!(distance >= 0);
        if distance == 0 {
            assert_eq!(code, processor.identity());
            continue;
        }
        let mut found_parent = false;
        'outer: for p in 0..processor.element_count() {
            let parent = processor.ith(p);
            if table.get(index.index_of(&processor, parent).unwrap()) != distance - 1 {
                continue;
            }
            for &generator in &basis {
                if processor.product(parent, generator) == code {
                    found_parent = true;
                    break 'outer;
                }
            }
        }
        assert!(found_parent, "no parent for {code:#x} at {distance}");
    }
}

#[test]
fn small_blocks_change_nothing() {
    let processor = Permutation::new(5).unwrap();
    let basis = processor.standard_basis(None);
    let default_table = full_distance_table(
        &processor,
        processor.identity(),
        &basis,
        &SearchOptions::default(),
    )
    .unwrap();
    let tiny_blocks = SearchOptions {
        block_size: 7,
        threads: 3,
        ..SearchOptions::default()
    };
    let blocked_table =
        full_distance_table(&processor, processor.identity(), &basis, &tiny_blocks).unwrap();
    assert_eq!(default_table.as_slice(), blocked_table.as_slice());
}
