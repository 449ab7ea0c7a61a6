use fgc_core::{factorial, GroupProcessor};
use fgc_group::Permutation;
use proptest::prelude::*;

fn reverse_hex_digits(code: u64) -> u64 {
    let mut result = 0u64;
    for i in 0..16 {
        result |= ((code >> (i * 4)) & 0xF) << ((15 - i) * 4);
    }
    result
}

#[test]
fn identities_are_prefixes_of_the_full_nibble_ramp() {
    let full = 0xfedc_ba98_7654_3210u64;
    for order in 1..=11 {
        let processor = Permutation::new(order).unwrap();
        assert_eq!(processor.identity(), full & ((1u64 << (order * 4)) - 1));
    }
}

#[test]
fn remove_digit_matches_a_string_model() {
    let full = 0xfedc_ba98_7654_3210u64;
    let as_string = "fedcba9876543210";
    assert_eq!(reverse_hex_digits(full), 0x0123_4567_89ab_cdefu64);
    for pos in 0..16usize {
        let removed = Permutation::remove_digit(full, pos as u64);
        let mut chars = as_string.to_string();
        chars.remove(15 - pos);
        let expected = u64::from_str_radix(&chars, 16).unwrap();
        assert_eq!(removed, expected, "digit {pos}");
    }
}

#[test]
fn direct_access_matches_the_known_order_four_table() {
    let processor = Permutation::new(4).unwrap();
    let expected: [u64; 24] = [
        0x3210, 0x2310, 0x3120, 0x1320, 0x2130, 0x1230, //
        0x3201, 0x2301, 0x3021, 0x0321, 0x2031, 0x0231, //
        0x3102, 0x1302, 0x3012, 0x0312, 0x1032, 0x0132, //
        0x2103, 0x1203, 0x2013, 0x0213, 0x1023, 0x0123,
    ];
    for (i, &code) in expected.iter().enumerate() {
        assert_eq!(processor.ith(i as u64), code, "index {i}");
    }

    let mut cur = processor.identity();
    for (i, &code) in expected.iter().enumerate() {
        assert_eq!(cur, code, "sequential index {i}");
        cur = processor.next(cur);
    }
    // The enumeration wraps back to identity after the last permutation.
    assert_eq!(cur, processor.identity());
}

#[test]
fn enumeration_is_lexicographic() {
    let processor = Permutation::new(5).unwrap();
    for i in 1..processor.element_count() {
        let previous = processor.ith(i - 1);
        let current = processor.ith(i);
        assert!(reverse_hex_digits(previous) < reverse_hex_digits(current));
        assert_eq!(
            processor.compare(previous, current),
            std::cmp::Ordering::Less
        );
    }
}

#[test]
fn index_of_inverts_direct_access() {
    let order = 8;
    let processor = Permutation::new(order).unwrap();
    for i in 0..factorial(order) {
        assert_eq!(processor.index_of(processor.ith(i)), i);
    }
}

#[test]
fn sequential_generation_matches_direct_generation() {
    let order = 7;
    let processor = Permutation::new(order).unwrap();
    let mut cur = processor.identity();
    for i in 0..factorial(order) {
        assert_eq!(processor.ith(i), cur);
        cur = processor.next(cur);
    }
}

// Applying one permutation after another is the same as applying the
// composed permutation, which pins the composition direction of `product`.
#[test]
fn apply_is_compose() {
    let processor = Permutation::new(4).unwrap();
    let count = processor.element_count();
    for i in 0..count {
        let perm = processor.ith(i);
        for j in 0..count {
            let perm2 = processor.ith(j);
            let composed = processor.product(perm, perm2);
            assert_eq!(composed, processor.apply(perm2, perm));
            for k in 0..count {
                let kth = processor.ith(k);
                assert_eq!(
                    processor.apply(composed, kth),
                    processor.apply(perm2, processor.apply(perm, kth))
                );
            }
        }
    }
}

#[test]
fn product_is_non_commutative_at_degree_three() {
    let processor = Permutation::new(3).unwrap();
    let s01 = 0x201u64;
    let s12 = 0x120u64;
    assert_eq!(processor.product(s01, s12), 0x021);
    assert_eq!(processor.product(s12, s01), 0x102);
}

#[test]
fn adjacent_transposition_basis_has_degree_minus_one_swaps() {
    let processor = Permutation::new(5).unwrap();
    let basis = processor.standard_basis(None);
    assert_eq!(basis.len(), processor.basis_size());
    assert_eq!(basis.len(), 4);
    for (i, &generator) in basis.iter().enumerate() {
        // Each generator swaps positions i and i+1 and fixes the rest.
        assert_eq!(processor.product(generator, generator), processor.identity());
        let moved: Vec<usize> = (0..5)
            .filter(|&p| (generator >> (p * 4)) & 0xF != p as u64)
            .collect();
        assert_eq!(moved, vec![i, i + 1]);
    }
}

proptest! {
    #[test]
    fn index_round_trips_for_degree_ten(i in 0u64..3_628_800) {
        let processor = Permutation::new(10).unwrap();
        prop_assert_eq!(processor.index_of(processor.ith(i)), i);
    }

    #[test]
    fn inversion_cancels_for_degree_six(i in 0u64..720) {
        let processor = Permutation::new(6).unwrap();
        let perm = processor.ith(i);
        let inverse = processor.invert(perm);
        prop_assert_eq!(processor.product(perm, inverse), processor.identity());
        prop_assert_eq!(processor.product(inverse, perm), processor.identity());
    }
}
