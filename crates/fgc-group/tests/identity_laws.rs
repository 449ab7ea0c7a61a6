use fgc_core::GroupProcessor;
use fgc_group::{
    HeisenbergBasisKind, HeisenbergZ2, HeisenbergZ2BasisKind, HeisenbergZn, Permutation,
    TriangularBasisKind, TriangularZ2, TriangularZn,
};

fn small_processors() -> Vec<Box<dyn GroupProcessor>> {
    vec![
        Box::new(TriangularZ2::new(2, TriangularBasisKind::Standard).unwrap()),
        Box::new(TriangularZ2::new(3, TriangularBasisKind::Ribbon).unwrap()),
        Box::new(TriangularZn::new(2, 2, TriangularBasisKind::Standard).unwrap()),
        Box::new(HeisenbergZ2::new(2, HeisenbergZ2BasisKind::StandardWithZ).unwrap()),
        Box::new(HeisenbergZn::new(1, 2, HeisenbergBasisKind::StandardWithZ).unwrap()),
        Box::new(Permutation::new(4).unwrap()),
    ]
}

#[test]
fn identity_is_neutral_on_both_sides() {
    for processor in small_processors() {
        let identity = processor.identity();
        let mut code = identity;
        for _ in 0..processor.element_count() {
            assert_eq!(processor.product(identity, code), code);
            assert_eq!(processor.product(code, identity), code);
            code = processor.next(code);
        }
    }
}

#[test]
fn explode_implode_round_trips() {
    for processor in small_processors() {
        let mut code = processor.identity();
        for _ in 0..processor.element_count() {
            match processor.explode(code) {
                Ok(matrix) => assert_eq!(processor.implode(&matrix).unwrap(), code),
                Err(err) => {
                    assert_eq!(err.info().code, "no-matrix-form");
                    break;
                }
            }
            code = processor.next(code);
        }
    }
}

#[test]
fn enumeration_agrees_with_direct_access() {
    for processor in small_processors() {
        let mut code = processor.identity();
        for i in 0..processor.element_count() {
            assert_eq!(processor.ith(i), code, "{}", processor.display_name());
            code = processor.next(code);
        }
    }
}

#[test]
fn enumeration_is_strictly_increasing() {
    for processor in small_processors() {
        for i in 1..processor.element_count() {
            let previous = processor.ith(i - 1);
            let current = processor.ith(i);
            assert_eq!(
                processor.compare(previous, current),
                std::cmp::Ordering::Less,
                "{} at {}",
                processor.display_name(),
                i
            );
        }
    }
}

#[test]
fn basis_elements_are_valid_codes() {
    for processor in small_processors() {
        let basis = processor.standard_basis(None);
        assert!(!basis.is_empty());
        for &generator in &basis {
            let product = processor.product(generator, processor.identity());
            assert_eq!(product, generator);
        }
    }
}
