use fgc_core::{GroupProcessor, MemoryCache, UlongListCache};
use fgc_group::{HeisenbergBasisKind, HeisenbergZn, TriangularBasisKind, TriangularZn};

// Order 1 with 2-bit cells is the cyclic group Z_4 packed into one cell:
// the generator 1 has inverse 3.
#[test]
fn cyclic_group_gains_the_inverse_generator() {
    let processor = TriangularZn::new(1, 2, TriangularBasisKind::StandardWithInverses).unwrap();
    let basis = processor.standard_basis(None);
    assert_eq!(basis, vec![1, 3]);
}

#[test]
fn self_inverse_generators_do_not_duplicate() {
    let processor = TriangularZn::new(2, 1, TriangularBasisKind::StandardWithInverses).unwrap();
    let plain = processor.full_basis();
    let augmented = processor.standard_basis(None);
    assert_eq!(augmented, plain, "mod-2 transvections are self inverse");
}

#[test]
fn augmented_generators_multiply_to_identity() {
    let processor = HeisenbergZn::new(1, 2, HeisenbergBasisKind::StandardWithZAndInverses).unwrap();
    let plain = processor.plain_basis();
    let augmented = processor.standard_basis(None);
    assert!(augmented.len() >= plain.len());
    for &generator in &plain {
        let found = augmented
            .iter()
            .any(|&inverse| processor.product(inverse, generator) == processor.identity());
        assert!(found, "no inverse for {generator} in the augmented basis");
    }
}

#[test]
fn inverse_scan_is_memoized() {
    let processor = TriangularZn::new(1, 2, TriangularBasisKind::StandardWithInverses).unwrap();
    let mut cache = MemoryCache::new();
    let first = processor.standard_basis(Some(&mut cache));
    assert_eq!(cache.len(), 1);
    let key = format!("{}_inverses_[1]", processor.cache_id());
    assert!(cache.contains(&key));
    assert_eq!(cache.get(&key), Some(first.clone()));

    // Second resolution is served from the cache.
    let second = processor.standard_basis(Some(&mut cache));
    assert_eq!(second, first);
    assert_eq!(cache.len(), 1);
}
