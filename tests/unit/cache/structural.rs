use super::*;
use crate::document::object::Object;

fn ext_gstate(alpha: f32, bm: &str) -> Arc<Dict> {
    let mut d = Dict::typed("ExtGState");
    d.set("CA", alpha);
    d.set("ca", alpha);
    d.set("BM", Object::name(bm));
    Arc::new(d)
}

fn shading(coords: &[f32]) -> Arc<Dict> {
    let mut d = Dict::new();
    d.set("ShadingType", 2i64);
    d.set("Coords", Object::reals(coords));
    Arc::new(d)
}

#[test]
fn equal_values_collapse_to_first_instance() {
    let mut cache = ObjectCache::new();
    let a = ext_gstate(0.5, "Compatible");
    let b = ext_gstate(0.5, "Compatible");
    assert!(!Arc::ptr_eq(&a, &b));

    let first = cache.make_unique(Arc::clone(&a));
    let second = cache.make_unique(b);
    assert!(Arc::ptr_eq(&first, &a));
    assert!(Arc::ptr_eq(&second, &a));
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.hits(), 1);
}

#[test]
fn nested_array_difference_keeps_both() {
    let mut cache = ObjectCache::new();
    let a = cache.make_unique(shading(&[0.0, 0.0, 100.0, 0.0]));
    let b = cache.make_unique(shading(&[0.0, 0.0, 100.0, 5.0]));
    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.hits(), 0);
}

#[test]
fn same_bucket_different_values_are_searched() {
    let mut cache = ObjectCache::new();
    let half = cache.make_unique(ext_gstate(0.5, "Compatible"));
    let quarter = cache.make_unique(ext_gstate(0.25, "Compatible"));
    let again = cache.make_unique(ext_gstate(0.25, "Compatible"));

    assert!(!Arc::ptr_eq(&half, &quarter));
    assert!(Arc::ptr_eq(&quarter, &again));
    assert_eq!(cache.len(), 2);
}

#[test]
fn clear_forgets_everything() {
    let mut cache = ObjectCache::new();
    let a = cache.make_unique(ext_gstate(0.5, "Normal"));
    cache.clear();
    assert!(cache.is_empty());
    let b = cache.make_unique(ext_gstate(0.5, "Normal"));
    assert!(!Arc::ptr_eq(&a, &b));
}
