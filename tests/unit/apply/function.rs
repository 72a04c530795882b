use super::*;
use crate::{collab::color::DeviceRgbColorMapper, foundation::error::PaintError};

fn build(colors: &[Rgba8], fractions: &[f32]) -> GradientFunction {
    build_gradient_function(
        &GradientStops::new(colors.to_vec(), fractions.to_vec()),
        &DeviceRgbColorMapper,
    )
    .unwrap()
}

const RED: Rgba8 = Rgba8::opaque(255, 0, 0);
const GREEN: Rgba8 = Rgba8::opaque(0, 255, 0);
const BLUE: Rgba8 = Rgba8::opaque(0, 0, 255);

#[test]
fn function_count_is_bound_count_plus_one() {
    let cases: &[&[f32]] = &[
        &[0.0, 1.0],
        &[0.0, 0.5, 1.0],
        &[0.2, 0.5, 1.0],
        &[0.0, 0.5, 0.8],
        &[0.1, 0.4, 0.9],
        &[0.3, 0.7],
    ];
    for fractions in cases {
        let colors: Vec<Rgba8> = [RED, GREEN, BLUE][..fractions.len()].to_vec();
        let f = build(&colors, fractions);
        assert_eq!(f.functions.len(), f.bounds.len() + 1, "{fractions:?}");
        assert_eq!(f.encode.len(), 2 * f.functions.len());
        assert!(f.bounds.windows(2).all(|w| w[0] < w[1]), "{fractions:?}");
    }
}

#[test]
fn no_synthetic_stops_when_ends_are_within_epsilon() {
    let f = build(&[RED, GREEN, BLUE], &[0.000_001, 0.5, 0.999_995]);
    assert_eq!(f.stops.len(), 3);
    assert_eq!(f.functions.len(), 2);
    assert_eq!(f.bounds, vec![0.5]);
}

#[test]
fn late_first_stop_prepends_one_synthetic_stop() {
    let f = build(&[RED, BLUE], &[0.2, 1.0]);
    assert_eq!(f.stops.len(), 3);
    assert_eq!(f.stops[0], ColorStop { color: RED, fraction: 0.0 });
    assert_eq!(f.bounds, vec![0.2]);
    assert_eq!(f.functions[0].c0, f.functions[0].c1);
    assert_eq!(f.functions[1].c0, vec![1.0, 0.0, 0.0]);
    assert_eq!(f.functions[1].c1, vec![0.0, 0.0, 1.0]);
}

#[test]
fn early_last_stop_appends_one_synthetic_stop() {
    let f = build(&[RED, GREEN, BLUE], &[0.0, 0.4, 0.6]);
    assert_eq!(f.stops.len(), 4);
    assert_eq!(f.bounds, vec![0.4, 0.6]);
    assert_eq!(f.functions.last().unwrap().c0, vec![0.0, 0.0, 1.0]);
}

#[test]
fn single_stop_becomes_constant_gradient() {
    let f = build(&[GREEN], &[0.5]);
    assert_eq!(f.functions.len(), 1);
    assert!(f.bounds.is_empty());
    assert_eq!(f.functions[0].c0, f.functions[0].c1);
}

#[test]
fn malformed_stops_are_rejected() {
    let err = build_gradient_function(
        &GradientStops::new(vec![RED, GREEN], vec![0.6, 0.2]),
        &DeviceRgbColorMapper,
    )
    .unwrap_err();
    assert!(matches!(err, PaintError::Malformed(_)));

    let err = build_gradient_function(&GradientStops::new(vec![], vec![]), &DeviceRgbColorMapper)
        .unwrap_err();
    assert!(matches!(err, PaintError::Malformed(_)));
}

#[test]
fn dict_has_stitching_layout() {
    let d = build(&[RED, BLUE], &[0.0, 1.0]).to_dict();
    assert_eq!(
        d.to_string(),
        "<< /Bounds [] /Domain [0 1] /Encode [0 1] /FunctionType 3 /Functions [<< /C0 [1 0 0] /C1 [0 0 1] /Domain [0 1] /FunctionType 2 /N 1 >>] >>"
    );
}
