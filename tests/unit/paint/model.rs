use super::*;

#[test]
fn stops_validation_accepts_sorted_unit_fractions() {
    let stops = GradientStops::new(
        vec![Rgba8::BLACK, Rgba8::WHITE, Rgba8::BLACK],
        vec![0.0, 0.5, 0.5],
    );
    stops.validate().unwrap();
    assert_eq!(stops.first_color().unwrap(), Rgba8::BLACK);
}

#[test]
fn stops_validation_rejects_contract_violations() {
    let empty = GradientStops::new(vec![], vec![]);
    assert!(matches!(empty.validate(), Err(PaintError::Malformed(_))));

    let mismatched = GradientStops::new(vec![Rgba8::BLACK], vec![0.0, 1.0]);
    assert!(mismatched.validate().is_err());

    let decreasing = GradientStops::new(vec![Rgba8::BLACK, Rgba8::WHITE], vec![0.6, 0.4]);
    assert!(decreasing.validate().is_err());

    let out_of_range = GradientStops::new(vec![Rgba8::BLACK, Rgba8::WHITE], vec![0.0, 1.5]);
    assert!(out_of_range.validate().is_err());
}

#[test]
fn blend_mode_table() {
    assert_eq!(CompositeRule::Src.blend_mode(), BlendMode::Normal);
    assert_eq!(CompositeRule::SrcOver.blend_mode(), BlendMode::Compatible);
    assert_eq!(CompositeRule::SrcAtop.blend_mode(), BlendMode::Compatible);
    assert_eq!(CompositeRule::Xor.blend_mode(), BlendMode::Exclusion);
    for rule in [
        CompositeRule::Clear,
        CompositeRule::Dst,
        CompositeRule::DstAtop,
        CompositeRule::DstIn,
        CompositeRule::DstOut,
        CompositeRule::SrcIn,
        CompositeRule::SrcOut,
        CompositeRule::DstOver,
    ] {
        assert_eq!(rule.blend_mode(), BlendMode::Compatible, "{rule:?}");
    }
}

#[test]
fn linear_gradient_json_defaults() {
    let g: LinearGradient = serde_json::from_str(
        r#"{
            "start": {"x": 0.0, "y": 0.0},
            "end": {"x": 100.0, "y": 0.0},
            "stops": {
                "colors": [{"r": 0, "g": 0, "b": 0}, {"r": 255, "g": 255, "b": 255}],
                "fractions": [0.0, 1.0]
            }
        }"#,
    )
    .unwrap();
    assert_eq!(g.transform, Affine::IDENTITY);
    assert_eq!(g.cycle, CycleMethod::NoCycle);
    assert_eq!(g.origin, GradientOrigin::Native);
    assert_eq!(g.stops.colors[1], Rgba8::WHITE);
}

#[test]
fn alpha_composite_defaults_to_opaque() {
    let c: AlphaComposite = serde_json::from_str(r#"{"rule": "Xor"}"#).unwrap();
    assert_eq!(c, AlphaComposite::new(CompositeRule::Xor, 1.0));
}

#[test]
fn alpha_outside_unit_range_is_rejected() {
    for alpha in [-0.5, 1.01, f32::NAN, f32::INFINITY] {
        assert!(matches!(
            AlphaComposite::try_new(CompositeRule::SrcOver, alpha),
            Err(PaintError::Malformed(_))
        ));
    }
    assert_eq!(
        AlphaComposite::try_new(CompositeRule::Src, 0.0).unwrap(),
        AlphaComposite::new(CompositeRule::Src, 0.0)
    );

    let err = serde_json::from_str::<AlphaComposite>(r#"{"rule": "SrcOver", "alpha": -0.5}"#)
        .unwrap_err();
    assert!(err.to_string().contains("outside [0, 1]"));
}
