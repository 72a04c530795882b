use super::*;
use crate::{
    apply::fixture::Harness, apply::state::PendingGraphicsState, document::content::DocColor,
    foundation::core::Affine,
};

fn apply_all(colors: &[Rgba8]) -> (Option<PendingGraphicsState>, Vec<ContentOp>) {
    let mut h = Harness::default();
    let pending = h.with_state(Affine::IDENTITY, |state| {
        for c in colors {
            apply_color(state, *c);
        }
        state.pending().copied()
    });
    (pending, h.sink.into_ops())
}

#[test]
fn opaque_color_sets_stroke_and_fill_only() {
    let (pending, ops) = apply_all(&[Rgba8::opaque(255, 0, 0)]);
    assert!(pending.is_none());
    assert_eq!(ops.len(), 2);
    let expected = DocColor::device(
        crate::document::content::ColorSpace::DeviceRgb,
        vec![1.0, 0.0, 0.0],
    );
    assert!(matches!(&ops[0], ContentOp::SetStrokeColor(c) if *c == expected));
    assert!(matches!(&ops[1], ContentOp::SetFillColor(c) if *c == expected));
}

#[test]
fn translucent_colors_compose_multiplicatively() {
    let half = Rgba8::new(0, 0, 0, 128);
    let (pending, ops) = apply_all(&[half, half]);
    let pending = pending.unwrap();
    let expected = (128.0f32 / 255.0) * (128.0 / 255.0);
    assert!((pending.fill_alpha.unwrap() - expected).abs() < 1e-6);
    assert!((pending.stroke_alpha.unwrap() - expected).abs() < 1e-6);
    assert!((expected - 0.252).abs() < 1e-3);
    assert_eq!(pending.blend_mode, None);
    assert_eq!(ops.len(), 4);
}

#[test]
fn color_alpha_multiplies_onto_existing_constant() {
    let mut h = Harness::default();
    let pending = h.with_state(Affine::IDENTITY, |state| {
        state.pending_mut().fill_alpha = Some(0.5);
        apply_color(state, Rgba8::new(0, 0, 0, 51));
        state.pending().copied()
    });
    let pending = pending.unwrap();
    assert!((pending.fill_alpha.unwrap() - 0.1).abs() < 1e-6);
    assert!((pending.stroke_alpha.unwrap() - 0.2).abs() < 1e-6);
}
