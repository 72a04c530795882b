use std::sync::Arc;

use super::*;
use crate::{
    apply::fixture::Harness,
    apply::state::PendingGraphicsState,
    foundation::core::Affine,
    foundation::error::PaintError,
    paint::foreign::ForeignComposite,
    paint::model::{AlphaComposite, BlendMode},
};

fn pending_after(composite: Option<Composite>) -> Option<PendingGraphicsState> {
    let mut h = Harness {
        composite,
        ..Harness::default()
    };
    h.with_state(Affine::IDENTITY, |state| {
        apply_composite(state).unwrap();
        state.pending().copied()
    })
}

#[test]
fn absent_composite_is_a_no_op() {
    assert_eq!(pending_after(None), None);
}

#[test]
fn opaque_src_over_writes_only_blend_mode() {
    let p = pending_after(Some(Composite::Alpha(AlphaComposite::src_over(1.0)))).unwrap();
    assert_eq!(p.stroke_alpha, None);
    assert_eq!(p.fill_alpha, None);
    assert_eq!(p.blend_mode, Some(BlendMode::Compatible));
}

#[test]
fn translucent_composite_sets_both_alphas() {
    let p = pending_after(Some(Composite::Alpha(AlphaComposite::new(
        CompositeRule::Xor,
        0.4,
    ))))
    .unwrap();
    assert_eq!(p.stroke_alpha, Some(0.4));
    assert_eq!(p.fill_alpha, Some(0.4));
    assert_eq!(p.blend_mode, Some(BlendMode::Exclusion));
}

#[test]
fn src_rule_maps_to_normal() {
    let p = pending_after(Some(Composite::Alpha(AlphaComposite::new(
        CompositeRule::Src,
        1.0,
    ))))
    .unwrap();
    assert_eq!(p.blend_mode, Some(BlendMode::Normal));
}

#[derive(Debug)]
struct SvgLike;

impl ForeignComposite for SvgLike {
    fn type_name(&self) -> &str {
        "SVGComposite"
    }
    fn alpha(&self) -> Option<f32> {
        Some(0.25)
    }
    fn rule(&self) -> Option<CompositeRule> {
        Some(CompositeRule::Src)
    }
}

#[derive(Debug)]
struct Mystery;

impl ForeignComposite for Mystery {
    fn type_name(&self) -> &str {
        "Mystery"
    }
}

#[test]
fn foreign_composite_is_read_through_accessors() {
    let p = pending_after(Some(Composite::Foreign(Arc::new(SvgLike)))).unwrap();
    assert_eq!(p.fill_alpha, Some(0.25));
    assert_eq!(p.blend_mode, Some(BlendMode::Normal));
}

#[test]
fn unknown_composite_falls_back_to_src_over() {
    let p = pending_after(Some(Composite::Foreign(Arc::new(Mystery)))).unwrap();
    assert_eq!(p.fill_alpha, None);
    assert_eq!(p.blend_mode, Some(BlendMode::Compatible));
}

#[derive(Debug)]
struct Overbright;

impl ForeignComposite for Overbright {
    fn type_name(&self) -> &str {
        "Overbright"
    }
    fn alpha(&self) -> Option<f32> {
        Some(1.5)
    }
    fn rule(&self) -> Option<CompositeRule> {
        Some(CompositeRule::SrcOver)
    }
}

#[test]
fn alpha_outside_unit_range_is_malformed() {
    for composite in [
        Composite::Alpha(AlphaComposite::new(CompositeRule::SrcOver, -0.5)),
        Composite::Alpha(AlphaComposite::src_over(f32::NAN)),
        Composite::Foreign(Arc::new(Overbright)),
    ] {
        let mut h = Harness {
            composite: Some(composite),
            ..Harness::default()
        };
        let (result, pending) = h.with_state(Affine::IDENTITY, |state| {
            let result = apply_composite(state);
            (result, state.pending().copied())
        });
        assert!(matches!(result, Err(PaintError::Malformed(_))));
        assert_eq!(pending, None);
    }
}
