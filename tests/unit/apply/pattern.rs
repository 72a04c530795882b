use image::{Rgba, RgbaImage};

use super::*;
use crate::{
    apply::fixture::Harness,
    collab::tile::TileContent,
    document::object::Object,
    foundation::core::Rect,
};

fn tiled(transform: Option<Affine>) -> TiledPattern {
    TiledPattern {
        anchor: Rect::new(0.0, 0.0, 8.0, 4.0),
        transform,
        content: TileContent::Opaque(Arc::new(())),
    }
}

#[test]
fn tiled_pattern_is_registered_and_selected() {
    let mut h = Harness::default();
    h.with_state(Affine::translate((10.0, 0.0)), |state| apply_tiled(state, &tiled(None)))
        .unwrap();

    assert_eq!(h.renderer.calls, 1);
    let (name, pattern) = &h.resources.patterns()[0];
    assert_eq!(name.as_str(), "P1");
    assert_eq!((pattern.x_step, pattern.y_step), (8.0, 4.0));
    assert_eq!(pattern.matrix, Affine::translate((10.0, 0.0)) * flip_y());
    assert!(matches!(&pattern.content[..], [ContentOp::DrawForm(form)] if form.content.len() == 1));

    let expected = DocColor::Pattern {
        pattern: name.clone(),
        underlying: None,
    };
    let ops = h.sink.ops();
    assert_eq!(ops.len(), 2);
    assert!(matches!(&ops[0], ContentOp::SetFillColor(c) if *c == expected));
    assert!(matches!(&ops[1], ContentOp::SetStrokeColor(c) if *c == expected));
}

#[test]
fn pattern_transform_is_applied_inside_call_transform() {
    let mut h = Harness::default();
    let local = Affine::scale(3.0);
    let call = Affine::translate((1.0, 2.0));
    h.with_state(call, |state| apply_tiled(state, &tiled(Some(local))))
        .unwrap();
    let (_, pattern) = &h.resources.patterns()[0];
    assert_eq!(pattern.matrix, call * local * flip_y());
    assert_eq!(
        pattern.to_dict().get("Matrix"),
        Some(&Object::reals_f64(&[3.0, 0.0, 0.0, -3.0, 1.0, 2.0]))
    );
}

#[test]
fn failing_sub_renderer_leaves_everything_untouched() {
    let mut h = Harness::default();
    h.renderer.fail = true;
    let result = h.with_state(Affine::IDENTITY, |state| apply_tiled(state, &tiled(None)));

    assert!(result.is_ok());
    assert_eq!(h.renderer.calls, 1);
    assert!(h.resources.is_empty());
    assert!(h.sink.is_empty());
}

fn texture(w: u32, h: u32, anchor: Rect) -> TexturePaint {
    TexturePaint {
        anchor,
        image: Arc::new(RgbaImage::from_pixel(w, h, Rgba([0, 128, 255, 255]))),
    }
}

#[test]
fn texture_image_is_stretched_and_mirrored_into_anchor() {
    let mut h = Harness::default();
    let paint = texture(2, 4, Rect::new(1.0, 2.0, 11.0, 22.0));
    h.with_state(Affine::scale(5.0), |state| apply_texture(state, &paint))
        .unwrap();

    let (name, pattern) = &h.resources.patterns()[0];
    assert_eq!(pattern.bbox, paint.anchor);
    assert_eq!(pattern.matrix, Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, 20.0]));
    match &pattern.content[..] {
        [ContentOp::DrawImage {
            image,
            x,
            y,
            width,
            height,
        }] => {
            assert_eq!((*x, *y, *width, *height), (1.0, 22.0, 10.0, -20.0));
            assert_eq!((image.width, image.height), (2, 4));
            assert!(image.soft_mask.is_none());
        }
        other => panic!("unexpected tile content {other:?}"),
    }

    let expected = DocColor::Pattern {
        pattern: name.clone(),
        underlying: Some(ColorSpace::DeviceRgb),
    };
    assert!(matches!(&h.sink.ops()[0], ContentOp::SetFillColor(c) if *c == expected));
    assert!(matches!(&h.sink.ops()[1], ContentOp::SetStrokeColor(c) if *c == expected));
}

#[test]
fn empty_texture_is_malformed() {
    let mut h = Harness::default();
    let paint = texture(0, 0, Rect::new(0.0, 0.0, 1.0, 1.0));
    let err = h
        .with_state(Affine::IDENTITY, |state| apply_texture(state, &paint))
        .unwrap_err();
    assert!(matches!(err, PaintError::Malformed(_)));
    assert!(h.resources.is_empty());
    assert!(h.sink.is_empty());
}
