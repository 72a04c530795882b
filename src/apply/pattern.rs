use std::sync::Arc;

use crate::{
    apply::state::ApplyState,
    collab::tile::TileTarget,
    document::content::{ColorSpace, ContentOp, DocColor},
    document::object::Name,
    document::resources::TilingPattern,
    foundation::core::{Affine, compose, flip_y},
    foundation::error::{PaintError, PaintResult},
    paint::model::{TexturePaint, TiledPattern},
};

fn set_pattern_color(state: &mut ApplyState<'_, '_>, pattern: Name, underlying: Option<ColorSpace>) {
    let color = DocColor::Pattern {
        pattern,
        underlying,
    };
    state.push(ContentOp::SetFillColor(color.clone()));
    state.push(ContentOp::SetStrokeColor(color));
}

/// Tiling pattern whose tile is drawn by the sub-renderer.
///
/// A failing sub-renderer drops the pattern: nothing is registered and no color is set.
pub(crate) fn apply_tiled(state: &mut ApplyState<'_, '_>, paint: &TiledPattern) -> PaintResult<()> {
    let placement = match paint.transform {
        Some(local) => compose(state.transform, local),
        None => state.transform,
    };
    let matrix = placement * flip_y();

    let mut target = TileTarget::new(paint.anchor);
    if let Err(err) = state.env.sub_renderer.render_tile(&mut target, &paint.content) {
        tracing::warn!(error = %err, anchor = ?paint.anchor, "tile rendering failed; pattern dropped");
        return Ok(());
    }

    let form = Arc::new(target.into_form());
    let pattern = TilingPattern::for_anchor(paint.anchor, matrix, vec![ContentOp::DrawForm(form)]);
    let name = state.env.resources.add_pattern(pattern);
    set_pattern_color(state, name, None);
    Ok(())
}

/// Tiling pattern drawing one raster image, stretched over the anchor rectangle.
pub(crate) fn apply_texture(state: &mut ApplyState<'_, '_>, paint: &TexturePaint) -> PaintResult<()> {
    let (img_w, img_h) = paint.image.dimensions();
    if img_w == 0 || img_h == 0 {
        return Err(PaintError::malformed(format!(
            "texture bitmap is empty ({img_w}x{img_h})"
        )));
    }
    let anchor = paint.anchor;
    if !(anchor.width().is_finite() && anchor.height().is_finite()) {
        return Err(PaintError::malformed("texture anchor is not finite"));
    }

    let image = state.env.image_encoder.encode_image(&paint.image)?;
    let underlying = image.color_space;

    let (img_w, img_h) = (f64::from(img_w), f64::from(img_h));
    let ratio_w = anchor.width() / img_w;
    let ratio_h = anchor.height() / img_h;
    let paint_h = img_h * ratio_h;
    let draw = ContentOp::DrawImage {
        image,
        x: anchor.x0,
        y: paint_h + anchor.y0,
        width: img_w * ratio_w,
        height: -paint_h,
    };

    let matrix = Affine::translate((0.0, anchor.height())) * flip_y();
    let pattern = TilingPattern::for_anchor(anchor, matrix, vec![draw]);
    let name = state.env.resources.add_pattern(pattern);
    set_pattern_color(state, name, Some(underlying));
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/apply/pattern.rs"]
mod tests;
