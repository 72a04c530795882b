use crate::{apply::state::ApplyState, document::content::ContentOp, foundation::core::Rgba8};

/// Set `color` as stroke and fill color.
///
/// Translucency multiplies into the pending alpha constants, so a translucent color under a
/// translucent composite carries both attenuations.
pub(crate) fn apply_color(state: &mut ApplyState<'_, '_>, color: Rgba8) {
    let mapped = state.env.color_mapper.map_color(color);
    state.push(ContentOp::SetStrokeColor(mapped.clone()));
    state.push(ContentOp::SetFillColor(mapped));

    if color.is_opaque() {
        return;
    }
    let factor = color.alpha_f32();
    let pending = state.pending_mut();
    pending.stroke_alpha = Some(pending.stroke_alpha.unwrap_or(1.0) * factor);
    pending.fill_alpha = Some(pending.fill_alpha.unwrap_or(1.0) * factor);
}

#[cfg(test)]
#[path = "../../tests/unit/apply/color.rs"]
mod tests;
