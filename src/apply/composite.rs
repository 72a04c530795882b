use crate::{
    apply::state::ApplyState,
    foundation::error::PaintResult,
    paint::foreign::resolve_composite,
    paint::model::{AlphaComposite, Composite, CompositeRule},
};

/// Fold the active composite into the pending graphics state.
///
/// Alpha below 1 overwrites both alpha constants; the blend mode is always written, even when
/// it resolves to the default. An alpha outside `[0, 1]` is rejected before anything is recorded.
pub(crate) fn apply_composite(state: &mut ApplyState<'_, '_>) -> PaintResult<()> {
    let Some(composite) = state.env.composite else {
        return Ok(());
    };

    let (alpha, rule) = match composite {
        Composite::Alpha(c) => (c.alpha, c.rule),
        Composite::Foreign(foreign) => resolve_composite(foreign.as_ref()).unwrap_or_else(|| {
            tracing::warn!(
                type_name = foreign.type_name(),
                "unknown composite; using src-over at full alpha"
            );
            (1.0, CompositeRule::SrcOver)
        }),
    };
    let alpha = AlphaComposite::checked_alpha(alpha)?;

    let pending = state.pending_mut();
    if alpha < 1.0 {
        pending.stroke_alpha = Some(alpha);
        pending.fill_alpha = Some(alpha);
    }
    pending.blend_mode = Some(rule.blend_mode());
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/apply/composite.rs"]
mod tests;
