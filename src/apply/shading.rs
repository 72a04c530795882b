//! Axial and radial shading dictionaries for gradient paints.
//!
//! Shading coordinates are written in the space the content transform maps to, so the builders
//! compose the paint-local transform onto the call transform before transforming geometry.

use crate::{
    apply::{
        color::apply_color, config::ApplierConfig, function::build_gradient_function,
        state::ApplyState,
    },
    document::content::ContentOp,
    document::object::{Dict, Object},
    foundation::core::{Affine, Point},
    foundation::error::{PaintError, PaintResult},
    foundation::math::non_degenerate_scale,
    paint::model::{
        ColorInterpolation, CycleMethod, ExternalShading, GradientOrigin, GradientStops,
        LinearGradient, RadialGradient, TwoStopGradient,
    },
};

const SHADING_AXIAL: i64 = 2;
const SHADING_RADIAL: i64 = 3;

fn trace_unsupported(cycle: CycleMethod, interpolation: ColorInterpolation) {
    if cycle != CycleMethod::NoCycle {
        tracing::trace!(?cycle, "cycle method not representable; gradient is extended instead");
    }
    if interpolation != ColorInterpolation::Srgb {
        tracing::trace!(?interpolation, "interpolating gradient stops in sRGB");
    }
}

/// Shading dictionary skeleton shared by all gradient kinds. Validates and maps the stops before
/// anything is written to the content stream, then applies the first stop as fallback color.
fn gradient_shading(
    state: &mut ApplyState<'_, '_>,
    shading_type: i64,
    stops: &GradientStops,
    anti_alias: bool,
) -> PaintResult<Dict> {
    let function = build_gradient_function(stops, state.env.color_mapper)?;
    let first = stops.first_color()?;
    let space = state
        .env
        .color_mapper
        .map_color(first)
        .space()
        .ok_or_else(|| PaintError::malformed("color mapper returned a pattern color for a stop"))?;

    apply_color(state, first);

    let mut d = Dict::new();
    d.set("ShadingType", shading_type);
    d.set("ColorSpace", space.to_object());
    if anti_alias {
        d.set("AntiAlias", true);
    }
    d.set("Function", function.to_dict());
    d.set("Extend", vec![Object::Bool(true), Object::Bool(true)]);
    Ok(d)
}

/// Reject NaN or infinite geometry so it never reaches a shading or a content matrix.
fn require_finite(kind: &str, transform: Affine, pts: &[Point]) -> PaintResult<()> {
    if !transform.is_finite() {
        return Err(PaintError::malformed(format!(
            "{kind} gradient transform {:?} is not finite",
            transform.as_coeffs()
        )));
    }
    match pts.iter().find(|p| !p.is_finite()) {
        Some(p) => Err(PaintError::malformed(format!(
            "{kind} gradient point ({}, {}) is not finite",
            p.x, p.y
        ))),
        None => Ok(()),
    }
}

fn points(pts: &[Point]) -> Object {
    let flat: Vec<f64> = pts.iter().flat_map(|p| [p.x, p.y]).collect();
    Object::reals_f64(&flat)
}

/// Axial shading for a multi-stop linear gradient.
///
/// Appends the rectangle spanned by the gradient axis and, unless the gradient comes from a
/// compat source, remaps the unit square onto it with the y axis flipped.
pub(crate) fn build_linear(
    state: &mut ApplyState<'_, '_>,
    gradient: &LinearGradient,
    config: &ApplierConfig,
) -> PaintResult<Dict> {
    trace_unsupported(gradient.cycle, gradient.interpolation);

    let transform = state.transform * gradient.transform;
    let start = transform * gradient.start;
    let end = transform * gradient.end;
    require_finite("linear", transform, &[gradient.start, gradient.end, start, end])?;

    let mut shading = gradient_shading(state, SHADING_AXIAL, &gradient.stops, config.anti_alias)?;
    state.transform = transform;

    let compat =
        gradient.origin == GradientOrigin::Compat && state.env.shape_bounds.is_some();
    let (c0, c1) = if compat {
        (gradient.start, gradient.end)
    } else {
        (start, end)
    };
    shading.set("Coords", points(&[c0, c1]));

    state.push(ContentOp::AppendRect {
        x: c0.x,
        y: c0.y,
        width: c1.x - c0.x,
        height: c1.y - c0.y,
    });
    if !compat {
        let w = end.x - start.x;
        let h = end.y - start.y;
        // Canvas y grows downwards; anchor at the axis' bottom edge and mirror.
        state.push(ContentOp::Transform(Affine::translate((start.x, start.y + h))));
        state.push(ContentOp::Transform(Affine::scale_non_uniform(
            non_degenerate_scale(w),
            non_degenerate_scale(-h),
        )));
    }
    Ok(shading)
}

/// Radial shading: a point at the center growing into the focus-centered circle.
pub(crate) fn build_radial(
    state: &mut ApplyState<'_, '_>,
    gradient: &RadialGradient,
    config: &ApplierConfig,
) -> PaintResult<Dict> {
    trace_unsupported(gradient.cycle, gradient.interpolation);
    if !gradient.radius.is_finite() {
        return Err(PaintError::malformed(format!(
            "radial gradient radius {} is not finite",
            gradient.radius
        )));
    }

    let transform = state.transform * gradient.transform;
    let center = transform * gradient.center;
    let focus = transform * gradient.focus;
    let [scale_x, ..] = transform.as_coeffs();
    let radius = (gradient.radius * scale_x).abs();
    require_finite("radial", transform, &[center, focus])?;
    if !radius.is_finite() {
        return Err(PaintError::malformed(format!(
            "radial gradient radius {radius} is not finite after transform"
        )));
    }

    let mut shading =
        gradient_shading(state, SHADING_RADIAL, &gradient.stops, config.anti_alias)?;
    state.transform = transform;

    shading.set(
        "Coords",
        Object::reals_f64(&[center.x, center.y, 0.0, focus.x, focus.y, radius]),
    );
    Ok(shading)
}

/// Axial shading for a plain two-color gradient. No anti-aliasing flag, no clip rectangle.
pub(crate) fn build_two_stop(
    state: &mut ApplyState<'_, '_>,
    gradient: &TwoStopGradient,
) -> PaintResult<Dict> {
    if gradient.cyclic {
        tracing::trace!("cyclic two-stop gradient; gradient is extended instead");
    }
    let p1 = state.transform * gradient.p1;
    let p2 = state.transform * gradient.p2;
    require_finite("two-stop", state.transform, &[p1, p2])?;

    let stops = GradientStops::new(vec![gradient.color1, gradient.color2], vec![0.0, 1.0]);
    let mut shading = gradient_shading(state, SHADING_AXIAL, &stops, false)?;
    shading.set("Coords", points(&[p1, p2]));
    Ok(shading)
}

/// Import a shading authored elsewhere: concatenate its matrix and hand back a copy.
pub(crate) fn import_shading(state: &mut ApplyState<'_, '_>, paint: &ExternalShading) -> Dict {
    state.push(ContentOp::Transform(paint.matrix));
    paint.shading.clone()
}

#[cfg(test)]
#[path = "../../tests/unit/apply/shading.rs"]
mod tests;
