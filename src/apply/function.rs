//! Stitching functions for multi-stop gradients.
//!
//! A gradient with `n` stops becomes one type 3 function over `[0, 1]` stitching together
//! `n - 1` type 2 (linear interpolation) functions. Stops that do not start at 0 or end at 1 get
//! a duplicated end color so the function covers the whole domain.

use crate::{
    collab::color::ColorMapper,
    document::object::{Dict, Object},
    foundation::core::Rgba8,
    foundation::error::PaintResult,
    foundation::math::{approx_one, approx_zero},
    paint::model::GradientStops,
};

const UNIT_DOMAIN: [f32; 2] = [0.0, 1.0];

#[derive(Clone, Copy, Debug, PartialEq)]
/// Gradient stop: a color at a fraction of the gradient axis.
pub struct ColorStop {
    /// Stop color.
    pub color: Rgba8,
    /// Position along the axis, in `[0, 1]`.
    pub fraction: f32,
}

#[derive(Clone, Debug, PartialEq)]
/// Exponential interpolation between two color component vectors (type 2 function).
pub struct InterpolationFunction {
    /// Components at the start of the domain.
    pub c0: Vec<f32>,
    /// Components at the end of the domain.
    pub c1: Vec<f32>,
    /// Input domain.
    pub domain: [f32; 2],
    /// Interpolation exponent; 1 is linear.
    pub exponent: i64,
}

impl InterpolationFunction {
    /// Function dictionary (`FunctionType 2`).
    pub fn to_dict(&self) -> Dict {
        let mut d = Dict::new();
        d.set("FunctionType", 2i64);
        d.set("C0", Object::reals(&self.c0));
        d.set("C1", Object::reals(&self.c1));
        d.set("N", self.exponent);
        d.set("Domain", Object::reals(&self.domain));
        d
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Stitching function (type 3) over a gradient's stops.
pub struct GradientFunction {
    /// Stops after synthetic end stops were inserted.
    pub stops: Vec<ColorStop>,
    /// Input domain, always `[0, 1]`.
    pub domain: [f32; 2],
    /// One interpolation function per stop window.
    pub functions: Vec<InterpolationFunction>,
    /// Subdomain boundaries; always `functions.len() - 1` entries.
    pub bounds: Vec<f32>,
    /// One `[0 1]` pair per function.
    pub encode: Vec<f32>,
}

impl GradientFunction {
    /// Function dictionary (`FunctionType 3`) with its sub-functions inlined.
    pub fn to_dict(&self) -> Dict {
        let mut d = Dict::new();
        d.set("FunctionType", 3i64);
        d.set("Domain", Object::reals(&self.domain));
        d.set(
            "Functions",
            self.functions
                .iter()
                .map(|f| Object::Dict(f.to_dict()))
                .collect::<Vec<_>>(),
        );
        d.set("Bounds", Object::reals(&self.bounds));
        d.set("Encode", Object::reals(&self.encode));
        d
    }
}

/// Build the stitching function for `stops`, mapping every stop color through `mapper`.
///
/// Fractions within `1e-5` of 0 or 1 count as the domain ends. A single stop is widened to a
/// constant gradient over the whole domain.
pub fn build_gradient_function(
    stops: &GradientStops,
    mapper: &dyn ColorMapper,
) -> PaintResult<GradientFunction> {
    stops.validate()?;

    let widened;
    let stops = if stops.colors.len() == 1 {
        let c = stops.colors[0];
        widened = GradientStops::new(vec![c, c], vec![0.0, 1.0]);
        &widened
    } else {
        stops
    };

    let colors = &stops.colors;
    let fractions = &stops.fractions;
    let last = fractions.len() - 1;

    let mut out_stops = Vec::with_capacity(colors.len() + 2);
    let mut bounds = Vec::with_capacity(colors.len());

    if !approx_zero(f64::from(fractions[0])) {
        out_stops.push(ColorStop {
            color: colors[0],
            fraction: 0.0,
        });
        bounds.push(fractions[0]);
    }
    out_stops.extend(
        colors
            .iter()
            .zip(fractions)
            .map(|(&color, &fraction)| ColorStop { color, fraction }),
    );
    bounds.extend_from_slice(&fractions[1..last]);
    if !approx_one(f64::from(fractions[last])) {
        out_stops.push(ColorStop {
            color: colors[last],
            fraction: 1.0,
        });
        bounds.push(fractions[last]);
    }

    let mut functions = Vec::with_capacity(out_stops.len() - 1);
    let mut encode = Vec::with_capacity(2 * (out_stops.len() - 1));
    for pair in out_stops.windows(2) {
        functions.push(InterpolationFunction {
            c0: mapper.map_color(pair[0].color).components().to_vec(),
            c1: mapper.map_color(pair[1].color).components().to_vec(),
            domain: UNIT_DOMAIN,
            exponent: 1,
        });
        encode.extend_from_slice(&UNIT_DOMAIN);
    }

    debug_assert_eq!(bounds.len() + 1, functions.len());
    Ok(GradientFunction {
        stops: out_stops,
        domain: UNIT_DOMAIN,
        functions,
        bounds,
        encode,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/apply/function.rs"]
mod tests;
