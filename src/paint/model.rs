use std::sync::Arc;

use image::RgbaImage;

use crate::{
    collab::tile::TileContent,
    document::object::Dict,
    foundation::core::{Affine, Point, Rect, Rgba8},
    foundation::error::{PaintError, PaintResult},
    paint::foreign::{ForeignComposite, ForeignPaint},
};

fn identity() -> Affine {
    Affine::IDENTITY
}

#[derive(Clone, Debug)]
/// Abstract paint to translate.
pub enum Paint {
    /// Uniform color.
    Solid(Rgba8),
    /// Multi-stop linear gradient.
    Linear(LinearGradient),
    /// Multi-stop radial gradient.
    Radial(RadialGradient),
    /// Two-color linear gradient.
    TwoStop(TwoStopGradient),
    /// Raster texture.
    Texture(TexturePaint),
    /// Vector tile pattern.
    Tiled(TiledPattern),
    /// Shading imported as-is.
    Shading(ExternalShading),
    /// Paint from an embedder library, recognized by name and capabilities.
    Foreign(Arc<dyn ForeignPaint>),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Parallel color and stop-fraction lists of a multi-stop gradient.
pub struct GradientStops {
    /// Stop colors.
    pub colors: Vec<Rgba8>,
    /// Stop fractions in `[0, 1]`, non-decreasing, parallel to `colors`.
    pub fractions: Vec<f32>,
}

impl GradientStops {
    /// Stops from parallel lists; see [`GradientStops::validate`].
    pub fn new(colors: Vec<Rgba8>, fractions: Vec<f32>) -> Self {
        Self { colors, fractions }
    }

    /// Check the lists are non-empty, parallel and sorted within `[0, 1]`.
    pub fn validate(&self) -> PaintResult<()> {
        if self.colors.is_empty() {
            return Err(PaintError::malformed("gradient has no color stops"));
        }
        if self.colors.len() != self.fractions.len() {
            return Err(PaintError::malformed(format!(
                "gradient has {} colors but {} fractions",
                self.colors.len(),
                self.fractions.len()
            )));
        }
        let mut prev = 0.0f32;
        for (i, f) in self.fractions.iter().copied().enumerate() {
            if !(0.0..=1.0).contains(&f) {
                return Err(PaintError::malformed(format!(
                    "stop fraction {f} at index {i} is outside [0, 1]"
                )));
            }
            if f < prev {
                return Err(PaintError::malformed(format!(
                    "stop fractions decrease at index {i} ({prev} -> {f})"
                )));
            }
            prev = f;
        }
        Ok(())
    }

    /// Color of the first stop.
    pub fn first_color(&self) -> PaintResult<Rgba8> {
        self.colors
            .first()
            .copied()
            .ok_or_else(|| PaintError::malformed("gradient has no color stops"))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// How a gradient continues past its end stops.
pub enum CycleMethod {
    /// Extend the end colors.
    #[default]
    NoCycle,
    /// Mirror the gradient on each repeat.
    Reflect,
    /// Restart the gradient on each repeat.
    Repeat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Color space gradient stops are interpolated in.
pub enum ColorInterpolation {
    /// sRGB.
    #[default]
    Srgb,
    /// Linear-light RGB.
    LinearRgb,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Where a linear gradient came from; compat sources keep their coordinates in paint space.
pub enum GradientOrigin {
    /// Coordinates follow the call transform.
    #[default]
    Native,
    /// Coordinates stay in paint space when shape bounds are known.
    Compat,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Linear gradient along an axis.
pub struct LinearGradient {
    /// Axis start, where the first stop sits.
    pub start: Point,
    /// Axis end, where the last stop sits.
    pub end: Point,
    /// Color stops.
    pub stops: GradientStops,
    /// Paint-local transform, applied before the call transform.
    #[serde(default = "identity")]
    pub transform: Affine,
    /// Behavior past the end stops.
    #[serde(default)]
    pub cycle: CycleMethod,
    /// Interpolation color space.
    #[serde(default)]
    pub interpolation: ColorInterpolation,
    /// Where the gradient came from.
    #[serde(default)]
    pub origin: GradientOrigin,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Radial gradient from a focus point out to a circle.
pub struct RadialGradient {
    /// Circle center.
    pub center: Point,
    /// Focal point.
    pub focus: Point,
    /// Circle radius.
    pub radius: f64,
    /// Color stops.
    pub stops: GradientStops,
    /// Paint-local transform, applied before the call transform.
    #[serde(default = "identity")]
    pub transform: Affine,
    /// Behavior past the end stops.
    #[serde(default)]
    pub cycle: CycleMethod,
    /// Interpolation color space.
    #[serde(default)]
    pub interpolation: ColorInterpolation,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Two-color gradient between two points with fixed fractions `[0, 1]`.
pub struct TwoStopGradient {
    /// Start point.
    pub p1: Point,
    /// Color at `p1`.
    pub color1: Rgba8,
    /// End point.
    pub p2: Point,
    /// Color at `p2`.
    pub color2: Rgba8,
    /// Repeat instead of extending.
    #[serde(default)]
    pub cyclic: bool,
}

#[derive(Clone, Debug)]
/// Raster tile repeated across the anchor rectangle's grid.
pub struct TexturePaint {
    /// Tile cell; the image is stretched over it.
    pub anchor: Rect,
    /// Tile bitmap.
    pub image: Arc<RgbaImage>,
}

#[derive(Clone, Debug)]
/// Vector tile repeated across the anchor rectangle's grid.
pub struct TiledPattern {
    /// Tile cell.
    pub anchor: Rect,
    /// Tile transform, applied inside the call transform.
    pub transform: Option<Affine>,
    /// Tile drawing.
    pub content: TileContent,
}

#[derive(Clone, Debug)]
/// A shading authored elsewhere, imported as-is.
pub struct ExternalShading {
    /// Shading dictionary.
    pub shading: Dict,
    /// Shading space to current user space.
    pub matrix: Affine,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Porter-Duff compositing rule.
pub enum CompositeRule {
    /// Clear the destination.
    Clear,
    /// Copy the source.
    Src,
    /// Source over destination.
    SrcOver,
    /// Source or destination, not both.
    Xor,
    /// Keep the destination.
    Dst,
    /// Destination atop source.
    DstAtop,
    /// Source atop destination.
    SrcAtop,
    /// Destination inside source.
    DstIn,
    /// Destination outside source.
    DstOut,
    /// Source inside destination.
    SrcIn,
    /// Source outside destination.
    SrcOut,
    /// Destination over source.
    DstOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Blend modes the composite mapper can produce.
pub enum BlendMode {
    /// `/Normal`.
    Normal,
    /// `/Compatible`.
    Compatible,
    /// `/Exclusion`.
    Exclusion,
}

impl BlendMode {
    /// PDF name of the blend mode.
    pub fn pdf_name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Compatible => "Compatible",
            Self::Exclusion => "Exclusion",
        }
    }
}

impl CompositeRule {
    /// Blend mode written for this rule.
    ///
    /// Rules without a PDF equivalent fall back to `Compatible`.
    pub fn blend_mode(self) -> BlendMode {
        match self {
            Self::Src => BlendMode::Normal,
            Self::SrcOver | Self::SrcAtop => BlendMode::Compatible,
            Self::Xor => BlendMode::Exclusion,
            // TODO: decide whether dst-* and src-in/out deserve soft-mask based emulation
            Self::Clear
            | Self::Dst
            | Self::DstAtop
            | Self::DstIn
            | Self::DstOut
            | Self::SrcIn
            | Self::SrcOut
            | Self::DstOver => BlendMode::Compatible,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Porter-Duff rule with a constant alpha.
pub struct AlphaComposite {
    /// Compositing rule.
    pub rule: CompositeRule,
    /// Constant alpha in `[0, 1]`.
    #[serde(default = "full_alpha", deserialize_with = "deserialize_alpha")]
    pub alpha: f32,
}

fn full_alpha() -> f32 {
    1.0
}

fn deserialize_alpha<'de, D: serde::Deserializer<'de>>(d: D) -> Result<f32, D::Error> {
    let alpha = <f32 as serde::Deserialize>::deserialize(d)?;
    AlphaComposite::checked_alpha(alpha).map_err(serde::de::Error::custom)
}

impl AlphaComposite {
    /// Composite with `rule` and constant `alpha`. The alpha is checked when the composite is
    /// applied; use [`AlphaComposite::try_new`] to reject it up front.
    pub fn new(rule: CompositeRule, alpha: f32) -> Self {
        Self { rule, alpha }
    }

    /// Like [`AlphaComposite::new`], failing with `Malformed` unless `alpha` is in `[0, 1]`.
    pub fn try_new(rule: CompositeRule, alpha: f32) -> PaintResult<Self> {
        Ok(Self::new(rule, Self::checked_alpha(alpha)?))
    }

    /// Source-over at `alpha`.
    pub fn src_over(alpha: f32) -> Self {
        Self::new(CompositeRule::SrcOver, alpha)
    }

    /// `alpha` itself when it lies in `[0, 1]`. NaN is rejected too.
    pub fn checked_alpha(alpha: f32) -> PaintResult<f32> {
        if (0.0..=1.0).contains(&alpha) {
            Ok(alpha)
        } else {
            Err(PaintError::malformed(format!(
                "composite alpha {alpha} is outside [0, 1]"
            )))
        }
    }
}

#[derive(Clone, Debug)]
/// Compositing rule active for the painted shape.
pub enum Composite {
    /// Porter-Duff composite.
    Alpha(AlphaComposite),
    /// Composite from an embedder library.
    Foreign(Arc<dyn ForeignComposite>),
}

#[cfg(test)]
#[path = "../../tests/unit/paint/model.rs"]
mod tests;
