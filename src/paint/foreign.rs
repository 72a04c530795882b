//! Adapters for paints and composites defined by embedder libraries.
//!
//! The applier never sees the foreign types; it asks for the handful of accessors it needs and
//! classifies a paint by its type name first and by the accessors it answers second.

use std::{collections::HashMap, fmt, sync::Arc};

use image::RgbaImage;

use crate::{
    collab::tile::TileContent,
    foundation::core::{Affine, Point, Rect, Rgba8},
    foundation::error::{PaintError, PaintResult},
    paint::model::{
        ColorInterpolation, CompositeRule, CycleMethod, GradientOrigin, GradientStops,
        LinearGradient, RadialGradient, TexturePaint, TiledPattern,
    },
};

/// Accessor surface of a foreign paint. Every accessor is optional.
pub trait ForeignPaint: fmt::Debug {
    /// Short type name, e.g. `LinearGradientPaint`.
    fn type_name(&self) -> &str;

    /// Library or package the paint type comes from.
    fn origin(&self) -> Option<&str> {
        None
    }

    /// Stop colors.
    fn colors(&self) -> Option<Vec<Rgba8>> {
        None
    }

    /// Stop fractions, parallel to `colors`.
    fn fractions(&self) -> Option<Vec<f32>> {
        None
    }

    /// Start of a linear gradient axis.
    fn start_point(&self) -> Option<Point> {
        None
    }

    /// End of a linear gradient axis.
    fn end_point(&self) -> Option<Point> {
        None
    }

    /// Center of a radial gradient.
    fn center_point(&self) -> Option<Point> {
        None
    }

    /// Focus of a radial gradient; defaults to the center.
    fn focus_point(&self) -> Option<Point> {
        None
    }

    /// Radius of a radial gradient.
    fn radius(&self) -> Option<f64> {
        None
    }

    /// Gradient-local transform.
    fn transform(&self) -> Option<Affine> {
        None
    }

    /// Behavior past the end stops.
    fn cycle_method(&self) -> Option<CycleMethod> {
        None
    }

    /// Interpolation color space.
    fn color_interpolation(&self) -> Option<ColorInterpolation> {
        None
    }

    /// Anchor rectangle of a tiled paint.
    fn pattern_rect(&self) -> Option<Rect> {
        None
    }

    /// Transform applied to the tile pattern.
    fn pattern_transform(&self) -> Option<Affine> {
        None
    }

    /// Vector content of a tile.
    fn tile_content(&self) -> Option<TileContent> {
        None
    }

    /// Raster content of a tile.
    fn image(&self) -> Option<Arc<RgbaImage>> {
        None
    }
}

/// Accessor surface of a foreign composite.
pub trait ForeignComposite: fmt::Debug {
    /// Short type name.
    fn type_name(&self) -> &str;

    /// Constant alpha in `[0, 1]`.
    fn alpha(&self) -> Option<f32> {
        None
    }

    /// Porter-Duff rule.
    fn rule(&self) -> Option<CompositeRule> {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// What a foreign paint was recognized as.
pub enum ForeignKind {
    /// Multi-stop linear gradient.
    Linear,
    /// Multi-stop radial gradient.
    Radial,
    /// Vector tile pattern.
    Tiled,
    /// Raster texture.
    Texture,
    /// Nothing this crate can translate.
    Unknown,
}

impl ForeignKind {
    /// Classify by well-known type name, then by the accessors the paint answers.
    pub fn probe(paint: &dyn ForeignPaint) -> Self {
        match paint.type_name() {
            "LinearGradientPaint" => return Self::Linear,
            "RadialGradientPaint" => return Self::Radial,
            "PatternPaint" => return Self::Tiled,
            _ => {}
        }

        let has_stops = paint.colors().is_some() && paint.fractions().is_some();
        if has_stops && paint.start_point().is_some() && paint.end_point().is_some() {
            Self::Linear
        } else if has_stops && paint.center_point().is_some() && paint.radius().is_some() {
            Self::Radial
        } else if paint.pattern_rect().is_some() && paint.tile_content().is_some() {
            Self::Tiled
        } else if paint.pattern_rect().is_some() && paint.image().is_some() {
            Self::Texture
        } else {
            Self::Unknown
        }
    }
}

/// Origin and type name of a foreign paint type.
type KindKey = (Option<String>, String);

#[derive(Debug, Default)]
/// Memo of [`ForeignKind::probe`] results per paint type.
///
/// A type is identified by its origin and type name together, so equally named types from
/// different libraries are probed separately.
pub struct ForeignKindCache {
    kinds: HashMap<KindKey, ForeignKind>,
}

impl ForeignKindCache {
    /// Kind of `paint`, probing only the first paint seen of each type.
    pub fn classify(&mut self, paint: &dyn ForeignPaint) -> ForeignKind {
        let key = (paint.origin().map(str::to_owned), paint.type_name().to_owned());
        if let Some(kind) = self.kinds.get(&key) {
            return *kind;
        }
        let kind = ForeignKind::probe(paint);
        tracing::debug!(
            type_name = paint.type_name(),
            origin = paint.origin(),
            ?kind,
            "classified foreign paint"
        );
        self.kinds.insert(key, kind);
        kind
    }

    /// Number of paint types classified.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// `true` when nothing has been classified.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

fn require<T>(value: Option<T>, paint: &dyn ForeignPaint, accessor: &str) -> PaintResult<T> {
    value.ok_or_else(|| {
        PaintError::missing_capability(format!("{} has no `{accessor}`", paint.type_name()))
    })
}

fn stops(paint: &dyn ForeignPaint) -> PaintResult<GradientStops> {
    Ok(GradientStops::new(
        require(paint.colors(), paint, "colors")?,
        require(paint.fractions(), paint, "fractions")?,
    ))
}

pub(crate) fn resolve_linear(
    paint: &dyn ForeignPaint,
    compat_origins: &[String],
) -> PaintResult<LinearGradient> {
    let compat = paint
        .origin()
        .is_some_and(|o| compat_origins.iter().any(|c| c == o));
    Ok(LinearGradient {
        start: require(paint.start_point(), paint, "start_point")?,
        end: require(paint.end_point(), paint, "end_point")?,
        stops: stops(paint)?,
        transform: paint.transform().unwrap_or(Affine::IDENTITY),
        cycle: paint.cycle_method().unwrap_or_default(),
        interpolation: paint.color_interpolation().unwrap_or_default(),
        origin: if compat {
            GradientOrigin::Compat
        } else {
            GradientOrigin::Native
        },
    })
}

pub(crate) fn resolve_radial(paint: &dyn ForeignPaint) -> PaintResult<RadialGradient> {
    let center = require(paint.center_point(), paint, "center_point")?;
    Ok(RadialGradient {
        center,
        focus: paint.focus_point().unwrap_or(center),
        radius: require(paint.radius(), paint, "radius")?,
        stops: stops(paint)?,
        transform: paint.transform().unwrap_or(Affine::IDENTITY),
        cycle: paint.cycle_method().unwrap_or_default(),
        interpolation: paint.color_interpolation().unwrap_or_default(),
    })
}

pub(crate) fn resolve_tiled(paint: &dyn ForeignPaint) -> PaintResult<TiledPattern> {
    Ok(TiledPattern {
        anchor: require(paint.pattern_rect(), paint, "pattern_rect")?,
        transform: paint.pattern_transform(),
        content: require(paint.tile_content(), paint, "tile_content")?,
    })
}

pub(crate) fn resolve_texture(paint: &dyn ForeignPaint) -> PaintResult<TexturePaint> {
    Ok(TexturePaint {
        anchor: require(paint.pattern_rect(), paint, "pattern_rect")?,
        image: require(paint.image(), paint, "image")?,
    })
}

/// Alpha and rule of a foreign composite, if it exposes both.
pub(crate) fn resolve_composite(composite: &dyn ForeignComposite) -> Option<(f32, CompositeRule)> {
    Some((composite.alpha()?, composite.rule()?))
}

#[cfg(test)]
#[path = "../../tests/unit/paint/foreign.rs"]
mod tests;
