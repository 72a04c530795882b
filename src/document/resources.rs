use std::sync::Arc;

use crate::{
    document::content::{ColorSpace, ContentOp},
    document::object::{Dict, Name, Object},
    foundation::core::{Affine, Rect},
};

#[derive(Clone, Debug, PartialEq)]
/// Embeddable raster image.
pub struct ImageXObject {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Color space of `samples`.
    pub color_space: ColorSpace,
    /// Bits per sample component.
    pub bits_per_component: u8,
    /// Row-major samples, `color_space.components()` bytes per pixel.
    pub samples: Vec<u8>,
    /// Optional DeviceGray alpha mask with the same dimensions.
    pub soft_mask: Option<Box<ImageXObject>>,
}

impl ImageXObject {
    /// Image XObject dictionary, without the sample stream.
    pub fn to_dict(&self) -> Dict {
        let mut d = Dict::typed("XObject");
        d.set("Subtype", Object::name("Image"));
        d.set("Width", i64::from(self.width));
        d.set("Height", i64::from(self.height));
        d.set("ColorSpace", self.color_space.to_object());
        d.set("BitsPerComponent", i64::from(self.bits_per_component));
        d
    }
}

#[derive(Clone, Debug)]
/// Reusable content block with its own bounding box.
pub struct FormXObject {
    /// Bounding box in form space.
    pub bbox: Rect,
    /// Form content.
    pub content: Vec<ContentOp>,
}

impl FormXObject {
    /// Form XObject dictionary, without the content stream.
    pub fn to_dict(&self) -> Dict {
        let mut d = Dict::typed("XObject");
        d.set("Subtype", Object::name("Form"));
        d.set("BBox", rect_object(self.bbox));
        d
    }
}

/// `PaintType` 1: the tile carries its own colors.
pub const PAINT_TYPE_COLORED: i64 = 1;
/// `TilingType` 3: constant spacing, faster tiling.
pub const TILING_CONSTANT_SPACING_FASTER: i64 = 3;

#[derive(Clone, Debug)]
/// Tiling pattern resource (PatternType 1).
pub struct TilingPattern {
    /// `PaintType`; see [`PAINT_TYPE_COLORED`].
    pub paint_type: i64,
    /// `TilingType`; see [`TILING_CONSTANT_SPACING_FASTER`].
    pub tiling_type: i64,
    /// Tile cell in pattern space.
    pub bbox: Rect,
    /// Horizontal spacing between tiles.
    pub x_step: f64,
    /// Vertical spacing between tiles.
    pub y_step: f64,
    /// Pattern space to default user space of the page.
    pub matrix: Affine,
    /// Tile content.
    pub content: Vec<ContentOp>,
}

impl TilingPattern {
    /// Colored, constant-spacing tile covering `anchor`, stepping by its size.
    pub fn for_anchor(anchor: Rect, matrix: Affine, content: Vec<ContentOp>) -> Self {
        Self {
            paint_type: PAINT_TYPE_COLORED,
            tiling_type: TILING_CONSTANT_SPACING_FASTER,
            bbox: anchor,
            x_step: anchor.width(),
            y_step: anchor.height(),
            matrix,
            content,
        }
    }

    /// Pattern dictionary, without the content stream.
    pub fn to_dict(&self) -> Dict {
        let mut d = Dict::typed("Pattern");
        d.set("PatternType", 1i64);
        d.set("PaintType", self.paint_type);
        d.set("TilingType", self.tiling_type);
        d.set("BBox", rect_object(self.bbox));
        d.set("XStep", self.x_step as f32);
        d.set("YStep", self.y_step as f32);
        d.set("Matrix", Object::reals_f64(&self.matrix.as_coeffs()));
        d
    }
}

fn rect_object(r: Rect) -> Object {
    Object::reals_f64(&[r.x0, r.y0, r.x0 + r.width(), r.y0 + r.height()])
}

/// Document resource pool: registers patterns and hands back the name to reference them by.
pub trait ResourcePool {
    /// Register `pattern` and return its resource name.
    fn add_pattern(&mut self, pattern: TilingPattern) -> Name;
}

#[derive(Clone, Debug, Default)]
/// In-memory resource pool naming patterns `P1`, `P2`, ...
pub struct Resources {
    patterns: Vec<(Name, Arc<TilingPattern>)>,
}

impl Resources {
    /// Empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered patterns in registration order.
    pub fn patterns(&self) -> &[(Name, Arc<TilingPattern>)] {
        &self.patterns
    }

    /// Pattern registered under `name`.
    pub fn pattern(&self, name: &Name) -> Option<&Arc<TilingPattern>> {
        self.patterns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
    }

    /// `true` when no pattern has been registered.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl ResourcePool for Resources {
    fn add_pattern(&mut self, pattern: TilingPattern) -> Name {
        let name = Name::new(format!("P{}", self.patterns.len() + 1));
        self.patterns.push((name.clone(), Arc::new(pattern)));
        name
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/resources.rs"]
mod tests;
