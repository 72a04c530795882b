use std::{any::Any, fmt, sync::Arc};

use image::RgbaImage;

use crate::{
    collab::encoder::{ImageEncoder, RawImageEncoder},
    document::content::{ContentOp, ContentSink, ContentStream},
    document::resources::FormXObject,
    foundation::core::Rect,
    foundation::error::{PaintError, PaintResult},
};

#[derive(Clone)]
/// Vector content of one pattern tile, handed to a [`SubRenderer`] untouched.
pub enum TileContent {
    /// Parsed SVG document.
    Svg(Arc<usvg::Tree>),
    /// Embedder-defined drawing graph; only a matching custom renderer understands it.
    Opaque(Arc<dyn Any + Send + Sync>),
}

impl fmt::Debug for TileContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Svg(tree) => f
                .debug_struct("Svg")
                .field("tree_ptr", &Arc::as_ptr(tree))
                .field("width", &tree.size().width())
                .field("height", &tree.size().height())
                .finish(),
            Self::Opaque(any) => f
                .debug_struct("Opaque")
                .field("ptr", &Arc::as_ptr(any))
                .finish(),
        }
    }
}

#[derive(Debug)]
/// Nested rendering target scoped to one tile's bounding box.
pub struct TileTarget {
    bbox: Rect,
    content: ContentStream,
}

impl TileTarget {
    /// Empty target covering `bbox`.
    pub fn new(bbox: Rect) -> Self {
        Self {
            bbox,
            content: ContentStream::new(),
        }
    }

    /// Bounding box of the tile.
    pub fn bbox(&self) -> Rect {
        self.bbox
    }

    /// Operators recorded so far.
    pub fn content(&self) -> &ContentStream {
        &self.content
    }

    /// Recorded content as a form covering the tile.
    pub fn into_form(self) -> FormXObject {
        FormXObject {
            bbox: self.bbox,
            content: self.content.into_ops(),
        }
    }
}

impl ContentSink for TileTarget {
    fn push_op(&mut self, op: ContentOp) {
        self.content.push_op(op);
    }
}

/// Renders nested vector content into a tile. May fail; callers treat failure as non-fatal.
pub trait SubRenderer {
    /// Draw `content` into `target`.
    fn render_tile(&mut self, target: &mut TileTarget, content: &TileContent) -> PaintResult<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Raster resolution settings for [`SvgTileRenderer`].
pub struct TileRasterOptions {
    /// Pixels per tile unit.
    pub scale: f32,
    /// Upper bound for either raster dimension.
    pub max_dim: u32,
}

impl Default for TileRasterOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            max_dim: 4096,
        }
    }
}

#[derive(Clone, Debug, Default)]
/// Rasterizes SVG tile content with `resvg` and embeds it as an image.
pub struct SvgTileRenderer<E = RawImageEncoder> {
    encoder: E,
    options: TileRasterOptions,
}

impl<E: ImageEncoder> SvgTileRenderer<E> {
    /// Renderer embedding rasters through `encoder`.
    pub fn new(encoder: E, options: TileRasterOptions) -> Self {
        Self { encoder, options }
    }

    /// Current raster settings.
    pub fn options(&self) -> TileRasterOptions {
        self.options
    }
}

impl<E: ImageEncoder> SubRenderer for SvgTileRenderer<E> {
    fn render_tile(&mut self, target: &mut TileTarget, content: &TileContent) -> PaintResult<()> {
        let TileContent::Svg(tree) = content else {
            return Err(PaintError::delegated_render(
                "svg tile renderer cannot draw opaque tile content",
            ));
        };

        let bbox = target.bbox();
        let (width, height) = tile_raster_size(bbox, self.options)?;
        let bitmap = rasterize_svg_to_rgba8(tree, width, height)?;
        let image = self.encoder.encode_image(&bitmap)?;

        // Tile space is top-down; draw the image mirrored so row 0 ends up at the top.
        target.push_op(ContentOp::DrawImage {
            image,
            x: bbox.x0,
            y: bbox.y0 + bbox.height(),
            width: bbox.width(),
            height: -bbox.height(),
        });
        Ok(())
    }
}

fn tile_raster_size(bbox: Rect, options: TileRasterOptions) -> PaintResult<(u32, u32)> {
    fn to_px(v: f64, scale: f32) -> PaintResult<u32> {
        let px = v.abs() * f64::from(scale);
        if !px.is_finite() || px <= 0.0 {
            return Err(PaintError::delegated_render("tile has invalid width/height"));
        }
        Ok((px.ceil() as u32).max(1))
    }

    let w = to_px(bbox.width(), options.scale)?;
    let h = to_px(bbox.height(), options.scale)?;
    if w > options.max_dim || h > options.max_dim {
        return Err(PaintError::delegated_render(format!(
            "tile raster size too large: {w}x{h} (max {0}x{0})",
            options.max_dim
        )));
    }
    Ok((w, h))
}

fn rasterize_svg_to_rgba8(tree: &usvg::Tree, width: u32, height: u32) -> PaintResult<RgbaImage> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| PaintError::delegated_render("failed to allocate tile pixmap"))?;

    let size = tree.size();
    let sx = (width as f32) / size.width();
    let sy = (height as f32) / size.height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(tree, xform, &mut pixmap.as_mut());

    let mut rgba = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| PaintError::delegated_render("tile raster buffer size mismatch"))
}

#[cfg(test)]
#[path = "../../tests/unit/collab/tile.rs"]
mod tests;
