//! pdfpaint translates 2-D canvas paints into PDF drawing primitives.
//!
//! A [`Paint`] (solid color, linear/radial/two-stop gradient, raster texture, vector tile or
//! imported shading) plus an optional [`Composite`] becomes content operators, shading
//! dictionaries, tiling-pattern resources and extended graphics states.
//!
//! # Pipeline overview
//!
//! 1. **Composite**: fold the active composite into a pending `ExtGState` (alpha, blend mode)
//! 2. **Dispatch**: classify the paint (foreign paints by name, then by capability)
//! 3. **Build**: emit colors, shading dictionaries and stitching functions, or tile patterns
//! 4. **Flush**: deduplicate the pending `ExtGState` and select it in the content stream
//!
//! Shadings and graphics states are deduplicated by structural equality, so repeated equal paints
//! share one object. The document model, color mapping, image encoding and tile rendering are
//! collaborators behind traits; the crate ships simple implementations of each.
//!
//! # Getting started
//!
//! Build a [`PaintEnv`] from the collaborators, then call [`PaintApplier::apply_paint`] once per
//! painted shape. Keep one [`PaintApplier`] per output document.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod apply;
mod cache;
mod collab;
mod document;
mod foundation;
mod paint;

pub use apply::config::ApplierConfig;
pub use apply::dispatch::PaintApplier;
pub use apply::function::{
    ColorStop, GradientFunction, InterpolationFunction, build_gradient_function,
};
pub use apply::state::{PaintEnv, PendingGraphicsState};
pub use cache::structural::{ObjectCache, StructuralObject};
pub use collab::color::{ColorMapper, DeviceCmykColorMapper, DeviceRgbColorMapper};
pub use collab::encoder::{ImageEncoder, RawImageEncoder};
pub use collab::tile::{SubRenderer, SvgTileRenderer, TileContent, TileRasterOptions, TileTarget};
pub use document::content::{
    ColorSpace, ContentOp, ContentSink, ContentStream, DocColor, write_operators,
};
pub use document::object::{Dict, Name, Object, format_real};
pub use document::resources::{
    FormXObject, ImageXObject, PAINT_TYPE_COLORED, ResourcePool, Resources,
    TILING_CONSTANT_SPACING_FASTER, TilingPattern,
};
pub use foundation::core::{Affine, Point, Rect, Rgba8, compose, flip_y};
pub use foundation::error::{PaintError, PaintResult};
pub use paint::foreign::{ForeignComposite, ForeignKind, ForeignKindCache, ForeignPaint};
pub use paint::model::{
    AlphaComposite, BlendMode, ColorInterpolation, Composite, CompositeRule, CycleMethod,
    ExternalShading, GradientOrigin, GradientStops, LinearGradient, Paint, RadialGradient,
    TexturePaint, TiledPattern, TwoStopGradient,
};
