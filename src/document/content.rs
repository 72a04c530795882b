use std::{collections::HashMap, fmt::Write as _, sync::Arc};

use crate::{
    document::object::{Dict, Name, Object, format_real},
    document::resources::{FormXObject, ImageXObject},
    foundation::core::Affine,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Device color spaces a [`DocColor`] can live in.
pub enum ColorSpace {
    /// Single gray component.
    DeviceGray,
    /// Red, green and blue components.
    DeviceRgb,
    /// Cyan, magenta, yellow and black components.
    DeviceCmyk,
}

impl ColorSpace {
    /// Name of the color space.
    pub fn name(self) -> Name {
        Name::new(match self {
            Self::DeviceGray => "DeviceGray",
            Self::DeviceRgb => "DeviceRGB",
            Self::DeviceCmyk => "DeviceCMYK",
        })
    }

    /// Number of components per color.
    pub fn components(self) -> usize {
        match self {
            Self::DeviceGray => 1,
            Self::DeviceRgb => 3,
            Self::DeviceCmyk => 4,
        }
    }

    /// Color space as a PDF name object.
    pub fn to_object(self) -> Object {
        Object::Name(self.name())
    }
}

#[derive(Clone, Debug, PartialEq)]
/// A color as the document understands it.
pub enum DocColor {
    /// Component values in a device color space.
    Device {
        /// Color space of `components`.
        space: ColorSpace,
        /// Component values in `[0, 1]`.
        components: Vec<f32>,
    },
    /// A pattern resource used as color, optionally over an underlying space.
    Pattern {
        /// Pattern resource name.
        pattern: Name,
        /// Space of the pattern's underlying color, if any.
        underlying: Option<ColorSpace>,
    },
}

impl DocColor {
    /// Device color in `space`.
    pub fn device(space: ColorSpace, components: Vec<f32>) -> Self {
        Self::Device { space, components }
    }

    /// Color space of a device color; `None` for pattern colors.
    pub fn space(&self) -> Option<ColorSpace> {
        match self {
            Self::Device { space, .. } => Some(*space),
            Self::Pattern { .. } => None,
        }
    }

    /// Components of a device color; empty for pattern colors.
    pub fn components(&self) -> &[f32] {
        match self {
            Self::Device { components, .. } => components,
            Self::Pattern { .. } => &[],
        }
    }
}

#[derive(Clone, Debug)]
/// One content-stream instruction emitted by the paint applier.
pub enum ContentOp {
    /// Set the stroking color.
    SetStrokeColor(DocColor),
    /// Set the non-stroking color.
    SetFillColor(DocColor),
    /// Select an extended graphics state dictionary.
    SetGraphicsState(Arc<Dict>),
    /// Concatenate a matrix onto the current transformation matrix.
    Transform(Affine),
    /// Append a rectangle to the current path; width/height may be negative.
    AppendRect {
        /// Left edge.
        x: f64,
        /// Bottom edge.
        y: f64,
        /// Horizontal extent.
        width: f64,
        /// Vertical extent.
        height: f64,
    },
    /// Paint an image into the rectangle at `(x, y)`; a negative height mirrors it vertically.
    DrawImage {
        /// Image to draw.
        image: Arc<ImageXObject>,
        /// Left edge.
        x: f64,
        /// Bottom edge.
        y: f64,
        /// Horizontal extent.
        width: f64,
        /// Vertical extent.
        height: f64,
    },
    /// Draw a form XObject.
    DrawForm(Arc<FormXObject>),
}

/// Output side of the document: receives content operators in order.
pub trait ContentSink {
    /// Append `op` to the stream.
    fn push_op(&mut self, op: ContentOp);
}

impl ContentSink for Vec<ContentOp> {
    fn push_op(&mut self, op: ContentOp) {
        self.push(op);
    }
}

#[derive(Clone, Debug, Default)]
/// Recording content sink.
pub struct ContentStream {
    ops: Vec<ContentOp>,
}

impl ContentStream {
    /// Empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded operators in order.
    pub fn ops(&self) -> &[ContentOp] {
        &self.ops
    }

    /// Take the recorded operators.
    pub fn into_ops(self) -> Vec<ContentOp> {
        self.ops
    }

    /// Number of recorded operators.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// `true` when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Render the recorded ops as PDF content-stream syntax.
    ///
    /// Graphics states, images and forms are named by object identity, so a deduplicated object
    /// referenced twice gets one name.
    pub fn to_operators(&self) -> String {
        write_operators(&self.ops)
    }
}

impl ContentSink for ContentStream {
    fn push_op(&mut self, op: ContentOp) {
        self.ops.push(op);
    }
}

// Keyed by allocation address; the ops being written keep every object alive.
struct IdentityNames<T> {
    prefix: &'static str,
    seen: HashMap<*const T, usize>,
}

impl<T> IdentityNames<T> {
    fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            seen: HashMap::new(),
        }
    }

    fn name_for(&mut self, obj: &Arc<T>) -> String {
        let next = self.seen.len() + 1;
        let idx = *self.seen.entry(Arc::as_ptr(obj)).or_insert(next);
        format!("/{}{idx}", self.prefix)
    }
}

/// Render `ops` as PDF content-stream syntax, one operator per line.
pub fn write_operators(ops: &[ContentOp]) -> String {
    let mut gs_names = IdentityNames::<Dict>::new("GS");
    let mut image_names = IdentityNames::<ImageXObject>::new("Im");
    let mut form_names = IdentityNames::<FormXObject>::new("Fm");

    let mut out = String::new();
    for op in ops {
        match op {
            ContentOp::SetStrokeColor(c) => write_color(&mut out, c, true),
            ContentOp::SetFillColor(c) => write_color(&mut out, c, false),
            ContentOp::SetGraphicsState(gs) => {
                let _ = writeln!(out, "{} gs", gs_names.name_for(gs));
            }
            ContentOp::Transform(m) => {
                let _ = writeln!(out, "{} cm", join_reals(&m.as_coeffs()));
            }
            ContentOp::AppendRect {
                x,
                y,
                width,
                height,
            } => {
                let _ = writeln!(out, "{} re", join_reals(&[*x, *y, *width, *height]));
            }
            ContentOp::DrawImage {
                image,
                x,
                y,
                width,
                height,
            } => {
                let _ = writeln!(
                    out,
                    "q {} cm {} Do Q",
                    join_reals(&[*width, 0.0, 0.0, *height, *x, *y]),
                    image_names.name_for(image)
                );
            }
            ContentOp::DrawForm(form) => {
                let _ = writeln!(out, "{} Do", form_names.name_for(form));
            }
        }
    }
    out
}

fn write_color(out: &mut String, color: &DocColor, stroke: bool) {
    match color {
        DocColor::Device { space, components } => {
            let values: Vec<f64> = components.iter().map(|c| f64::from(*c)).collect();
            let op = match (space, stroke) {
                (ColorSpace::DeviceGray, true) => "G",
                (ColorSpace::DeviceGray, false) => "g",
                (ColorSpace::DeviceRgb, true) => "RG",
                (ColorSpace::DeviceRgb, false) => "rg",
                (ColorSpace::DeviceCmyk, true) => "K",
                (ColorSpace::DeviceCmyk, false) => "k",
            };
            let _ = writeln!(out, "{} {op}", join_reals(&values));
        }
        DocColor::Pattern { pattern, .. } => {
            let (cs, scn) = if stroke { ("CS", "SCN") } else { ("cs", "scn") };
            let _ = writeln!(out, "/Pattern {cs} {pattern} {scn}");
        }
    }
}

fn join_reals(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format_real(*v))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "../../tests/unit/document/content.rs"]
mod tests;
