use crate::{
    document::content::{ColorSpace, DocColor},
    foundation::core::Rgba8,
};

/// Maps canvas colors to document colors.
///
/// Implementations must be deterministic and side-effect free: emitted objects are deduplicated
/// by value, so the same input has to map to the same output.
pub trait ColorMapper {
    /// Document color for `color`. Alpha is not part of the result.
    fn map_color(&self, color: Rgba8) -> DocColor;
}

#[derive(Clone, Copy, Debug, Default)]
/// Maps to DeviceRGB; alpha is ignored (it is carried by the graphics state).
pub struct DeviceRgbColorMapper;

impl ColorMapper for DeviceRgbColorMapper {
    fn map_color(&self, color: Rgba8) -> DocColor {
        DocColor::device(
            ColorSpace::DeviceRgb,
            vec![unit(color.r), unit(color.g), unit(color.b)],
        )
    }
}

#[derive(Clone, Copy, Debug, Default)]
/// Maps to DeviceCMYK with plain black extraction (no ICC profile).
pub struct DeviceCmykColorMapper;

impl ColorMapper for DeviceCmykColorMapper {
    fn map_color(&self, color: Rgba8) -> DocColor {
        let (r, g, b) = (unit(color.r), unit(color.g), unit(color.b));
        let k = 1.0 - r.max(g).max(b);
        if k >= 1.0 {
            return DocColor::device(ColorSpace::DeviceCmyk, vec![0.0, 0.0, 0.0, 1.0]);
        }
        let inv = 1.0 - k;
        DocColor::device(
            ColorSpace::DeviceCmyk,
            vec![(inv - r) / inv, (inv - g) / inv, (inv - b) / inv, k],
        )
    }
}

fn unit(c: u8) -> f32 {
    f32::from(c) / 255.0
}

#[cfg(test)]
#[path = "../../tests/unit/collab/color.rs"]
mod tests;
