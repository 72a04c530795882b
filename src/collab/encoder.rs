use std::sync::Arc;

use image::RgbaImage;

use crate::{
    document::content::ColorSpace,
    document::resources::ImageXObject,
    foundation::error::{PaintError, PaintResult},
};

/// Turns decoded bitmaps into embeddable image objects.
pub trait ImageEncoder {
    /// Embed `bitmap`, returning the image object to draw.
    fn encode_image(&mut self, bitmap: &RgbaImage) -> PaintResult<Arc<ImageXObject>>;
}

#[derive(Clone, Copy, Debug, Default)]
/// Uncompressed 8-bit DeviceRGB samples plus a DeviceGray soft mask for translucent bitmaps.
pub struct RawImageEncoder;

impl ImageEncoder for RawImageEncoder {
    fn encode_image(&mut self, bitmap: &RgbaImage) -> PaintResult<Arc<ImageXObject>> {
        let (width, height) = bitmap.dimensions();
        if width == 0 || height == 0 {
            return Err(PaintError::encode(format!(
                "cannot embed empty bitmap ({width}x{height})"
            )));
        }

        let px_count = (width as usize) * (height as usize);
        let mut rgb = Vec::with_capacity(px_count * 3);
        let mut alpha = Vec::with_capacity(px_count);
        for px in bitmap.pixels() {
            let [r, g, b, a] = px.0;
            rgb.extend_from_slice(&[r, g, b]);
            alpha.push(a);
        }

        let soft_mask = alpha.iter().any(|a| *a < 255).then(|| {
            Box::new(ImageXObject {
                width,
                height,
                color_space: ColorSpace::DeviceGray,
                bits_per_component: 8,
                samples: alpha,
                soft_mask: None,
            })
        });

        Ok(Arc::new(ImageXObject {
            width,
            height,
            color_space: ColorSpace::DeviceRgb,
            bits_per_component: 8,
            samples: rgb,
            soft_mask,
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/collab/encoder.rs"]
mod tests;
