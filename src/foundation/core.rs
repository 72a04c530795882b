pub use kurbo::{Affine, Point, Rect};

/// Straight (non-premultiplied) RGBA8 color as drawn on the source canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha; 255 is opaque.
    #[serde(default = "opaque_alpha")]
    pub a: u8,
}

fn opaque_alpha() -> u8 {
    255
}

impl Rgba8 {
    /// Opaque black.
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    /// Color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// `true` when alpha is 255.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Alpha as a fraction in `[0, 1]`.
    pub fn alpha_f32(self) -> f32 {
        f32::from(self.a) / 255.0
    }
}

/// Vertical mirror between the canvas' top-down and the document's bottom-up axis.
#[inline]
pub fn flip_y() -> Affine {
    Affine::scale_non_uniform(1.0, -1.0)
}

/// `outer * inner`: apply `inner` first, then `outer`.
#[inline]
pub fn compose(outer: Affine, inner: Affine) -> Affine {
    outer * inner
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
