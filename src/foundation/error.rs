/// Convenience result type used across pdfpaint.
pub type PaintResult<T> = Result<T, PaintError>;

/// Error taxonomy for paint translation.
///
/// Unrecognized paints and composites are not errors: they are logged and translated as
/// "nothing to apply". Everything here is either a broken integration contract or malformed
/// input that must not be silently misrendered.
#[derive(thiserror::Error, Debug)]
pub enum PaintError {
    /// A paint was matched by name but does not expose a required accessor.
    #[error("missing capability: {0}")]
    MissingCapability(String),

    /// Paint data violates its invariants (stop lists, geometry, bitmap size).
    #[error("malformed paint: {0}")]
    Malformed(String),

    /// The tile sub-renderer could not produce tile content.
    #[error("delegated render failed: {0}")]
    DelegatedRender(String),

    /// The image encoder could not embed a bitmap.
    #[error("image encoding error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PaintError {
    /// Build a [`PaintError::MissingCapability`] value.
    pub fn missing_capability(msg: impl Into<String>) -> Self {
        Self::MissingCapability(msg.into())
    }

    /// Build a [`PaintError::Malformed`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    /// Build a [`PaintError::DelegatedRender`] value.
    pub fn delegated_render(msg: impl Into<String>) -> Self {
        Self::DelegatedRender(msg.into())
    }

    /// Build a [`PaintError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
