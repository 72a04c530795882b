use crate::{
    collab::color::ColorMapper,
    collab::encoder::ImageEncoder,
    collab::tile::SubRenderer,
    document::content::{ContentOp, ContentSink},
    document::object::{Dict, Object},
    document::resources::ResourcePool,
    foundation::core::{Affine, Rect},
    paint::model::{BlendMode, Composite},
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// Extended graphics state accumulated during one `apply_paint` call.
///
/// `None` means "not touched"; readers treat an untouched alpha as 1.0.
pub struct PendingGraphicsState {
    /// Stroking alpha (`CA`).
    pub stroke_alpha: Option<f32>,
    /// Non-stroking alpha (`ca`).
    pub fill_alpha: Option<f32>,
    /// Blend mode (`BM`).
    pub blend_mode: Option<BlendMode>,
}

impl PendingGraphicsState {
    /// `ExtGState` dictionary carrying only the touched entries.
    pub fn to_dict(&self) -> Dict {
        let mut d = Dict::typed("ExtGState");
        if let Some(a) = self.stroke_alpha {
            d.set("CA", a);
        }
        if let Some(a) = self.fill_alpha {
            d.set("ca", a);
        }
        if let Some(bm) = self.blend_mode {
            d.set("BM", Object::name(bm.pdf_name()));
        }
        d
    }
}

/// Collaborators and drawing context for one paint application.
pub struct PaintEnv<'a> {
    /// Pattern registry of the output document.
    pub resources: &'a mut dyn ResourcePool,
    /// Canvas to document color mapping.
    pub color_mapper: &'a dyn ColorMapper,
    /// Embeds raster images.
    pub image_encoder: &'a mut dyn ImageEncoder,
    /// Renders vector tile content.
    pub sub_renderer: &'a mut dyn SubRenderer,
    /// Bounds of the shape being painted, in canvas space.
    pub shape_bounds: Option<Rect>,
    /// Composite active for the painted shape.
    pub composite: Option<&'a Composite>,
}

impl<'a> PaintEnv<'a> {
    /// Environment without shape bounds or composite.
    pub fn new(
        resources: &'a mut dyn ResourcePool,
        color_mapper: &'a dyn ColorMapper,
        image_encoder: &'a mut dyn ImageEncoder,
        sub_renderer: &'a mut dyn SubRenderer,
    ) -> Self {
        Self {
            resources,
            color_mapper,
            image_encoder,
            sub_renderer,
            shape_bounds: None,
            composite: None,
        }
    }

    /// Set the active composite.
    pub fn with_composite(mut self, composite: Option<&'a Composite>) -> Self {
        self.composite = composite;
        self
    }

    /// Set the bounds of the shape being painted.
    pub fn with_shape_bounds(mut self, bounds: Option<Rect>) -> Self {
        self.shape_bounds = bounds;
        self
    }
}

/// Mutable translation state owned by a single `apply_paint` call.
pub(crate) struct ApplyState<'s, 'a> {
    pub(crate) sink: &'s mut dyn ContentSink,
    pub(crate) env: &'s mut PaintEnv<'a>,
    /// Canvas-to-document transform; builders concatenate paint-local transforms onto it.
    pub(crate) transform: Affine,
    pending: Option<PendingGraphicsState>,
}

impl<'s, 'a> ApplyState<'s, 'a> {
    pub(crate) fn new(
        sink: &'s mut dyn ContentSink,
        env: &'s mut PaintEnv<'a>,
        transform: Affine,
    ) -> Self {
        Self {
            sink,
            env,
            transform,
            pending: None,
        }
    }

    pub(crate) fn push(&mut self, op: ContentOp) {
        self.sink.push_op(op);
    }

    #[cfg(test)]
    pub(crate) fn pending(&self) -> Option<&PendingGraphicsState> {
        self.pending.as_ref()
    }

    /// Pending graphics state, created on first use.
    pub(crate) fn pending_mut(&mut self) -> &mut PendingGraphicsState {
        self.pending.get_or_insert_with(PendingGraphicsState::default)
    }

    pub(crate) fn take_pending(&mut self) -> Option<PendingGraphicsState> {
        self.pending.take()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/apply/state.rs"]
mod tests;
