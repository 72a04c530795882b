use std::sync::Arc;

use crate::{
    apply::{
        color::apply_color,
        composite::apply_composite,
        config::ApplierConfig,
        pattern::{apply_texture, apply_tiled},
        shading::{build_linear, build_radial, build_two_stop, import_shading},
        state::{ApplyState, PaintEnv},
    },
    cache::structural::ObjectCache,
    document::content::{ContentOp, ContentSink},
    document::object::Dict,
    foundation::core::Affine,
    foundation::error::PaintResult,
    paint::foreign::{
        ForeignKind, ForeignKindCache, ForeignPaint, resolve_linear, resolve_radial,
        resolve_texture, resolve_tiled,
    },
    paint::model::Paint,
};

#[derive(Debug, Default)]
/// Translates paints and composites into document operators and objects.
///
/// One applier serves one document: its caches collapse equal graphics states and shadings so
/// repeated paints share one object. It is not meant to be shared between threads.
pub struct PaintApplier {
    config: ApplierConfig,
    ext_gstate_cache: ObjectCache<Dict>,
    shading_cache: ObjectCache<Dict>,
    foreign_kinds: ForeignKindCache,
}

impl PaintApplier {
    /// Applier with `config` and empty caches.
    pub fn new(config: ApplierConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Settings this applier was built with.
    pub fn config(&self) -> &ApplierConfig {
        &self.config
    }

    /// Cache of emitted `ExtGState` dictionaries.
    pub fn ext_gstate_cache(&self) -> &ObjectCache<Dict> {
        &self.ext_gstate_cache
    }

    /// Cache of emitted shading dictionaries.
    pub fn shading_cache(&self) -> &ObjectCache<Dict> {
        &self.shading_cache
    }

    /// Apply `paint` under the composite in `env`, drawing through `transform`.
    ///
    /// The composite is applied even when `paint` is `None`. Gradient and imported shading paints
    /// return their (deduplicated) shading dictionary; every other paint sets stroke and fill
    /// color directly. Unrecognized foreign paints are logged and leave the color untouched.
    #[tracing::instrument(skip_all)]
    pub fn apply_paint(
        &mut self,
        paint: Option<&Paint>,
        sink: &mut dyn ContentSink,
        transform: Affine,
        env: &mut PaintEnv<'_>,
    ) -> PaintResult<Option<Arc<Dict>>> {
        let mut state = ApplyState::new(sink, env, transform);
        apply_composite(&mut state)?;

        let shading = match paint {
            Some(paint) => self.dispatch(paint, &mut state)?,
            None => None,
        };

        if let Some(pending) = state.take_pending() {
            let gs = self.ext_gstate_cache.make_unique(Arc::new(pending.to_dict()));
            state.push(ContentOp::SetGraphicsState(gs));
        }
        Ok(shading)
    }

    fn dispatch(
        &mut self,
        paint: &Paint,
        state: &mut ApplyState<'_, '_>,
    ) -> PaintResult<Option<Arc<Dict>>> {
        let shading = match paint {
            Paint::Solid(color) => {
                apply_color(state, *color);
                None
            }
            Paint::Linear(g) => Some(build_linear(state, g, &self.config)?),
            Paint::Radial(g) => Some(build_radial(state, g, &self.config)?),
            Paint::TwoStop(g) => Some(build_two_stop(state, g)?),
            Paint::Texture(t) => {
                apply_texture(state, t)?;
                None
            }
            Paint::Tiled(t) => {
                apply_tiled(state, t)?;
                None
            }
            Paint::Shading(s) => Some(import_shading(state, s)),
            Paint::Foreign(foreign) => self.dispatch_foreign(foreign.as_ref(), state)?,
        };
        Ok(shading.map(|d| self.shading_cache.make_unique(Arc::new(d))))
    }

    fn dispatch_foreign(
        &mut self,
        paint: &dyn ForeignPaint,
        state: &mut ApplyState<'_, '_>,
    ) -> PaintResult<Option<Dict>> {
        match self.foreign_kinds.classify(paint) {
            ForeignKind::Linear => {
                let g = resolve_linear(paint, &self.config.compat_origins)?;
                build_linear(state, &g, &self.config).map(Some)
            }
            ForeignKind::Radial => {
                let g = resolve_radial(paint)?;
                build_radial(state, &g, &self.config).map(Some)
            }
            ForeignKind::Tiled => {
                apply_tiled(state, &resolve_tiled(paint)?)?;
                Ok(None)
            }
            ForeignKind::Texture => {
                apply_texture(state, &resolve_texture(paint)?)?;
                Ok(None)
            }
            ForeignKind::Unknown => {
                tracing::warn!(type_name = paint.type_name(), "unknown paint; ignored");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/apply/dispatch.rs"]
mod tests;
