// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-facing diagram surface.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Size, Vec2};
use vecdiagram_canvas::Canvas;
use vecdiagram_gesture::{GestureController, GestureOutcome, PinchUpdate, PointerEvent, RedrawHost};
use vecdiagram_view2d::{OriginClamp, ViewTransform};

use crate::config::SurfaceConfig;
use crate::render::{DiagramRenderer, VectorFrame};
use crate::store::{InvalidVectorError, VectorList, VectorStore, VectorStyle};

/// One interactive diagram: vectors, camera, gestures, and renderer.
///
/// The surface owns all of its state. Input and rendering are expected to
/// happen on the same thread, one call at a time.
#[derive(Clone, Debug)]
pub struct DiagramSurface {
    config: SurfaceConfig,
    store: VectorStore,
    view: ViewTransform,
    gestures: GestureController,
    renderer: DiagramRenderer,
    laid_out: bool,
}

impl Default for DiagramSurface {
    fn default() -> Self {
        Self::new(SurfaceConfig::default())
    }
}

impl DiagramSurface {
    /// Creates a surface with no vectors and an unknown viewport size.
    #[must_use]
    pub fn new(config: SurfaceConfig) -> Self {
        let mut view = ViewTransform::new(Size::ZERO);
        view.set_scale_bounds(config.min_scale, config.max_scale);
        view.set_scale(config.initial_scale);
        view.set_origin_clamp(config.origin_clamp);
        Self {
            config,
            store: VectorStore::new(),
            view,
            gestures: GestureController::new(config.gesture),
            renderer: DiagramRenderer::new(config.render),
            laid_out: false,
        }
    }

    /// The configuration the surface was built from.
    #[must_use]
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// The camera.
    #[must_use]
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// The vector store.
    #[must_use]
    pub fn store(&self) -> &VectorStore {
        &self.store
    }

    /// The gesture controller.
    #[must_use]
    pub fn gestures(&self) -> &GestureController {
        &self.gestures
    }

    /// Snapshot of every vector, sorted by label.
    #[must_use]
    pub fn vectors(&self) -> VectorList {
        self.store.list()
    }

    /// Replaces both scale bounds, re-clamping the current scale.
    pub fn set_scale_bounds(&mut self, min: f64, max: f64) {
        self.view.set_scale_bounds(min, max);
        self.sync_bounds();
    }

    /// Replaces the lower scale bound.
    pub fn set_min_scale(&mut self, min: f64) {
        self.view.set_min_scale(min);
        self.sync_bounds();
    }

    /// Replaces the upper scale bound.
    pub fn set_max_scale(&mut self, max: f64) {
        self.view.set_max_scale(max);
        self.sync_bounds();
    }

    /// Changes the origin clamping policy.
    pub fn set_origin_clamp(&mut self, clamp: OriginClamp) {
        self.view.set_origin_clamp(clamp);
        self.config.origin_clamp = clamp;
    }

    /// Adds or replaces a vector. `angle_degrees` is interpreted through the
    /// configured [`AngleConvention`](crate::AngleConvention).
    pub fn add_vector(
        &mut self,
        label: impl Into<String>,
        angle_degrees: f64,
        length: i32,
        style: VectorStyle,
    ) -> Result<(), InvalidVectorError> {
        let radians = self
            .config
            .render
            .angle_convention
            .to_screen_radians(angle_degrees);
        self.store.upsert(label, radians, length, style)
    }

    /// Removes a vector. Returns `false` if no vector had that label.
    pub fn remove_vector(&mut self, label: &str) -> bool {
        self.store.remove(label)
    }

    /// Informs the surface of its viewport size.
    ///
    /// The first known size centers the diagram origin in the viewport.
    /// Later calls keep the camera where the user left it.
    pub fn on_layout(&mut self, size: Size) {
        self.view.set_viewport(size);
        if !self.laid_out && size.width > 0.0 && size.height > 0.0 {
            let center = Vec2::new(size.width / 2.0, size.height / 2.0);
            self.view.set_origin(center / self.view.scale());
            self.laid_out = true;
            tracing::debug!(?size, "surface laid out");
        }
    }

    /// Feeds one raw pointer event to the gesture controller.
    pub fn handle_pointer<H: RedrawHost + ?Sized>(
        &mut self,
        event: PointerEvent,
        host: &mut H,
    ) -> GestureOutcome {
        self.gestures.handle_pointer(event, &mut self.view, host)
    }

    /// Feeds one step from a platform pinch recognizer.
    pub fn handle_pinch<H: RedrawHost + ?Sized>(
        &mut self,
        update: PinchUpdate,
        host: &mut H,
    ) -> GestureOutcome {
        self.gestures.handle_pinch(update, &mut self.view, host)
    }

    /// Draws the current state onto `canvas`.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.renderer.render(&self.view, &self.store, canvas);
    }

    /// Per-vector geometry for the current state.
    #[must_use]
    pub fn frame_geometry(&self) -> Vec<VectorFrame> {
        self.renderer.frame_geometry(&self.store)
    }

    /// Diagram coordinates under a screen point.
    #[must_use]
    pub fn logical_point_at(&self, screen: Point) -> Point {
        self.view.to_logical(screen)
    }

    fn sync_bounds(&mut self) {
        self.config.min_scale = self.view.min_scale();
        self.config.max_scale = self.view.max_scale();
        tracing::debug!(
            min = self.config.min_scale,
            max = self.config.max_scale,
            scale = self.view.scale(),
            "scale bounds changed"
        );
    }
}
