//! Bridges the camera model to a renderer once per frame and once per resize.

use camsim_core::{CameraModel, FrameViewport, Frustum, ViewTransform};

use crate::error::RenderResult;

/// Receives the projection state and draws the scene.
///
/// Called once per frame with the frustum and viewport first (projection
/// state) and the view transform last (model-view state).
pub trait SceneRenderer {
    /// Draws one frame with the given camera state.
    fn draw_frame(
        &mut self,
        frustum: &Frustum,
        viewport: &FrameViewport,
        view: &ViewTransform,
    ) -> RenderResult<()>;
}

/// Tracks the window size and feeds camera state to a [`SceneRenderer`].
#[derive(Debug, Clone)]
pub struct ViewportController {
    camera: CameraModel,
    window_size: (u32, u32),
    viewport: FrameViewport,
}

impl ViewportController {
    /// Creates a controller for a window that has not been sized yet.
    #[must_use]
    pub fn new(camera: CameraModel) -> Self {
        Self {
            camera,
            window_size: (0, 0),
            viewport: FrameViewport::EMPTY,
        }
    }

    /// Records new window dimensions in device pixels.
    pub fn on_resize(&mut self, window_w: u32, window_h: u32) {
        self.window_size = (window_w, window_h);
        self.viewport = self.camera.compute_viewport(window_w, window_h);
        log::debug!(
            "resized to {window_w}x{window_h}, viewport {}x{} at ({}, {})",
            self.viewport.width,
            self.viewport.height,
            self.viewport.origin_x,
            self.viewport.origin_y
        );
    }

    /// Draws one frame through `renderer`.
    pub fn on_frame<R: SceneRenderer + ?Sized>(&self, renderer: &mut R) -> RenderResult<()> {
        let frustum = self.camera.compute_frustum();
        let viewport = self.viewport;
        let view = self.camera.compute_view_transform();
        renderer.draw_frame(&frustum, &viewport, &view)
    }

    /// Logs the current camera parameters.
    pub fn dump_parameters(&self) {
        let diagnostics = self.camera.diagnostics();
        log::info!("{diagnostics}");
        match diagnostics.to_json() {
            Ok(json) => log::debug!("camera parameters: {json}"),
            Err(e) => log::warn!("failed to serialize camera parameters: {e}"),
        }
    }

    /// The camera model being simulated.
    #[must_use]
    pub fn camera(&self) -> &CameraModel {
        &self.camera
    }

    /// Last known window size.
    #[must_use]
    pub fn window_size(&self) -> (u32, u32) {
        self.window_size
    }

    /// Viewport for the last known window size.
    #[must_use]
    pub fn viewport(&self) -> FrameViewport {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camsim_core::MountConfig;

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<(Frustum, FrameViewport, ViewTransform)>,
    }

    impl SceneRenderer for RecordingRenderer {
        fn draw_frame(
            &mut self,
            frustum: &Frustum,
            viewport: &FrameViewport,
            view: &ViewTransform,
        ) -> RenderResult<()> {
            self.frames.push((*frustum, *viewport, *view));
            Ok(())
        }
    }

    fn controller() -> ViewportController {
        ViewportController::new(CameraModel::new(MountConfig::default()).unwrap())
    }

    #[test]
    fn test_unsized_window_draws_empty_viewport() {
        let controller = controller();
        let mut renderer = RecordingRenderer::default();
        controller.on_frame(&mut renderer).unwrap();
        assert_eq!(renderer.frames.len(), 1);
        assert!(renderer.frames[0].1.is_empty());
    }

    #[test]
    fn test_frame_uses_latest_resize() {
        let mut controller = controller();
        let mut renderer = RecordingRenderer::default();

        controller.on_resize(1600, 900);
        controller.on_frame(&mut renderer).unwrap();
        controller.on_resize(800, 1200);
        controller.on_frame(&mut renderer).unwrap();

        let camera = controller.camera();
        assert_eq!(renderer.frames[0].1, camera.compute_viewport(1600, 900));
        assert_eq!(renderer.frames[1].1, camera.compute_viewport(800, 1200));
        assert_eq!(controller.window_size(), (800, 1200));
    }

    #[test]
    fn test_frame_passes_camera_state() {
        let mut controller = controller();
        controller.on_resize(1024, 768);
        let mut renderer = RecordingRenderer::default();
        controller.on_frame(&mut renderer).unwrap();

        let (frustum, _, view) = renderer.frames[0];
        assert_eq!(frustum, controller.camera().compute_frustum());
        assert_eq!(view, controller.camera().compute_view_transform());
    }

    #[test]
    fn test_resize_to_zero_does_not_panic() {
        let mut controller = controller();
        controller.on_resize(0, 0);
        assert!(controller.viewport().is_empty());
    }

    #[test]
    fn test_dyn_renderer() {
        let controller = controller();
        let mut renderer = RecordingRenderer::default();
        let dyn_renderer: &mut dyn SceneRenderer = &mut renderer;
        controller.on_frame(dyn_renderer).unwrap();
        assert_eq!(renderer.frames.len(), 1);
    }
}
