//! Drives the controller with a synthetic clock and a recording renderer,
//! the way the application's event loop does.

use std::time::{Duration, Instant};

use camsim_core::{CameraModel, FrameViewport, Frustum, MountConfig, ViewTransform};
use camsim_render::{FrameTicker, RenderResult, SceneRenderer, ViewportController};

#[derive(Default)]
struct RecordingRenderer {
    viewports: Vec<FrameViewport>,
}

impl SceneRenderer for RecordingRenderer {
    fn draw_frame(
        &mut self,
        frustum: &Frustum,
        viewport: &FrameViewport,
        view: &ViewTransform,
    ) -> RenderResult<()> {
        assert_eq!(frustum.left, -frustum.right);
        assert!(view.rotation().determinant() > 0.0);
        self.viewports.push(*viewport);
        Ok(())
    }
}

enum Event {
    Resize(u32, u32),
    Wait(u64),
}

#[test]
fn resizes_between_ticks_reach_the_next_frame() {
    let camera = CameraModel::new(MountConfig::default()).unwrap();
    let mut controller = ViewportController::new(camera.clone());
    let mut renderer = RecordingRenderer::default();
    let mut ticker = FrameTicker::from_millis(50);

    let start = Instant::now();
    let mut now = start;
    let script = [
        Event::Resize(1600, 900),
        Event::Wait(0),
        Event::Wait(20),
        Event::Resize(1200, 1200),
        Event::Wait(30),
        Event::Wait(50),
        Event::Resize(0, 0),
        Event::Wait(50),
    ];

    for event in script {
        match event {
            Event::Resize(w, h) => controller.on_resize(w, h),
            Event::Wait(ms) => {
                now += Duration::from_millis(ms);
                if ticker.poll(now) {
                    controller.on_frame(&mut renderer).unwrap();
                }
            }
        }
    }

    // Frames fire at t = 0, 50, 100 and 150 ms
    assert_eq!(ticker.frame_count(), 4);
    assert_eq!(
        renderer.viewports,
        vec![
            camera.compute_viewport(1600, 900),
            camera.compute_viewport(1200, 1200),
            camera.compute_viewport(1200, 1200),
            FrameViewport::EMPTY,
        ]
    );
    assert!(renderer.viewports[0].is_pillarboxed(1600));
    assert!(renderer.viewports[1].is_letterboxed(1200));
    assert_eq!(ticker.next_deadline(), Some(start + Duration::from_millis(200)));
}
