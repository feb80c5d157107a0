//! Application window and event loop management.

use std::sync::Arc;
use std::time::Instant;

use camsim_core::{CameraModel, ViewerOptions};
use camsim_render::{FieldScene, FrameTicker, LineRenderer, ViewportController};
use pollster::FutureExt;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::error::{AppError, Result};

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyAction {
    DumpParameters,
    Quit,
}

impl KeyAction {
    pub(crate) fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyP => Some(Self::DumpParameters),
            KeyCode::KeyQ | KeyCode::Escape => Some(Self::Quit),
            _ => None,
        }
    }
}

/// The simulator application state.
pub struct App {
    options: ViewerOptions,
    scene: FieldScene,
    controller: ViewportController,
    ticker: FrameTicker,
    window: Option<Arc<Window>>,
    renderer: Option<LineRenderer>,
    error: Option<AppError>,
}

impl App {
    /// Creates the application for an already validated camera.
    pub fn new(camera: CameraModel, options: ViewerOptions) -> Self {
        let scene = FieldScene::from_mount(camera.mount());
        Self {
            ticker: FrameTicker::from_millis(options.frame_interval_ms),
            options,
            scene,
            controller: ViewportController::new(camera),
            window: None,
            renderer: None,
            error: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title(self.options.title.clone())
            .with_inner_size(LogicalSize::new(
                self.options.window_width,
                self.options.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes)?);
        let renderer = LineRenderer::new(
            window.clone(),
            &self.scene,
            self.options.background_color,
        )
        .block_on()?;

        let size = window.inner_size();
        self.controller.on_resize(size.width, size.height);

        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{error}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        match KeyAction::from_key(code) {
            Some(KeyAction::DumpParameters) => self.controller.dump_parameters(),
            Some(KeyAction::Quit) => event_loop.exit(),
            None => {}
        }
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        if let Err(e) = self.controller.on_frame(renderer) {
            self.fail(event_loop, e.into());
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.controller.on_resize(size.width, size.height);
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event_loop, &event),
            WindowEvent::RedrawRequested => self.render(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.ticker.poll(Instant::now()) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        if let Some(deadline) = self.ticker.next_deadline() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
    }
}

/// Opens the simulator window and blocks until it is closed.
pub fn run_app(camera: CameraModel, options: ViewerOptions) -> Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(camera, options);

    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(KeyAction::from_key(KeyCode::KeyP), Some(KeyAction::DumpParameters));
        assert_eq!(KeyAction::from_key(KeyCode::KeyQ), Some(KeyAction::Quit));
        assert_eq!(KeyAction::from_key(KeyCode::Escape), Some(KeyAction::Quit));
        assert_eq!(KeyAction::from_key(KeyCode::KeyW), None);
    }
}
