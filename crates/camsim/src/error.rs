//! Application error type.

use thiserror::Error;

/// Errors that stop the simulator.
#[derive(Error, Debug)]
pub enum AppError {
    /// The camera model could not be built.
    #[error(transparent)]
    Camera(#[from] camsim_core::CamsimError),

    /// The renderer failed.
    #[error("render error: {0}")]
    Render(#[from] camsim_render::RenderError),

    /// The window could not be created.
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    /// The event loop failed.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

/// A specialized Result type for the simulator.
pub type Result<T> = std::result::Result<T, AppError>;
