//! Rendering side of camsim.
//!
//! This crate consumes the values derived by [`camsim_core::CameraModel`]:
//! - [`ViewportController`] feeding frustum, viewport and view transform to a
//!   [`SceneRenderer`] every frame
//! - [`FieldScene`] wireframe of the field markings and goals
//! - [`FrameTicker`] fixed-interval redraw scheduling
//! - [`LineRenderer`] wgpu implementation of [`SceneRenderer`]

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
// Pixel and segment counts are small enough for f32/f64
#![allow(clippy::cast_precision_loss)]

pub mod controller;
pub mod error;
pub mod line_renderer;
pub mod scene;
pub mod ticker;

pub use controller::{SceneRenderer, ViewportController};
pub use error::{RenderError, RenderResult};
pub use line_renderer::{CameraUniforms, LineRenderer};
pub use scene::{FieldScene, LineVertex, Segment};
pub use ticker::FrameTicker;
