//! Core camera model for camsim.
//!
//! This crate turns a lens specification and a mounting geometry into the
//! values a renderer needs to reproduce what the physical camera sees:
//! - [`LensPreset`] table of supported lenses
//! - [`MountConfig`] field dimensions and camera placement
//! - [`CameraModel`] deriving the [`Frustum`], the letterboxed
//!   [`FrameViewport`] and the extrinsic [`ViewTransform`]
//!
//! Nothing here depends on a window or a GPU.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Viewport sizes are truncated to whole pixels on purpose
#![allow(clippy::cast_possible_truncation)]

pub mod camera_model;
pub mod diagnostics;
pub mod error;
pub mod frustum;
pub mod lens;
pub mod options;
pub mod transform;
pub mod viewport;

pub use camera_model::{CameraModel, FAR_CLIP, NEAR_CLIP};
pub use diagnostics::CameraDiagnostics;
pub use error::{CamsimError, Result};
pub use frustum::Frustum;
pub use lens::{find_preset, preset_names, LensPreset, DEFAULT_PRESET, LENS_PRESETS};
pub use options::{MountConfig, ViewerOptions};
pub use transform::ViewTransform;
pub use viewport::FrameViewport;

// Re-export glam types for convenience
pub use glam::{DMat3, DMat4, DVec3, Vec3};
