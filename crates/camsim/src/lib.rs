//! camsim: preview what a fixed field-side camera will see.
//!
//! Engineers pick a lens and a mounting position, and camsim renders the
//! field wireframe through that camera in real time, letterboxed to the
//! camera's aspect ratio.
//!
//! # Quick Start
//!
//! ```no_run
//! use camsim::*;
//!
//! fn main() -> Result<()> {
//!     let mount = MountConfig {
//!         camera_type: "gopro9_linear_4_3".to_string(),
//!         camera_pitch_deg: 5.0,
//!         ..MountConfig::default()
//!     };
//!     run(mount, ViewerOptions::default())
//! }
//! ```
//!
//! # Keys
//!
//! - `P` logs the current intrinsics and extrinsics
//! - `Q` or `Escape` quits

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod app;
pub mod cli;
pub mod error;

// Re-export core types
pub use camsim_core::{
    find_preset, preset_names, CameraDiagnostics, CameraModel, CamsimError, FrameViewport,
    Frustum, LensPreset, MountConfig, ViewTransform, ViewerOptions, LENS_PRESETS,
};

// Re-export render types
pub use camsim_render::{FieldScene, FrameTicker, SceneRenderer, ViewportController};

pub use cli::Args;
pub use error::{AppError, Result};

/// Builds the camera model and shows the simulator window.
///
/// Fails before any window is opened if the camera type is unknown. Blocks
/// until the window is closed.
pub fn run(mount: MountConfig, options: ViewerOptions) -> Result<()> {
    let camera = CameraModel::new(mount)?;
    log::info!("Using camera model: {}", camera.lens().name);
    app::run_app(camera, options)
}

/// Formats the lens table for `--list_presets`.
pub fn preset_table() -> String {
    use std::fmt::Write;

    let mut table = String::new();
    let _ = writeln!(
        table,
        "{:<24} {:>6} {:>6} {:>8}",
        "camera_type", "hfov", "vfov", "aspect"
    );
    for preset in &LENS_PRESETS {
        let _ = writeln!(
            table,
            "{:<24} {:>6} {:>6} {:>8}",
            preset.name, preset.horizontal_fov_deg, preset.vertical_fov_deg, preset.sensor_aspect
        );
    }
    table
}
