//! Command line options.

use camsim_core::{MountConfig, ViewerOptions, DEFAULT_PRESET};
use clap::Parser;

/// Simulates what a fixed camera mounted behind the west goal sees.
#[derive(Debug, Clone, Parser)]
#[command(name = "camsim", version, about)]
pub struct Args {
    /// Length of the soccer field.
    #[arg(long = "field_length", default_value_t = 56.0)]
    pub field_length: f64,

    /// Width of the soccer field.
    #[arg(long = "field_width", default_value_t = 45.0)]
    pub field_width: f64,

    /// Width of the goal.
    #[arg(long = "goal_width", default_value_t = 5.0)]
    pub goal_width: f64,

    /// Height of the goal.
    #[arg(long = "goal_height", default_value_t = 2.0)]
    pub goal_height: f64,

    /// Distance from the camera's ground projection to the closest point in the field.
    #[arg(long = "camera_dist_to_field", default_value_t = 2.5)]
    pub camera_dist_to_field: f64,

    /// Camera height from ground.
    #[arg(long = "camera_height", default_value_t = 5.0)]
    pub camera_height: f64,

    /// Camera config type, from which FoV info is inferred. See --list_presets.
    #[arg(long = "camera_type", default_value = DEFAULT_PRESET)]
    pub camera_type: String,

    /// Camera yaw angle (relative to the mount surface) in degrees. CCW for positive.
    #[arg(long = "camera_yaw", default_value_t = 0.0, allow_negative_numbers = true)]
    pub camera_yaw: f64,

    /// Camera pitch angle (relative to the mount surface) in degrees. Up for positive.
    #[arg(long = "camera_pitch", default_value_t = 10.0, allow_negative_numbers = true)]
    pub camera_pitch: f64,

    /// Print the supported camera types and exit.
    #[arg(long = "list_presets")]
    pub list_presets: bool,

    /// Redraw interval in milliseconds.
    #[arg(long = "frame_interval_ms", default_value_t = 50)]
    pub frame_interval_ms: u64,

    /// Initial window width.
    #[arg(long = "window_width", default_value_t = 1600)]
    pub window_width: u32,

    /// Initial window height.
    #[arg(long = "window_height", default_value_t = 900)]
    pub window_height: u32,
}

impl Args {
    /// Field and camera geometry.
    #[must_use]
    pub fn mount_config(&self) -> MountConfig {
        MountConfig {
            field_length: self.field_length,
            field_width: self.field_width,
            goal_width: self.goal_width,
            goal_height: self.goal_height,
            camera_dist_to_field: self.camera_dist_to_field,
            camera_height: self.camera_height,
            camera_type: self.camera_type.clone(),
            camera_yaw_deg: self.camera_yaw,
            camera_pitch_deg: self.camera_pitch,
        }
    }

    /// Window and scheduling options.
    #[must_use]
    pub fn viewer_options(&self) -> ViewerOptions {
        ViewerOptions {
            window_width: self.window_width,
            window_height: self.window_height,
            frame_interval_ms: self.frame_interval_ms,
            ..ViewerOptions::default()
        }
    }
}
