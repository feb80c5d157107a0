//! Startup configuration for camsim.

use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::lens::DEFAULT_PRESET;

/// Field dimensions and camera mounting geometry.
///
/// Lengths are in meters, angles in degrees. The world frame is centered on
/// the field with +X pointing east, +Y north and +Z up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountConfig {
    /// Field extent along X.
    pub field_length: f64,

    /// Field extent along Y.
    pub field_width: f64,

    /// Goal opening width.
    pub goal_width: f64,

    /// Goal opening height.
    pub goal_height: f64,

    /// Distance from the camera's ground projection to the west goal line.
    pub camera_dist_to_field: f64,

    /// Camera height above the ground.
    pub camera_height: f64,

    /// Lens preset key.
    pub camera_type: String,

    /// Pan relative to the mount surface, CCW positive.
    pub camera_yaw_deg: f64,

    /// Tilt relative to the mount surface, up positive.
    pub camera_pitch_deg: f64,
}

impl MountConfig {
    /// Camera eye position in world coordinates, behind the west goal line.
    #[must_use]
    pub fn eye_position(&self) -> DVec3 {
        DVec3::new(
            -self.field_length / 2.0 - self.camera_dist_to_field,
            0.0,
            self.camera_height,
        )
    }
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            field_length: 56.0,
            field_width: 45.0,
            goal_width: 5.0,
            goal_height: 2.0,
            camera_dist_to_field: 2.5,
            camera_height: 5.0,
            camera_type: DEFAULT_PRESET.to_string(),
            camera_yaw_deg: 0.0,
            camera_pitch_deg: 10.0,
        }
    }
}

/// Options for the interactive viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    /// Window title.
    pub title: String,

    /// Initial window width in logical pixels.
    pub window_width: u32,

    /// Initial window height in logical pixels.
    pub window_height: u32,

    /// Interval between redraws in milliseconds.
    pub frame_interval_ms: u64,

    /// Clear color outside and behind the field lines.
    pub background_color: Vec3,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            title: "Camera Simulator".to_string(),
            window_width: 1600,
            window_height: 900,
            frame_interval_ms: 50,
            background_color: Vec3::new(0.1, 0.1, 0.1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_defaults() {
        let mount = MountConfig::default();
        assert_eq!(mount.field_length, 56.0);
        assert_eq!(mount.field_width, 45.0);
        assert_eq!(mount.goal_width, 5.0);
        assert_eq!(mount.goal_height, 2.0);
        assert_eq!(mount.camera_dist_to_field, 2.5);
        assert_eq!(mount.camera_height, 5.0);
        assert_eq!(mount.camera_type, "gopro9_wide_4_3");
        assert_eq!(mount.camera_yaw_deg, 0.0);
        assert_eq!(mount.camera_pitch_deg, 10.0);
    }

    #[test]
    fn test_eye_position_behind_west_goal() {
        let mount = MountConfig::default();
        assert_eq!(mount.eye_position(), DVec3::new(-30.5, 0.0, 5.0));
    }

    #[test]
    fn test_mount_partial_json_uses_defaults() {
        let mount: MountConfig =
            serde_json::from_str(r#"{ "camera_height": 8.0, "camera_type": "gopro9_linear_4_3" }"#)
                .unwrap();
        assert_eq!(mount.camera_height, 8.0);
        assert_eq!(mount.camera_type, "gopro9_linear_4_3");
        assert_eq!(mount.field_length, 56.0);
    }

    #[test]
    fn test_viewer_defaults() {
        let options = ViewerOptions::default();
        assert_eq!((options.window_width, options.window_height), (1600, 900));
        assert_eq!(options.frame_interval_ms, 50);
        assert_eq!(options.title, "Camera Simulator");
    }
}
