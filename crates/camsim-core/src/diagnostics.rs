//! Parameter dumps for calibration sessions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Current camera intrinsics and extrinsics, as reported by the debug key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraDiagnostics {
    /// Lens preset key.
    pub camera_type: String,
    /// Eye position in world coordinates.
    pub center_x: f64,
    pub center_y: f64,
    pub center_z: f64,
    /// Mount pan in degrees.
    pub yaw_deg: f64,
    /// Mount tilt in degrees.
    pub pitch_deg: f64,
    /// Horizontal field of view in radians.
    pub hfov: f64,
    /// Vertical field of view in radians.
    pub vfov: f64,
    /// Effective image aspect (height / width).
    pub aspect: f64,
}

impl CameraDiagnostics {
    /// Serializes the snapshot as a single-line JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for CameraDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Camera extrinsics: {} {} {} {} {}",
            self.center_x, self.center_y, self.center_z, self.yaw_deg, self.pitch_deg
        )?;
        write!(
            f,
            "Camera intrinsics: {} {} {}",
            self.hfov, self.vfov, self.aspect
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CameraDiagnostics {
        CameraDiagnostics {
            camera_type: "gopro9_wide_4_3".to_string(),
            center_x: -30.5,
            center_y: 0.0,
            center_z: 5.0,
            yaw_deg: 0.0,
            pitch_deg: 10.0,
            hfov: 2.0,
            vfov: 1.5,
            aspect: 0.5,
        }
    }

    #[test]
    fn test_display_has_both_lines() {
        let text = sample().to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Camera extrinsics: -30.5 0 5 0 10");
        assert_eq!(lines[1], "Camera intrinsics: 2 1.5 0.5");
    }

    #[test]
    fn test_json_fields() {
        let value: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(value["camera_type"], "gopro9_wide_4_3");
        assert_eq!(value["center_x"], -30.5);
        assert_eq!(value["pitch_deg"], 10.0);
    }
}
