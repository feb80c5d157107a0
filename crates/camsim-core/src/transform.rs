//! Rigid world-to-eye transform of the mounted camera.

use glam::{DMat3, DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// Fixed downward tilt of the camera mount, in degrees.
pub const MOUNT_TILT_DEG: f64 = 45.0;

/// Rotation that turns the camera from looking down +Z to looking east, in degrees.
pub const MOUNT_HEADING_DEG: f64 = 90.0;

/// A rigid transform taking world coordinates to eye space.
///
/// Eye space is right-handed with the camera looking down -Z and +Y up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    matrix: DMat4,
}

impl ViewTransform {
    /// Builds the view transform of a camera at `eye` on the standard mount.
    ///
    /// Composed as `Rx(-pitch) * Ry(-yaw) * Rx(-tilt) * Rz(heading) * T(-eye)`,
    /// so a point is translated first and pitched last. Yaw and pitch are
    /// taken about the axes of the tilted mount, like the physical pan/tilt
    /// head.
    #[must_use]
    pub fn mounted(eye: DVec3, yaw_deg: f64, pitch_deg: f64) -> Self {
        let matrix = DMat4::from_rotation_x((-pitch_deg).to_radians())
            * DMat4::from_rotation_y((-yaw_deg).to_radians())
            * DMat4::from_rotation_x((-MOUNT_TILT_DEG).to_radians())
            * DMat4::from_rotation_z(MOUNT_HEADING_DEG.to_radians())
            * DMat4::from_translation(-eye);
        Self { matrix }
    }

    /// Returns the 4x4 matrix.
    #[must_use]
    pub fn matrix(&self) -> DMat4 {
        self.matrix
    }

    /// Returns the rotational part.
    #[must_use]
    pub fn rotation(&self) -> DMat3 {
        DMat3::from_mat4(self.matrix)
    }

    /// Returns the translational part.
    #[must_use]
    pub fn translation(&self) -> DVec3 {
        self.matrix.w_axis.truncate()
    }

    /// Maps a world-space point into eye space.
    #[must_use]
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.matrix.transform_point3(point)
    }

    /// Returns the eye-to-world transform.
    #[must_use]
    pub fn inverse(&self) -> DMat4 {
        let rotation_t = self.rotation().transpose();
        let translation = -(rotation_t * self.translation());
        DMat4::from_cols(
            rotation_t.x_axis.extend(0.0),
            rotation_t.y_axis.extend(0.0),
            rotation_t.z_axis.extend(0.0),
            translation.extend(1.0),
        )
    }

    /// Camera position in world space.
    #[must_use]
    pub fn eye(&self) -> DVec3 {
        self.inverse().w_axis.truncate()
    }

    /// Optical axis direction in world space.
    #[must_use]
    pub fn look_dir(&self) -> DVec3 {
        self.rotation().transpose() * DVec3::NEG_Z
    }

    /// Image-up direction in world space.
    #[must_use]
    pub fn up_dir(&self) -> DVec3 {
        self.rotation().transpose() * DVec3::Y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_eye_maps_to_origin() {
        let eye = DVec3::new(-30.5, 0.0, 5.0);
        let view = ViewTransform::mounted(eye, 17.0, -8.0);
        assert!(view.transform_point(eye).length() < EPS);
        assert!((view.eye() - eye).length() < EPS);
    }

    #[test]
    fn test_level_mount_looks_east_and_down() {
        let view = ViewTransform::mounted(DVec3::ZERO, 0.0, 0.0);
        let look = view.look_dir();
        assert!((look - DVec3::new(FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2)).length() < EPS);

        let up = view.up_dir();
        assert!((up - DVec3::new(FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2)).length() < EPS);
    }

    #[test]
    fn test_positive_pitch_tilts_up() {
        let level = ViewTransform::mounted(DVec3::ZERO, 0.0, 0.0);
        let pitched = ViewTransform::mounted(DVec3::ZERO, 0.0, 10.0);
        assert!(pitched.look_dir().z > level.look_dir().z);
        // 45 degree mount tilt minus 10 degrees of pitch
        let expected = -(35.0_f64.to_radians().sin());
        assert!((pitched.look_dir().z - expected).abs() < EPS);
    }

    #[test]
    fn test_positive_yaw_turns_left() {
        let view = ViewTransform::mounted(DVec3::ZERO, 30.0, 0.0);
        // Looking east, counter-clockwise pan swings the view north (+Y)
        assert!(view.look_dir().y > 0.0);
    }

    #[test]
    fn test_inverse_round_trip() {
        let view = ViewTransform::mounted(DVec3::new(1.0, -2.0, 3.0), 40.0, 25.0);
        let product = view.inverse() * view.matrix();
        assert!(product.abs_diff_eq(DMat4::IDENTITY, EPS));
    }
}
