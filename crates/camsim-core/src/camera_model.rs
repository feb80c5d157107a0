//! Camera model: lens intrinsics and mount extrinsics.

use glam::{DVec2, DVec3};

use crate::diagnostics::CameraDiagnostics;
use crate::error::Result;
use crate::frustum::Frustum;
use crate::lens::{find_preset, LensPreset};
use crate::options::MountConfig;
use crate::transform::ViewTransform;
use crate::viewport::FrameViewport;

/// Near clip distance in meters.
pub const NEAR_CLIP: f64 = 1.0;

/// Far clip distance in meters.
pub const FAR_CLIP: f64 = 1000.0;

/// A fixed, calibrated camera on its mount.
///
/// Everything is derived once in [`CameraModel::new`]; the model is immutable
/// afterwards and all queries are pure.
#[derive(Debug, Clone)]
pub struct CameraModel {
    mount: MountConfig,
    lens: &'static LensPreset,
    eye: DVec3,
    near: f64,
    far: f64,
    near_plane: DVec2,
    far_plane: DVec2,
    effective_aspect: f64,
}

impl CameraModel {
    /// Creates a camera model, resolving the lens from `mount.camera_type`.
    ///
    /// Fails with [`CamsimError::UnknownPreset`](crate::CamsimError::UnknownPreset)
    /// if the camera type is not in the preset table.
    pub fn new(mount: MountConfig) -> Result<Self> {
        let lens = find_preset(&mount.camera_type)?;

        let half_h = (lens.horizontal_fov() / 2.0).tan();
        let half_v = (lens.vertical_fov() / 2.0).tan();
        let near_plane = DVec2::new(NEAR_CLIP * half_h * 2.0, NEAR_CLIP * half_v * 2.0);
        let far_plane = DVec2::new(FAR_CLIP * half_h * 2.0, FAR_CLIP * half_v * 2.0);

        // Lens distortion is not modeled, so this disagrees slightly with
        // the stored sensor aspect. The projection must use this one.
        let effective_aspect = near_plane.y / near_plane.x;

        log::debug!(
            "camera '{}': near plane {:.4} x {:.4}, effective aspect {:.6} (sensor {})",
            lens.name,
            near_plane.x,
            near_plane.y,
            effective_aspect,
            lens.sensor_aspect
        );

        Ok(Self {
            eye: mount.eye_position(),
            mount,
            lens,
            near: NEAR_CLIP,
            far: FAR_CLIP,
            near_plane,
            far_plane,
            effective_aspect,
        })
    }

    /// Returns the frustum bounds, symmetric about the optical axis.
    #[must_use]
    pub fn compute_frustum(&self) -> Frustum {
        Frustum::symmetric(self.near_plane.x, self.near_plane.y, self.near, self.far)
    }

    /// Returns the centered viewport for a window of the given device size.
    #[must_use]
    pub fn compute_viewport(&self, window_w: u32, window_h: u32) -> FrameViewport {
        FrameViewport::fit(window_w, window_h, self.effective_aspect)
    }

    /// Returns the world-to-eye transform of the mounted camera.
    #[must_use]
    pub fn compute_view_transform(&self) -> ViewTransform {
        ViewTransform::mounted(
            self.eye,
            self.mount.camera_yaw_deg,
            self.mount.camera_pitch_deg,
        )
    }

    /// Returns the mount configuration the model was built from.
    #[must_use]
    pub fn mount(&self) -> &MountConfig {
        &self.mount
    }

    /// Returns the resolved lens.
    #[must_use]
    pub fn lens(&self) -> &'static LensPreset {
        self.lens
    }

    /// Camera eye position in world coordinates.
    #[must_use]
    pub fn eye_position(&self) -> DVec3 {
        self.eye
    }

    /// Image aspect (height / width) derived from the near plane.
    #[must_use]
    pub fn effective_aspect(&self) -> f64 {
        self.effective_aspect
    }

    /// Near plane width and height.
    #[must_use]
    pub fn near_plane_size(&self) -> DVec2 {
        self.near_plane
    }

    /// Far plane width and height.
    #[must_use]
    pub fn far_plane_size(&self) -> DVec2 {
        self.far_plane
    }

    /// Snapshot of the current intrinsics and extrinsics.
    #[must_use]
    pub fn diagnostics(&self) -> CameraDiagnostics {
        CameraDiagnostics {
            camera_type: self.lens.name.to_string(),
            center_x: self.eye.x,
            center_y: self.eye.y,
            center_z: self.eye.z,
            yaw_deg: self.mount.camera_yaw_deg,
            pitch_deg: self.mount.camera_pitch_deg,
            hfov: self.lens.horizontal_fov(),
            vfov: self.lens.vertical_fov(),
            aspect: self.effective_aspect,
        }
    }
}
