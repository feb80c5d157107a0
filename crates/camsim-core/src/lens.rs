//! Lens presets.
//!
//! Field of view figures are GoPro HERO9 Black digital lens values with
//! HyperSmooth off. The table is plain data so that it can be iterated by
//! tests and by the `--list_presets` command without touching the camera model.

use serde::Serialize;

use crate::error::{CamsimError, Result};

/// An immutable lens description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LensPreset {
    /// Preset key, as accepted by `--camera_type`.
    pub name: &'static str,
    /// Full horizontal field of view in degrees.
    pub horizontal_fov_deg: f64,
    /// Full vertical field of view in degrees.
    pub vertical_fov_deg: f64,
    /// Ratio of vertical to horizontal active pixels.
    pub sensor_aspect: f64,
}

impl LensPreset {
    const fn new(
        name: &'static str,
        horizontal_fov_deg: f64,
        vertical_fov_deg: f64,
        sensor_aspect: f64,
    ) -> Self {
        Self {
            name,
            horizontal_fov_deg,
            vertical_fov_deg,
            sensor_aspect,
        }
    }

    /// Horizontal field of view in radians.
    #[must_use]
    pub fn horizontal_fov(&self) -> f64 {
        self.horizontal_fov_deg.to_radians()
    }

    /// Vertical field of view in radians.
    #[must_use]
    pub fn vertical_fov(&self) -> f64 {
        self.vertical_fov_deg.to_radians()
    }
}

/// Name of the preset used when no camera type is given.
pub const DEFAULT_PRESET: &str = "gopro9_wide_4_3";

/// All supported lenses.
pub static LENS_PRESETS: [LensPreset; 13] = [
    LensPreset::new("gopro9_sv_16_9", 121.0, 93.0, 0.5625),
    LensPreset::new("gopro9_wide_16_9", 118.0, 69.0, 0.5625),
    LensPreset::new("gopro9_linear_16_9", 92.0, 61.0, 0.5625),
    LensPreset::new("gopro9_narrow_16_9", 73.0, 45.0, 0.5625),
    LensPreset::new("gopro9_wide_4_3", 122.0, 94.0, 0.75),
    LensPreset::new("gopro9_linear_4_3", 92.0, 76.0, 0.75),
    LensPreset::new("gopro9_narrow_4_3", 73.0, 58.0, 0.75),
    LensPreset::new("gopro9_max_sv_16_9", 140.0, 83.0, 0.5625),
    LensPreset::new("gopro9_max_wide_16_9", 122.0, 72.0, 0.5625),
    LensPreset::new("gopro9_max_linear_16_9", 86.0, 55.0, 0.5625),
    LensPreset::new("gopro9_max_sv_4_3", 140.0, 108.0, 0.75),
    LensPreset::new("gopro9_max_wide_4_3", 122.0, 94.0, 0.75),
    LensPreset::new("gopro9_max_linear_4_3", 92.0, 76.0, 0.75),
];

/// Looks up a lens preset by name.
pub fn find_preset(name: &str) -> Result<&'static LensPreset> {
    LENS_PRESETS
        .iter()
        .find(|preset| preset.name == name)
        .ok_or_else(|| CamsimError::UnknownPreset(name.to_string()))
}

/// Iterates over the names of all presets, in table order.
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    LENS_PRESETS.iter().map(|preset| preset.name)
}
