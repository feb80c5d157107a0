//! Perspective frustum bounds.

use glam::{DMat4, DVec4};
use serde::{Deserialize, Serialize};

/// The six bounds of a perspective frustum, in eye space.
///
/// `left`/`right`/`bottom`/`top` are measured on the near plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frustum {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub near: f64,
    pub far: f64,
}

impl Frustum {
    /// Creates a frustum symmetric about the optical axis.
    #[must_use]
    pub fn symmetric(width: f64, height: f64, near: f64, far: f64) -> Self {
        Self {
            left: -width / 2.0,
            right: width / 2.0,
            bottom: -height / 2.0,
            top: height / 2.0,
            near,
            far,
        }
    }

    /// Width of the near plane.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Height of the near plane.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Returns the projection matrix.
    ///
    /// Right-handed eye space looking down -Z, depth mapped to `[0, 1]`.
    #[must_use]
    pub fn projection_matrix(&self) -> DMat4 {
        let Self {
            left,
            right,
            bottom,
            top,
            near,
            far,
        } = *self;
        let depth = near - far;
        DMat4::from_cols(
            DVec4::new(2.0 * near / (right - left), 0.0, 0.0, 0.0),
            DVec4::new(0.0, 2.0 * near / (top - bottom), 0.0, 0.0),
            DVec4::new(
                (right + left) / (right - left),
                (top + bottom) / (top - bottom),
                far / depth,
                -1.0,
            ),
            DVec4::new(0.0, 0.0, near * far / depth, 0.0),
        )
    }
}
