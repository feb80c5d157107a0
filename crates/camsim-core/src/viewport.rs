//! Letterboxed / pillarboxed viewport computation.

use serde::{Deserialize, Serialize};

/// Pixel rectangle the camera image occupies inside the window.
///
/// The origin is the top-left corner in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FrameViewport {
    pub origin_x: i32,
    pub origin_y: i32,
    pub width: i32,
    pub height: i32,
}

impl FrameViewport {
    /// Zero-area viewport used for minimized or degenerate windows.
    pub const EMPTY: FrameViewport = FrameViewport {
        origin_x: 0,
        origin_y: 0,
        width: 0,
        height: 0,
    };

    /// Fits the largest rectangle with the given aspect ratio (height / width)
    /// centered inside a `window_w` x `window_h` window.
    ///
    /// A window taller than the target aspect is constrained by width and
    /// letterboxed (bars top and bottom); otherwise it is constrained by
    /// height and pillarboxed (bars left and right). Sizes are truncated to
    /// whole pixels and the remaining space is split evenly, with any odd
    /// pixel going after the rectangle.
    #[must_use]
    pub fn fit(window_w: u32, window_h: u32, aspect: f64) -> Self {
        if window_w == 0 || window_h == 0 || aspect.is_nan() || aspect <= 0.0 {
            return Self::EMPTY;
        }

        let win_w = i32::try_from(window_w).unwrap_or(i32::MAX);
        let win_h = i32::try_from(window_h).unwrap_or(i32::MAX);
        let (w, h) = (f64::from(win_w), f64::from(win_h));

        if h / w > aspect {
            let height = ((w * aspect) as i32).clamp(0, win_h);
            Self {
                origin_x: 0,
                origin_y: (win_h - height) / 2,
                width: win_w,
                height,
            }
        } else {
            let width = ((h / aspect) as i32).clamp(0, win_w);
            Self {
                origin_x: (win_w - width) / 2,
                origin_y: 0,
                width,
                height: win_h,
            }
        }
    }

    /// Returns true if the viewport covers no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Aspect ratio as height / width, or `None` for an empty viewport.
    #[must_use]
    pub fn aspect(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(f64::from(self.height) / f64::from(self.width))
        }
    }

    /// Returns true if the window is wider than the camera image.
    #[must_use]
    pub fn is_pillarboxed(&self, window_w: u32) -> bool {
        !self.is_empty() && i64::from(self.width) < i64::from(window_w)
    }

    /// Returns true if the window is taller than the camera image.
    #[must_use]
    pub fn is_letterboxed(&self, window_h: u32) -> bool {
        !self.is_empty() && i64::from(self.height) < i64::from(window_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit() {
        let vp = FrameViewport::fit(800, 600, 0.75);
        assert_eq!(
            vp,
            FrameViewport {
                origin_x: 0,
                origin_y: 0,
                width: 800,
                height: 600
            }
        );
        assert!(!vp.is_letterboxed(600));
        assert!(!vp.is_pillarboxed(800));
    }

    #[test]
    fn test_letterbox_when_window_is_taller() {
        // 0.5 aspect inside a square window: full width, half height
        let vp = FrameViewport::fit(1000, 1000, 0.5);
        assert_eq!(vp.width, 1000);
        assert_eq!(vp.height, 500);
        assert_eq!(vp.origin_x, 0);
        assert_eq!(vp.origin_y, 250);
        assert!(vp.is_letterboxed(1000));
    }

    #[test]
    fn test_pillarbox_when_window_is_wider() {
        let vp = FrameViewport::fit(1000, 400, 0.8);
        assert_eq!(vp.height, 400);
        assert_eq!(vp.width, 500);
        assert_eq!(vp.origin_x, 250);
        assert_eq!(vp.origin_y, 0);
        assert!(vp.is_pillarboxed(1000));
    }

    #[test]
    fn test_odd_remainder_centering() {
        // 1001 - 500 = 501 spare columns: 250 before, 251 after
        let vp = FrameViewport::fit(1001, 400, 0.8);
        assert_eq!(vp.width, 500);
        assert_eq!(vp.origin_x, 250);
        let slack = 1001 - (vp.origin_x * 2 + vp.width);
        assert!((0..=1).contains(&slack));
    }

    #[test]
    fn test_degenerate_windows() {
        assert!(FrameViewport::fit(0, 900, 0.75).is_empty());
        assert!(FrameViewport::fit(1600, 0, 0.75).is_empty());
        assert!(FrameViewport::fit(0, 0, 0.75).is_empty());
        assert_eq!(FrameViewport::fit(0, 900, 0.75).aspect(), None);
    }

    #[test]
    fn test_non_positive_aspect_is_empty() {
        assert!(FrameViewport::fit(100, 100, 0.0).is_empty());
        assert!(FrameViewport::fit(100, 100, f64::NAN).is_empty());
    }
}
