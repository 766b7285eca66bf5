//! Normalized crop windows.

use super::{BBoxXYXY, Normalized};
use crate::error::LabelcropError;

// Slack for `x_min + width <= 1` when the sum is computed in floating point.
const BOUNDS_EPSILON: f64 = 1e-12;

/// A crop region expressed in normalized coordinates of the source image.
///
/// Invariants (checked by the constructors): `width > 0`, `height > 0`,
/// `x_min >= 0`, `y_min >= 0`, `x_min + width <= 1`, `y_min + height <= 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropWindow {
    x_min: f64,
    y_min: f64,
    width: f64,
    height: f64,
}

impl CropWindow {
    /// Creates a window, rejecting regions that fall outside the unit square
    /// or have no extent.
    pub fn new(x_min: f64, y_min: f64, width: f64, height: f64) -> Result<Self, LabelcropError> {
        let invalid = |message: String| LabelcropError::InvalidCropWindow {
            x_min,
            y_min,
            width,
            height,
            message,
        };

        if ![x_min, y_min, width, height].iter().all(|v| v.is_finite()) {
            return Err(invalid("all fields must be finite".to_string()));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(invalid("width and height must be positive".to_string()));
        }
        if x_min < 0.0 || y_min < 0.0 {
            return Err(invalid("origin must not be negative".to_string()));
        }
        if x_min + width > 1.0 + BOUNDS_EPSILON || y_min + height > 1.0 + BOUNDS_EPSILON {
            return Err(invalid(format!(
                "window extends past the image (right edge {}, bottom edge {})",
                x_min + width,
                y_min + height
            )));
        }

        Ok(Self {
            x_min,
            y_min,
            width,
            height,
        })
    }

    /// The centered window left after removing `margin` from every border.
    ///
    /// `margin` must lie in `[0, 0.5)`; the window is
    /// `{margin, margin, 1 - 2 * margin, 1 - 2 * margin}`.
    pub fn from_margin(margin: f64) -> Result<Self, LabelcropError> {
        if !margin.is_finite() || !(0.0..0.5).contains(&margin) {
            return Err(LabelcropError::InvalidMargin(margin));
        }
        let size = 1.0 - 2.0 * margin;
        Ok(Self {
            x_min: margin,
            y_min: margin,
            width: size,
            height: size,
        })
    }

    /// The whole image, `[0, 0, 1, 1]`.
    pub fn full() -> Self {
        Self {
            x_min: 0.0,
            y_min: 0.0,
            width: 1.0,
            height: 1.0,
        }
    }

    #[inline]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[inline]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The window as an XYXY box in source-image coordinates.
    #[inline]
    pub fn bounds(&self) -> BBoxXYXY<Normalized> {
        BBoxXYXY::from_xyxy(
            self.x_min,
            self.y_min,
            self.x_min + self.width,
            self.y_min + self.height,
        )
    }

    /// Maps a source-image box into this window's local frame.
    ///
    /// Each coordinate is clamped to `[0, 1]` so that rounding in the
    /// subtraction/division never pushes a clipped corner outside the frame.
    pub fn to_local(&self, bbox: &BBoxXYXY<Normalized>) -> BBoxXYXY<Normalized> {
        let local_x = |x: f64| ((x - self.x_min) / self.width).clamp(0.0, 1.0);
        let local_y = |y: f64| ((y - self.y_min) / self.height).clamp(0.0, 1.0);
        BBoxXYXY::from_xyxy(
            local_x(bbox.xmin()),
            local_y(bbox.ymin()),
            local_x(bbox.xmax()),
            local_y(bbox.ymax()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_margin_builds_centered_window() {
        let window = CropWindow::from_margin(0.2).expect("valid margin");
        assert_eq!(window.x_min(), 0.2);
        assert_eq!(window.y_min(), 0.2);
        assert!((window.width() - 0.6).abs() < 1e-12);
        assert!((window.bounds().xmax() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn zero_margin_is_full_window() {
        assert_eq!(CropWindow::from_margin(0.0).unwrap(), CropWindow::full());
    }

    #[test]
    fn from_margin_rejects_out_of_range() {
        for margin in [0.5, 0.75, -0.1, f64::NAN] {
            let err = CropWindow::from_margin(margin).unwrap_err();
            assert!(matches!(err, LabelcropError::InvalidMargin(_)));
        }
    }

    #[test]
    fn new_rejects_windows_outside_unit_square() {
        let err = CropWindow::new(0.5, 0.0, 0.6, 0.5).unwrap_err();
        assert!(matches!(err, LabelcropError::InvalidCropWindow { .. }));

        let err = CropWindow::new(0.0, 0.0, 0.0, 0.5).unwrap_err();
        assert!(matches!(err, LabelcropError::InvalidCropWindow { .. }));

        let err = CropWindow::new(-0.1, 0.0, 0.5, 0.5).unwrap_err();
        assert!(matches!(err, LabelcropError::InvalidCropWindow { .. }));
    }

    #[test]
    fn new_accepts_window_flush_with_edges() {
        let window = CropWindow::new(0.25, 0.5, 0.75, 0.5).expect("flush window is valid");
        assert_eq!(window.bounds(), BBoxXYXY::from_xyxy(0.25, 0.5, 1.0, 1.0));
    }

    #[test]
    fn to_local_maps_window_corners_to_unit_square() {
        let window = CropWindow::new(0.2, 0.4, 0.5, 0.5).unwrap();
        let local = window.to_local(&window.bounds());
        assert!((local.xmin()).abs() < 1e-12);
        assert!((local.ymin()).abs() < 1e-12);
        assert!((local.xmax() - 1.0).abs() < 1e-12);
        assert!((local.ymax() - 1.0).abs() < 1e-12);
    }
}
