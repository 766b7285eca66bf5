//! Normalized annotation rectangles.

use super::{BBoxXYXY, Normalized};

/// One annotation rectangle in YOLO center/size form.
///
/// All four numeric fields are fractions of a reference image (or of a
/// crop window, once reprojected). The class tag is kept as the raw text
/// token so it round-trips unchanged, whatever the dataset uses.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedRect {
    pub class_id: String,
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

impl NormalizedRect {
    pub fn new(
        class_id: impl Into<String>,
        center_x: f64,
        center_y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            class_id: class_id.into(),
            center_x,
            center_y,
            width,
            height,
        }
    }

    /// Builds a rectangle from XYXY corners, keeping `class_id`.
    pub fn from_corners(class_id: impl Into<String>, corners: &BBoxXYXY<Normalized>) -> Self {
        let (cx, cy, w, h) = corners.to_cxcywh();
        Self::new(class_id, cx, cy, w, h)
    }

    /// Returns the corners `(x1, y1)`-`(x2, y2)` of this rectangle.
    #[inline]
    pub fn corners(&self) -> BBoxXYXY<Normalized> {
        BBoxXYXY::from_cxcywh(self.center_x, self.center_y, self.width, self.height)
    }

    /// Returns true if all four numeric fields are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center_x.is_finite()
            && self.center_y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }
}
