//! Clip a rectangle to a crop window and re-express it in the window's frame.

use super::{CropWindow, NormalizedRect};

/// Outcome of [`reproject`].
#[derive(Clone, Debug, PartialEq)]
pub enum Reprojection {
    /// The clipped rectangle, in the window's local frame.
    Kept(NormalizedRect),
    /// Nothing of the rectangle survives the crop.
    Rejected,
}

impl Reprojection {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Reprojection::Rejected)
    }

    /// Returns the kept rectangle, if any.
    pub fn kept(self) -> Option<NormalizedRect> {
        match self {
            Reprojection::Kept(rect) => Some(rect),
            Reprojection::Rejected => None,
        }
    }
}

/// Clips `rect` to `window` and renormalizes it into the window's frame.
///
/// A rectangle whose clipped intersection has zero or negative extent on
/// either axis is [`Reprojection::Rejected`]; this includes rectangles that
/// only touch the window along an edge. Kept rectangles always have center
/// and size fields within `[0, 1]`, and the class tag is carried through
/// unchanged. Rectangles with a NaN or infinite field, or whose corners
/// overflow to infinity, are rejected before clipping.
pub fn reproject(rect: &NormalizedRect, window: &CropWindow) -> Reprojection {
    let corners = rect.corners();
    if !rect.is_finite() || !corners.is_finite() {
        return Reprojection::Rejected;
    }

    let clipped = corners.clip_to(&window.bounds());
    if !clipped.has_positive_area() {
        return Reprojection::Rejected;
    }

    let local = window.to_local(&clipped);
    Reprojection::Kept(NormalizedRect::from_corners(rect.class_id.clone(), &local))
}
