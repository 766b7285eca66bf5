//! Geometry for normalized annotation rectangles.
//!
//! YOLO labels store boxes as center/size fractions of the image. Cropping
//! works on corners instead, so this module keeps both views: boxes are
//! parsed into [`NormalizedRect`], converted to [`BBoxXYXY`] corners for
//! clipping against a [`CropWindow`], and converted back once they are
//! expressed in the window's own frame. See [`reproject`].
//!
//! # Example
//!
//! ```
//! use labelcrop::geom::{reproject, CropWindow, NormalizedRect, Reprojection};
//!
//! let window = CropWindow::from_margin(0.2).unwrap();
//! let rect = NormalizedRect::new("0", 0.1, 0.1, 0.1, 0.1);
//! assert_eq!(reproject(&rect, &window), Reprojection::Rejected);
//! ```

mod bbox;
mod coord;
mod rect;
mod reproject;
mod space;
mod window;

pub use bbox::BBoxXYXY;
pub use coord::Coord;
pub use rect::NormalizedRect;
pub use reproject::{reproject, Reprojection};
pub use space::Normalized;
pub use window::CropWindow;
