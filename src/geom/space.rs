//! Coordinate space marker types.
//!
//! These are zero-sized types (ZSTs) used as type parameters so that
//! normalized coordinates cannot be mixed up with raw values at compile time.

use std::fmt;

/// Marker type for normalized coordinates (0.0 to 1.0).
///
/// Normalized coordinates represent positions as fractions of the image
/// dimensions, making them resolution-independent. A crop window's local
/// frame is also a normalized space: (0, 0) is the window's top-left corner
/// and (1, 1) its bottom-right.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normalized {}

impl fmt::Debug for Normalized {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {} // Normalized has no variants
    }
}
