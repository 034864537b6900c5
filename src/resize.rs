//! Target dimension planning.
//!
//! The bounding box is applied as two sequential clamps, width first and
//! height second. Step 2 always re-checks the height produced by step 1, so
//! a wide image that still overflows vertically after the width clamp is
//! corrected. A simultaneous best-fit computation would differ by a pixel on
//! extreme aspect ratios, so the two-step order is kept as is.

use crate::options::BoundingBox;
use std::fmt;

/// Output size derived from the source size and the bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetDimensions {
    pub width: u32,
    pub height: u32,
}

impl TargetDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for TargetDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Compute the size an image of `width` x `height` is drawn at.
///
/// Never upscales. The side that is not clamped is carried over from the
/// previous step rather than re-derived from the source ratio, so the output
/// ratio may drift by a sub-pixel amount.
pub fn fit_within(width: u32, height: u32, bounds: &BoundingBox) -> TargetDimensions {
    if bounds.contains(width, height) {
        return TargetDimensions::new(width, height);
    }

    let mut width = width;
    let mut height = height;

    if width > bounds.max_width {
        height = scale_side(bounds.max_width, height, width);
        width = bounds.max_width;
    }

    if height > bounds.max_height {
        width = scale_side(bounds.max_height, width, height);
        height = bounds.max_height;
    }

    TargetDimensions::new(width, height)
}

/// round(limit * other / clamped), half away from zero, never below one pixel.
fn scale_side(limit: u32, other: u32, clamped: u32) -> u32 {
    let scaled = (limit as f64 * other as f64 / clamped as f64).round();
    (scaled as u32).max(1)
}
