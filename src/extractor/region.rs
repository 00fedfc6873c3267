//! Region structure for defining the crop area
//!
//! Coordinates are in pixels and follow the usual image convention where
//! (0,0) is the top-left corner.

use std::fmt;

/// Region for image extraction (in pixel coordinates)
///
/// Represents a rectangular area defined by its top-left corner and its
/// dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// The largest square anchored at the origin of a `width` x `height` image
    ///
    /// The side is the smaller of the two dimensions, so a square image maps
    /// to a region covering the whole image.
    pub fn square_at_origin(width: u32, height: u32) -> Self {
        let side = width.min(height);
        Region::new(0, 0, side, side)
    }

    /// The region covering a whole `width` x `height` image
    pub fn full(width: u32, height: u32) -> Self {
        Region::new(0, 0, width, height)
    }

    /// Get the rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    /// Whether the region is square
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Whether the region has no pixels
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check that the region lies entirely inside a `width` x `height` raster
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.end_x() <= width as u64 && self.end_y() <= height as u64
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}
