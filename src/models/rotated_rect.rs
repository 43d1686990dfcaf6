use crate::models::Point;

/// Minimum-area rectangle enclosing a point set, possibly rotated
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotatedRect {
    /// Rectangle center
    pub center: Point,
    /// Extent along `angle`
    pub width: f64,
    /// Extent perpendicular to `angle`
    pub height: f64,
    /// Direction of the width side, in radians
    pub angle: f64,
}

impl RotatedRect {
    /// Create a rotated rectangle
    pub fn new(center: Point, width: f64, height: f64, angle: f64) -> Self {
        Self {
            center,
            width,
            height,
            angle,
        }
    }

    /// Width divided by height. Non-finite when the rectangle is flat.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Rectangle area
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
