use image::RgbImage;

use crate::models::Point;

/// Three finder-pattern centers.
///
/// After validation, index 0 is the right-angle corner and indices 1 and 2
/// are the ends of the hypotenuse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerTriple(pub [Point; 3]);

impl CornerTriple {
    /// Create a triple from three points
    pub fn new(p0: Point, p1: Point, p2: Point) -> Self {
        Self([p0, p1, p2])
    }

    /// Squared side lengths `[l01, l12, l20]`
    pub fn squared_sides(&self) -> [f64; 3] {
        let [p0, p1, p2] = &self.0;
        [
            p0.distance_squared(p1),
            p1.distance_squared(p2),
            p2.distance_squared(p0),
        ]
    }

    /// Point at `idx`
    pub fn point(&self, idx: usize) -> Point {
        self.0[idx]
    }
}

/// Perspective-corrected square crop handed to the decoder
#[derive(Debug, Clone)]
pub struct RectifiedClip {
    /// Rectified pixels, `(size + 2 * margin)` on each side
    pub image: RgbImage,
    /// Source-image corners mapped to the canonical square, in
    /// `(right-angle, arm, arm, completed)` order
    pub corners: [Point; 4],
}

impl RectifiedClip {
    /// Side length of the clip in pixels
    pub fn side(&self) -> u32 {
        self.image.width()
    }
}
