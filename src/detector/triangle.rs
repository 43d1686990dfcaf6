/// Right-triangle test for three finder-pattern centers
///
/// The three finder patterns of a QR code sit on an isosceles right
/// triangle. Instead of measuring angles, compare the longest squared side
/// with the shortest: for an isosceles triangle with apex angle `a` the
/// ratio is `(2 * sin(a / 2))^2`. The default bounds 1.28^2 and 1.52^2
/// admit apex angles of roughly 80 to 100 degrees.
use crate::config::LocatorConfig;
use crate::models::{CornerTriple, Point};

/// Check the squared side lengths `[l01, l12, l20]` of a triangle.
///
/// Rejects coincident points; otherwise accepts when
/// `longest / shortest` lies in `[ratio_min, ratio_max]` (inclusive).
/// The middle side is not checked.
pub fn accepts_sides(sides: [f64; 3], ratio_min: f64, ratio_max: f64) -> bool {
    if sides.contains(&0.0) {
        return false;
    }
    let mut sorted = sides;
    sorted.sort_by(f64::total_cmp);
    let ratio = sorted[2] / sorted[0];
    (ratio_min..=ratio_max).contains(&ratio)
}

/// Reorder the triple so index 0 is the right-angle vertex.
///
/// The right angle is opposite the strictly longest side. A longest `l12`
/// or a tie leaves the order unchanged.
pub fn canonicalize(triple: CornerTriple) -> CornerTriple {
    let [l01, l12, l20] = triple.squared_sides();
    let [p0, p1, p2] = triple.0;
    if l01 > l12 && l01 > l20 {
        CornerTriple::new(p2, p0, p1)
    } else if l20 > l01 && l20 > l12 {
        CornerTriple::new(p1, p2, p0)
    } else {
        triple
    }
}

/// Validate `triple` as three QR corners and return it canonicalized.
///
/// Rejections are expected and silent.
pub fn validate_triangle(triple: CornerTriple, config: &LocatorConfig) -> Option<CornerTriple> {
    let sides = triple.squared_sides();
    if !accepts_sides(sides, config.triangle_ratio_min, config.triangle_ratio_max) {
        tracing::trace!(?sides, "rejected corner triple");
        return None;
    }
    Some(canonicalize(triple))
}

/// Complete the parallelogram: the corner opposite the right angle
pub fn fourth_corner(triple: &CornerTriple) -> Point {
    let [p0, p1, p2] = triple.0;
    Point::new(p1.x + p2.x - p0.x, p1.y + p2.y - p0.y)
}
