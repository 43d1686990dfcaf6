/// Geometry utilities: perspective transforms, convex hulls and rotated
/// bounding rectangles
use image::RgbImage;

use crate::models::{Point, RotatedRect};

/// Perspective transformation matrix (3x3)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveTransform {
    a11: f64,
    a12: f64,
    a13: f64,
    a21: f64,
    a22: f64,
    a23: f64,
    a31: f64,
    a32: f64,
    a33: f64,
}

impl PerspectiveTransform {
    /// Create transform from 4 source points to 4 destination points
    pub fn from_points(src: &[Point; 4], dst: &[Point; 4]) -> Option<Self> {
        // Direct linear transform with a33 fixed to 1
        let mut a = [[0.0f64; 8]; 8];
        let mut b = [0.0f64; 8];

        for i in 0..4 {
            let (sx, sy) = (src[i].x, src[i].y);
            let (dx, dy) = (dst[i].x, dst[i].y);

            let row = i * 2;
            a[row] = [sx, sy, 1.0, 0.0, 0.0, 0.0, -dx * sx, -dx * sy];
            b[row] = dx;

            a[row + 1] = [0.0, 0.0, 0.0, sx, sy, 1.0, -dy * sx, -dy * sy];
            b[row + 1] = dy;
        }

        solve_linear_system(&a, &b).map(|solution| Self {
            a11: solution[0],
            a12: solution[1],
            a13: solution[2],
            a21: solution[3],
            a22: solution[4],
            a23: solution[5],
            a31: solution[6],
            a32: solution[7],
            a33: 1.0,
        })
    }

    /// Transform a point using this perspective matrix.
    ///
    /// Returns `None` for points mapped to infinity.
    pub fn transform(&self, p: &Point) -> Option<Point> {
        let denominator = self.a31 * p.x + self.a32 * p.y + self.a33;
        if denominator.abs() < 1e-12 {
            return None;
        }

        let x = (self.a11 * p.x + self.a12 * p.y + self.a13) / denominator;
        let y = (self.a21 * p.x + self.a22 * p.y + self.a23) / denominator;

        Some(Point::new(x, y))
    }
}

/// Solve 8x8 linear system using Gaussian elimination
#[allow(clippy::needless_range_loop)]
fn solve_linear_system(a: &[[f64; 8]; 8], b: &[f64; 8]) -> Option<[f64; 8]> {
    let mut a = *a;
    let mut b = *b;
    let n = 8;

    // Forward elimination
    for i in 0..n {
        let mut max_val = a[i][i].abs();
        let mut max_row = i;

        for k in (i + 1)..n {
            if a[k][i].abs() > max_val {
                max_val = a[k][i].abs();
                max_row = k;
            }
        }

        // Singular
        if max_val < 1e-10 {
            return None;
        }

        if max_row != i {
            a.swap(i, max_row);
            b.swap(i, max_row);
        }

        for k in (i + 1)..n {
            let factor = a[k][i] / a[i][i];
            b[k] -= factor * b[i];

            for j in i..n {
                a[k][j] -= factor * a[i][j];
            }
        }
    }

    // Back substitution
    let mut x = [0.0f64; 8];
    for i in (0..n).rev() {
        let mut sum = b[i];
        for j in (i + 1)..n {
            sum -= a[i][j] * x[j];
        }
        x[i] = sum / a[i][i];
    }

    if x.iter().all(|v| v.is_finite()) {
        Some(x)
    } else {
        None
    }
}

/// Convex hull (Andrew's monotone chain), counter-clockwise in a y-up frame.
///
/// Collinear input collapses to its two extreme points.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }

    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && lower[lower.len() - 2].cross(&lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }

    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && upper[upper.len() - 2].cross(&upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Minimum-area rotated rectangle enclosing `points` (rotating calipers
/// over the convex hull).
///
/// Degenerate input yields a rectangle with zero width and/or height.
pub fn min_area_rect(points: &[Point]) -> RotatedRect {
    let hull = convex_hull(points);
    match hull.len() {
        0 => return RotatedRect::default(),
        1 => return RotatedRect::new(hull[0], 0.0, 0.0, 0.0),
        _ => {}
    }

    let mut best: Option<(f64, RotatedRect)> = None;
    for i in 0..hull.len() {
        let origin = hull[i];
        let next = hull[(i + 1) % hull.len()];
        let len = origin.distance(&next);
        if len == 0.0 {
            continue;
        }
        let (ux, uy) = ((next.x - origin.x) / len, (next.y - origin.y) / len);

        let mut min_u = f64::INFINITY;
        let mut max_u = f64::NEG_INFINITY;
        let mut min_v = f64::INFINITY;
        let mut max_v = f64::NEG_INFINITY;
        for p in &hull {
            let (px, py) = (p.x - origin.x, p.y - origin.y);
            let u = px * ux + py * uy;
            let v = py * ux - px * uy;
            min_u = min_u.min(u);
            max_u = max_u.max(u);
            min_v = min_v.min(v);
            max_v = max_v.max(v);
        }

        let width = max_u - min_u;
        let height = max_v - min_v;
        let area = width * height;
        if best.is_none_or(|(best_area, _)| area < best_area) {
            let cu = (min_u + max_u) * 0.5;
            let cv = (min_v + max_v) * 0.5;
            let center = Point::new(
                origin.x + cu * ux - cv * uy,
                origin.y + cu * uy + cv * ux,
            );
            best = Some((area, RotatedRect::new(center, width, height, uy.atan2(ux))));
        }
    }

    best.map(|(_, rect)| rect).unwrap_or_default()
}

/// Resample `src` into a `side`-by-`side` RGB buffer.
///
/// `dst_to_src` maps output pixel coordinates back into the source image.
/// Pixels falling outside the source stay black.
pub fn warp_perspective(src: &RgbImage, dst_to_src: &PerspectiveTransform, side: u32) -> Vec<u8> {
    let side = side as usize;
    let mut out = vec![0u8; side * side * 3];

    for (i, px) in out.chunks_exact_mut(3).enumerate() {
        let dst = Point::new((i % side) as f64, (i / side) as f64);
        if let Some(rgb) = dst_to_src
            .transform(&dst)
            .and_then(|s| sample_bilinear(src, s.x, s.y))
        {
            px.copy_from_slice(&rgb);
        }
    }

    out
}

/// Bilinear sample at a sub-pixel location, `None` outside the image
fn sample_bilinear(img: &RgbImage, x: f64, y: f64) -> Option<[u8; 3]> {
    let (w, h) = (img.width(), img.height());
    if w == 0 || h == 0 {
        return None;
    }
    if !(x >= 0.0 && y >= 0.0 && x <= (w - 1) as f64 && y <= (h - 1) as f64) {
        return None;
    }

    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = img.get_pixel(x0, y0).0;
    let p10 = img.get_pixel(x1, y0).0;
    let p01 = img.get_pixel(x0, y1).0;
    let p11 = img.get_pixel(x1, y1).0;

    let mut out = [0u8; 3];
    for c in 0..3 {
        let top = p00[c] as f64 * (1.0 - fx) + p10[c] as f64 * fx;
        let bottom = p01[c] as f64 * (1.0 - fx) + p11[c] as f64 * fx;
        out[c] = (top * (1.0 - fy) + bottom * fy).round().clamp(0.0, 255.0) as u8;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn close(a: &Point, b: &Point) -> bool {
        (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
    }

    #[test]
    fn test_perspective_transform() {
        let src = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ];

        let dst = [
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
            Point::new(50.0, 50.0),
            Point::new(0.0, 50.0),
        ];

        let t = PerspectiveTransform::from_points(&src, &dst).unwrap();
        let p = t.transform(&Point::new(50.0, 50.0)).unwrap();
        assert!(close(&p, &Point::new(25.0, 25.0)));
    }

    #[test]
    fn test_perspective_maps_control_points() {
        let src = [
            Point::new(12.0, 30.0),
            Point::new(140.0, 18.0),
            Point::new(25.0, 170.0),
            Point::new(160.0, 150.0),
        ];
        let dst = [
            Point::new(50.0, 50.0),
            Point::new(250.0, 50.0),
            Point::new(50.0, 250.0),
            Point::new(250.0, 250.0),
        ];
        let t = PerspectiveTransform::from_points(&src, &dst).unwrap();
        for (s, d) in src.iter().zip(dst.iter()) {
            assert!(close(&t.transform(s).unwrap(), d));
        }
    }

    #[test]
    fn test_collinear_points_are_singular() {
        let src = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(3.0, 3.0),
        ];
        let dst = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
        ];
        assert!(PerspectiveTransform::from_points(&src, &dst).is_none());
    }

    #[test]
    fn test_convex_hull_drops_interior() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
            Point::new(2.0, 2.0),
            Point::new(2.0, 0.0),
        ];
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&Point::new(2.0, 2.0)));
    }

    #[test]
    fn test_min_area_rect_axis_aligned() {
        let mut pts = Vec::new();
        for x in 0..=20 {
            pts.push(Point::new(x as f64, 0.0));
            pts.push(Point::new(x as f64, 10.0));
        }
        let rect = min_area_rect(&pts);
        assert!((rect.area() - 200.0).abs() < 1e-6);
        assert!(close(&rect.center, &Point::new(10.0, 5.0)));
        let (long, short) = if rect.width > rect.height {
            (rect.width, rect.height)
        } else {
            (rect.height, rect.width)
        };
        assert!((long - 20.0).abs() < 1e-6 && (short - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_min_area_rect_rotated_square() {
        // Diamond: a square rotated by 45 degrees with side 10*sqrt(2)
        let pts = [
            Point::new(50.0, 40.0),
            Point::new(60.0, 50.0),
            Point::new(50.0, 60.0),
            Point::new(40.0, 50.0),
        ];
        let rect = min_area_rect(&pts);
        assert!((rect.area() - 200.0).abs() < 1e-6);
        assert!((rect.aspect_ratio() - 1.0).abs() < 1e-9);
        assert!(close(&rect.center, &Point::new(50.0, 50.0)));
    }

    #[test]
    fn test_min_area_rect_degenerate() {
        assert_eq!(min_area_rect(&[]), RotatedRect::default());
        let single = min_area_rect(&[Point::new(3.0, 4.0)]);
        assert_eq!(single.area(), 0.0);
        let line = min_area_rect(&[
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
        ]);
        assert_eq!(line.area(), 0.0);
        assert!(!line.aspect_ratio().is_finite() || line.aspect_ratio() == 0.0);
    }

    #[test]
    fn test_warp_identity_scale() {
        let mut src = RgbImage::from_pixel(20, 20, Rgb([255, 255, 255]));
        src.put_pixel(4, 6, Rgb([10, 20, 30]));
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
        ];
        let t = PerspectiveTransform::from_points(&corners, &corners).unwrap();
        let out = warp_perspective(&src, &t, 10);
        assert_eq!(out.len(), 10 * 10 * 3);
        let idx = (6 * 10 + 4) * 3;
        assert_eq!(&out[idx..idx + 3], &[10, 20, 30]);
        let white = (5 * 10 + 5) * 3;
        assert_eq!(&out[white..white + 3], &[255, 255, 255]);
    }

    #[test]
    fn test_warp_outside_is_black() {
        let src = RgbImage::from_pixel(4, 4, Rgb([200, 200, 200]));
        let from = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
        ];
        let to = [
            Point::new(100.0, 100.0),
            Point::new(101.0, 100.0),
            Point::new(100.0, 101.0),
            Point::new(101.0, 101.0),
        ];
        let t = PerspectiveTransform::from_points(&from, &to).unwrap();
        let out = warp_perspective(&src, &t, 3);
        assert!(out.iter().all(|&v| v == 0));
    }
}
