/// Perspective rectification of the region spanned by three finder centers
use image::RgbImage;

use crate::config::LocatorConfig;
use crate::detector::triangle::fourth_corner;
use crate::error::{Error, Result};
use crate::models::{CornerTriple, Point, RectifiedClip};
use crate::utils::geometry::{PerspectiveTransform, warp_perspective};

/// Where the right-angle corner, the two arms and the completed corner land
/// in the clip
pub fn canonical_corners(config: &LocatorConfig) -> [Point; 4] {
    let m = config.clip_margin as f64;
    let s = config.clip_size as f64;
    [
        Point::new(m, m),
        Point::new(m + s, m),
        Point::new(m, m + s),
        Point::new(m + s, m + s),
    ]
}

/// Warp the quad `(p0, p1, p2, p1 + p2 - p0)` of `source` onto the
/// canonical square. `triple` must already be canonicalized.
pub fn rectify(
    source: &RgbImage,
    triple: &CornerTriple,
    config: &LocatorConfig,
) -> Result<RectifiedClip> {
    let corners = [
        triple.point(0),
        triple.point(1),
        triple.point(2),
        fourth_corner(triple),
    ];
    let target = canonical_corners(config);

    // Sample by pulling each clip pixel back into the source
    let dst_to_src =
        PerspectiveTransform::from_points(&target, &corners).ok_or(Error::DegenerateQuad)?;

    let side = config.clip_side();
    let pixels = warp_perspective(source, &dst_to_src, side);
    let image = RgbImage::from_raw(side, side, pixels)
        .ok_or_else(|| Error::Conversion(format!("clip buffer does not fit {side}x{side}")))?;

    Ok(RectifiedClip { image, corners })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    const RED: Rgb<u8> = Rgb([255, 0, 0]);
    const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
    const BLUE: Rgb<u8> = Rgb([0, 0, 255]);

    fn dot(img: &mut RgbImage, cx: u32, cy: u32, color: Rgb<u8>) {
        for y in cy - 3..=cy + 3 {
            for x in cx - 3..=cx + 3 {
                img.put_pixel(x, y, color);
            }
        }
    }

    #[test]
    fn test_canonical_corners() {
        let c = canonical_corners(&LocatorConfig::default());
        assert_eq!(c[0], Point::new(50.0, 50.0));
        assert_eq!(c[3], Point::new(250.0, 250.0));
    }

    #[test]
    fn test_rectify_maps_corners() {
        let mut src = RgbImage::from_pixel(200, 200, Rgb([255, 255, 255]));
        dot(&mut src, 40, 40, RED);
        dot(&mut src, 140, 40, GREEN);
        dot(&mut src, 140, 140, BLUE);

        let triple = CornerTriple::new(
            Point::new(40.0, 40.0),
            Point::new(140.0, 40.0),
            Point::new(40.0, 140.0),
        );
        let clip = rectify(&src, &triple, &LocatorConfig::default()).unwrap();
        assert_eq!(clip.side(), 300);
        assert_eq!(clip.corners[3], Point::new(140.0, 140.0));
        assert_eq!(*clip.image.get_pixel(50, 50), RED);
        assert_eq!(*clip.image.get_pixel(250, 50), GREEN);
        assert_eq!(*clip.image.get_pixel(250, 250), BLUE);
        assert_eq!(*clip.image.get_pixel(150, 150), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_rectify_undoes_rotation() {
        let mut src = RgbImage::from_pixel(240, 240, Rgb([255, 255, 255]));
        // Square of side 100 rotated by 90 degrees: arms point down and left
        dot(&mut src, 150, 50, RED);
        dot(&mut src, 150, 150, GREEN);
        dot(&mut src, 50, 50, BLUE);
        let triple = CornerTriple::new(
            Point::new(150.0, 50.0),
            Point::new(150.0, 150.0),
            Point::new(50.0, 50.0),
        );
        let clip = rectify(&src, &triple, &LocatorConfig::default()).unwrap();
        assert_eq!(*clip.image.get_pixel(50, 50), RED);
        assert_eq!(*clip.image.get_pixel(250, 50), GREEN);
        assert_eq!(*clip.image.get_pixel(50, 250), BLUE);
    }

    #[test]
    fn test_rectify_degenerate_quad() {
        let src = RgbImage::new(10, 10);
        let p = Point::new(5.0, 5.0);
        let err = rectify(&src, &CornerTriple::new(p, p, p), &LocatorConfig::default());
        assert!(matches!(err, Err(Error::DegenerateQuad)));
    }
}
