use image::{Rgb, RgbImage};

const MODULE: u32 = 10;

fn fill(img: &mut RgbImage, x: u32, y: u32, side: u32, value: u8) {
    for py in y..y + side {
        for px in x..x + side {
            img.put_pixel(px, py, Rgb([value; 3]));
        }
    }
}

/// Canvas of `width` x `height` with one 21-module code in the middle,
/// drawn with the given light and dark levels
pub fn synthetic_scene(width: u32, height: u32, light: u8, dark: u8) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, Rgb([light; 3]));
    let left = (width - 21 * MODULE) / 2;
    let top = (height - 21 * MODULE) / 2;
    for (mx, my) in [(0, 0), (14, 0), (0, 14)] {
        let (x, y) = (left + mx * MODULE, top + my * MODULE);
        fill(&mut img, x, y, 7 * MODULE, dark);
        fill(&mut img, x + MODULE, y + MODULE, 5 * MODULE, light);
        fill(&mut img, x + 2 * MODULE, y + 2 * MODULE, 3 * MODULE, dark);
    }
    fill(&mut img, left + 9 * MODULE, top + 9 * MODULE, 3 * MODULE, dark);
    img
}
