//! Synthetic finder-pattern images and a marker-reading stub decoder.
#![allow(dead_code)]

use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use qr_clip::utils::grayscale::luma;

/// Pixels per module
pub const MODULE: u32 = 10;
/// Offset of the first code on the canvas
pub const ORIGIN: u32 = 95;
/// Text the stub decoder returns
pub const MARKER_TEXT: &str = "MARKER";

/// Finder positions of a version 1 code, in modules
pub const FINDERS: [(u32, u32); 3] = [(0, 0), (14, 0), (0, 14)];

fn fill(img: &mut RgbImage, x: u32, y: u32, side: u32, value: u8) {
    draw_filled_rect_mut(
        img,
        Rect::at(x as i32, y as i32).of_size(side, side),
        Rgb([value; 3]),
    );
}

/// Draw a finder pattern with its top-left module at `(x, y)` pixels
pub fn draw_finder(img: &mut RgbImage, x: u32, y: u32, light: u8, dark: u8) {
    fill(img, x, y, 7 * MODULE, dark);
    fill(img, x + MODULE, y + MODULE, 5 * MODULE, light);
    fill(img, x + 2 * MODULE, y + 2 * MODULE, 3 * MODULE, dark);
}

/// Draw the given finders plus a dark 3x3 marker at the code center.
/// The code's left edge is at `left`, its top edge at `ORIGIN`.
pub fn draw_code(img: &mut RgbImage, left: u32, finders: &[(u32, u32)], light: u8, dark: u8) {
    for &(mx, my) in finders {
        draw_finder(img, left + mx * MODULE, ORIGIN + my * MODULE, light, dark);
    }
    fill(img, left + 9 * MODULE, ORIGIN + 9 * MODULE, 3 * MODULE, dark);
}

/// 400x400 canvas with one axis-aligned code
pub fn synthetic_code(light: u8, dark: u8) -> DynamicImage {
    let mut img = RgbImage::from_pixel(400, 400, Rgb([light; 3]));
    draw_code(&mut img, ORIGIN, &FINDERS, light, dark);
    DynamicImage::ImageRgb8(img)
}

/// Mean luminance of the 5x5 patch centered on `(x, y)`
fn patch_luma(clip: &RgbImage, x: u32, y: u32) -> u32 {
    let mut sum = 0u32;
    for py in y - 2..=y + 2 {
        for px in x - 2..=x + 2 {
            let Rgb([r, g, b]) = *clip.get_pixel(px, py);
            sum += luma(r, g, b) as u32;
        }
    }
    sum / 25
}

/// Reads a clip as `MARKER_TEXT` when its center is clearly darker than
/// a point between the center and the top edge of the canonical square
pub fn marker_decoder(clip: &RgbImage) -> Option<String> {
    if clip.width() != 300 || clip.height() != 300 {
        return None;
    }
    let center = patch_luma(clip, 150, 150);
    let probe = patch_luma(clip, 150, 110);
    (center + 20 < probe).then(|| MARKER_TEXT.to_string())
}
