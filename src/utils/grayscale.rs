/// Convert RGB images to 8-bit luminance
/// Y = 0.299*R + 0.587*G + 0.114*B
/// Uses fast integer arithmetic: Y = (76*R + 150*G + 29*B) >> 8
use image::{GrayImage, RgbImage};

/// Coefficients for grayscale conversion: Y = (76*R + 150*G + 29*B) >> 8
const COEF_R: u32 = 76;
const COEF_G: u32 = 150;
const COEF_B: u32 = 29;

/// Luminance of a single RGB triple
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let lum = (COEF_R * r as u32 + COEF_G * g as u32 + COEF_B * b as u32) >> 8;
    lum.min(255) as u8
}

/// Convert an RGB image to grayscale into a freshly allocated buffer
pub fn rgb_to_luma(rgb: &RgbImage) -> GrayImage {
    let mut gray = GrayImage::new(rgb.width(), rgb.height());
    rgb_to_luma_into(rgb, &mut gray);
    gray
}

/// Convert an RGB image to grayscale into an existing buffer of the same size
pub fn rgb_to_luma_into(rgb: &RgbImage, gray: &mut GrayImage) {
    debug_assert_eq!(rgb.dimensions(), gray.dimensions());

    // Process 8 pixels at a time
    let mut src = rgb.chunks_exact(24);
    let mut dst = gray.chunks_exact_mut(8);
    for (src8, dst8) in (&mut src).zip(&mut dst) {
        for j in 0..8 {
            let idx = j * 3;
            dst8[j] = luma(src8[idx], src8[idx + 1], src8[idx + 2]);
        }
    }

    // Process remaining pixels
    for (px, out) in src
        .remainder()
        .chunks_exact(3)
        .zip(dst.into_remainder().iter_mut())
    {
        *out = luma(px[0], px[1], px[2]);
    }
}
