use image::GrayImage;

/// Simple global threshold binarization, in place.
/// Pixels strictly brighter than `threshold` become 255, everything else 0.
pub fn threshold_binarize_mut(gray: &mut GrayImage, threshold: u8) {
    for px in gray.iter_mut() {
        *px = if *px > threshold { 255 } else { 0 };
    }
}
