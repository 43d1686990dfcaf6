/// Edge-map preparation for contour extraction
///
/// Grayscale, Gaussian blur, an optional fixed threshold (enhanced pass),
/// then Canny. The plain pass is enough for most well-lit photos; the
/// enhanced pass flattens uneven lighting at the cost of fine detail.
use image::{GrayImage, RgbImage};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;

use crate::config::LocatorConfig;
use crate::diagnostics::Diagnostics;
use crate::utils::binarization::threshold_binarize_mut;
use crate::utils::grayscale::rgb_to_luma;

/// Build the edge map of `source`. Edge pixels are 255, the rest 0.
pub fn prepare(
    source: &RgbImage,
    enhanced: bool,
    config: &LocatorConfig,
    diagnostics: &Diagnostics,
) -> GrayImage {
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return GrayImage::new(width, height);
    }
    let pass = if enhanced { "enhanced" } else { "plain" };

    let gray = rgb_to_luma(source);
    let mut work = gaussian_blur_f32(&gray, config.blur_sigma);
    diagnostics.save_gray(&format!("{pass}-blur.png"), &work);

    if enhanced {
        threshold_binarize_mut(&mut work, config.binarize_threshold);
        diagnostics.save_gray(&format!("{pass}-threshold.png"), &work);
    }

    let edges = canny(&work, config.canny_low, config.canny_high);
    diagnostics.save_gray(&format!("{pass}-canny.png"), &edges);

    tracing::debug!(
        pass,
        width,
        height,
        edge_pixels = edges.iter().filter(|&&v| v > 0).count(),
        "prepared edge map"
    );
    edges
}
