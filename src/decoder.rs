//! Symbol readers the locator hands rectified clips to.
//!
//! The locator only finds and straightens the code; reading the modules is
//! delegated to a [`ClipDecoder`]. Closures work directly, which keeps tests
//! free of a real QR reader.

use image::RgbImage;

use crate::utils::grayscale::rgb_to_luma;

/// Reads the payload of one rectified clip.
///
/// Return `None` on any failure instead of panicking: the locator calls
/// this for every plausible corner triple and moves on when it fails.
/// Implementations should be free of side effects.
pub trait ClipDecoder {
    /// Decode `clip`, or `None` if it holds no readable symbol
    fn decode(&self, clip: &RgbImage) -> Option<String>;
}

impl<F> ClipDecoder for F
where
    F: Fn(&RgbImage) -> Option<String>,
{
    fn decode(&self, clip: &RgbImage) -> Option<String> {
        self(clip)
    }
}

/// Reader backed by the `rqrr` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct RqrrDecoder;

impl ClipDecoder for RqrrDecoder {
    fn decode(&self, clip: &RgbImage) -> Option<String> {
        let gray = rgb_to_luma(clip);
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            gray.width() as usize,
            gray.height() as usize,
            |x, y| gray.get_pixel(x as u32, y as u32)[0],
        );

        prepared
            .detect_grids()
            .into_iter()
            .find_map(|grid| match grid.decode() {
                Ok((_meta, text)) => Some(text),
                Err(err) => {
                    tracing::trace!(?err, "rqrr could not read grid");
                    None
                }
            })
    }
}
