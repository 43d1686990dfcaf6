//! qr_clip - find a QR code in a photo and hand a straightened clip to a reader
//!
//! The locator looks for the three finder patterns as deeply nested square
//! contours in an edge map, checks that their centers form a right
//! triangle, completes the fourth corner and warps the quad onto a fixed
//! square. Reading the symbol is left to a pluggable [`ClipDecoder`].
//!
//! ```no_run
//! use qr_clip::{QrClipLocator, RqrrDecoder};
//!
//! let image = image::open("photo.jpg").unwrap();
//! let locator = QrClipLocator::new(RqrrDecoder);
//! if let Some(text) = locator.decode(&image) {
//!     println!("{text}");
//! }
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Tuning constants
pub mod config;
/// Clip readers
pub mod decoder;
/// Location stages (pre-processing, contours, candidates, geometry)
pub mod detector;
/// Optional dump of intermediate images
pub mod diagnostics;
/// Error type
pub mod error;
/// Core data structures (Point, Contour, Candidate, etc.)
pub mod models;
/// Search loop and retry
pub mod pipeline;
/// Utility functions (grayscale, binarization, geometry)
pub mod utils;

pub use config::LocatorConfig;
pub use decoder::{ClipDecoder, RqrrDecoder};
pub use diagnostics::Diagnostics;
pub use error::{Error, Result};
pub use models::{CornerTriple, Point, RectifiedClip};
pub use pipeline::{DecodeReport, Pass, PassTelemetry};

use image::DynamicImage;
use rayon::prelude::*;

use pipeline::Search;

/// QR locator with an injected decoder
///
/// Holds no per-image state: every call works on its own buffers, so a
/// single locator can serve many threads if its decoder is `Sync`.
#[derive(Debug, Clone)]
pub struct QrClipLocator<D> {
    decoder: D,
    config: LocatorConfig,
    diagnostics: Diagnostics,
}

impl<D: ClipDecoder> QrClipLocator<D> {
    /// Create a locator with the default tuning and no diagnostics
    pub fn new(decoder: D) -> Self {
        Self {
            decoder,
            config: LocatorConfig::default(),
            diagnostics: Diagnostics::disabled(),
        }
    }

    /// Create a locator with custom tuning
    ///
    /// Fails with [`Error::InvalidConfig`] when a bound is out of range.
    pub fn with_config(decoder: D, config: LocatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            decoder,
            config,
            diagnostics: Diagnostics::disabled(),
        })
    }

    /// Write intermediate images to `diagnostics`
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Active tuning
    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Locate and decode a QR code in `image`
    ///
    /// Returns `None` when neither pass yields a clip the decoder accepts.
    pub fn decode(&self, image: &DynamicImage) -> Option<String> {
        self.decode_with_report(image).text
    }

    /// Like [`decode`](Self::decode), also reporting which pass succeeded
    /// and how much work each pass did
    pub fn decode_with_report(&self, image: &DynamicImage) -> DecodeReport {
        let source = image.to_rgb8();
        if source.width() == 0 || source.height() == 0 {
            return DecodeReport::default();
        }

        let report = Search {
            source: &source,
            decoder: &self.decoder,
            config: &self.config,
            diagnostics: &self.diagnostics,
        }
        .run();

        tracing::debug!(
            width = source.width(),
            height = source.height(),
            found = report.is_found(),
            pass = ?report.pass,
            "decode finished"
        );
        report
    }
}

impl<D: ClipDecoder + Sync> QrClipLocator<D> {
    /// Decode independent images in parallel, one result per input
    pub fn decode_batch(&self, images: &[DynamicImage]) -> Vec<Option<String>> {
        images.par_iter().map(|image| self.decode(image)).collect()
    }
}
