//! Tuning for the finder-pattern locator.
//!
//! Every constant of the search lives here as a named field. The defaults
//! were tuned on phone photos of printed codes roughly 150-600 px across;
//! other resolutions may need different values.

use crate::error::{Error, Result};

/// Largest accepted clip side in pixels
pub const MAX_CLIP_SIDE: u32 = 4096;

/// Locator configuration, immutable once a locator is built
#[derive(Clone, Debug, PartialEq)]
pub struct LocatorConfig {
    // Pre-processing
    /// Gaussian sigma before edge detection (default: 1.1, the automatic
    /// sigma of a 5x5 kernel).
    pub blur_sigma: f32,
    /// Fixed threshold of the enhanced pass (default: 100).
    /// Pixels strictly above become white.
    pub binarize_threshold: u8,
    /// Canny hysteresis low threshold (default: 112).
    pub canny_low: f32,
    /// Canny hysteresis high threshold (default: 255).
    pub canny_high: f32,

    // Candidate filtering
    /// Largest accepted width/height ratio of a candidate's rotated
    /// rectangle; the smallest is its reciprocal. Both bounds are
    /// exclusive (default: 1.2).
    pub square_ratio_max: f64,
    /// Minimum first-child chain depth of a finder pattern (default: 5).
    pub min_depth: usize,
    /// Smallest explored depth bucket (default: 3).
    pub bucket_min: usize,
    /// Largest explored depth bucket (default: 5).
    pub bucket_max: usize,

    // Triangle validation
    /// Lower bound of longest/shortest squared side, inclusive
    /// (default: 1.6384, about an 80 degree apex).
    pub triangle_ratio_min: f64,
    /// Upper bound of longest/shortest squared side, inclusive
    /// (default: 2.3104, about a 100 degree apex).
    pub triangle_ratio_max: f64,

    // Rectification
    /// Side of the canonical square the finder centers map onto (default: 200).
    pub clip_size: u32,
    /// Border around the canonical square (default: 50).
    pub clip_margin: u32,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            blur_sigma: 1.1,
            binarize_threshold: 100,
            canny_low: 112.0,
            canny_high: 255.0,
            square_ratio_max: 1.2,
            min_depth: 5,
            bucket_min: 3,
            bucket_max: 5,
            triangle_ratio_min: 1.6384,
            triangle_ratio_max: 2.3104,
            clip_size: 200,
            clip_margin: 50,
        }
    }
}

impl LocatorConfig {
    /// Side length of a rectified clip, saturating on overflow.
    /// `validate` rejects configurations where that would happen.
    pub fn clip_side(&self) -> u32 {
        self.checked_clip_side().unwrap_or(u32::MAX)
    }

    fn checked_clip_side(&self) -> Option<u32> {
        self.clip_size.checked_add(self.clip_margin.checked_mul(2)?)
    }

    /// Check that every bound is ordered and positive
    pub fn validate(&self) -> Result<()> {
        if !(self.blur_sigma > 0.0) {
            return Err(invalid("blur_sigma must be positive"));
        }
        if !(self.canny_low >= 0.0 && self.canny_low <= self.canny_high) {
            return Err(invalid("canny_low must be within 0..=canny_high"));
        }
        if !(self.square_ratio_max > 1.0) {
            return Err(invalid("square_ratio_max must exceed 1"));
        }
        if self.bucket_min < 3 {
            return Err(invalid("bucket_min must be at least 3"));
        }
        if self.bucket_min > self.bucket_max {
            return Err(invalid("bucket_min > bucket_max"));
        }
        if !(self.triangle_ratio_min > 0.0 && self.triangle_ratio_min <= self.triangle_ratio_max) {
            return Err(invalid("triangle_ratio_min must be within 0..=triangle_ratio_max"));
        }
        if self.clip_size == 0 {
            return Err(invalid("clip_size must be positive"));
        }
        match self.checked_clip_side() {
            Some(side) if side <= MAX_CLIP_SIDE => {}
            _ => return Err(invalid("clip_size + 2 * clip_margin exceeds 4096")),
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> Error {
    Error::InvalidConfig(msg.to_string())
}
