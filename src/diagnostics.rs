//! Optional dump of intermediate images.
//!
//! Artifacts are only written when an output directory was configured and
//! `tracing` has DEBUG enabled for this crate. Write failures are logged and
//! never change a decode result.

use std::fs;
use std::path::{Path, PathBuf};

use image::{GrayImage, Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

use crate::error::{Error, Result};
use crate::models::CornerTriple;

const OVERLAY_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Destination for intermediate pipeline images
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    dir: Option<PathBuf>,
}

impl Diagnostics {
    /// Write artifacts under `dir`, creating it if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| Error::DiagnosticsDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir: Some(dir) })
    }

    /// A sink that never writes
    pub fn disabled() -> Self {
        Self { dir: None }
    }

    /// Output directory, if configured
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// True when artifacts would actually be written right now
    pub fn is_enabled(&self) -> bool {
        self.dir.is_some() && tracing::enabled!(tracing::Level::DEBUG)
    }

    pub(crate) fn save_gray(&self, name: &str, image: &GrayImage) {
        if let Some(path) = self.target(name) {
            if let Err(err) = image.save(&path) {
                tracing::warn!(path = %path.display(), %err, "failed to write diagnostic image");
            }
        }
    }

    pub(crate) fn save_rgb(&self, name: &str, image: &RgbImage) {
        if let Some(path) = self.target(name) {
            if let Err(err) = image.save(&path) {
                tracing::warn!(path = %path.display(), %err, "failed to write diagnostic image");
            }
        }
    }

    /// Source copy with the candidate triangle drawn on top
    pub(crate) fn save_triangle(&self, name: &str, source: &RgbImage, triple: &CornerTriple) {
        if !self.is_enabled() {
            return;
        }
        let mut overlay = source.clone();
        for (a, b) in [(0, 1), (1, 2), (2, 0)] {
            let (pa, pb) = (triple.point(a), triple.point(b));
            // Two passes for a 2 px stroke
            for offset in [0.0f32, 1.0] {
                draw_line_segment_mut(
                    &mut overlay,
                    (pa.x as f32 + offset, pa.y as f32),
                    (pb.x as f32 + offset, pb.y as f32),
                    OVERLAY_COLOR,
                );
            }
        }
        self.save_rgb(name, &overlay);
    }

    fn target(&self, name: &str) -> Option<PathBuf> {
        if !self.is_enabled() {
            return None;
        }
        self.dir().map(|dir| dir.join(name))
    }
}
