//! Image and geometry helpers
//!
//! - Grayscale conversion (RGB to BT.601 luminance)
//! - Fixed-threshold binarization
//! - Geometry (convex hull, minimum-area rectangle, perspective warp)

pub mod binarization;
pub mod geometry;
pub mod grayscale;
