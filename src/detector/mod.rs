//! Finder-pattern location stages
//!
//! - Edge-map preparation (grayscale, blur, optional threshold, Canny)
//! - Contour tracing with the full nesting tree
//! - Candidate selection by squareness and nesting depth
//! - Right-triangle validation of candidate triples
//! - Perspective rectification onto a canonical square

/// Minimum-area-rect squareness and depth bucketing
pub mod candidate;
/// Border tracing of the edge map
pub mod contour;
/// Grayscale, blur, threshold and edge detection
pub mod preprocess;
/// Warp of the corner quad onto the clip
pub mod transform;
/// Right-triangle test and corner ordering
pub mod triangle;
