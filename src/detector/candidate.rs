/// Finder-pattern candidate selection
///
/// A finder pattern is three concentric squares; after edge detection every
/// ring boundary contributes an outer and a hole border, so the outermost
/// border of a pattern sits on top of a deep first-child chain. Text glyphs
/// and unrelated boxes rarely nest as deeply, and grouping by depth keeps
/// patterns that come from the same scale and blur together.
use crate::config::LocatorConfig;
use crate::models::{Candidate, Contour, ContourHierarchy, DepthBuckets, Point, RotatedRect};
use crate::utils::geometry::min_area_rect;

/// True if the rectangle is roughly square: its width/height ratio lies
/// strictly between `1 / max_ratio` and `max_ratio`.
pub fn is_square(rect: &RotatedRect, max_ratio: f64) -> bool {
    let ratio = rect.aspect_ratio();
    let min_ratio = 1.0 / max_ratio;
    ratio > min_ratio && ratio < max_ratio
}

/// Minimum-area rectangle of a contour
pub fn contour_rect(contour: &Contour) -> RotatedRect {
    let points: Vec<Point> = contour.points.iter().copied().map(Point::from).collect();
    min_area_rect(&points)
}

/// Bucket every square contour whose nesting depth reaches `min_depth`.
///
/// Depth is only computed for contours that pass the squareness test.
pub fn filter_candidates(
    contours: &[Contour],
    hierarchy: &ContourHierarchy,
    config: &LocatorConfig,
) -> DepthBuckets {
    let mut buckets = DepthBuckets::new();

    for (idx, contour) in contours.iter().enumerate() {
        // Cheapest rejection first: no child means depth 0
        if hierarchy.first_child(idx).is_none() && config.min_depth > 0 {
            continue;
        }
        let rect = contour_rect(contour);
        if !is_square(&rect, config.square_ratio_max) {
            continue;
        }
        let depth = hierarchy.depth(idx);
        if depth >= config.min_depth {
            buckets.insert(Candidate::new(idx, depth, rect));
        }
    }

    tracing::debug!(
        contours = contours.len(),
        holes = contours.iter().filter(|c| c.is_hole).count(),
        candidates = buckets.candidate_count(),
        buckets = buckets.len(),
        "filtered finder candidates"
    );
    buckets
}

/// Buckets worth searching: member count within `bucket_min..=bucket_max`.
///
/// Fewer cannot form a triple; more usually means noise or several codes.
pub fn explorable_buckets<'a>(
    buckets: &'a DepthBuckets,
    config: &'a LocatorConfig,
) -> impl Iterator<Item = (usize, &'a [Candidate])> + 'a {
    buckets
        .iter()
        .filter(|(_, members)| (config.bucket_min..=config.bucket_max).contains(&members.len()))
}
