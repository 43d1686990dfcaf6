use image::GrayImage;
use imageproc::contours::{BorderType, find_contours};

use crate::models::{Contour, ContourHierarchy, PointI};

/// Trace every border in the edge map, keeping the full nesting tree.
///
/// Non-zero pixels are foreground. Borders are returned unsimplified so
/// the nesting depth of each contour is exact; no geometric filtering
/// happens here.
pub fn extract_contours(edges: &GrayImage) -> (Vec<Contour>, ContourHierarchy) {
    if edges.width() == 0 || edges.height() == 0 {
        return (Vec::new(), ContourHierarchy::default());
    }

    let raw = find_contours::<i32>(edges);
    let parents: Vec<Option<usize>> = raw.iter().map(|c| c.parent).collect();
    let contours = raw
        .into_iter()
        .map(|c| {
            let points = c.points.iter().map(|p| PointI::new(p.x, p.y)).collect();
            Contour::new(points, c.border_type == BorderType::Hole)
        })
        .collect();

    (contours, ContourHierarchy::from_parents(&parents))
}
