pub mod candidate;
pub mod clip;
pub mod contour;
pub mod point;
pub mod rotated_rect;

pub use candidate::{Candidate, DepthBuckets};
pub use clip::{CornerTriple, RectifiedClip};
pub use contour::{Contour, ContourHierarchy};
pub use point::{Point, PointI};
pub use rotated_rect::RotatedRect;
