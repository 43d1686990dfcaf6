use crate::models::PointI;

/// Closed border of a connected edge region, in tracing order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contour {
    /// Border pixels, unsimplified
    pub points: Vec<PointI>,
    /// True when this border is the inside of a hole
    pub is_hole: bool,
}

impl Contour {
    /// Create a contour from its border points
    pub fn new(points: Vec<PointI>, is_hole: bool) -> Self {
        Self { points, is_hole }
    }
}

/// Parent/child nesting among contours, keyed by contour index.
///
/// Built once per extraction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContourHierarchy {
    parent: Vec<Option<usize>>,
    first_child: Vec<Option<usize>>,
}

impl ContourHierarchy {
    /// Build the hierarchy from each contour's parent index.
    ///
    /// The first child of a contour is the lowest-indexed contour naming it
    /// as parent. Out-of-range parents are ignored.
    pub fn from_parents(parents: &[Option<usize>]) -> Self {
        let n = parents.len();
        let mut first_child = vec![None; n];
        let parent: Vec<Option<usize>> = parents
            .iter()
            .map(|p| p.filter(|&idx| idx < n))
            .collect();

        for (child, p) in parent.iter().enumerate() {
            if let Some(p) = *p {
                if p != child && first_child[p].is_none() {
                    first_child[p] = Some(child);
                }
            }
        }

        Self {
            parent,
            first_child,
        }
    }

    /// Number of contours in the hierarchy
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// True if the hierarchy is empty
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Parent of contour `idx`
    pub fn parent(&self, idx: usize) -> Option<usize> {
        self.parent.get(idx).copied().flatten()
    }

    /// First child of contour `idx`
    pub fn first_child(&self, idx: usize) -> Option<usize> {
        self.first_child.get(idx).copied().flatten()
    }

    /// Number of links followed along the first-child chain of `idx`.
    ///
    /// A contour without children has depth 0. The walk is bounded by the
    /// number of contours so a malformed parent table cannot loop forever.
    pub fn depth(&self, idx: usize) -> usize {
        let mut depth = 0;
        let mut current = idx;
        while depth < self.len() {
            match self.first_child(current) {
                Some(child) => {
                    depth += 1;
                    current = child;
                }
                None => break,
            }
        }
        depth
    }
}
