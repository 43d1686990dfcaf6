use std::collections::BTreeMap;

use crate::models::{Point, RotatedRect};

/// A square-ish contour that nests deeply enough to be a finder pattern
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Index of the contour in the extraction arena
    pub contour: usize,
    /// Length of the first-child chain below the contour
    pub depth: usize,
    /// Minimum-area rectangle of the contour
    pub rect: RotatedRect,
}

impl Candidate {
    /// Create a candidate
    pub fn new(contour: usize, depth: usize, rect: RotatedRect) -> Self {
        Self {
            contour,
            depth,
            rect,
        }
    }

    /// Center of the candidate's rotated rectangle
    pub fn center(&self) -> Point {
        self.rect.center
    }
}

/// Candidates grouped by nesting depth, visited in ascending depth order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepthBuckets {
    buckets: BTreeMap<usize, Vec<Candidate>>,
}

impl DepthBuckets {
    /// Create an empty bucket map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate to the bucket for its depth
    pub fn insert(&mut self, candidate: Candidate) {
        self.buckets
            .entry(candidate.depth)
            .or_default()
            .push(candidate);
    }

    /// Candidates with the given depth
    pub fn get(&self, depth: usize) -> &[Candidate] {
        self.buckets.get(&depth).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate `(depth, candidates)` pairs in ascending depth
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Candidate])> + '_ {
        self.buckets.iter().map(|(&d, c)| (d, c.as_slice()))
    }

    /// Number of distinct depths
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True if there are no candidates at all
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of candidates over all depths
    pub fn candidate_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

impl FromIterator<Candidate> for DepthBuckets {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        let mut buckets = Self::new();
        for candidate in iter {
            buckets.insert(candidate);
        }
        buckets
    }
}
