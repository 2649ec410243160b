//! Curve (streamline): an immutable ordered sequence of 3-D points.

use serde::Serialize;

use crate::geometry::{arclength, Point3};

use super::SourceLabel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
    points: Vec<Point3>,
    arclength: f32,
    label: SourceLabel,
    /// Position in the merged IC, NC, VCWP collection.
    origin_index: usize,
}

impl Curve {
    /// Build a curve, computing its arclength once. An empty point
    /// sequence is a valid curve of length zero.
    pub fn new(points: Vec<Point3>, label: SourceLabel, origin_index: usize) -> Self {
        let arclength = arclength(&points);
        Self {
            points,
            arclength,
            label,
            origin_index,
        }
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn arclength(&self) -> f32 {
        self.arclength
    }

    pub fn label(&self) -> SourceLabel {
        self.label
    }

    pub fn origin_index(&self) -> usize {
        self.origin_index
    }

    /// First point; `None` for an empty curve.
    pub fn head(&self) -> Option<&Point3> {
        self.points.first()
    }

    /// Last point; `None` for an empty curve.
    pub fn tail(&self) -> Option<&Point3> {
        self.points.last()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}
