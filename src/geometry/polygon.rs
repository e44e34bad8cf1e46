#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::bounding_box::BoundingBox;
use crate::geometry::transform::Transformation;
use crate::spacial::Point;
use crate::types::{signed_area_x2, Winding};

/// An implicitly closed outline with optional holes.
///
/// Outlines and holes produced by this crate are wound counter-clockwise; consumers that need
/// the opposite orientation for holes reverse them themselves.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    pub points: Vec<Point>,
    pub holes: Vec<Polygon>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            holes: Vec::new(),
        }
    }

    pub fn with_hole(mut self, hole: Polygon) -> Self {
        self.holes.push(hole);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Twice the signed area of the outer outline; holes are ignored.
    pub fn signed_area_x2(&self) -> i128 {
        signed_area_x2(&self.points)
    }

    pub fn winding(&self) -> Winding {
        Winding::from_points(&self.points)
    }

    pub fn is_counter_clockwise(&self) -> bool {
        matches!(self.winding(), Winding::CounterClockwise)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.points)
    }

    /// Applies `transformation` to the outline and every hole.
    ///
    /// A mirroring transformation would flip the winding, so the point order is reversed to keep
    /// every outline counter-clockwise.
    pub fn transformed(&self, transformation: &Transformation) -> Polygon {
        let mut polygon = self.clone();
        polygon.transform(transformation);
        polygon
    }

    pub fn transform(&mut self, transformation: &Transformation) {
        transformation.apply_to_points(&mut self.points);
        if transformation.is_mirroring() {
            self.points.reverse();
        }
        for hole in self.holes.iter_mut() {
            hole.transform(transformation);
        }
    }

    pub fn translated(&self, offset: Point) -> Polygon {
        Polygon {
            points: self
                .points
                .iter()
                .map(|point| *point + offset)
                .collect(),
            holes: self
                .holes
                .iter()
                .map(|hole| hole.translated(offset))
                .collect(),
        }
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Polygon::new(points)
    }
}
