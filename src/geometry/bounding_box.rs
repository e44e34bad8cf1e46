use log::debug;

use crate::geometry::transform::Transformation;
use crate::spacial::Point;

/// Axis-aligned bounds in integer units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub fn new(min: Point, max: Point) -> Self {
        Self {
            min,
            max,
        }
    }

    /// Bounds of a square of `2 * radius` centred on `center`.
    pub fn around(center: Point, radius: i32) -> Self {
        Self {
            min: Point::new(center.x - radius, center.y - radius),
            max: Point::new(center.x + radius, center.y + radius),
        }
    }

    /// Use to generate an outline of the bbox
    pub fn transform_vertices(&self, transform: &Transformation) -> Vec<Point> {
        self.vertices()
            .into_iter()
            .map(|v| transform.apply_to_point(v))
            .collect::<Vec<_>>()
    }

    pub fn expand(&mut self, other: &BoundingBox) {
        if other.is_empty() {
            return;
        }
        self.min.x = self.min.x.min(other.min.x);
        self.min.y = self.min.y.min(other.min.y);
        self.max.x = self.max.x.max(other.max.x);
        self.max.y = self.max.y.max(other.max.y);
    }

    pub fn expand_point(&mut self, point: Point) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            min: Point::new(i32::MAX, i32::MAX),
            max: Point::new(i32::MIN, i32::MIN),
        }
    }
}

impl BoundingBox {
    /// Note that a bounding box of 0,0 -> 0,0 is NOT empty
    /// e.g., a zero-radius circle at the origin still has a location.
    ///
    /// Only a bounding box which is the same as the one returned by `default` counts as empty.
    pub fn is_empty(&self) -> bool {
        self.eq(&BoundingBox::default())
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Grows the box by `amount` on every side; empty boxes stay empty.
    pub fn inflated(&self, amount: i32) -> Self {
        if self.is_empty() {
            return *self;
        }
        Self {
            min: Point::new(self.min.x - amount, self.min.y - amount),
            max: Point::new(self.max.x + amount, self.max.y + amount),
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    pub fn apply_transform(&self, transform: &Transformation) -> Self {
        if self.is_empty() {
            return *self;
        }

        // Step 1: Transform each corner of the original bbox
        let transformed_bbox_vertices = self.transform_vertices(transform);

        // Step 2: Create a new axis-aligned bbox from transformed points
        let result = BoundingBox::from_points(&transformed_bbox_vertices);
        debug!(
            "Applying transform.  transform {:?}: before: {:?}, after: {:?}",
            transform, self, result
        );
        result
    }

    /// Returns the geometric center of the bounding box
    pub fn center(&self) -> Point {
        Point::new(
            ((self.min.x as i64 + self.max.x as i64) / 2) as i32,
            ((self.min.y as i64 + self.max.y as i64) / 2) as i32,
        )
    }

    /// Returns 4 corner points of the bounding box, counter-clockwise, useable as a closed path.
    /// ```plaintext
    /// (min_x, max_y) 4 ┌────────────┐ 3 (max_x, max_y)
    ///                  │            │
    /// (min_x, min_y) 1 └────────────┘ 2 (max_x, min_y)
    /// ```
    pub fn vertices(&self) -> Vec<Point> {
        vec![
            Point::new(self.min.x, self.min.y),
            Point::new(self.max.x, self.min.y),
            Point::new(self.max.x, self.max.y),
            Point::new(self.min.x, self.max.y),
        ]
    }

    /// Constructs a bounding box from a list of points
    pub fn from_points(points: &[Point]) -> Self {
        let mut bbox = BoundingBox::default();
        for point in points {
            bbox.expand_point(*point);
        }
        bbox
    }
}
