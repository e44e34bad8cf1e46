use crate::element::{orthogonal_bounds, ElementGeometry};
use crate::error::{check_non_negative, check_size, GeometryError};
use crate::geometry::{BoundingBox, Polygon};
use crate::layer::LayerSet;
use crate::polygon_builder;
use crate::spacial::{Point, Size};
use crate::types::{Angle, BoardSide, Ratio};

/// A rectangle drawn with a pen of `thickness`, centred on `position`.
///
/// `size` is measured along the pen's centre line. A filled rectangle covers its whole
/// interior; an unfilled one with a pen leaves a rectangular hole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RectangleElement {
    layer_set: LayerSet,
    position: Point,
    size: Size,
    roundness: Ratio,
    rotation: Angle,
    thickness: i32,
    filled: bool,
}

impl RectangleElement {
    /// A filled rectangle without a pen.
    pub fn new(layer_set: LayerSet, position: Point, size: Size) -> Result<Self, GeometryError> {
        check_size(size)?;
        Ok(Self {
            layer_set,
            position,
            size,
            roundness: Ratio::ZERO,
            rotation: Angle::ZERO,
            thickness: 0,
            filled: true,
        })
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn roundness(&self) -> Ratio {
        self.roundness
    }

    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    pub fn thickness(&self) -> i32 {
        self.thickness
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn with_size(mut self, size: Size) -> Result<Self, GeometryError> {
        check_size(size)?;
        self.size = size;
        Ok(self)
    }

    pub fn with_roundness(mut self, roundness: Ratio) -> Self {
        self.roundness = roundness;
        self
    }

    pub fn with_rotation(mut self, rotation: Angle) -> Self {
        self.rotation = rotation;
        self
    }

    /// Draws the outline with a pen; `filled` decides whether the interior is covered.
    pub fn with_outline(mut self, thickness: i32, filled: bool) -> Result<Self, GeometryError> {
        check_non_negative("thickness", thickness)?;
        self.thickness = thickness;
        self.filled = filled;
        Ok(self)
    }

    fn corner_radius(&self) -> i32 {
        self.roundness.corner_radius(self.size)
    }

    fn shape(&self, grow: i32) -> Vec<Point> {
        let radius = match self.corner_radius() {
            0 => 0,
            radius => radius + grow,
        };
        polygon_builder::make_rectangle(self.position, self.size.inflated(grow), radius, self.rotation)
    }
}

impl ElementGeometry for RectangleElement {
    fn layer_set(&self) -> &LayerSet {
        &self.layer_set
    }

    fn polygon(&self, _side: BoardSide) -> Polygon {
        let half = self.thickness / 2;
        let polygon = Polygon::new(self.shape(half));

        let inner = self.size.inflated(-half);
        if self.filled || self.thickness == 0 || inner.min_dimension() <= 0 {
            return polygon;
        }

        let radius = (self.corner_radius() - half).max(0);
        polygon.with_hole(Polygon::new(polygon_builder::make_rectangle(
            self.position,
            inner,
            radius,
            self.rotation,
        )))
    }

    fn outline_polygon(&self, _side: BoardSide, spacing: i32) -> Polygon {
        Polygon::new(self.shape(self.thickness / 2 + spacing))
    }

    fn bounding_box(&self, side: BoardSide) -> BoundingBox {
        match orthogonal_bounds(self.position, self.size.inflated(self.thickness / 2), self.rotation) {
            Some(bbox) => bbox,
            None => self.polygon(side).bounding_box(),
        }
    }
}
