use crate::element::ElementGeometry;
use crate::error::{check_non_negative, check_positive, GeometryError};
use crate::geometry::{BoundingBox, Polygon};
use crate::layer::LayerSet;
use crate::polygon_builder;
use crate::spacial::Point;
use crate::types::BoardSide;

/// A circle drawn with a pen of `thickness`; unfilled circles with a pen are rings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircleElement {
    layer_set: LayerSet,
    position: Point,
    radius: i32,
    thickness: i32,
    filled: bool,
}

impl CircleElement {
    pub fn new(layer_set: LayerSet, position: Point, radius: i32) -> Result<Self, GeometryError> {
        check_positive("radius", radius)?;
        Ok(Self {
            layer_set,
            position,
            radius,
            thickness: 0,
            filled: true,
        })
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn radius(&self) -> i32 {
        self.radius
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

    pub fn with_radius(mut self, radius: i32) -> Result<Self, GeometryError> {
        check_positive("radius", radius)?;
        self.radius = radius;
        Ok(self)
    }

    pub fn with_outline(mut self, thickness: i32, filled: bool) -> Result<Self, GeometryError> {
        check_non_negative("thickness", thickness)?;
        self.thickness = thickness;
        self.filled = filled;
        Ok(self)
    }

    fn outer_radius(&self) -> i32 {
        self.radius + self.thickness / 2
    }
}

impl ElementGeometry for CircleElement {
    fn layer_set(&self) -> &LayerSet {
        &self.layer_set
    }

    fn polygon(&self, _side: BoardSide) -> Polygon {
        let polygon = Polygon::new(polygon_builder::make_circle(self.position, self.outer_radius()));

        let inner_radius = self.radius - self.thickness / 2;
        match !self.filled && self.thickness > 0 && inner_radius > 0 {
            true => polygon.with_hole(Polygon::new(polygon_builder::make_circle(self.position, inner_radius))),
            false => polygon,
        }
    }

    fn outline_polygon(&self, _side: BoardSide, spacing: i32) -> Polygon {
        Polygon::new(polygon_builder::make_circle(self.position, self.outer_radius() + spacing))
    }

    fn bounding_box(&self, _side: BoardSide) -> BoundingBox {
        BoundingBox::around(self.position, self.outer_radius())
    }
}
