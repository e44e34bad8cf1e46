use crate::element::ElementGeometry;
use crate::error::{check_positive, GeometryError};
use crate::geometry::{BoundingBox, Polygon};
use crate::layer::LayerSet;
use crate::polygon_builder;
use crate::spacial::Point;
use crate::types::BoardSide;

/// A straight trace with round ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineElement {
    layer_set: LayerSet,
    start: Point,
    end: Point,
    thickness: i32,
}

impl LineElement {
    pub fn new(layer_set: LayerSet, start: Point, end: Point, thickness: i32) -> Result<Self, GeometryError> {
        check_positive("thickness", thickness)?;
        Ok(Self {
            layer_set,
            start,
            end,
            thickness,
        })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn thickness(&self) -> i32 {
        self.thickness
    }

    pub fn end_points(&self) -> [Point; 2] {
        [self.start, self.end]
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn with_end_points(mut self, start: Point, end: Point) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn with_thickness(mut self, thickness: i32) -> Result<Self, GeometryError> {
        check_positive("thickness", thickness)?;
        self.thickness = thickness;
        Ok(self)
    }

    pub fn with_layer_set(mut self, layer_set: LayerSet) -> Self {
        self.layer_set = layer_set;
        self
    }
}

impl ElementGeometry for LineElement {
    fn layer_set(&self) -> &LayerSet {
        &self.layer_set
    }

    fn polygon(&self, _side: BoardSide) -> Polygon {
        Polygon::new(polygon_builder::make_line_trace(self.start, self.end, self.thickness, true))
    }

    fn outline_polygon(&self, _side: BoardSide, spacing: i32) -> Polygon {
        Polygon::new(polygon_builder::make_line_trace(
            self.start,
            self.end,
            self.thickness + 2 * spacing,
            true,
        ))
    }

    fn bounding_box(&self, _side: BoardSide) -> BoundingBox {
        BoundingBox::from_points(&self.end_points()).inflated(self.thickness / 2)
    }
}
