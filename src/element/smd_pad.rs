use crate::element::{orthogonal_bounds, ElementGeometry};
use crate::error::{check_size, GeometryError};
use crate::geometry::{BoundingBox, Polygon};
use crate::layer::LayerSet;
use crate::polygon_builder;
use crate::spacial::{Point, Size};
use crate::types::{Angle, BoardSide, Ratio};

/// A surface mount pad: a possibly rounded rectangle of copper on one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmdPadElement {
    name: String,
    layer_set: LayerSet,
    position: Point,
    size: Size,
    roundness: Ratio,
    rotation: Angle,
}

impl SmdPadElement {
    pub fn new(name: impl Into<String>, layer_set: LayerSet, position: Point, size: Size) -> Result<Self, GeometryError> {
        check_size(size)?;
        Ok(Self {
            name: name.into(),
            layer_set,
            position,
            size,
            roundness: Ratio::ZERO,
            rotation: Angle::ZERO,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
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

    fn shape(&self, grow: i32) -> Polygon {
        let radius = match self.roundness.corner_radius(self.size) {
            0 => 0,
            radius => radius + grow,
        };
        Polygon::new(polygon_builder::make_rectangle(
            self.position,
            self.size.inflated(grow),
            radius,
            self.rotation,
        ))
    }
}

impl ElementGeometry for SmdPadElement {
    fn layer_set(&self) -> &LayerSet {
        &self.layer_set
    }

    fn polygon(&self, _side: BoardSide) -> Polygon {
        self.shape(0)
    }

    fn outline_polygon(&self, _side: BoardSide, spacing: i32) -> Polygon {
        self.shape(spacing)
    }

    fn bounding_box(&self, side: BoardSide) -> BoundingBox {
        match orthogonal_bounds(self.position, self.size, self.rotation) {
            Some(bbox) => bbox,
            None => self.polygon(side).bounding_box(),
        }
    }
}
