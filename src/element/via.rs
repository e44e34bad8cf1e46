use crate::element::ElementGeometry;
use crate::error::{check_drill, check_positive, GeometryError};
use crate::geometry::{BoundingBox, Polygon};
use crate::layer::LayerSet;
use crate::polygon_builder;
use crate::spacial::{Point, Size};
use crate::types::{Angle, BoardSide};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViaShape {
    #[default]
    Circle,
    Square,
    Octagon,
}

/// A plated hole connecting copper layers.
///
/// The copper polygon is the full annulus outline; the drill is reported separately by
/// [`ViaElement::drill_polygon`] so CAM output can subtract or emit it as needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViaElement {
    layer_set: LayerSet,
    position: Point,
    diameter: i32,
    drill: i32,
    shape: ViaShape,
}

impl ViaElement {
    /// A round via through all copper layers.
    pub fn new(position: Point, diameter: i32, drill: i32) -> Result<Self, GeometryError> {
        check_positive("diameter", diameter)?;
        check_drill(drill, diameter)?;
        Ok(Self {
            layer_set: LayerSet::through_hole(),
            position,
            diameter,
            drill,
            shape: ViaShape::Circle,
        })
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn diameter(&self) -> i32 {
        self.diameter
    }

    pub fn drill(&self) -> i32 {
        self.drill
    }

    pub fn shape(&self) -> ViaShape {
        self.shape
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn with_shape(mut self, shape: ViaShape) -> Self {
        self.shape = shape;
        self
    }

    /// Changes both dimensions at once, the drill must stay inside the copper.
    pub fn with_dimensions(mut self, diameter: i32, drill: i32) -> Result<Self, GeometryError> {
        check_positive("diameter", diameter)?;
        check_drill(drill, diameter)?;
        self.diameter = diameter;
        self.drill = drill;
        Ok(self)
    }

    /// Blind and buried vias only span some of the layers.
    pub fn with_layer_set(mut self, layer_set: LayerSet) -> Self {
        self.layer_set = layer_set;
        self
    }

    pub fn drill_polygon(&self) -> Polygon {
        Polygon::new(polygon_builder::make_circle(self.position, self.drill / 2))
    }

    fn shape_points(&self, diameter: i32) -> Vec<Point> {
        match self.shape {
            ViaShape::Circle => polygon_builder::make_circle(self.position, diameter / 2),
            ViaShape::Square => polygon_builder::make_rectangle(self.position, Size::square(diameter), 0, Angle::ZERO),
            ViaShape::Octagon => polygon_builder::make_octagon(self.position, Size::square(diameter), Angle::ZERO),
        }
    }
}

impl ElementGeometry for ViaElement {
    fn layer_set(&self) -> &LayerSet {
        &self.layer_set
    }

    fn polygon(&self, _side: BoardSide) -> Polygon {
        Polygon::new(self.shape_points(self.diameter))
    }

    fn outline_polygon(&self, _side: BoardSide, spacing: i32) -> Polygon {
        Polygon::new(self.shape_points(self.diameter + 2 * spacing))
    }

    fn bounding_box(&self, _side: BoardSide) -> BoundingBox {
        let min = self
            .position
            .offset(-self.diameter / 2, -self.diameter / 2);
        BoundingBox::new(min, min.offset(self.diameter, self.diameter))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(800, 800)]
    #[case(800, 1_000)]
    #[case(800, 0)]
    fn test_drill_must_fit(#[case] diameter: i32, #[case] drill: i32) {
        assert!(ViaElement::new(Point::ZERO, diameter, drill).is_err());
    }

    #[test]
    fn test_drill_too_large_error() {
        assert_eq!(
            ViaElement::new(Point::ZERO, 800, 800),
            Err(GeometryError::DrillTooLarge {
                drill: 800,
                size: 800
            })
        );
    }

    #[rstest]
    #[case(ViaShape::Circle, 32)]
    #[case(ViaShape::Square, 4)]
    #[case(ViaShape::Octagon, 8)]
    fn test_shapes(#[case] shape: ViaShape, #[case] points: usize) {
        let via = ViaElement::new(Point::new(500, 500), 1_000, 400)
            .unwrap()
            .with_shape(shape);

        let polygon = via.polygon(BoardSide::Top);

        assert_eq!(polygon.len(), points);
        assert!(polygon.is_counter_clockwise());
        assert_eq!(polygon.bounding_box(), via.bounding_box(BoardSide::Top));
    }

    #[test]
    fn test_drill_polygon() {
        let via = ViaElement::new(Point::new(500, 500), 1_000, 400).unwrap();

        assert_eq!(
            via.drill_polygon().bounding_box(),
            BoundingBox::new(Point::new(300, 300), Point::new(700, 700))
        );
        assert!(via
            .with_dimensions(300, 400)
            .is_err());
    }
}
