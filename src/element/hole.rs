use crate::element::ElementGeometry;
use crate::error::{check_positive, GeometryError};
use crate::geometry::{BoundingBox, Polygon};
use crate::layer::{LayerId, LayerSet};
use crate::polygon_builder;
use crate::spacial::Point;
use crate::types::BoardSide;

/// A drilled hole without copper of its own, e.g. for mounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoleElement {
    layer_set: LayerSet,
    position: Point,
    drill: i32,
    plated: bool,
}

impl HoleElement {
    pub fn new(position: Point, drill: i32) -> Result<Self, GeometryError> {
        check_positive("drill", drill)?;
        Ok(Self {
            layer_set: LayerSet::single(LayerId::DRILLS),
            position,
            drill,
            plated: false,
        })
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn drill(&self) -> i32 {
        self.drill
    }

    pub fn is_plated(&self) -> bool {
        self.plated
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn with_drill(mut self, drill: i32) -> Result<Self, GeometryError> {
        check_positive("drill", drill)?;
        self.drill = drill;
        Ok(self)
    }

    pub fn with_plated(mut self, plated: bool) -> Self {
        self.plated = plated;
        self
    }
}

impl ElementGeometry for HoleElement {
    fn layer_set(&self) -> &LayerSet {
        &self.layer_set
    }

    fn polygon(&self, _side: BoardSide) -> Polygon {
        Polygon::new(polygon_builder::make_circle(self.position, self.drill / 2))
    }

    fn outline_polygon(&self, _side: BoardSide, spacing: i32) -> Polygon {
        Polygon::new(polygon_builder::make_circle(self.position, self.drill / 2 + spacing))
    }

    fn bounding_box(&self, _side: BoardSide) -> BoundingBox {
        BoundingBox::around(self.position, self.drill / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hole() {
        let hole = HoleElement::new(Point::new(100, 200), 3_200)
            .unwrap()
            .with_plated(true);

        assert!(hole.is_plated());
        assert!(hole
            .layer_set()
            .contains(&LayerId::DRILLS));
        assert_eq!(hole.bounding_box(BoardSide::Top), hole.polygon(BoardSide::Top).bounding_box());
        assert_eq!(
            HoleElement::new(Point::ZERO, 0),
            Err(GeometryError::NonPositiveDimension {
                name: "drill",
                value: 0
            })
        );
    }
}
