use crate::element::{orthogonal_bounds, ElementGeometry};
use crate::error::{check_drill, check_size, GeometryError};
use crate::geometry::{BoundingBox, Polygon};
use crate::layer::LayerSet;
use crate::polygon_builder;
use crate::spacial::{Point, Size};
use crate::types::{Angle, BoardSide, Ratio};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThtPadShape {
    /// A rectangle, rounded by the pad's roundness.
    #[default]
    Square,
    Oval,
    Octagon,
}

/// A through-hole pad, with a separate copper size for the top, inner and bottom layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThtPadElement {
    name: String,
    layer_set: LayerSet,
    position: Point,
    top_size: Size,
    inner_size: Size,
    bottom_size: Size,
    shape: ThtPadShape,
    roundness: Ratio,
    rotation: Angle,
    drill: i32,
}

impl ThtPadElement {
    /// A square pad of the same `size` on every layer.
    pub fn new(name: impl Into<String>, position: Point, size: Size, drill: i32) -> Result<Self, GeometryError> {
        check_size(size)?;
        check_drill(drill, size.min_dimension())?;
        Ok(Self {
            name: name.into(),
            layer_set: LayerSet::through_hole(),
            position,
            top_size: size,
            inner_size: size,
            bottom_size: size,
            shape: ThtPadShape::Square,
            roundness: Ratio::ZERO,
            rotation: Angle::ZERO,
            drill,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn shape(&self) -> ThtPadShape {
        self.shape
    }

    pub fn roundness(&self) -> Ratio {
        self.roundness
    }

    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    pub fn drill(&self) -> i32 {
        self.drill
    }

    /// The copper size used on `side`; inner layers report [`BoardSide::Unknown`].
    pub fn size(&self, side: BoardSide) -> Size {
        match side {
            BoardSide::Top => self.top_size,
            BoardSide::Bottom => self.bottom_size,
            BoardSide::Unknown => self.inner_size,
        }
    }

    fn sizes(&self) -> [Size; 3] {
        [self.top_size, self.inner_size, self.bottom_size]
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn with_shape(mut self, shape: ThtPadShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_roundness(mut self, roundness: Ratio) -> Self {
        self.roundness = roundness;
        self
    }

    pub fn with_rotation(mut self, rotation: Angle) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the per-layer copper sizes; the drill must stay smaller than each of them.
    pub fn with_sizes(mut self, top: Size, inner: Size, bottom: Size) -> Result<Self, GeometryError> {
        for size in [top, inner, bottom] {
            check_size(size)?;
            check_drill(self.drill, size.min_dimension())?;
        }
        self.top_size = top;
        self.inner_size = inner;
        self.bottom_size = bottom;
        Ok(self)
    }

    pub fn with_drill(mut self, drill: i32) -> Result<Self, GeometryError> {
        for size in self.sizes() {
            check_drill(drill, size.min_dimension())?;
        }
        self.drill = drill;
        Ok(self)
    }

    pub fn drill_polygon(&self) -> Polygon {
        Polygon::new(polygon_builder::make_circle(self.position, self.drill / 2))
    }

    fn shape_points(&self, size: Size) -> Vec<Point> {
        match self.shape {
            ThtPadShape::Square => polygon_builder::make_rectangle(
                self.position,
                size,
                self.roundness.corner_radius(size),
                self.rotation,
            ),
            ThtPadShape::Oval => polygon_builder::make_obround(self.position, size, self.rotation),
            ThtPadShape::Octagon => polygon_builder::make_octagon(self.position, size, self.rotation),
        }
    }
}

impl ElementGeometry for ThtPadElement {
    fn layer_set(&self) -> &LayerSet {
        &self.layer_set
    }

    fn polygon(&self, side: BoardSide) -> Polygon {
        Polygon::new(self.shape_points(self.size(side)))
    }

    fn outline_polygon(&self, side: BoardSide, spacing: i32) -> Polygon {
        Polygon::new(self.shape_points(self.size(side).inflated(spacing)))
    }

    fn bounding_box(&self, side: BoardSide) -> BoundingBox {
        match orthogonal_bounds(self.position, self.size(side), self.rotation) {
            Some(bbox) => bbox,
            None => self.polygon(side).bounding_box(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn pad() -> ThtPadElement {
        ThtPadElement::new("1", Point::ZERO, Size::square(1_800), 1_000)
            .unwrap()
            .with_sizes(Size::new(2_400, 1_800), Size::square(1_400), Size::square(1_800))
            .unwrap()
    }

    #[rstest]
    #[case(BoardSide::Top, 2_400, 1_800)]
    #[case(BoardSide::Unknown, 1_400, 1_400)]
    #[case(BoardSide::Bottom, 1_800, 1_800)]
    fn test_size_by_side(#[case] side: BoardSide, #[case] width: i32, #[case] height: i32) {
        let bbox = pad().polygon(side).bounding_box();

        assert_eq!(bbox.width(), width);
        assert_eq!(bbox.height(), height);
        assert_eq!(pad().bounding_box(side), bbox);
    }

    #[test]
    fn test_drill_checked_against_every_size() {
        assert_eq!(
            pad().with_sizes(Size::square(2_000), Size::square(900), Size::square(2_000)),
            Err(GeometryError::DrillTooLarge {
                drill: 1_000,
                size: 900
            })
        );
        assert!(pad()
            .with_drill(1_400)
            .is_err());
        assert_eq!(
            pad()
                .with_drill(1_200)
                .unwrap()
                .drill(),
            1_200
        );
    }

    #[rstest]
    #[case(ThtPadShape::Square)]
    #[case(ThtPadShape::Oval)]
    #[case(ThtPadShape::Octagon)]
    fn test_shapes_are_counter_clockwise(#[case] shape: ThtPadShape) {
        let pad = pad()
            .with_shape(shape)
            .with_rotation(Angle::from_degrees(30));

        for side in [BoardSide::Top, BoardSide::Unknown, BoardSide::Bottom] {
            assert!(pad.polygon(side).is_counter_clockwise());
        }
    }

    #[test]
    fn test_drill_polygon_centered() {
        let pad = pad().with_position(Point::new(5_000, 5_000));

        assert_eq!(
            pad.drill_polygon()
                .bounding_box()
                .center(),
            Point::new(5_000, 5_000)
        );
    }
}
