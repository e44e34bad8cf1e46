use crate::element::ElementGeometry;
use crate::error::{check_positive, GeometryError};
use crate::geometry::{sin_cos, Polygon};
use crate::layer::LayerSet;
use crate::polygon_builder;
use crate::spacial::Point;
use crate::types::{Angle, BoardSide};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineCap {
    #[default]
    Round,
    Flat,
}

/// A circular trace segment.
///
/// The sweep is signed, positive sweeps run counter-clockwise from `start_angle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcElement {
    layer_set: LayerSet,
    center: Point,
    radius: i32,
    start_angle: Angle,
    sweep: Angle,
    thickness: i32,
    line_cap: LineCap,
}

impl ArcElement {
    pub fn new(
        layer_set: LayerSet,
        center: Point,
        radius: i32,
        start_angle: Angle,
        sweep: Angle,
        thickness: i32,
    ) -> Result<Self, GeometryError> {
        check_positive("radius", radius)?;
        check_positive("thickness", thickness)?;
        Ok(Self {
            layer_set,
            center,
            radius,
            start_angle,
            sweep,
            thickness,
            line_cap: LineCap::Round,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn start_angle(&self) -> Angle {
        self.start_angle
    }

    pub fn sweep(&self) -> Angle {
        self.sweep
    }

    pub fn thickness(&self) -> i32 {
        self.thickness
    }

    pub fn line_cap(&self) -> LineCap {
        self.line_cap
    }

    pub fn start_point(&self) -> Point {
        self.point_at(self.start_angle)
    }

    pub fn end_point(&self) -> Point {
        self.point_at(self.start_angle + self.sweep)
    }

    fn point_at(&self, angle: Angle) -> Point {
        let (sin, cos) = sin_cos(angle);
        Point::from_f64(
            self.center.x as f64 + self.radius as f64 * cos,
            self.center.y as f64 + self.radius as f64 * sin,
        )
    }

    pub fn with_radius(mut self, radius: i32) -> Result<Self, GeometryError> {
        check_positive("radius", radius)?;
        self.radius = radius;
        Ok(self)
    }

    pub fn with_thickness(mut self, thickness: i32) -> Result<Self, GeometryError> {
        check_positive("thickness", thickness)?;
        self.thickness = thickness;
        Ok(self)
    }

    pub fn with_angles(mut self, start_angle: Angle, sweep: Angle) -> Self {
        self.start_angle = start_angle;
        self.sweep = sweep;
        self
    }

    pub fn with_line_cap(mut self, line_cap: LineCap) -> Self {
        self.line_cap = line_cap;
        self
    }

    fn trace(&self, thickness: i32) -> Polygon {
        Polygon::new(polygon_builder::make_arc_trace(
            self.center,
            self.radius,
            self.start_angle,
            self.sweep,
            thickness,
            self.line_cap == LineCap::Round,
        ))
    }
}

impl ElementGeometry for ArcElement {
    fn layer_set(&self) -> &LayerSet {
        &self.layer_set
    }

    fn polygon(&self, _side: BoardSide) -> Polygon {
        self.trace(self.thickness)
    }

    fn outline_polygon(&self, _side: BoardSide, spacing: i32) -> Polygon {
        self.trace(self.thickness + 2 * spacing)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::layer::LayerId;

    fn arc(start: Angle, sweep: Angle) -> ArcElement {
        ArcElement::new(LayerSet::single(LayerId::TOP_COPPER), Point::ZERO, 10_000, start, sweep, 1_000).unwrap()
    }

    #[rstest]
    #[case(Angle::ZERO, Angle::DEG_90, Point::new(10_000, 0), Point::new(0, 10_000))]
    #[case(Angle::DEG_90, Angle::DEG_180, Point::new(0, 10_000), Point::new(0, -10_000))]
    #[case(Angle::ZERO, -Angle::DEG_90, Point::new(10_000, 0), Point::new(0, -10_000))]
    fn test_end_points(#[case] start: Angle, #[case] sweep: Angle, #[case] from: Point, #[case] to: Point) {
        let element = arc(start, sweep);

        assert_eq!(element.start_point(), from);
        assert_eq!(element.end_point(), to);
    }

    #[test]
    fn test_validation() {
        let layers = LayerSet::single(LayerId::TOP_COPPER);

        assert!(ArcElement::new(layers.clone(), Point::ZERO, 0, Angle::ZERO, Angle::DEG_90, 100).is_err());
        assert!(ArcElement::new(layers, Point::ZERO, 100, Angle::ZERO, Angle::DEG_90, 0).is_err());
        assert!(arc(Angle::ZERO, Angle::DEG_90)
            .with_radius(-1)
            .is_err());
    }

    #[test]
    fn test_flat_caps_have_fewer_points() {
        let round = arc(Angle::ZERO, Angle::DEG_90);
        let flat = round
            .clone()
            .with_line_cap(LineCap::Flat);

        assert!(flat.polygon(BoardSide::Top).len() < round.polygon(BoardSide::Top).len());
        assert!(flat.polygon(BoardSide::Top).is_counter_clockwise());
    }

    #[test]
    fn test_bounding_box_covers_thickness() {
        let bbox = arc(Angle::ZERO, Angle::DEG_90).bounding_box(BoardSide::Top);

        assert!(bbox.contains(Point::new(10_500, 0)));
        assert!(bbox.contains(Point::new(0, 10_500)));
        assert!(!bbox.contains(Point::new(-1_000, -1_000)));
    }
}
