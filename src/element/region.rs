use crate::element::ElementGeometry;
use crate::error::{check_non_negative, GeometryError};
use crate::geometry::{offset_outline, Polygon};
use crate::layer::LayerSet;
use crate::polygon_builder::{self, RegionSegment};
use crate::spacial::Point;
use crate::types::BoardSide;

/// A filled area bounded by straight and arc edges, e.g. a copper pour or keep-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionElement {
    layer_set: LayerSet,
    segments: Vec<RegionSegment>,
    thickness: i32,
    clearance: i32,
}

impl RegionElement {
    pub fn new(layer_set: LayerSet, segments: Vec<RegionSegment>) -> Result<Self, GeometryError> {
        check_segments(&segments)?;
        Ok(Self {
            layer_set,
            segments,
            thickness: 0,
            clearance: 0,
        })
    }

    pub fn segments(&self) -> &[RegionSegment] {
        &self.segments
    }

    pub fn anchor(&self) -> Point {
        self.segments
            .first()
            .map(|segment| segment.position)
            .unwrap_or_default()
    }

    pub fn thickness(&self) -> i32 {
        self.thickness
    }

    /// Minimum distance kept to foreign copper.
    pub fn clearance(&self) -> i32 {
        self.clearance
    }

    pub fn with_segments(mut self, segments: Vec<RegionSegment>) -> Result<Self, GeometryError> {
        check_segments(&segments)?;
        self.segments = segments;
        Ok(self)
    }

    /// The border pen; the outline grows by half of it.
    pub fn with_thickness(mut self, thickness: i32) -> Result<Self, GeometryError> {
        check_non_negative("thickness", thickness)?;
        self.thickness = thickness;
        Ok(self)
    }

    pub fn with_clearance(mut self, clearance: i32) -> Result<Self, GeometryError> {
        check_non_negative("clearance", clearance)?;
        self.clearance = clearance;
        Ok(self)
    }
}

fn check_segments(segments: &[RegionSegment]) -> Result<(), GeometryError> {
    let has_arc = segments
        .iter()
        .any(|segment| segment.arc.is_some());
    match segments.len() >= 3 || (segments.len() == 2 && has_arc) {
        true => Ok(()),
        false => Err(GeometryError::TooFewSegments(segments.len())),
    }
}

impl ElementGeometry for RegionElement {
    fn layer_set(&self) -> &LayerSet {
        &self.layer_set
    }

    fn polygon(&self, _side: BoardSide) -> Polygon {
        let outline = polygon_builder::make_region_outline(&self.segments);
        Polygon::new(offset_outline(&outline, self.thickness / 2))
    }

    /// Grown by the larger of `spacing` and the region's own clearance.
    fn outline_polygon(&self, _side: BoardSide, spacing: i32) -> Polygon {
        let outline = polygon_builder::make_region_outline(&self.segments);
        Polygon::new(offset_outline(&outline, self.thickness / 2 + spacing.max(self.clearance)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoundingBox;
    use crate::layer::LayerId;
    use crate::types::Angle;

    fn square() -> Vec<RegionSegment> {
        vec![
            RegionSegment::line(Point::new(0, 0)),
            RegionSegment::line(Point::new(0, 1_000)),
            RegionSegment::line(Point::new(1_000, 1_000)),
            RegionSegment::line(Point::new(1_000, 0)),
        ]
    }

    fn region() -> RegionElement {
        RegionElement::new(LayerSet::single(LayerId::TOP_COPPER), square()).unwrap()
    }

    #[test]
    fn test_clockwise_input_is_normalised() {
        let polygon = region().polygon(BoardSide::Top);

        assert!(polygon.is_counter_clockwise());
        assert_eq!(polygon.len(), 4);
    }

    #[test]
    fn test_too_few_segments() {
        let two_lines = vec![RegionSegment::line(Point::ZERO), RegionSegment::line(Point::new(10, 0))];

        assert_eq!(
            RegionElement::new(LayerSet::empty(), two_lines),
            Err(GeometryError::TooFewSegments(2))
        );
        assert_eq!(
            region().with_segments(Vec::new()),
            Err(GeometryError::TooFewSegments(0))
        );
    }

    #[test]
    fn test_half_disc_from_two_segments() {
        let segments = vec![
            RegionSegment::arc(Point::new(1_000, 0), Angle::DEG_180),
            RegionSegment::line(Point::new(-1_000, 0)),
        ];

        let polygon = RegionElement::new(LayerSet::empty(), segments)
            .unwrap()
            .polygon(BoardSide::Top);

        assert!(polygon.is_counter_clockwise());
        assert_eq!(polygon.bounding_box().max.y, 1_000);
    }

    #[test]
    fn test_outline_uses_larger_of_spacing_and_clearance() {
        let element = region()
            .with_clearance(300)
            .unwrap();

        assert_eq!(
            element
                .outline_polygon(BoardSide::Top, 100)
                .bounding_box(),
            BoundingBox::new(Point::new(-300, -300), Point::new(1_300, 1_300))
        );
        assert_eq!(
            element
                .outline_polygon(BoardSide::Top, 500)
                .bounding_box(),
            BoundingBox::new(Point::new(-500, -500), Point::new(1_500, 1_500))
        );
    }

    #[test]
    fn test_thickness_grows_polygon() {
        let element = region()
            .with_thickness(200)
            .unwrap();

        assert_eq!(
            element
                .polygon(BoardSide::Top)
                .bounding_box(),
            BoundingBox::new(Point::new(-100, -100), Point::new(1_100, 1_100))
        );
    }
}
