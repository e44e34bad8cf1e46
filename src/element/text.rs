use crate::element::ElementGeometry;
use crate::error::{check_positive, GeometryError};
use crate::geometry::{BoundingBox, Polygon, Transformation};
use crate::layer::LayerSet;
use crate::polygon_builder;
use crate::spacial::Point;
use crate::types::{Angle, BoardSide};

/// Turns a string into stroke segments.
///
/// Glyph shapes come from a font that lives outside this crate, so callers pass an
/// implementation explicitly to [`TextElement::glyph_polygons`].
pub trait TextLayout {
    /// Stroke centre lines for `text` at cap `height`, with the origin at the start of the
    /// baseline and text running along +X.
    fn strokes(&self, text: &str, height: i32) -> Vec<(Point, Point)>;

    /// Width of the laid out `text`, used for alignment.
    fn advance(&self, text: &str, height: i32) -> i32;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    #[default]
    Bottom,
    Middle,
    Top,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextElement {
    layer_set: LayerSet,
    position: Point,
    value: String,
    height: i32,
    thickness: i32,
    rotation: Angle,
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
}

impl TextElement {
    pub fn new(
        layer_set: LayerSet,
        position: Point,
        value: impl Into<String>,
        height: i32,
        thickness: i32,
    ) -> Result<Self, GeometryError> {
        check_positive("height", height)?;
        check_positive("thickness", thickness)?;
        Ok(Self {
            layer_set,
            position,
            value: value.into(),
            height,
            thickness,
            rotation: Angle::ZERO,
            horizontal: HorizontalAlignment::default(),
            vertical: VerticalAlignment::default(),
        })
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn thickness(&self) -> i32 {
        self.thickness
    }

    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    pub fn alignment(&self) -> (HorizontalAlignment, VerticalAlignment) {
        (self.horizontal, self.vertical)
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Angle) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_alignment(mut self, horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        self.horizontal = horizontal;
        self.vertical = vertical;
        self
    }

    pub fn with_height(mut self, height: i32) -> Result<Self, GeometryError> {
        check_positive("height", height)?;
        self.height = height;
        Ok(self)
    }

    pub fn with_thickness(mut self, thickness: i32) -> Result<Self, GeometryError> {
        check_positive("thickness", thickness)?;
        self.thickness = thickness;
        Ok(self)
    }

    /// Maps layout coordinates to element coordinates: align, rotate, then move to `position`.
    fn layout_transformation(&self, layout: &dyn TextLayout) -> Transformation {
        let advance = layout.advance(&self.value, self.height);
        let dx = match self.horizontal {
            HorizontalAlignment::Left => 0,
            HorizontalAlignment::Center => -advance / 2,
            HorizontalAlignment::Right => -advance,
        };
        let dy = match self.vertical {
            VerticalAlignment::Bottom => 0,
            VerticalAlignment::Middle => -self.height / 2,
            VerticalAlignment::Top => -self.height,
        };

        Transformation::identity()
            .translate(Point::new(dx, dy))
            .rotate(Point::ZERO, self.rotation)
            .translate(self.position)
    }

    /// One rounded trace per stroke of the laid out text.
    pub fn glyph_polygons(&self, layout: &dyn TextLayout) -> Vec<Polygon> {
        let transformation = self.layout_transformation(layout);

        layout
            .strokes(&self.value, self.height)
            .into_iter()
            .map(|(start, end)| {
                Polygon::new(polygon_builder::make_line_trace(
                    transformation.apply_to_point(start),
                    transformation.apply_to_point(end),
                    self.thickness,
                    true,
                ))
            })
            .collect()
    }

    pub fn glyph_bounding_box(&self, layout: &dyn TextLayout) -> BoundingBox {
        let mut bbox = BoundingBox::default();
        for polygon in self.glyph_polygons(layout) {
            bbox.expand(&polygon.bounding_box());
        }
        bbox
    }
}

/// Text has no geometry without a [`TextLayout`]; use [`TextElement::glyph_polygons`].
impl ElementGeometry for TextElement {
    fn layer_set(&self) -> &LayerSet {
        &self.layer_set
    }

    fn polygon(&self, _side: BoardSide) -> Polygon {
        Polygon::default()
    }

    fn outline_polygon(&self, _side: BoardSide, _spacing: i32) -> Polygon {
        Polygon::default()
    }

    fn bounding_box(&self, _side: BoardSide) -> BoundingBox {
        BoundingBox::default()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::layer::LayerId;

    /// Every character is a vertical bar, one `height` apart.
    struct BarFont;

    impl TextLayout for BarFont {
        fn strokes(&self, text: &str, height: i32) -> Vec<(Point, Point)> {
            (0..text.chars().count() as i32)
                .map(|index| (Point::new(index * height, 0), Point::new(index * height, height)))
                .collect()
        }

        fn advance(&self, text: &str, height: i32) -> i32 {
            (text.chars().count() as i32 - 1).max(0) * height
        }
    }

    fn text() -> TextElement {
        TextElement::new(LayerSet::single(LayerId::TOP_SILKSCREEN), Point::new(10_000, 0), "ABC", 1_000, 100).unwrap()
    }

    #[test]
    fn test_polygon_is_empty_without_layout() {
        assert!(text()
            .polygon(BoardSide::Top)
            .is_empty());
        assert!(text()
            .bounding_box(BoardSide::Top)
            .is_empty());
    }

    #[test]
    fn test_one_polygon_per_stroke() {
        let polygons = text().glyph_polygons(&BarFont);

        assert_eq!(polygons.len(), 3);
        assert_eq!(
            text().glyph_bounding_box(&BarFont),
            BoundingBox::new(Point::new(9_950, -50), Point::new(12_050, 1_050))
        );
    }

    #[rstest]
    #[case(HorizontalAlignment::Left, VerticalAlignment::Bottom, Point::new(9_950, -50))]
    #[case(HorizontalAlignment::Center, VerticalAlignment::Middle, Point::new(8_950, -550))]
    #[case(HorizontalAlignment::Right, VerticalAlignment::Top, Point::new(7_950, -1_050))]
    fn test_alignment(#[case] horizontal: HorizontalAlignment, #[case] vertical: VerticalAlignment, #[case] min: Point) {
        let bbox = text()
            .with_alignment(horizontal, vertical)
            .glyph_bounding_box(&BarFont);

        assert_eq!(bbox.min, min);
    }

    #[test]
    fn test_rotation() {
        let bbox = text()
            .with_rotation(Angle::DEG_90)
            .glyph_bounding_box(&BarFont);

        assert_eq!(bbox, BoundingBox::new(Point::new(8_950, -50), Point::new(10_050, 2_050)));
    }

    #[test]
    fn test_validation() {
        assert!(TextElement::new(LayerSet::empty(), Point::ZERO, "", 0, 100).is_err());
        assert!(text()
            .with_thickness(0)
            .is_err());
    }
}
