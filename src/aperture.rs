use log::warn;

use crate::error::{check_positive, check_size, GeometryError};
use crate::geometry::Polygon;
use crate::polygon_builder;
use crate::spacial::{Point, Size};
use crate::types::Angle;

/// A reusable stamp shape, flashed at a point by CAM output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aperture {
    Circle(CircleAperture),
    Rectangle(RectangleAperture),
    Obround(RectangleAperture),
    Polygon(PolygonAperture),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircleAperture {
    pub diameter: i32,
    pub hole_diameter: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RectangleAperture {
    pub size: Size,
    pub hole_diameter: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolygonAperture {
    pub diameter: i32,
    pub vertices: u32,
    pub rotation: Angle,
    pub hole_diameter: Option<i32>,
}

impl Aperture {
    pub const MIN_POLYGON_VERTICES: u32 = 3;
    pub const MAX_POLYGON_VERTICES: u32 = 12;

    /// A round aperture.
    ///
    /// A zero diameter is accepted: some CAM files define zero-size round apertures for
    /// outlines that carry no copper, and rejecting them would break loading those files.
    pub fn circle(diameter: i32) -> Result<Self, GeometryError> {
        if diameter == 0 {
            warn!("accepting zero diameter round aperture");
        } else {
            check_positive("diameter", diameter)?;
        }
        Ok(Aperture::Circle(CircleAperture {
            diameter,
            hole_diameter: None,
        }))
    }

    pub fn rectangle(size: Size) -> Result<Self, GeometryError> {
        check_size(size)?;
        Ok(Aperture::Rectangle(RectangleAperture {
            size,
            hole_diameter: None,
        }))
    }

    pub fn obround(size: Size) -> Result<Self, GeometryError> {
        check_size(size)?;
        Ok(Aperture::Obround(RectangleAperture {
            size,
            hole_diameter: None,
        }))
    }

    pub fn polygon(diameter: i32, vertices: u32, rotation: Angle) -> Result<Self, GeometryError> {
        check_positive("diameter", diameter)?;
        if !(Self::MIN_POLYGON_VERTICES..=Self::MAX_POLYGON_VERTICES).contains(&vertices) {
            return Err(GeometryError::VertexCountOutOfRange(vertices));
        }
        Ok(Aperture::Polygon(PolygonAperture {
            diameter,
            vertices,
            rotation,
            hole_diameter: None,
        }))
    }

    /// Adds a round hole; the hole must be smaller than the smallest outer dimension.
    pub fn with_hole(mut self, hole_diameter: i32) -> Result<Self, GeometryError> {
        check_positive("hole diameter", hole_diameter)?;
        let outer = self.min_dimension();
        if hole_diameter >= outer {
            return Err(GeometryError::DrillTooLarge {
                drill: hole_diameter,
                size: outer,
            });
        }

        match &mut self {
            Aperture::Circle(circle) => circle.hole_diameter = Some(hole_diameter),
            Aperture::Rectangle(rectangle) | Aperture::Obround(rectangle) => {
                rectangle.hole_diameter = Some(hole_diameter)
            }
            Aperture::Polygon(polygon) => polygon.hole_diameter = Some(hole_diameter),
        }
        Ok(self)
    }

    fn min_dimension(&self) -> i32 {
        match self {
            Aperture::Circle(circle) => circle.diameter,
            Aperture::Rectangle(rectangle) | Aperture::Obround(rectangle) => rectangle.size.min_dimension(),
            Aperture::Polygon(polygon) => polygon.diameter,
        }
    }

    pub fn hole_diameter(&self) -> Option<i32> {
        match self {
            Aperture::Circle(circle) => circle.hole_diameter,
            Aperture::Rectangle(rectangle) | Aperture::Obround(rectangle) => rectangle.hole_diameter,
            Aperture::Polygon(polygon) => polygon.hole_diameter,
        }
    }

    /// The shape this aperture leaves when flashed at `position`.
    pub fn flash_polygon(&self, position: Point) -> Polygon {
        let points = match self {
            Aperture::Circle(circle) => polygon_builder::make_circle(position, circle.diameter / 2),
            Aperture::Rectangle(rectangle) => polygon_builder::make_rectangle(position, rectangle.size, 0, Angle::ZERO),
            Aperture::Obround(rectangle) => polygon_builder::make_obround(position, rectangle.size, Angle::ZERO),
            Aperture::Polygon(polygon) => polygon_builder::make_regular_polygon(
                polygon.vertices as usize,
                position,
                polygon.diameter / 2,
                polygon.rotation,
            ),
        };

        let mut flash = Polygon::new(points);
        if let Some(hole_diameter) = self.hole_diameter() {
            flash = flash.with_hole(Polygon::new(polygon_builder::make_circle(position, hole_diameter / 2)));
        }
        flash
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_zero_diameter_circle_is_accepted() {
        let aperture = Aperture::circle(0).unwrap();

        assert_eq!(aperture.flash_polygon(Point::new(3, 4)).points, vec![Point::new(3, 4)]);
    }

    #[test]
    fn test_negative_diameter_circle_is_rejected() {
        assert_eq!(
            Aperture::circle(-1),
            Err(GeometryError::NonPositiveDimension {
                name: "diameter",
                value: -1
            })
        );
    }

    #[rstest]
    #[case(2, false)]
    #[case(3, true)]
    #[case(12, true)]
    #[case(13, false)]
    fn test_polygon_vertex_count(#[case] vertices: u32, #[case] valid: bool) {
        let result = Aperture::polygon(1000, vertices, Angle::ZERO);

        match valid {
            true => assert_eq!(
                result
                    .unwrap()
                    .flash_polygon(Point::ZERO)
                    .len(),
                vertices as usize
            ),
            false => assert_eq!(result, Err(GeometryError::VertexCountOutOfRange(vertices))),
        }
    }

    #[rstest]
    #[case(Size::new(0, 10))]
    #[case(Size::new(10, -1))]
    fn test_rectangle_requires_positive_size(#[case] size: Size) {
        assert!(Aperture::rectangle(size).is_err());
        assert!(Aperture::obround(size).is_err());
    }

    #[test]
    fn test_hole_must_be_smaller_than_outer() {
        let aperture = Aperture::rectangle(Size::new(1000, 600)).unwrap();

        assert_eq!(
            aperture.clone().with_hole(600),
            Err(GeometryError::DrillTooLarge {
                drill: 600,
                size: 600
            })
        );

        let flash = aperture
            .with_hole(300)
            .unwrap()
            .flash_polygon(Point::ZERO);
        assert_eq!(flash.points.len(), 4);
        assert_eq!(flash.holes.len(), 1);
        assert!(flash.holes[0].is_counter_clockwise());
    }
}
