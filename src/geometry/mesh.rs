use crate::error::GeometryError;
use crate::geometry::polygon::Polygon;
use crate::spacial::Point;
use crate::spacial::UNITS_PER_MM;

/// Triangle mesh of a polygon, vertices in millimetres.
#[derive(Debug, Clone)]
pub struct PolygonMesh {
    pub vertices: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

/// Triangulates a polygon and its holes using the even-odd fill rule.
#[profiling::function]
pub fn tessellate_polygon(polygon: &Polygon) -> Result<PolygonMesh, GeometryError> {
    use lyon::path::Path;
    use lyon::tessellation::{BuffersBuilder, FillOptions, FillRule, FillTessellator, VertexBuffers};

    fn to_lyon(point: &Point) -> lyon::math::Point {
        let scale = UNITS_PER_MM as f32;
        lyon::math::point(point.x as f32 / scale, point.y as f32 / scale)
    }

    let mut path_builder = Path::builder();
    for outline in std::iter::once(&polygon.points).chain(polygon.holes.iter().map(|hole| &hole.points)) {
        if let Some(first) = outline.first() {
            path_builder.begin(to_lyon(first));
            for point in &outline[1..] {
                path_builder.line_to(to_lyon(point));
            }
            path_builder.close();
        }
    }
    let path = path_builder.build();

    let mut geometry: VertexBuffers<[f32; 2], u32> = VertexBuffers::new();
    let mut tessellator = FillTessellator::new();

    tessellator
        .tessellate_path(
            &path,
            &FillOptions::default().with_fill_rule(FillRule::EvenOdd),
            &mut BuffersBuilder::new(&mut geometry, |vertex: lyon::tessellation::FillVertex| {
                [vertex.position().x, vertex.position().y]
            }),
        )
        .map_err(|error| GeometryError::Tessellation(format!("{:?}", error)))?;

    Ok(PolygonMesh {
        vertices: geometry.vertices,
        indices: geometry.indices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_with_hole() {
        let mm = UNITS_PER_MM;
        let polygon = Polygon::new(vec![
            Point::new(0, 0),
            Point::new(10 * mm, 0),
            Point::new(10 * mm, 10 * mm),
            Point::new(0, 10 * mm),
        ])
        .with_hole(Polygon::new(vec![
            Point::new(4 * mm, 4 * mm),
            Point::new(6 * mm, 4 * mm),
            Point::new(6 * mm, 6 * mm),
            Point::new(4 * mm, 6 * mm),
        ]));

        let mesh = tessellate_polygon(&polygon).unwrap();

        assert_eq!(mesh.vertices.len(), 8);
        assert!(!mesh.indices.is_empty());
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn test_empty_polygon() {
        let mesh = tessellate_polygon(&Polygon::default()).unwrap();

        assert!(mesh.vertices.is_empty());
        assert!(mesh.indices.is_empty());
    }
}
