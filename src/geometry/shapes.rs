use crate::spacial::Point;
use crate::types::Angle;

pub fn is_convex(vertices: &[Point]) -> bool {
    if vertices.len() < 3 {
        return true;
    }

    let n = vertices.len();
    let mut sign = 0;

    for i in 0..n {
        let p1 = vertices[i];
        let p2 = vertices[(i + 1) % n];
        let p3 = vertices[(i + 2) % n];

        let v1 = p2 - p1;
        let v2 = p3 - p2;

        // Cross product in 2D
        let cross = v1.x as i64 * v2.y as i64 - v1.y as i64 * v2.x as i64;

        if cross == 0 {
            continue;
        }
        if sign == 0 {
            sign = if cross > 0 { 1 } else { -1 };
        } else if (cross > 0 && sign < 0) || (cross < 0 && sign > 0) {
            return false;
        }
    }

    true
}

/// Centre of the circular arc that runs from `start` to `end` sweeping `sweep`
/// (counter-clockwise positive).
///
/// Returns `None` for a zero sweep or coincident end points.
pub fn arc_center(start: Point, end: Point, sweep: Angle) -> Option<(f64, f64)> {
    if sweep.is_zero() || start == end {
        return None;
    }

    let (sx, sy) = (start.x as f64, start.y as f64);
    let (ex, ey) = (end.x as f64, end.y as f64);
    let (dx, dy) = (ex - sx, ey - sy);
    let chord = dx.hypot(dy);

    // distance from the chord midpoint to the centre, along the left normal of the chord
    let half_sweep = sweep.to_radians() / 2.0;
    let distance = (chord / 2.0) / half_sweep.tan();

    let (nx, ny) = (-dy / chord, dx / chord);
    let (mx, my) = ((sx + ex) / 2.0, (sy + ey) / 2.0);

    Some((mx + nx * distance, my + ny * distance))
}

/// Moves every vertex of a closed counter-clockwise outline outwards by `distance`, along the
/// miter of its two adjacent edges.
///
/// This is a vertex offset, not a boolean engine; self-intersections of strongly concave
/// outlines are not resolved.
pub fn offset_outline(points: &[Point], distance: i32) -> Vec<Point> {
    let n = points.len();
    if n < 3 || distance == 0 {
        return points.to_vec();
    }

    // the miter length is clamped for very sharp corners
    const MAX_MITER: f64 = 4.0;

    let distance = distance as f64;
    let mut result = Vec::with_capacity(n);

    for i in 0..n {
        let previous = points[(i + n - 1) % n];
        let current = points[i];
        let next = points[(i + 1) % n];

        let (n1x, n1y) = outward_normal(previous, current);
        let (n2x, n2y) = outward_normal(current, next);

        let (bx, by) = (n1x + n2x, n1y + n2y);
        let length = bx.hypot(by);
        if length < f64::EPSILON {
            result.push(Point::from_f64(
                current.x as f64 + n1x * distance,
                current.y as f64 + n1y * distance,
            ));
            continue;
        }

        // 1 / cos(half the turn angle)
        let cos_half = (bx * n1x + by * n1y) / length;
        let miter = (1.0 / cos_half.max(1.0 / MAX_MITER)).min(MAX_MITER);
        let scale = distance * miter / length;

        result.push(Point::from_f64(
            current.x as f64 + bx * scale,
            current.y as f64 + by * scale,
        ));
    }

    result
}

/// The unit normal on the right hand side of the edge `from` → `to`, which points outwards for
/// counter-clockwise outlines.
fn outward_normal(from: Point, to: Point) -> (f64, f64) {
    let (dx, dy) = ((to.x - from.x) as f64, (to.y - from.y) as f64);
    let length = dx.hypot(dy);
    if length < f64::EPSILON {
        return (0.0, 0.0);
    }
    (dy / length, -dx / length)
}
