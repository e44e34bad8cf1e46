//! Pure polygon generation.
//!
//! Every function returns a newly allocated, counter-clockwise point sequence and has no side
//! effects, so the builders can be called concurrently from any thread.
//!
//! No validation happens here, that is the job of the element constructors. Degenerate input
//! (zero radius, zero length, zero sweep) produces minimal output instead of an error.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::geometry::{arc_center, sin_cos, Transformation};
use crate::spacial::deduplicate::Dedup;
use crate::spacial::{Point, Size};
use crate::types::{Angle, Winding};

/// Number of facets used to approximate a full circle.
pub const SEGMENTS_PER_CIRCLE: u32 = 32;

/// Number of facets for an arc of `sweep`: `max(1, floor(|sweep| * 32 / 360°))`.
pub fn arc_segments(sweep: Angle) -> usize {
    let segments =
        sweep.hundredths().unsigned_abs() as u64 * SEGMENTS_PER_CIRCLE as u64 / Angle::FULL_TURN as u64;
    segments.max(1) as usize
}

/// Appends the vertices of an arc to `points`.
///
/// The sine and cosine of a single step are evaluated once, the running radius vector is then
/// rotated by that step for each further vertex.
fn push_arc_points(
    points: &mut Vec<Point>,
    (cx, cy): (f64, f64),
    radius: f64,
    (sin_start, cos_start): (f64, f64),
    sweep_radians: f64,
    segments: usize,
    discard_last: bool,
) {
    let count = match discard_last {
        true => segments,
        false => segments + 1,
    };
    let (sin_step, cos_step) = (sweep_radians / segments as f64).sin_cos();

    let mut x = radius * cos_start;
    let mut y = radius * sin_start;

    points.reserve(count);
    for _ in 0..count {
        points.push(Point::from_f64(cx + x, cy + y));

        let next_x = x * cos_step - y * sin_step;
        y = x * sin_step + y * cos_step;
        x = next_x;
    }
}

fn center_of(point: Point) -> (f64, f64) {
    (point.x as f64, point.y as f64)
}

/// Points of an arc around `center`, starting at `start_angle` and sweeping `sweep_angle`.
///
/// `discard_last` drops the final vertex so that chained arcs share end points without
/// duplicating them. A zero radius collapses the arc to the single point `center`, which is
/// also the last vertex.
#[cfg_attr(feature = "profile-builders", profiling::function)]
pub fn make_arc(center: Point, radius: i32, start_angle: Angle, sweep_angle: Angle, discard_last: bool) -> Vec<Point> {
    if radius <= 0 {
        return match discard_last {
            true => Vec::new(),
            false => vec![center],
        };
    }

    let mut points = Vec::new();
    push_arc_points(
        &mut points,
        center_of(center),
        radius as f64,
        sin_cos(start_angle),
        sweep_angle.to_radians(),
        arc_segments(sweep_angle),
        discard_last,
    );
    points
}

/// A 32-sided regular polygon approximating a circle.
#[cfg_attr(feature = "profile-builders", profiling::function)]
pub fn make_circle(center: Point, radius: i32) -> Vec<Point> {
    make_regular_polygon(SEGMENTS_PER_CIRCLE as usize, center, radius, Angle::ZERO)
}

/// A regular polygon whose first vertex lies at `rotation` from the positive X axis.
#[cfg_attr(feature = "profile-builders", profiling::function)]
pub fn make_regular_polygon(sides: usize, center: Point, radius: i32, rotation: Angle) -> Vec<Point> {
    if sides == 0 {
        return Vec::new();
    }
    if radius <= 0 {
        return vec![center];
    }

    let mut points = Vec::new();
    push_arc_points(
        &mut points,
        center_of(center),
        radius as f64,
        sin_cos(rotation),
        2.0 * PI,
        sides,
        true,
    );
    points
}

/// A rectangle centred on `position`, optionally with rounded corners.
///
/// Rotations by multiples of 90° exchange width and height instead of rotating the points.
#[cfg_attr(feature = "profile-builders", profiling::function)]
pub fn make_rectangle(position: Point, size: Size, corner_radius: i32, rotation: Angle) -> Vec<Point> {
    if rotation.is_orthogonal() {
        let size = match rotation.is_vertical() {
            true => size.swapped(),
            false => size,
        };
        return axis_aligned_rectangle(position, size, corner_radius);
    }

    let mut points = axis_aligned_rectangle(position, size, corner_radius);
    Transformation::identity()
        .rotate(position, rotation)
        .apply_to_points(&mut points);
    points
}

fn axis_aligned_rectangle(position: Point, size: Size, corner_radius: i32) -> Vec<Point> {
    let x1 = position.x - size.width / 2;
    let y1 = position.y - size.height / 2;
    let x2 = x1 + size.width;
    let y2 = y1 + size.height;

    if corner_radius <= 0 {
        return vec![
            Point::new(x2, y2),
            Point::new(x1, y2),
            Point::new(x1, y1),
            Point::new(x2, y1),
        ];
    }

    let r = corner_radius;
    let corners = [
        (Point::new(x2 - r, y2 - r), Angle::ZERO),
        (Point::new(x1 + r, y2 - r), Angle::DEG_90),
        (Point::new(x1 + r, y1 + r), Angle::DEG_180),
        (Point::new(x2 - r, y1 + r), Angle::DEG_270),
    ];

    let mut points = Vec::new();
    for (center, start) in corners {
        points.extend(make_arc(center, r, start, Angle::DEG_90, false));
    }

    // fully rounded sides make neighbouring corner arcs meet
    points.dedup_adjacent()
}

/// A rectangle with semicircular ends, the radius being half of the smaller side.
pub fn make_obround(position: Point, size: Size, rotation: Angle) -> Vec<Point> {
    make_rectangle(position, size, size.min_dimension() / 2, rotation)
}

/// A rectangle with its corners cut at 45°, sized so a square input yields a regular octagon.
pub fn make_octagon(position: Point, size: Size, rotation: Angle) -> Vec<Point> {
    let size = match rotation.is_orthogonal() && rotation.is_vertical() {
        true => size.swapped(),
        false => size,
    };
    let chamfer = (size.min_dimension() as f64 * (2.0 - std::f64::consts::SQRT_2) / 2.0).round() as i32;

    let x1 = position.x - size.width / 2;
    let y1 = position.y - size.height / 2;
    let x2 = x1 + size.width;
    let y2 = y1 + size.height;

    let mut points = vec![
        Point::new(x2, y2 - chamfer),
        Point::new(x2 - chamfer, y2),
        Point::new(x1 + chamfer, y2),
        Point::new(x1, y2 - chamfer),
        Point::new(x1, y1 + chamfer),
        Point::new(x1 + chamfer, y1),
        Point::new(x2 - chamfer, y1),
        Point::new(x2, y1 + chamfer),
    ];
    if !rotation.is_orthogonal() {
        Transformation::identity()
            .rotate(position, rotation)
            .apply_to_points(&mut points);
    }
    points
}

/// A 12-point plus shape: a horizontal bar of `size.width` and a vertical bar of `size.height`,
/// both `thickness` wide.
#[cfg_attr(feature = "profile-builders", profiling::function)]
pub fn make_cross(position: Point, size: Size, thickness: i32, rotation: Angle) -> Vec<Point> {
    if rotation.is_orthogonal() {
        let size = match rotation.is_vertical() {
            true => size.swapped(),
            false => size,
        };
        return axis_aligned_cross(position, size, thickness);
    }

    let mut points = axis_aligned_cross(position, size, thickness);
    Transformation::identity()
        .rotate(position, rotation)
        .apply_to_points(&mut points);
    points
}

fn axis_aligned_cross(position: Point, size: Size, thickness: i32) -> Vec<Point> {
    let hw = size.width / 2;
    let hh = size.height / 2;
    let ht = thickness / 2;

    [
        (hw, ht),
        (ht, ht),
        (ht, hh),
        (-ht, hh),
        (-ht, ht),
        (-hw, ht),
        (-hw, -ht),
        (-ht, -ht),
        (-ht, -hh),
        (ht, -hh),
        (ht, -ht),
        (hw, -ht),
    ]
    .into_iter()
    .map(|(dx, dy)| position.offset(dx, dy))
    .collect()
}

/// The outline of a straight trace of `thickness` from `start` to `end`.
///
/// With rounded caps the outline is a stadium made of two 180° arcs, otherwise the ends are cut
/// square at the end points.
#[cfg_attr(feature = "profile-builders", profiling::function)]
pub fn make_line_trace(start: Point, end: Point, thickness: i32, rounded_caps: bool) -> Vec<Point> {
    if thickness <= 0 {
        return vec![start, end].dedup_adjacent();
    }

    let radius = thickness as f64 / 2.0;
    let direction = ((end.y - start.y) as f64).atan2((end.x - start.x) as f64);

    if !rounded_caps {
        let (sin_d, cos_d) = direction.sin_cos();
        let (nx, ny) = (-sin_d * radius, cos_d * radius);
        let (sx, sy) = center_of(start);
        let (ex, ey) = center_of(end);

        return vec![
            Point::from_f64(ex - nx, ey - ny),
            Point::from_f64(ex + nx, ey + ny),
            Point::from_f64(sx + nx, sy + ny),
            Point::from_f64(sx - nx, sy - ny),
        ];
    }

    let half_turn = arc_segments(Angle::DEG_180);
    let mut points = Vec::with_capacity((half_turn + 1) * 2);
    push_arc_points(
        &mut points,
        center_of(end),
        radius,
        (direction - FRAC_PI_2).sin_cos(),
        PI,
        half_turn,
        false,
    );
    push_arc_points(
        &mut points,
        center_of(start),
        radius,
        (direction + FRAC_PI_2).sin_cos(),
        PI,
        half_turn,
        false,
    );

    // zero length traces collapse into a circle
    points.dedup_adjacent()
}

/// The outline of an arc shaped trace: the outer arc forwards, then the inner arc backwards.
///
/// Negative sweeps are traced from the other end so the outline stays counter-clockwise.
#[cfg_attr(feature = "profile-builders", profiling::function)]
pub fn make_arc_trace(
    center: Point,
    radius: i32,
    start_angle: Angle,
    sweep_angle: Angle,
    thickness: i32,
    rounded_caps: bool,
) -> Vec<Point> {
    let (start_angle, sweep_angle) = match sweep_angle.hundredths() < 0 {
        true => (start_angle + sweep_angle, -sweep_angle),
        false => (start_angle, sweep_angle),
    };

    let half = thickness.max(0) as f64 / 2.0;
    let outer = radius as f64 + half;
    let inner = (radius as f64 - half).max(0.0);
    let rounded_caps = rounded_caps && half > 0.0;

    let segments = arc_segments(sweep_angle);
    let start_radians = start_angle.to_radians();
    let sweep_radians = sweep_angle.to_radians();
    let end_angle = start_angle + sweep_angle;
    let (sin_start, cos_start) = sin_cos(start_angle);
    let (sin_end, cos_end) = sin_cos(end_angle);
    let (cx, cy) = center_of(center);
    let half_turn = arc_segments(Angle::DEG_180);

    let mut points = Vec::with_capacity(segments * 2 + half_turn * 2 + 2);

    push_arc_points(&mut points, (cx, cy), outer, (sin_start, cos_start), sweep_radians, segments, rounded_caps);

    if rounded_caps {
        let cap_center = (cx + radius as f64 * cos_end, cy + radius as f64 * sin_end);
        push_arc_points(&mut points, cap_center, half, (sin_end, cos_end), PI, half_turn, true);
    }

    push_arc_points(&mut points, (cx, cy), inner, (sin_end, cos_end), -sweep_radians, segments, rounded_caps);

    if rounded_caps {
        let cap_center = (cx + radius as f64 * cos_start, cy + radius as f64 * sin_start);
        push_arc_points(
            &mut points,
            cap_center,
            half,
            (start_radians + PI).sin_cos(),
            PI,
            half_turn,
            true,
        );
    }

    points.dedup_adjacent()
}

/// One vertex of a region outline; `arc` bulges the edge to the next vertex into an arc of the
/// given sweep (counter-clockwise positive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSegment {
    pub position: Point,
    pub arc: Option<Angle>,
}

impl RegionSegment {
    pub fn line(position: Point) -> Self {
        Self {
            position,
            arc: None,
        }
    }

    pub fn arc(position: Point, sweep: Angle) -> Self {
        Self {
            position,
            arc: Some(sweep),
        }
    }
}

/// The closed outline through all segment vertices, normalised to counter-clockwise winding.
#[cfg_attr(feature = "profile-builders", profiling::function)]
pub fn make_region_outline(segments: &[RegionSegment]) -> Vec<Point> {
    let n = segments.len();
    let mut points = Vec::with_capacity(n);

    for (index, segment) in segments.iter().enumerate() {
        let next = segments[(index + 1) % n].position;

        let bulge = segment
            .arc
            .and_then(|sweep| arc_center(segment.position, next, sweep).map(|center| (sweep, center)));

        match bulge {
            Some((sweep, (cx, cy))) => {
                let (dx, dy) = (segment.position.x as f64 - cx, segment.position.y as f64 - cy);
                let radius = dx.hypot(dy);
                push_arc_points(
                    &mut points,
                    (cx, cy),
                    radius,
                    (dy / radius, dx / radius),
                    sweep.to_radians(),
                    arc_segments(sweep),
                    true,
                );
            }
            None => points.push(segment.position),
        }
    }

    let mut points = points.dedup_adjacent();
    if Winding::from_points(&points) == Winding::Clockwise {
        points.reverse();
    }
    points
}
