//! Fixtures and assertions shared by integration tests and benchmarks.

use crate::board::{Board, ComponentId, ElementId, ItemRef, Part, PartId, SignalId};
use crate::element::{LineElement, SmdPadElement};
use crate::layer::{LayerId, LayerSet};
use crate::spacial::{mm_to_units, Point, Size};
use crate::types::{signed_area_x2, Angle, BoardSide, Ratio};

/// Handles into the board built by [`sample_board`].
pub struct SampleBoard {
    pub board: Board,
    pub component: ComponentId,
    pub pads: [ElementId; 2],
    pub parts: [PartId; 2],
    pub trace: ElementId,
    pub signal: SignalId,
}

/// Two placements of a three element resistor footprint, plus one free trace.
///
/// * `R1` at (10mm, 10mm) on top, unrotated.
/// * `R2` at (20mm, 10mm) on the bottom, rotated by 90°.
/// * A 0.25mm trace from `R1` pad 2 to (15mm, 10mm).
/// * Signal `N1` connects the trace and `R1` pad 2.
pub fn sample_board() -> SampleBoard {
    let mut board = Board::with_default_layers("sample");
    let top = LayerSet::single(LayerId::TOP_COPPER);

    let component = board.add_component("R0805");
    let pad = |name: &str, x: f64| {
        SmdPadElement::new(name, top.clone(), Point::from_mm(x, 0.0), Size::from_mm(1.0, 1.3))
            .map(|pad| pad.with_roundness(Ratio::HALF))
    };
    let pads = [
        board
            .add_component_element(component, pad("1", -0.9).unwrap())
            .unwrap(),
        board
            .add_component_element(component, pad("2", 0.9).unwrap())
            .unwrap(),
    ];
    board
        .add_component_element(
            component,
            LineElement::new(
                LayerSet::single(LayerId::TOP_SILKSCREEN),
                Point::from_mm(-0.2, 0.8),
                Point::from_mm(0.2, 0.8),
                mm_to_units(0.15),
            )
            .unwrap(),
        )
        .unwrap();

    let parts = [
        Part::new("R1", component)
            .with_placement(Point::from_mm(10.0, 10.0), Angle::ZERO, BoardSide::Top)
            .with_attribute("Value", "10k", true),
        Part::new("R2", component)
            .with_placement(Point::from_mm(20.0, 10.0), Angle::DEG_90, BoardSide::Bottom)
            .with_attribute("Value", "4k7", true),
    ]
    .map(|part| {
        board
            .add_part(part)
            .unwrap()
    });

    let trace = board.add_element(
        LineElement::new(top, Point::from_mm(10.9, 10.0), Point::from_mm(15.0, 10.0), mm_to_units(0.25)).unwrap(),
    );

    let signal = board.add_signal("N1");
    for item in [
        ItemRef::Free(trace),
        ItemRef::PartElement {
            part: parts[0],
            element: pads[1],
        },
    ] {
        board
            .connect(signal, item)
            .unwrap();
    }

    SampleBoard {
        board,
        component,
        pads,
        parts,
        trace,
        signal,
    }
}

/// Panics unless `points` form a polygon with positive signed area.
pub fn assert_counter_clockwise(points: &[Point]) {
    let area = signed_area_x2(points);
    assert!(area > 0, "expected counter-clockwise outline, signed area x2: {area}, points: {points:?}");
}

/// The largest deviation of any point from a circle around `center`.
pub fn max_radius_error(points: &[Point], center: Point, radius: i32) -> f64 {
    points
        .iter()
        .map(|point| (point.distance(center) - radius as f64).abs())
        .fold(0.0, f64::max)
}

/// `true` when both sequences contain the same points, in any order, within `tolerance`
/// units per axis.
pub fn same_point_set(a: &[Point], b: &[Point], tolerance: i32) -> bool {
    let close = |p: &Point, q: &Point| (p.x - q.x).abs() <= tolerance && (p.y - q.y).abs() <= tolerance;

    a.len() == b.len() && a.iter().all(|p| b.iter().any(|q| close(p, q))) && b.iter().all(|q| a.iter().any(|p| close(p, q)))
}
