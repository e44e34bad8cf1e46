//! Ready-made visitors for the common whole-board queries.

use std::collections::BTreeMap;

use log::debug;

use crate::board::{ElementId, PartId};
use crate::element::{
    ArcElement, Element, ElementGeometry, HoleElement, LineElement, SmdPadElement, ThtPadElement, ViaElement,
};
use crate::geometry::{BoundingBox, Polygon};
use crate::layer::{LayerId, LayerSet};
use crate::spacial::Point;
use crate::types::BoardSide;
use crate::visitor::{BoardVisitor, VisitContext};

/// Board-space polygons grouped by the board layer they end up on.
#[derive(Debug, Default)]
pub struct PolygonCollector {
    /// Collect only these board layers; everything when `None`.
    pub layers: Option<LayerSet>,
    /// Grow every shape by this clearance, using the outline polygon.
    pub spacing: Option<i32>,
    pub polygons: BTreeMap<LayerId, Vec<Polygon>>,
}

impl PolygonCollector {
    pub fn for_layers(layers: LayerSet) -> Self {
        Self {
            layers: Some(layers),
            ..Self::default()
        }
    }

    pub fn with_spacing(mut self, spacing: i32) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn layer(&self, id: &LayerId) -> &[Polygon] {
        self.polygons
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl BoardVisitor for PolygonCollector {
    fn visit_element(&mut self, element: &Element, context: &VisitContext<'_>) {
        for layer in element.layer_set().iter() {
            let world_layer = context.world_layer(layer);
            if let Some(wanted) = &self.layers {
                if !wanted.contains(&world_layer) {
                    continue;
                }
            }

            let polygon = context.world_outline(element, layer, self.spacing.unwrap_or(0));
            if polygon.is_empty() {
                continue;
            }

            self.polygons
                .entry(world_layer)
                .or_default()
                .push(polygon);
        }
    }
}

/// A connection point of an element, in board coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub position: Point,
    pub element: Option<ElementId>,
    pub part: Option<PartId>,
    pub layers: LayerSet,
}

/// Collects the points where traces and pads can connect, for connectivity analysis.
///
/// Lines and arcs contribute both ends, pads and vias their centre.
#[derive(Debug, Default)]
pub struct AnchorCollector {
    pub anchors: Vec<Anchor>,
}

impl AnchorCollector {
    fn push(&mut self, position: Point, layers: &LayerSet, context: &VisitContext<'_>) {
        self.anchors.push(Anchor {
            position: context.to_world(position),
            element: context.element,
            part: context.part_id(),
            layers: layers
                .iter()
                .map(|layer| context.world_layer(layer))
                .collect(),
        });
    }

    /// Anchors at `position` that share at least one layer with `layers`.
    pub fn at<'a>(&'a self, position: Point, layers: &LayerSet) -> impl Iterator<Item = &'a Anchor> + 'a {
        let layers = layers.clone();
        self.anchors
            .iter()
            .filter(move |anchor| anchor.position == position && anchor.layers.intersects(&layers))
    }
}

impl BoardVisitor for AnchorCollector {
    fn visit_line(&mut self, line: &LineElement, context: &VisitContext<'_>) {
        for point in line.end_points() {
            self.push(point, line.layer_set(), context);
        }
    }

    fn visit_arc(&mut self, arc: &ArcElement, context: &VisitContext<'_>) {
        self.push(arc.start_point(), arc.layer_set(), context);
        self.push(arc.end_point(), arc.layer_set(), context);
    }

    fn visit_via(&mut self, via: &ViaElement, context: &VisitContext<'_>) {
        self.push(via.position(), via.layer_set(), context);
    }

    fn visit_smd_pad(&mut self, pad: &SmdPadElement, context: &VisitContext<'_>) {
        self.push(pad.position(), pad.layer_set(), context);
    }

    fn visit_tht_pad(&mut self, pad: &ThtPadElement, context: &VisitContext<'_>) {
        self.push(pad.position(), pad.layer_set(), context);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillHit {
    pub position: Point,
    pub diameter: i32,
    pub plated: bool,
}

/// Board-space drill hits of vias, through-hole pads and holes, as needed for drill files.
#[derive(Debug, Default)]
pub struct DrillCollector {
    pub hits: Vec<DrillHit>,
}

impl DrillCollector {
    fn push(&mut self, position: Point, diameter: i32, plated: bool, context: &VisitContext<'_>) {
        self.hits.push(DrillHit {
            position: context.to_world(position),
            diameter,
            plated,
        });
    }

    /// Hits grouped by diameter and plating, smallest tool first.
    pub fn tools(&self) -> BTreeMap<(i32, bool), Vec<Point>> {
        let mut tools: BTreeMap<(i32, bool), Vec<Point>> = BTreeMap::new();
        for hit in &self.hits {
            tools
                .entry((hit.diameter, hit.plated))
                .or_default()
                .push(hit.position);
        }
        debug!("Drill tools. count: {}", tools.len());
        tools
    }
}

impl BoardVisitor for DrillCollector {
    fn visit_via(&mut self, via: &ViaElement, context: &VisitContext<'_>) {
        self.push(via.position(), via.drill(), true, context);
    }

    fn visit_tht_pad(&mut self, pad: &ThtPadElement, context: &VisitContext<'_>) {
        self.push(pad.position(), pad.drill(), true, context);
    }

    fn visit_hole(&mut self, hole: &HoleElement, context: &VisitContext<'_>) {
        self.push(hole.position(), hole.drill(), hole.is_plated(), context);
    }
}

/// The board-space bounds of every visited element.
///
/// Element bounds are transformed by their corners, so rotated parts give a slightly larger
/// box than their exact outline.
#[derive(Debug, Default)]
pub struct BoundsCollector {
    pub bounding_box: BoundingBox,
}

impl BoardVisitor for BoundsCollector {
    fn visit_element(&mut self, element: &Element, context: &VisitContext<'_>) {
        let sides: &[BoardSide] = match element.is_side_dependent() {
            true => &[BoardSide::Top, BoardSide::Unknown, BoardSide::Bottom],
            false => &[BoardSide::Unknown],
        };

        for &side in sides {
            let bbox = element
                .bounding_box(side)
                .apply_transform(context.transformation);
            self.bounding_box.expand(&bbox);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Part};
    use crate::spacial::Size;
    use crate::types::Angle;
    use crate::visitor::{Traversal, TraversalOptions};

    fn board() -> Board {
        let mut board = Board::with_default_layers("test");
        let component = board.add_component("SW");
        board
            .add_component_element(
                component,
                SmdPadElement::new("1", LayerSet::single(LayerId::TOP_COPPER), Point::new(1_000, 0), Size::new(500, 500))
                    .unwrap(),
            )
            .unwrap();
        board
            .add_component_element(component, ThtPadElement::new("2", Point::new(-1_000, 0), Size::square(1_600), 800).unwrap())
            .unwrap();
        board
            .add_part(
                Part::new("SW1", component).with_placement(Point::new(10_000, 10_000), Angle::DEG_90, BoardSide::Top),
            )
            .unwrap();
        board
            .add_part(
                Part::new("SW2", component).with_placement(Point::new(20_000, 10_000), Angle::ZERO, BoardSide::Bottom),
            )
            .unwrap();
        board.add_element(ViaElement::new(Point::new(5_000, 5_000), 600, 300).unwrap());
        board.add_element(HoleElement::new(Point::ZERO, 3_000).unwrap());
        board
    }

    #[test]
    fn test_drill_hits_in_board_coordinates() {
        let board = board();
        let mut collector = DrillCollector::default();

        Traversal::new(&board, TraversalOptions::default()).run(&mut collector);

        assert_eq!(collector.hits, vec![
            DrillHit {
                position: Point::new(10_000, 9_000),
                diameter: 800,
                plated: true,
            },
            DrillHit {
                position: Point::new(21_000, 10_000),
                diameter: 800,
                plated: true,
            },
            DrillHit {
                position: Point::new(5_000, 5_000),
                diameter: 300,
                plated: true,
            },
            DrillHit {
                position: Point::ZERO,
                diameter: 3_000,
                plated: false,
            },
        ]);
        assert_eq!(collector.tools().len(), 3);
    }

    #[test]
    fn test_polygons_of_bottom_part_land_on_bottom_copper() {
        let board = board();
        let mut collector = PolygonCollector::for_layers(LayerSet::single(LayerId::BOTTOM_COPPER));

        Traversal::new(&board, TraversalOptions::default()).run(&mut collector);

        // SW1: its tht pad; SW2: both pads; the free via
        let bottom = collector.layer(&LayerId::BOTTOM_COPPER);
        assert_eq!(bottom.len(), 4);
        assert!(bottom
            .iter()
            .all(|polygon| polygon.is_counter_clockwise()));
        assert!(collector
            .layer(&LayerId::TOP_COPPER)
            .is_empty());

        let smd = bottom
            .iter()
            .find(|polygon| polygon.len() == 4 && polygon.bounding_box().width() == 500)
            .unwrap();
        assert_eq!(smd.bounding_box().center(), Point::new(19_000, 10_000));
    }

    #[test]
    fn test_spacing_grows_polygons() {
        let board = board();
        let mut plain = PolygonCollector::for_layers(LayerSet::single(LayerId::DRILLS));
        let mut grown = PolygonCollector::for_layers(LayerSet::single(LayerId::DRILLS)).with_spacing(100);

        Traversal::new(&board, TraversalOptions::default()).run(&mut plain);
        Traversal::new(&board, TraversalOptions::default()).run(&mut grown);

        let plain = plain.layer(&LayerId::DRILLS);
        let grown = grown.layer(&LayerId::DRILLS);
        assert_eq!(plain.len(), grown.len());
        for (plain, grown) in plain.iter().zip(grown) {
            assert_eq!(grown.bounding_box().width(), plain.bounding_box().width() + 200);
        }
    }

    #[test]
    fn test_anchors() {
        let board = board();
        let mut collector = AnchorCollector::default();

        Traversal::new(&board, TraversalOptions::default()).run(&mut collector);

        assert_eq!(collector.anchors.len(), 5);
        let pad = collector
            .at(Point::new(10_000, 11_000), &LayerSet::single(LayerId::TOP_COPPER))
            .next()
            .unwrap();
        assert!(pad.part.is_some());
        assert!(pad.element.is_some());

        // the pad of the bottom part sits on bottom copper only
        assert_eq!(
            collector
                .at(Point::new(19_000, 10_000), &LayerSet::single(LayerId::TOP_COPPER))
                .count(),
            0
        );
        assert_eq!(
            collector
                .at(Point::new(19_000, 10_000), &LayerSet::single(LayerId::BOTTOM_COPPER))
                .count(),
            1
        );
    }

    #[test]
    fn test_world_bounding_box() {
        let board = board();

        let bbox = board.world_bounding_box();

        assert_eq!(bbox.min, Point::new(-1_500, -1_500));
        assert_eq!(bbox.max, Point::new(21_800, 11_250));
    }
}
