mod arc;
mod circle;
mod hole;
mod line;
mod rectangle;
mod region;
mod smd_pad;
mod text;
mod tht_pad;
mod via;

pub use arc::*;
pub use circle::*;
pub use hole::*;
pub use line::*;
pub use rectangle::*;
pub use region::*;
pub use smd_pad::*;
pub use text::*;
pub use tht_pad::*;
pub use via::*;

use crate::geometry::{BoundingBox, Polygon};
use crate::layer::{LayerId, LayerSet};
use crate::polygon_builder;
use crate::spacial::{Point, Size};
use crate::types::{Angle, BoardSide};
use crate::visitor::{BoardVisitor, VisitContext};

/// Geometry queries shared by every drawable element.
///
/// All results are in the element's own coordinate system; placing them on the board is done
/// by the caller with a [`crate::geometry::Transformation`].
pub trait ElementGeometry {
    fn layer_set(&self) -> &LayerSet;

    /// The copper (or ink) covered by the element on `side`.
    fn polygon(&self, side: BoardSide) -> Polygon;

    /// The shape grown by `spacing` on every side, used for clearances.
    fn outline_polygon(&self, side: BoardSide, spacing: i32) -> Polygon;

    fn bounding_box(&self, side: BoardSide) -> BoundingBox {
        self.polygon(side).bounding_box()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Line,
    Arc,
    Rectangle,
    Circle,
    Region,
    Via,
    SmdPad,
    ThtPad,
    Hole,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Line(LineElement),
    Arc(ArcElement),
    Rectangle(RectangleElement),
    Circle(CircleElement),
    Region(RegionElement),
    Via(ViaElement),
    SmdPad(SmdPadElement),
    ThtPad(ThtPadElement),
    Hole(HoleElement),
    Text(TextElement),
}

macro_rules! dispatch {
    ($self:ident, $element:ident => $body:expr) => {
        match $self {
            Element::Line($element) => $body,
            Element::Arc($element) => $body,
            Element::Rectangle($element) => $body,
            Element::Circle($element) => $body,
            Element::Region($element) => $body,
            Element::Via($element) => $body,
            Element::SmdPad($element) => $body,
            Element::ThtPad($element) => $body,
            Element::Hole($element) => $body,
            Element::Text($element) => $body,
        }
    };
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Line(_) => ElementKind::Line,
            Element::Arc(_) => ElementKind::Arc,
            Element::Rectangle(_) => ElementKind::Rectangle,
            Element::Circle(_) => ElementKind::Circle,
            Element::Region(_) => ElementKind::Region,
            Element::Via(_) => ElementKind::Via,
            Element::SmdPad(_) => ElementKind::SmdPad,
            Element::ThtPad(_) => ElementKind::ThtPad,
            Element::Hole(_) => ElementKind::Hole,
            Element::Text(_) => ElementKind::Text,
        }
    }

    /// The point an element is anchored at: its centre, or the start for lines and regions.
    pub fn position(&self) -> Point {
        match self {
            Element::Line(line) => line.start(),
            Element::Arc(arc) => arc.center(),
            Element::Rectangle(rectangle) => rectangle.position(),
            Element::Circle(circle) => circle.position(),
            Element::Region(region) => region.anchor(),
            Element::Via(via) => via.position(),
            Element::SmdPad(pad) => pad.position(),
            Element::ThtPad(pad) => pad.position(),
            Element::Hole(hole) => hole.position(),
            Element::Text(text) => text.position(),
        }
    }

    pub fn is_on_layer(&self, id: &LayerId) -> bool {
        self.layer_set().contains(id)
    }

    /// Position and diameter of the drilled hole, for elements that have one.
    pub fn drill(&self) -> Option<(Point, i32)> {
        match self {
            Element::Via(via) => Some((via.position(), via.drill())),
            Element::ThtPad(pad) => Some((pad.position(), pad.drill())),
            Element::Hole(hole) => Some((hole.position(), hole.drill())),
            _ => None,
        }
    }

    /// The shape on one layer, grown by `spacing`: the drill on the drill layer, otherwise the
    /// element polygon for `side`.
    pub fn layer_polygon(&self, layer: &LayerId, side: BoardSide, spacing: i32) -> Polygon {
        if *layer == LayerId::DRILLS {
            if let Some((position, drill)) = self.drill() {
                return Polygon::new(polygon_builder::make_circle(position, drill / 2 + spacing));
            }
        }
        match spacing {
            0 => self.polygon(side),
            spacing => self.outline_polygon(side, spacing),
        }
    }

    /// Whether `polygon` returns different shapes for different sides.
    pub fn is_side_dependent(&self) -> bool {
        matches!(self, Element::ThtPad(_))
    }

    /// Calls the visitor method matching this element's variant.
    pub fn accept<V: BoardVisitor + ?Sized>(&self, visitor: &mut V, context: &VisitContext<'_>) {
        match self {
            Element::Line(line) => visitor.visit_line(line, context),
            Element::Arc(arc) => visitor.visit_arc(arc, context),
            Element::Rectangle(rectangle) => visitor.visit_rectangle(rectangle, context),
            Element::Circle(circle) => visitor.visit_circle(circle, context),
            Element::Region(region) => visitor.visit_region(region, context),
            Element::Via(via) => visitor.visit_via(via, context),
            Element::SmdPad(pad) => visitor.visit_smd_pad(pad, context),
            Element::ThtPad(pad) => visitor.visit_tht_pad(pad, context),
            Element::Hole(hole) => visitor.visit_hole(hole, context),
            Element::Text(text) => visitor.visit_text(text, context),
        }
    }
}

impl ElementGeometry for Element {
    fn layer_set(&self) -> &LayerSet {
        dispatch!(self, element => element.layer_set())
    }

    fn polygon(&self, side: BoardSide) -> Polygon {
        dispatch!(self, element => element.polygon(side))
    }

    fn outline_polygon(&self, side: BoardSide, spacing: i32) -> Polygon {
        dispatch!(self, element => element.outline_polygon(side, spacing))
    }

    fn bounding_box(&self, side: BoardSide) -> BoundingBox {
        dispatch!(self, element => element.bounding_box(side))
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Element {
                fn from(value: $ty) -> Self {
                    Element::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant!(
    Line(LineElement),
    Arc(ArcElement),
    Rectangle(RectangleElement),
    Circle(CircleElement),
    Region(RegionElement),
    Via(ViaElement),
    SmdPad(SmdPadElement),
    ThtPad(ThtPadElement),
    Hole(HoleElement),
    Text(TextElement),
);

/// Picks the fixed size when the rotation is a multiple of 90°, so analytic bounds can be used.
pub(crate) fn orthogonal_bounds(position: Point, size: Size, rotation: Angle) -> Option<BoundingBox> {
    if !rotation.is_orthogonal() {
        return None;
    }
    let size = match rotation.is_vertical() {
        true => size.swapped(),
        false => size,
    };
    let min = position.offset(-size.width / 2, -size.height / 2);
    Some(BoundingBox::new(min, min.offset(size.width, size.height)))
}
