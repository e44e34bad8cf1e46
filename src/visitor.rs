//! Double-dispatch traversal over a [`Board`].
//!
//! A [`Traversal`] walks the document in a fixed order and calls the matching
//! [`BoardVisitor`] method for every item. Visitors only override what they care about, the
//! rest are no-ops. Each callback receives a [`VisitContext`] describing where the traversal
//! is: the part being visited (if any) and the transformation from the element's coordinates
//! to board coordinates.

use log::{debug, trace, warn};

use crate::board::{Board, Component, ConnectivityLookup, ElementId, ItemRef, Owner, Part, PartId, Signal, SignalId};
use crate::element::{
    ArcElement, CircleElement, Element, ElementGeometry, HoleElement, LineElement, RectangleElement, RegionElement,
    SmdPadElement, TextElement, ThtPadElement, ViaElement,
};
use crate::error::BoardError;
use crate::geometry::{Polygon, Transformation};
use crate::layer::{Layer, LayerId, LayerSet};
use crate::spacial::Point;
use crate::types::BoardSide;

#[allow(unused_variables)]
pub trait BoardVisitor {
    fn visit_board(&mut self, board: &Board, context: &VisitContext<'_>) {}
    fn visit_layer(&mut self, layer: &Layer, context: &VisitContext<'_>) {}
    fn visit_part(&mut self, part: &Part, context: &VisitContext<'_>) {}
    fn visit_component(&mut self, component: &Component, context: &VisitContext<'_>) {}
    fn visit_signal(&mut self, signal: &Signal, context: &VisitContext<'_>) {}

    /// Called for every element that passes the layer filter.
    ///
    /// The default dispatches to the per-variant method below; visitors that treat all
    /// elements alike override this instead.
    fn visit_element(&mut self, element: &Element, context: &VisitContext<'_>) {
        element.accept(self, context);
    }

    fn visit_line(&mut self, line: &LineElement, context: &VisitContext<'_>) {}
    fn visit_arc(&mut self, arc: &ArcElement, context: &VisitContext<'_>) {}
    fn visit_rectangle(&mut self, rectangle: &RectangleElement, context: &VisitContext<'_>) {}
    fn visit_circle(&mut self, circle: &CircleElement, context: &VisitContext<'_>) {}
    fn visit_region(&mut self, region: &RegionElement, context: &VisitContext<'_>) {}
    fn visit_via(&mut self, via: &ViaElement, context: &VisitContext<'_>) {}
    fn visit_smd_pad(&mut self, pad: &SmdPadElement, context: &VisitContext<'_>) {}
    fn visit_tht_pad(&mut self, pad: &ThtPadElement, context: &VisitContext<'_>) {}
    fn visit_hole(&mut self, hole: &HoleElement, context: &VisitContext<'_>) {}
    fn visit_text(&mut self, text: &TextElement, context: &VisitContext<'_>) {}
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalState {
    #[default]
    NotStarted,
    VisitingBoard,
    VisitingPart,
    VisitingElement,
    Done,
}

/// What a [`Traversal`] visits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalOptions {
    /// Only elements on at least one of these layers are visited, free and part owned alike.
    pub layer_filter: Option<LayerSet>,
    pub include_parts: bool,
    pub include_free_elements: bool,
    pub visit_layers: bool,
    pub visit_signals: bool,
}

impl Default for TraversalOptions {
    fn default() -> Self {
        Self {
            layer_filter: None,
            include_parts: true,
            include_free_elements: true,
            visit_layers: true,
            visit_signals: true,
        }
    }
}

impl TraversalOptions {
    /// Only elements on the given layers; layers and signals are skipped.
    pub fn elements_on(layers: LayerSet) -> Self {
        Self {
            layer_filter: Some(layers),
            visit_layers: false,
            visit_signals: false,
            ..Self::default()
        }
    }
}

/// Where the traversal currently is, passed to every callback.
#[derive(Clone, Copy)]
pub struct VisitContext<'a> {
    pub board: &'a Board,
    pub part: Option<(PartId, &'a Part)>,
    pub element: Option<ElementId>,
    /// Element coordinates to board coordinates; identity for free elements.
    pub transformation: &'a Transformation,
    pub state: TraversalState,
}

impl VisitContext<'_> {
    pub fn part_id(&self) -> Option<PartId> {
        self.part.map(|(id, _)| id)
    }

    /// The board side a layer of the current element ends up on.
    ///
    /// Elements of parts placed on the bottom are drawn from the component's point of view, so
    /// their top layers land on the bottom of the board.
    pub fn effective_side(&self, layer: &LayerId) -> BoardSide {
        let side = self.board.layer_side(layer);
        match self.is_flipped() {
            true => side.flipped(),
            false => side,
        }
    }

    /// The board layer a layer of the current element ends up on.
    pub fn world_layer(&self, layer: &LayerId) -> LayerId {
        match self.is_flipped() {
            true => layer.flipped(),
            false => layer.clone(),
        }
    }

    fn is_flipped(&self) -> bool {
        matches!(self.part, Some((_, part)) if part.side == BoardSide::Bottom)
    }

    pub fn to_world(&self, point: Point) -> Point {
        self.transformation.apply_to_point(point)
    }

    /// The element's polygon on `layer`, in board coordinates.
    ///
    /// The side-dependent shape is picked by the element's own view of the layer, the
    /// placement then moves and mirrors it.
    pub fn world_polygon(&self, element: &Element, layer: &LayerId) -> Polygon {
        self.world_outline(element, layer, 0)
    }

    /// Like [`VisitContext::world_polygon`], grown by `spacing`.
    pub fn world_outline(&self, element: &Element, layer: &LayerId, spacing: i32) -> Polygon {
        let local_side = self.board.layer_side(layer);
        element
            .layer_polygon(layer, local_side, spacing)
            .transformed(self.transformation)
    }
}

struct SavedPart {
    part: Option<PartId>,
    transformation: Transformation,
    state: TraversalState,
}

/// Walks a board in document order.
///
/// The part being visited and its transformation are kept on the traversal and saved and
/// restored around every part, so a visitor always sees the context of the element it is
/// called for.
pub struct Traversal<'a> {
    board: &'a Board,
    options: TraversalOptions,
    state: TraversalState,
    current_part: Option<PartId>,
    current_transformation: Transformation,
}

impl<'a> Traversal<'a> {
    pub fn new(board: &'a Board, options: TraversalOptions) -> Self {
        Self {
            board,
            options,
            state: TraversalState::NotStarted,
            current_part: None,
            current_transformation: Transformation::identity(),
        }
    }

    pub fn state(&self) -> TraversalState {
        self.state
    }

    pub fn current_part(&self) -> Option<PartId> {
        self.current_part
    }

    pub fn current_transformation(&self) -> &Transformation {
        &self.current_transformation
    }

    fn context(&self, element: Option<ElementId>) -> VisitContext<'_> {
        VisitContext {
            board: self.board,
            part: self
                .current_part
                .and_then(|id| self.board.part(id).map(|part| (id, part))),
            element,
            transformation: &self.current_transformation,
            state: self.state,
        }
    }

    /// Board, layers, every placed part with its component and elements, free elements,
    /// signals.
    #[profiling::function]
    pub fn run<V: BoardVisitor + ?Sized>(&mut self, visitor: &mut V) {
        let board = self.board;
        self.state = TraversalState::VisitingBoard;
        trace!("Traversal started. board: {}", board.name);

        visitor.visit_board(board, &self.context(None));

        if self.options.visit_layers {
            for layer in board.layers() {
                visitor.visit_layer(layer, &self.context(None));
            }
        }

        if self.options.include_parts {
            for (part_id, part) in board.parts() {
                self.visit_part(part_id, part, visitor);
            }
        }

        if self.options.include_free_elements {
            for &element_id in board.free_elements() {
                self.visit_element(element_id, visitor);
            }
        }

        if self.options.visit_signals {
            for (_, signal) in board.signals() {
                visitor.visit_signal(signal, &self.context(None));
            }
        }

        self.state = TraversalState::Done;
        trace!("Traversal done. board: {}", board.name);
    }

    /// Visits the signal and then only the elements connected to it, each with the context of
    /// its part.
    #[profiling::function]
    pub fn run_signal<V: BoardVisitor + ?Sized>(
        &mut self,
        signal_id: SignalId,
        lookup: &dyn ConnectivityLookup,
        visitor: &mut V,
    ) -> Result<(), BoardError> {
        let board = self.board;
        let signal = board
            .signal(signal_id)
            .ok_or(BoardError::UnknownSignal(signal_id))?;

        self.state = TraversalState::VisitingBoard;
        visitor.visit_signal(signal, &self.context(None));

        for item in lookup.connected_items(signal_id) {
            match item {
                ItemRef::Free(element_id) => {
                    if board.element_owner(element_id) != Some(Owner::Board) {
                        debug!("Skipping detached item. signal: {}, element: {:?}", signal.name, element_id);
                        continue;
                    }
                    self.visit_element(element_id, visitor)
                }
                ItemRef::PartElement {
                    part: part_id,
                    element: element_id,
                } => {
                    let Some(part) = board.part(part_id) else {
                        warn!("Skipping item of unknown part. signal: {}, part: {:?}", signal.name, part_id);
                        continue;
                    };
                    let placed = board.part_owner(part_id) == Some(Owner::Board);
                    if !placed || board.element_owner(element_id) != Some(Owner::Component(part.component)) {
                        debug!(
                            "Skipping detached item. signal: {}, part: {}, element: {:?}",
                            signal.name, part.name, element_id
                        );
                        continue;
                    }
                    let saved = self.enter_part(part_id, part);
                    self.visit_element(element_id, visitor);
                    self.leave_part(saved);
                }
            }
        }

        self.state = TraversalState::Done;
        Ok(())
    }

    fn enter_part(&mut self, part_id: PartId, part: &Part) -> SavedPart {
        let saved = SavedPart {
            part: self.current_part,
            transformation: self.current_transformation,
            state: self.state,
        };

        self.current_part = Some(part_id);
        self.current_transformation = part
            .transformation()
            .then(&saved.transformation);
        self.state = TraversalState::VisitingPart;
        saved
    }

    fn leave_part(&mut self, saved: SavedPart) {
        self.current_part = saved.part;
        self.current_transformation = saved.transformation;
        self.state = saved.state;
    }

    fn visit_part<V: BoardVisitor + ?Sized>(&mut self, part_id: PartId, part: &Part, visitor: &mut V) {
        let board = self.board;
        let saved = self.enter_part(part_id, part);

        visitor.visit_part(part, &self.context(None));

        match board.component(part.component) {
            Some(component) => {
                visitor.visit_component(component, &self.context(None));
                for &element_id in component.elements() {
                    self.visit_element(element_id, visitor);
                }
            }
            None => warn!("Part references unknown component. part: {}", part.name),
        }

        self.leave_part(saved);
    }

    fn visit_element<V: BoardVisitor + ?Sized>(&mut self, element_id: ElementId, visitor: &mut V) {
        let board = self.board;
        let Some(element) = board.element(element_id) else {
            warn!("Skipping unknown element. element: {:?}", element_id);
            return;
        };

        if let Some(filter) = &self.options.layer_filter {
            // bottom parts put their layers on the opposite side, filter by board layer
            let flipped = self
                .current_part
                .and_then(|id| board.part(id))
                .is_some_and(|part| part.side == BoardSide::Bottom);
            let on_filtered_layer = element
                .layer_set()
                .iter()
                .any(|layer| match flipped {
                    true => filter.contains(&layer.flipped()),
                    false => filter.contains(layer),
                });
            if !on_filtered_layer {
                return;
            }
        }

        let saved_state = self.state;
        self.state = TraversalState::VisitingElement;
        visitor.visit_element(element, &self.context(Some(element_id)));
        self.state = saved_state;
    }
}
