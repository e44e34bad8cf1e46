mod arena;

pub use arena::Handle;

use arena::Arena;
use log::{debug, warn};

use crate::element::Element;
use crate::error::BoardError;
use crate::geometry::{BoundingBox, Transformation};
use crate::layer::{Layer, LayerId};
use crate::spacial::Point;
use crate::traversals::BoundsCollector;
use crate::types::{Angle, BoardSide};
use crate::visitor::{Traversal, TraversalOptions};

pub type ElementId = Handle<Element>;
pub type PartId = Handle<Part>;
pub type ComponentId = Handle<Component>;
pub type SignalId = Handle<Signal>;

/// The collection an element or part currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    /// Free elements and placed parts.
    Board,
    Component(ComponentId),
}

/// A reusable group of elements, placed on the board by any number of [`Part`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: String,
    elements: Vec<ElementId>,
}

impl Component {
    pub fn elements(&self) -> &[ElementId] {
        &self.elements
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartAttribute {
    pub name: String,
    pub value: String,
    pub visible: bool,
}

/// A placed instance of a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub name: String,
    pub component: ComponentId,
    pub position: Point,
    pub rotation: Angle,
    pub side: BoardSide,
    pub attributes: Vec<PartAttribute>,
}

impl Part {
    pub fn new(name: impl Into<String>, component: ComponentId) -> Self {
        Self {
            name: name.into(),
            component,
            position: Point::ZERO,
            rotation: Angle::ZERO,
            side: BoardSide::Top,
            attributes: Vec::new(),
        }
    }

    pub fn with_placement(mut self, position: Point, rotation: Angle, side: BoardSide) -> Self {
        self.position = position;
        self.rotation = rotation;
        self.side = side;
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>, visible: bool) -> Self {
        self.attributes.push(PartAttribute {
            name: name.into(),
            value: value.into(),
            visible,
        });
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }

    /// Maps component coordinates onto the board.
    pub fn transformation(&self) -> Transformation {
        Transformation::for_placement(self.position, self.rotation, self.side)
    }
}

/// A reference to a board item, as stored in signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemRef {
    Free(ElementId),
    PartElement { part: PartId, element: ElementId },
}

/// A named net.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    pub name: String,
    items: Vec<ItemRef>,
}

impl Signal {
    pub fn items(&self) -> &[ItemRef] {
        &self.items
    }
}

/// Answers which items are electrically connected to a signal.
///
/// [`Board`] answers from the explicit connections made with [`Board::connect`]; an
/// implementation backed by a connectivity analysis can be passed to
/// [`Traversal::run_signal`] instead.
pub trait ConnectivityLookup {
    fn connected_items(&self, signal: SignalId) -> Vec<ItemRef>;
}

/// The root of the document: layers, free elements, components, parts and signals.
pub struct Board {
    pub name: String,
    layers: Vec<Layer>,
    elements: Arena<Element, Owner>,
    components: Arena<Component, ()>,
    parts: Arena<Part, Owner>,
    signals: Arena<Signal, ()>,
    free_elements: Vec<ElementId>,
    placed_parts: Vec<PartId>,
}

impl Board {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layers: Vec::new(),
            elements: Arena::new(),
            components: Arena::new(),
            parts: Arena::new(),
            signals: Arena::new(),
            free_elements: Vec::new(),
            placed_parts: Vec::new(),
        }
    }

    pub fn with_default_layers(name: impl Into<String>) -> Self {
        let mut board = Self::new(name);
        board.layers = Layer::default_stack();
        board
    }

    //
    // Layers
    //

    pub fn add_layer(&mut self, layer: Layer) {
        match self
            .layers
            .iter_mut()
            .find(|existing| existing.id == layer.id)
        {
            Some(existing) => {
                warn!("Replacing layer definition. id: {}", layer.id);
                *existing = layer;
            }
            None => self.layers.push(layer),
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, id: &LayerId) -> Option<&Layer> {
        self.layers
            .iter()
            .find(|layer| &layer.id == id)
    }

    /// The side of a layer; unknown layers are treated as side independent.
    pub fn layer_side(&self, id: &LayerId) -> BoardSide {
        self.layer(id)
            .map(|layer| layer.side)
            .unwrap_or_default()
    }

    //
    // Elements
    //

    /// Stores an element without adding it to any collection.
    pub fn create_element(&mut self, element: impl Into<Element>) -> ElementId {
        self.elements.insert(element.into())
    }

    /// Adds an unowned element to the board's free elements or to a component.
    pub fn attach_element(&mut self, id: ElementId, owner: Owner) -> Result<(), BoardError> {
        if !self.elements.contains(id) {
            return Err(BoardError::UnknownElement(id));
        }
        if let Some(current) = self.elements.owner(id) {
            warn!("Rejecting attach of owned element. element: {:?}, owner: {:?}", id, current);
            return Err(BoardError::AlreadyOwned(current));
        }

        match owner {
            Owner::Board => self.free_elements.push(id),
            Owner::Component(component_id) => {
                let component = self
                    .components
                    .get_mut(component_id)
                    .ok_or(BoardError::UnknownComponent(component_id))?;
                component.elements.push(id);
            }
        }
        self.elements.set_owner(id, Some(owner));
        debug!("Attached element. element: {:?}, owner: {:?}", id, owner);
        Ok(())
    }

    /// Removes an element from its collection, returning the former owner.
    ///
    /// The element stays in storage and can be attached again.
    pub fn detach_element(&mut self, id: ElementId) -> Result<Owner, BoardError> {
        if !self.elements.contains(id) {
            return Err(BoardError::UnknownElement(id));
        }
        let owner = self
            .elements
            .owner(id)
            .ok_or(BoardError::NotOwned)?;

        match owner {
            Owner::Board => self
                .free_elements
                .retain(|element| *element != id),
            Owner::Component(component_id) => {
                if let Some(component) = self.components.get_mut(component_id) {
                    component
                        .elements
                        .retain(|element| *element != id);
                }
            }
        }
        self.elements.set_owner(id, None);
        debug!("Detached element. element: {:?}, owner: {:?}", id, owner);
        Ok(owner)
    }

    pub fn add_element(&mut self, element: impl Into<Element>) -> ElementId {
        let id = self.create_element(element);
        self.free_elements.push(id);
        self.elements.set_owner(id, Some(Owner::Board));
        id
    }

    pub fn add_component_element(
        &mut self,
        component: ComponentId,
        element: impl Into<Element>,
    ) -> Result<ElementId, BoardError> {
        if !self.components.contains(component) {
            return Err(BoardError::UnknownComponent(component));
        }
        let id = self.create_element(element);
        self.attach_element(id, Owner::Component(component))?;
        Ok(id)
    }

    /// Detaches the element if needed and drops it from storage.
    pub fn remove_element(&mut self, id: ElementId) -> Result<Element, BoardError> {
        if self.elements.owner(id).is_some() {
            self.detach_element(id)?;
        }
        self.elements
            .remove(id)
            .ok_or(BoardError::UnknownElement(id))
    }

    /// Elements are immutable values; editing one swaps in a rebuilt value under the same id.
    pub fn replace_element(&mut self, id: ElementId, element: impl Into<Element>) -> Result<Element, BoardError> {
        self.elements
            .replace(id, element.into())
            .ok_or(BoardError::UnknownElement(id))
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Stored elements, attached or not.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn element_owner(&self, id: ElementId) -> Option<Owner> {
        self.elements.owner(id)
    }

    /// Elements owned directly by the board, in insertion order.
    pub fn free_elements(&self) -> &[ElementId] {
        &self.free_elements
    }

    //
    // Components
    //

    pub fn add_component(&mut self, name: impl Into<String>) -> ComponentId {
        self.components.insert(Component {
            name: name.into(),
            elements: Vec::new(),
        })
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(id)
    }

    pub fn component_by_name(&self, name: &str) -> Option<(ComponentId, &Component)> {
        self.components
            .iter()
            .find(|(_, component)| component.name == name)
    }

    //
    // Parts
    //

    /// Stores a part without placing it on the board.
    pub fn create_part(&mut self, part: Part) -> Result<PartId, BoardError> {
        if !self.components.contains(part.component) {
            return Err(BoardError::UnknownComponent(part.component));
        }
        Ok(self.parts.insert(part))
    }

    /// Places a stored part; parts are only ever owned by the board.
    pub fn attach_part(&mut self, id: PartId, owner: Owner) -> Result<(), BoardError> {
        if !self.parts.contains(id) {
            return Err(BoardError::UnknownPart(id));
        }
        if owner != Owner::Board {
            return Err(BoardError::InvalidPartOwner(owner));
        }
        if let Some(current) = self.parts.owner(id) {
            warn!("Rejecting attach of placed part. part: {:?}, owner: {:?}", id, current);
            return Err(BoardError::AlreadyOwned(current));
        }

        self.placed_parts.push(id);
        self.parts.set_owner(id, Some(owner));
        debug!("Placed part. part: {:?}", id);
        Ok(())
    }

    pub fn detach_part(&mut self, id: PartId) -> Result<Owner, BoardError> {
        if !self.parts.contains(id) {
            return Err(BoardError::UnknownPart(id));
        }
        let owner = self
            .parts
            .owner(id)
            .ok_or(BoardError::NotOwned)?;

        self.placed_parts
            .retain(|part| *part != id);
        self.parts.set_owner(id, None);
        debug!("Unplaced part. part: {:?}", id);
        Ok(owner)
    }

    pub fn add_part(&mut self, part: Part) -> Result<PartId, BoardError> {
        let id = self.create_part(part)?;
        self.attach_part(id, Owner::Board)?;
        Ok(id)
    }

    pub fn remove_part(&mut self, id: PartId) -> Result<Part, BoardError> {
        if self.parts.owner(id).is_some() {
            self.detach_part(id)?;
        }
        self.parts
            .remove(id)
            .ok_or(BoardError::UnknownPart(id))
    }

    pub fn part(&self, id: PartId) -> Option<&Part> {
        self.parts.get(id)
    }

    pub fn part_owner(&self, id: PartId) -> Option<Owner> {
        self.parts.owner(id)
    }

    /// Placed parts, in placement order.
    pub fn parts(&self) -> impl Iterator<Item = (PartId, &Part)> {
        self.placed_parts
            .iter()
            .filter_map(|id| self.parts.get(*id).map(|part| (*id, part)))
    }

    //
    // Signals
    //

    pub fn add_signal(&mut self, name: impl Into<String>) -> SignalId {
        self.signals.insert(Signal {
            name: name.into(),
            items: Vec::new(),
        })
    }

    pub fn signal(&self, id: SignalId) -> Option<&Signal> {
        self.signals.get(id)
    }

    pub fn signals(&self) -> impl Iterator<Item = (SignalId, &Signal)> {
        self.signals.iter()
    }

    /// Records `item` as part of `signal`. Connecting the same item twice is a no-op.
    pub fn connect(&mut self, signal: SignalId, item: ItemRef) -> Result<(), BoardError> {
        match item {
            ItemRef::Free(element) => {
                if self.elements.owner(element) != Some(Owner::Board) {
                    return Err(BoardError::UnknownElement(element));
                }
            }
            ItemRef::PartElement {
                part,
                element,
            } => {
                let component = self
                    .parts
                    .get(part)
                    .ok_or(BoardError::UnknownPart(part))?
                    .component;
                if self.elements.owner(element) != Some(Owner::Component(component)) {
                    return Err(BoardError::UnknownElement(element));
                }
            }
        }

        let signal = self
            .signals
            .get_mut(signal)
            .ok_or(BoardError::UnknownSignal(signal))?;
        if !signal.items.contains(&item) {
            signal.items.push(item);
        }
        Ok(())
    }

    //
    // Queries
    //

    /// Bounds of every placed element in board coordinates.
    #[profiling::function]
    pub fn world_bounding_box(&self) -> BoundingBox {
        let mut collector = BoundsCollector::default();
        Traversal::new(self, TraversalOptions::default()).run(&mut collector);
        debug!("Board bounds. name: {}, bbox: {:?}", self.name, collector.bounding_box);
        collector.bounding_box
    }
}

impl ConnectivityLookup for Board {
    fn connected_items(&self, signal: SignalId) -> Vec<ItemRef> {
        self.signal(signal)
            .map(|signal| signal.items.clone())
            .unwrap_or_default()
    }
}
