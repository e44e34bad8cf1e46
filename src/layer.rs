use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::types::BoardSide;

/// Identifier of a board layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayerId(Cow<'static, str>);

impl LayerId {
    pub const TOP_COPPER: LayerId = LayerId::from_static("Top.Copper");
    pub const INNER_COPPER: LayerId = LayerId::from_static("Inner.Copper");
    pub const BOTTOM_COPPER: LayerId = LayerId::from_static("Bottom.Copper");
    pub const TOP_SILKSCREEN: LayerId = LayerId::from_static("Top.Silkscreen");
    pub const BOTTOM_SILKSCREEN: LayerId = LayerId::from_static("Bottom.Silkscreen");
    pub const TOP_SOLDER_MASK: LayerId = LayerId::from_static("Top.SolderMask");
    pub const BOTTOM_SOLDER_MASK: LayerId = LayerId::from_static("Bottom.SolderMask");
    pub const TOP_PASTE: LayerId = LayerId::from_static("Top.Paste");
    pub const BOTTOM_PASTE: LayerId = LayerId::from_static("Bottom.Paste");
    pub const DRILLS: LayerId = LayerId::from_static("Drills");
    pub const OUTLINE: LayerId = LayerId::from_static("Profile");

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The matching layer on the opposite side, for the well known top and bottom layers.
    ///
    /// Everything else (inner copper, drills, the profile, user layers) is returned unchanged.
    pub fn flipped(&self) -> LayerId {
        const PAIRS: [(LayerId, LayerId); 4] = [
            (LayerId::TOP_COPPER, LayerId::BOTTOM_COPPER),
            (LayerId::TOP_SILKSCREEN, LayerId::BOTTOM_SILKSCREEN),
            (LayerId::TOP_SOLDER_MASK, LayerId::BOTTOM_SOLDER_MASK),
            (LayerId::TOP_PASTE, LayerId::BOTTOM_PASTE),
        ];

        PAIRS
            .iter()
            .find_map(|(top, bottom)| match self {
                id if id == top => Some(bottom.clone()),
                id if id == bottom => Some(top.clone()),
                _ => None,
            })
            .unwrap_or_else(|| self.clone())
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerFunction {
    Signal,
    Design,
    Mechanical,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub id: LayerId,
    pub name: String,
    pub side: BoardSide,
    pub function: LayerFunction,
}

impl Layer {
    pub fn new(id: LayerId, side: BoardSide, function: LayerFunction) -> Self {
        let name = id.to_string();
        Self {
            id,
            name,
            side,
            function,
        }
    }

    /// The standard two-layer stack: copper, mask, paste and silkscreen on both sides, drills and
    /// the board profile.
    pub fn default_stack() -> Vec<Layer> {
        vec![
            Layer::new(LayerId::TOP_SILKSCREEN, BoardSide::Top, LayerFunction::Design),
            Layer::new(LayerId::TOP_PASTE, BoardSide::Top, LayerFunction::Design),
            Layer::new(LayerId::TOP_SOLDER_MASK, BoardSide::Top, LayerFunction::Design),
            Layer::new(LayerId::TOP_COPPER, BoardSide::Top, LayerFunction::Signal),
            Layer::new(LayerId::INNER_COPPER, BoardSide::Unknown, LayerFunction::Signal),
            Layer::new(LayerId::BOTTOM_COPPER, BoardSide::Bottom, LayerFunction::Signal),
            Layer::new(LayerId::BOTTOM_SOLDER_MASK, BoardSide::Bottom, LayerFunction::Design),
            Layer::new(LayerId::BOTTOM_PASTE, BoardSide::Bottom, LayerFunction::Design),
            Layer::new(LayerId::BOTTOM_SILKSCREEN, BoardSide::Bottom, LayerFunction::Design),
            Layer::new(LayerId::DRILLS, BoardSide::Unknown, LayerFunction::Mechanical),
            Layer::new(LayerId::OUTLINE, BoardSide::Unknown, LayerFunction::Mechanical),
        ]
    }
}

/// An immutable set of layer identifiers, kept sorted and free of duplicates.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct LayerSet {
    ids: SmallVec<[LayerId; 4]>,
}

impl LayerSet {
    pub fn new(ids: impl IntoIterator<Item = LayerId>) -> Self {
        let mut ids: SmallVec<[LayerId; 4]> = ids.into_iter().collect();
        ids.sort();
        ids.dedup();
        Self {
            ids,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(id: LayerId) -> Self {
        Self::new([id])
    }

    /// Copper on every layer plus the drill layer, as used by vias and through-hole pads.
    pub fn through_hole() -> Self {
        Self::new([
            LayerId::TOP_COPPER,
            LayerId::INNER_COPPER,
            LayerId::BOTTOM_COPPER,
            LayerId::DRILLS,
        ])
    }

    pub fn contains(&self, id: &LayerId) -> bool {
        self.ids.binary_search(id).is_ok()
    }

    pub fn intersects(&self, other: &LayerSet) -> bool {
        self.ids
            .iter()
            .any(|id| other.contains(id))
    }

    pub fn union(&self, other: &LayerSet) -> LayerSet {
        LayerSet::new(
            self.ids
                .iter()
                .chain(other.ids.iter())
                .cloned(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayerId> {
        self.ids.iter()
    }
}

impl FromIterator<LayerId> for LayerSet {
    fn from_iter<T: IntoIterator<Item = LayerId>>(iter: T) -> Self {
        LayerSet::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_set_is_sorted_and_deduplicated() {
        let set = LayerSet::new([LayerId::TOP_COPPER, LayerId::DRILLS, LayerId::TOP_COPPER]);

        assert_eq!(set.len(), 2);
        assert!(set.contains(&LayerId::TOP_COPPER));
        assert!(set.contains(&LayerId::DRILLS));
        assert!(!set.contains(&LayerId::BOTTOM_COPPER));
    }

    #[test]
    fn test_owned_and_static_ids_are_equal() {
        let set = LayerSet::single(LayerId::new("Top.Copper"));

        assert!(set.contains(&LayerId::TOP_COPPER));
    }

    #[test]
    fn test_intersects_and_union() {
        let top = LayerSet::new([LayerId::TOP_COPPER, LayerId::TOP_SOLDER_MASK]);
        let bottom = LayerSet::single(LayerId::BOTTOM_COPPER);

        assert!(!top.intersects(&bottom));
        assert!(top.intersects(&LayerSet::through_hole()));
        assert!(!top.intersects(&LayerSet::empty()));

        let both = top.union(&bottom);
        assert_eq!(both.len(), 3);
        assert!(both.intersects(&bottom));
    }

    #[test]
    fn test_flipped_swaps_known_pairs_only() {
        assert_eq!(LayerId::TOP_COPPER.flipped(), LayerId::BOTTOM_COPPER);
        assert_eq!(LayerId::BOTTOM_PASTE.flipped(), LayerId::TOP_PASTE);
        assert_eq!(LayerId::INNER_COPPER.flipped(), LayerId::INNER_COPPER);
        assert_eq!(LayerId::new("User.1").flipped(), LayerId::new("User.1"));
    }
}
