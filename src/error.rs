use thiserror::Error;

use crate::board::{ComponentId, ElementId, Owner, PartId, SignalId};
use crate::spacial::Size;

/// Raised when an element, aperture or value type is built with invalid geometry.
///
/// These are never recovered internally, the operation that attempted the construction
/// (document load, interactive edit) is expected to abort.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("{name} must be positive, got {value}")]
    NonPositiveDimension { name: &'static str, value: i32 },

    #[error("{name} must not be negative, got {value}")]
    NegativeDimension { name: &'static str, value: i32 },

    #[error("drill {drill} must be smaller than the outer dimension {size}")]
    DrillTooLarge { drill: i32, size: i32 },

    #[error("polygon vertex count must be in 3..=12, got {0}")]
    VertexCountOutOfRange(u32),

    #[error("ratio must be in 0..=1000 thousandths, got {0}")]
    RatioOutOfRange(i32),

    #[error("a region needs at least 3 vertices, or 2 when an edge is an arc, got {0} segments")]
    TooFewSegments(usize),

    #[error("tessellation failed: {0}")]
    Tessellation(String),
}

/// Errors raised by the board's owning collections and handle lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("unknown element {0:?}")]
    UnknownElement(ElementId),

    #[error("unknown part {0:?}")]
    UnknownPart(PartId),

    #[error("unknown component {0:?}")]
    UnknownComponent(ComponentId),

    #[error("unknown signal {0:?}")]
    UnknownSignal(SignalId),

    #[error("already owned by {0:?}")]
    AlreadyOwned(Owner),

    #[error("not owned by any collection")]
    NotOwned,

    #[error("parts can only be owned by the board, not by {0:?}")]
    InvalidPartOwner(Owner),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

pub(crate) fn check_positive(name: &'static str, value: i32) -> Result<(), GeometryError> {
    match value > 0 {
        true => Ok(()),
        false => Err(GeometryError::NonPositiveDimension {
            name,
            value,
        }),
    }
}

pub(crate) fn check_non_negative(name: &'static str, value: i32) -> Result<(), GeometryError> {
    match value >= 0 {
        true => Ok(()),
        false => Err(GeometryError::NegativeDimension {
            name,
            value,
        }),
    }
}

pub(crate) fn check_size(size: Size) -> Result<(), GeometryError> {
    check_positive("width", size.width)?;
    check_positive("height", size.height)
}

/// The drill must be positive and strictly smaller than the outer dimension.
pub(crate) fn check_drill(drill: i32, outer: i32) -> Result<(), GeometryError> {
    check_positive("drill", drill)?;
    match drill < outer {
        true => Ok(()),
        false => Err(GeometryError::DrillTooLarge {
            drill,
            size: outer,
        }),
    }
}
