mod aperture;
mod board;
mod element;
mod error;
mod geometry;
mod layer;
pub mod polygon_builder;
pub mod spacial;
mod traversals;
mod types;
mod visitor;

pub use aperture::*;
pub use board::*;
pub use element::*;
pub use error::*;
pub use geometry::*;
pub use layer::*;
pub use polygon_builder::RegionSegment;
pub use spacial::{Point, Size, UNITS_PER_MM};
pub use traversals::*;
pub use types::*;
pub use visitor::*;

#[cfg(feature = "testing")]
pub mod testing;
