mod bounding_box;
mod mesh;
mod mirroring;
mod polygon;
mod shapes;
mod transform;

pub use bounding_box::*;
pub use mesh::*;
pub use mirroring::*;
pub use polygon::*;
pub use shapes::*;
pub use transform::*;
