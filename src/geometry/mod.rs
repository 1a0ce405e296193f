//! Geometry primitives
//!
//! Screen-space points, affine screen transforms, local bounding boxes and
//! the compass directions a tooltip can be placed in.

pub mod direction;
pub mod primitives;

pub use direction::Direction;
pub use primitives::{LocalBox, Matrix, NodeSize, Offset, Placement, Point, Scroll};
