//! Tooltip layout
//!
//! Turns a target shape into eight screen-space anchor points and picks the
//! overlay position for a direction. Nothing here is cached: the target may
//! have moved, or the page may have scrolled or zoomed, between two calls.

pub mod bbox;
pub mod placement;

pub use bbox::{resolve_screen_bbox, ScreenBBox};
pub use placement::compute_placement;
