//! SVG Tooltip WASM API
//!
//! JavaScript-facing surface of the crate.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, serde conversions and error conversion
//! - `tooltip`: the `Tooltip` class
//! - `geometry`: stateless `screenBBox` / `computePlacement`

pub mod helpers;
pub mod geometry;
pub mod tooltip;

pub use geometry::{compute_placement_js, screen_bbox};
pub use tooltip::JsTooltip;
