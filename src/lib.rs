//! SVG Tooltip WASM Module
//!
//! Places a floating HTML tooltip next to SVG chart elements. The layout core
//! (`layout`) is pure geometry; `tooltip` adds the stateful overlay on top of
//! a [`host::Host`], and `api` exports it all to JavaScript.

pub mod error;
pub mod geometry;
pub mod host;
pub mod layout;
pub mod tooltip;
pub mod api;

// Re-export commonly used types
pub use error::TooltipError;
pub use geometry::{Direction, LocalBox, Matrix, NodeSize, Offset, Placement, Point, Scroll};
pub use layout::{compute_placement, resolve_screen_bbox, ScreenBBox};
pub use tooltip::{OverlayState, Resolver, Tooltip, TooltipOptions};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("SVG tooltip WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        api::helpers::log_warn("logger already initialized");
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
