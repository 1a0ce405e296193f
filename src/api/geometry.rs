//! Positioning functions exported to JavaScript
//!
//! For pages that render their own overlay and only want the numbers.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::helpers::{deserialize, is_absent, serialize};
use crate::geometry::{Direction, NodeSize, Offset, Scroll};
use crate::host::WebHost;
use crate::layout::{compute_placement, resolve_screen_bbox, ScreenBBox};

/// Screen anchors `{n, s, e, w, nw, ne, sw, se}` of an SVG element
#[wasm_bindgen(js_name = screenBBox)]
pub fn screen_bbox(target: &Element) -> Result<JsValue, JsValue> {
    let host = WebHost::new()?;
    let bbox = resolve_screen_bbox(&host, target)?;
    serialize(&bbox, "Failed to serialize screen bounding box")
}

/// `{top, left}` for an overlay of the given size
#[wasm_bindgen(js_name = computePlacement)]
#[allow(clippy::too_many_arguments)]
pub fn compute_placement_js(
    anchors_js: JsValue,
    direction: &str,
    node_width: f64,
    node_height: f64,
    offset_js: JsValue,
    scroll_top: f64,
    scroll_left: f64,
) -> Result<JsValue, JsValue> {
    let anchors: ScreenBBox = deserialize(anchors_js, "Failed to deserialize anchors")?;
    let direction: Direction = direction.parse()?;
    let offset: Offset = if is_absent(&offset_js) {
        Offset::default()
    } else {
        deserialize(offset_js, "Failed to deserialize offset")?
    };

    let placement = compute_placement(
        direction,
        &anchors,
        NodeSize::new(node_width, node_height),
        offset,
        Scroll::new(scroll_top, scroll_left),
    );
    serialize(&placement, "Failed to serialize placement")
}
