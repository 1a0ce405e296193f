//! `Tooltip` class exported to JavaScript
//!
//! ```js
//! const tip = new Tooltip({ className: "d3-tip", direction: "n" });
//! tip.attach(svg);
//! tip.html(d => `<b>${d.name}</b>`);
//! circle.addEventListener("mouseenter", e => tip.show([datum, e.target]));
//! circle.addEventListener("mouseleave", () => tip.hide());
//! ```
//!
//! Value setters accept a constant or a function. Functions are called with
//! the arguments given to `show`; whatever they throw is rethrown from `show`.
//! Called with no argument they return the current value; `null` restores
//! the default.

use js_sys::Function;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, SvgElement};

use super::helpers::{apply, deserialize, is_absent, serialize, to_text, validation_error};
use crate::geometry::{Direction, Offset};
use crate::host::WebHost;
use crate::tooltip::{OverlayState, Resolver, Tooltip, TooltipOptions};

type Args = [JsValue];

const DEFAULT_HTML: &str = " ";

#[wasm_bindgen(js_name = Tooltip)]
pub struct JsTooltip {
    inner: Tooltip<WebHost, Args, JsValue>,
    // What the getters hand back: the constant or function last given
    direction_js: JsValue,
    offset_js: JsValue,
    html_js: JsValue,
}

fn default_offset_js() -> Result<JsValue, JsValue> {
    serialize(&Offset::default(), "Failed to serialize offset")
}

fn direction_resolver(value: &JsValue) -> Result<Resolver<Args, Direction, JsValue>, JsValue> {
    if let Some(func) = value.dyn_ref::<Function>() {
        let func = func.clone();
        return Ok(Resolver::from_fn(move |args: &Args| {
            let key = apply(&func, args)?
                .as_string()
                .ok_or_else(|| validation_error("direction function must return a string"))?;
            Ok(key.parse::<Direction>()?)
        }));
    }
    let key = value
        .as_string()
        .ok_or_else(|| validation_error("direction must be a string or a function"))?;
    Ok(Resolver::constant(key.parse::<Direction>()?))
}

fn offset_resolver(value: &JsValue) -> Result<Resolver<Args, Offset, JsValue>, JsValue> {
    if let Some(func) = value.dyn_ref::<Function>() {
        let func = func.clone();
        return Ok(Resolver::from_fn(move |args: &Args| {
            deserialize::<Offset>(apply(&func, args)?, "offset function must return [dy, dx]")
        }));
    }
    let offset: Offset = deserialize(value.clone(), "offset must be [dy, dx] or a function")?;
    Ok(Resolver::constant(offset))
}

fn html_resolver(value: &JsValue) -> Result<Resolver<Args, String, JsValue>, JsValue> {
    if let Some(func) = value.dyn_ref::<Function>() {
        let func = func.clone();
        return Ok(Resolver::from_fn(move |args: &Args| {
            let html = apply(&func, args)?;
            to_text(&html).ok_or_else(|| validation_error("html function must return a string or number"))
        }));
    }
    let html = to_text(value).ok_or_else(|| validation_error("html must be a string, number or function"))?;
    Ok(Resolver::constant(html))
}

#[wasm_bindgen(js_class = Tooltip)]
impl JsTooltip {
    /// Create a tooltip anchored to `document.body`
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<JsTooltip, JsValue> {
        let host = WebHost::new()?;
        let body = host.body()?;
        let mut tooltip = JsTooltip {
            inner: Tooltip::new(host, body)?,
            direction_js: JsValue::from_str(Direction::default().key()),
            offset_js: default_offset_js()?,
            html_js: JsValue::from_str(DEFAULT_HTML),
        };

        if !is_absent(&options) {
            let options: TooltipOptions = deserialize(options, "Failed to deserialize tooltip options")?;
            options.apply(&mut tooltip.inner)?;
            if let Some(direction) = options.direction {
                tooltip.direction_js = JsValue::from_str(direction.key());
            }
            if let Some(offset) = options.offset {
                tooltip.offset_js = serialize(&offset, "Failed to serialize offset")?;
            }
            if let Some(html) = &options.html {
                tooltip.html_js = JsValue::from_str(html);
            }
        }

        Ok(tooltip)
    }

    /// Bind to an `<svg>` (or an element inside one)
    pub fn attach(&mut self, vis: &Element) -> Result<(), JsValue> {
        self.inner.attach(vis)?;
        Ok(())
    }

    /// Show the tooltip; a trailing SVG element in `args` is the target
    pub fn show(&mut self, args: Box<[JsValue]>) -> Result<(), JsValue> {
        let mut args = args.into_vec();
        let target = match args.last() {
            Some(last) if last.is_instance_of::<SvgElement>() => {
                args.pop().map(|v| v.unchecked_into::<Element>())
            }
            _ => None,
        };

        self.inner.show(&args, target.as_ref())?;
        Ok(())
    }

    pub fn hide(&mut self) -> Result<(), JsValue> {
        self.inner.hide()?;
        Ok(())
    }

    pub fn destroy(&mut self) {
        self.inner.destroy();
    }

    /// One of `n s e w nw ne sw se`, or a function returning one
    pub fn direction(&mut self, value: JsValue) -> Result<JsValue, JsValue> {
        if value.is_undefined() {
            return Ok(self.direction_js.clone());
        }
        if value.is_null() {
            self.inner.set_direction(None);
            self.direction_js = JsValue::from_str(Direction::default().key());
        } else {
            self.inner.set_direction(Some(direction_resolver(&value)?));
            self.direction_js = value;
        }
        Ok(JsValue::UNDEFINED)
    }

    /// `[vertical, horizontal]` pixels, or a function returning one
    pub fn offset(&mut self, value: JsValue) -> Result<JsValue, JsValue> {
        if value.is_undefined() {
            return Ok(self.offset_js.clone());
        }
        if value.is_null() {
            self.inner.set_offset(None);
            self.offset_js = default_offset_js()?;
        } else {
            self.inner.set_offset(Some(offset_resolver(&value)?));
            self.offset_js = value;
        }
        Ok(JsValue::UNDEFINED)
    }

    /// HTML string (numbers are stringified), or a function returning one
    pub fn html(&mut self, value: JsValue) -> Result<JsValue, JsValue> {
        if value.is_undefined() {
            return Ok(self.html_js.clone());
        }
        if value.is_null() {
            self.inner.set_html(None);
            self.html_js = JsValue::from_str(DEFAULT_HTML);
        } else {
            self.inner.set_html(Some(html_resolver(&value)?));
            self.html_js = value;
        }
        Ok(JsValue::UNDEFINED)
    }

    #[wasm_bindgen(js_name = rootElement)]
    pub fn root_element(&mut self, root: Element) -> Result<(), JsValue> {
        self.inner.set_root(root)?;
        Ok(())
    }

    /// Get (no value), remove (`null`) or set an attribute on the overlay
    pub fn attr(&mut self, name: &str, value: JsValue) -> Result<JsValue, JsValue> {
        if value.is_undefined() {
            return Ok(self.inner.attr(name)?.map(JsValue::from).unwrap_or(JsValue::NULL));
        }
        if value.is_null() {
            self.inner.remove_attr(name)?;
        } else {
            let text = to_text(&value)
                .ok_or_else(|| validation_error(format!("attribute '{}' must be a string or number", name)))?;
            self.inner.set_attr(name, &text)?;
        }
        Ok(JsValue::UNDEFINED)
    }

    /// Get (no value), remove (`null`) or set an inline style on the overlay
    pub fn style(&mut self, name: &str, value: JsValue) -> Result<JsValue, JsValue> {
        if value.is_undefined() {
            return Ok(self.inner.style(name)?.map(JsValue::from).unwrap_or(JsValue::NULL));
        }
        if value.is_null() {
            self.inner.remove_style(name)?;
        } else {
            let text = to_text(&value)
                .ok_or_else(|| validation_error(format!("style '{}' must be a string or number", name)))?;
            self.inner.set_style(name, &text)?;
        }
        Ok(JsValue::UNDEFINED)
    }

    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        match self.inner.state() {
            OverlayState::Hidden => "hidden",
            OverlayState::Visible => "visible",
            OverlayState::Destroyed => "destroyed",
        }
        .to_string()
    }
}
