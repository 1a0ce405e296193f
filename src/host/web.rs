//! Browser host built on `web-sys`

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, SvgElement, SvgGraphicsElement};

use super::Host;
use crate::error::TooltipError;
use crate::geometry::{LocalBox, Matrix, NodeSize, Scroll};

/// Host backed by the page's `document`
#[derive(Clone, Debug)]
pub struct WebHost {
    document: Document,
}

impl WebHost {
    pub fn new() -> Result<Self, TooltipError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(TooltipError::NoDocument)?;
        Ok(Self { document })
    }

    /// Default root anchor: `document.body`
    pub fn body(&self) -> Result<Element, TooltipError> {
        self.document
            .body()
            .map(Element::from)
            .ok_or(TooltipError::NoDocument)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn dom_error(context: &str, err: JsValue) -> TooltipError {
    TooltipError::Dom(format!("{}: {:?}", context, err))
}

impl Host for WebHost {
    type Node = HtmlElement;
    type Shape = Element;
    type Root = Element;

    fn screen_ctm(&self, shape: &Element) -> Option<Matrix> {
        let m = shape.dyn_ref::<SvgGraphicsElement>()?.get_screen_ctm()?;
        Some(Matrix::new(
            m.a() as f64,
            m.b() as f64,
            m.c() as f64,
            m.d() as f64,
            m.e() as f64,
            m.f() as f64,
        ))
    }

    fn local_bbox(&self, shape: &Element) -> Result<LocalBox, TooltipError> {
        let Some(graphics) = shape.dyn_ref::<SvgGraphicsElement>() else {
            return Ok(LocalBox::default());
        };
        let rect = graphics
            .get_b_box()
            .map_err(|e| dom_error("Failed to read bounding box", e))?;
        Ok(LocalBox::new(
            rect.x() as f64,
            rect.y() as f64,
            rect.width() as f64,
            rect.height() as f64,
        ))
    }

    fn parent(&self, shape: &Element) -> Option<Element> {
        shape.parent_element()
    }

    fn svg_root(&self, shape: &Element) -> Option<Element> {
        if shape.tag_name().eq_ignore_ascii_case("svg") {
            return Some(shape.clone());
        }
        shape
            .dyn_ref::<SvgElement>()?
            .owner_svg_element()
            .map(Element::from)
    }

    fn create_node(&self) -> Result<HtmlElement, TooltipError> {
        self.document
            .create_element("div")
            .map_err(|e| dom_error("Failed to create tooltip node", e))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| TooltipError::Dom("created node is not an HtmlElement".to_string()))
    }

    fn append(&self, root: &Element, node: &HtmlElement) -> Result<(), TooltipError> {
        root.append_child(node)
            .map(|_| ())
            .map_err(|e| dom_error("Failed to append tooltip node", e))
    }

    fn remove(&self, node: &HtmlElement) {
        node.remove();
    }

    fn set_style(&self, node: &HtmlElement, name: &str, value: &str) -> Result<(), TooltipError> {
        node.style()
            .set_property(name, value)
            .map_err(|e| dom_error(&format!("Failed to set style '{}'", name), e))
    }

    fn style(&self, node: &HtmlElement, name: &str) -> Option<String> {
        node.style()
            .get_property_value(name)
            .ok()
            .filter(|v| !v.is_empty())
    }

    fn remove_style(&self, node: &HtmlElement, name: &str) -> Result<(), TooltipError> {
        node.style()
            .remove_property(name)
            .map(|_| ())
            .map_err(|e| dom_error(&format!("Failed to remove style '{}'", name), e))
    }

    fn set_attr(&self, node: &HtmlElement, name: &str, value: &str) -> Result<(), TooltipError> {
        node.set_attribute(name, value)
            .map_err(|e| dom_error(&format!("Failed to set attribute '{}'", name), e))
    }

    fn attr(&self, node: &HtmlElement, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn remove_attr(&self, node: &HtmlElement, name: &str) -> Result<(), TooltipError> {
        node.remove_attribute(name)
            .map_err(|e| dom_error(&format!("Failed to remove attribute '{}'", name), e))
    }

    fn set_class(&self, node: &HtmlElement, class: &str, enabled: bool) -> Result<(), TooltipError> {
        node.class_list()
            .toggle_with_force(class, enabled)
            .map(|_| ())
            .map_err(|e| dom_error(&format!("Failed to toggle class '{}'", class), e))
    }

    fn set_html(&self, node: &HtmlElement, html: &str) {
        node.set_inner_html(html);
    }

    fn node_size(&self, node: &HtmlElement) -> NodeSize {
        NodeSize::new(node.offset_width() as f64, node.offset_height() as f64)
    }

    fn document_scroll(&self) -> Scroll {
        self.document
            .document_element()
            .map(|el| Scroll::new(el.scroll_top() as f64, el.scroll_left() as f64))
            .unwrap_or_default()
    }

    fn root_scroll(&self, root: &Element) -> Scroll {
        Scroll::new(root.scroll_top() as f64, root.scroll_left() as f64)
    }
}
