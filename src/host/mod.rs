//! Host document and SVG geometry bindings
//!
//! The tooltip never touches `web_sys` directly; it talks to a [`Host`].
//! [`WebHost`] is the browser implementation. Tests drive the tooltip through
//! an in-memory host instead.

pub mod web;

pub use web::WebHost;

use crate::error::TooltipError;
use crate::geometry::{LocalBox, Matrix, NodeSize, Scroll};

/// The parts of the DOM and SVG geometry API the tooltip needs
pub trait Host {
    /// The floating overlay element
    type Node: Clone;
    /// A rendered SVG element, or any element nested inside one
    type Shape: Clone;
    /// The element the overlay is appended to
    type Root: Clone;

    // --- SVG geometry ---

    /// `getScreenCTM()`, or `None` if this element does not expose one
    fn screen_ctm(&self, shape: &Self::Shape) -> Option<Matrix>;

    /// `getBBox()` in the element's local coordinates; fails for unrendered elements
    fn local_bbox(&self, shape: &Self::Shape) -> Result<LocalBox, TooltipError>;

    fn parent(&self, shape: &Self::Shape) -> Option<Self::Shape>;

    /// The element itself if it is an `<svg>`, otherwise its owner `<svg>`
    fn svg_root(&self, shape: &Self::Shape) -> Option<Self::Shape>;

    // --- overlay element ---

    /// Create a detached `div`
    fn create_node(&self) -> Result<Self::Node, TooltipError>;

    /// Append `node` under `root`, moving it if it already has a parent
    fn append(&self, root: &Self::Root, node: &Self::Node) -> Result<(), TooltipError>;

    fn remove(&self, node: &Self::Node);

    fn set_style(&self, node: &Self::Node, name: &str, value: &str) -> Result<(), TooltipError>;

    fn style(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn remove_style(&self, node: &Self::Node, name: &str) -> Result<(), TooltipError>;

    fn set_attr(&self, node: &Self::Node, name: &str, value: &str) -> Result<(), TooltipError>;

    fn attr(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn remove_attr(&self, node: &Self::Node, name: &str) -> Result<(), TooltipError>;

    fn set_class(&self, node: &Self::Node, class: &str, enabled: bool) -> Result<(), TooltipError>;

    fn set_html(&self, node: &Self::Node, html: &str);

    /// Current rendered size of the node
    fn node_size(&self, node: &Self::Node) -> NodeSize;

    // --- scrolling ---

    /// Scroll position of `document.documentElement`
    fn document_scroll(&self) -> Scroll;

    /// Scroll position of an anchor element
    fn root_scroll(&self, root: &Self::Root) -> Scroll;
}
