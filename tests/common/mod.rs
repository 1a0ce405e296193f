// In-memory host used by the integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use svg_tooltip::host::Host;
use svg_tooltip::{LocalBox, Matrix, NodeSize, Scroll, TooltipError};

pub type NodeId = usize;
pub type ShapeId = usize;
pub type RootId = usize;

#[derive(Debug, Clone, Default)]
pub struct MockNode {
    pub styles: BTreeMap<String, String>,
    pub attrs: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    pub html: String,
    pub parent: Option<RootId>,
    pub removed: bool,
}

#[derive(Debug, Clone)]
pub struct MockShape {
    pub ctm: Option<Matrix>,
    pub bbox: LocalBox,
    pub parent: Option<ShapeId>,
    pub is_svg: bool,
    /// `getBBox()` throws, as it does for elements that are not rendered
    pub bbox_fails: bool,
}

#[derive(Debug, Default)]
struct MockDom {
    nodes: Vec<MockNode>,
    shapes: Vec<MockShape>,
    root_scrolls: Vec<Scroll>,
    document_scroll: Scroll,
    node_size: NodeSize,
}

/// Fake document: overlay nodes, SVG shapes and scroll state
#[derive(Debug, Clone, Default)]
pub struct MockHost {
    dom: Rc<RefCell<MockDom>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_root(&self) -> RootId {
        let mut dom = self.dom.borrow_mut();
        dom.root_scrolls.push(Scroll::default());
        dom.root_scrolls.len() - 1
    }

    fn add(&self, shape: MockShape) -> ShapeId {
        let mut dom = self.dom.borrow_mut();
        dom.shapes.push(shape);
        dom.shapes.len() - 1
    }

    /// An `<svg>` element with its own screen transform
    pub fn add_svg(&self, ctm: Matrix, bbox: LocalBox) -> ShapeId {
        self.add(MockShape { ctm: Some(ctm), bbox, parent: None, is_svg: true, bbox_fails: false })
    }

    pub fn add_shape(&self, parent: ShapeId, ctm: Option<Matrix>, bbox: LocalBox) -> ShapeId {
        self.add(MockShape { ctm, bbox, parent: Some(parent), is_svg: false, bbox_fails: false })
    }

    /// An element that is not inside any `<svg>`
    pub fn add_detached(&self, bbox: LocalBox) -> ShapeId {
        self.add(MockShape { ctm: None, bbox, parent: None, is_svg: false, bbox_fails: false })
    }

    pub fn set_ctm(&self, shape: ShapeId, ctm: Option<Matrix>) {
        self.dom.borrow_mut().shapes[shape].ctm = ctm;
    }

    pub fn fail_bbox(&self, shape: ShapeId) {
        self.dom.borrow_mut().shapes[shape].bbox_fails = true;
    }

    pub fn set_document_scroll(&self, scroll: Scroll) {
        self.dom.borrow_mut().document_scroll = scroll;
    }

    pub fn set_root_scroll(&self, root: RootId, scroll: Scroll) {
        self.dom.borrow_mut().root_scrolls[root] = scroll;
    }

    /// Size every overlay node reports from `node_size`
    pub fn set_node_size(&self, size: NodeSize) {
        self.dom.borrow_mut().node_size = size;
    }

    pub fn node(&self, id: NodeId) -> MockNode {
        self.dom.borrow().nodes[id].clone()
    }

    pub fn style_of(&self, id: NodeId, name: &str) -> Option<String> {
        self.dom.borrow().nodes[id].styles.get(name).cloned()
    }

    /// Live overlay nodes currently under `root`
    pub fn children(&self, root: RootId) -> Vec<NodeId> {
        self.dom
            .borrow()
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| !n.removed && n.parent == Some(root))
            .map(|(id, _)| id)
            .collect()
    }
}

impl Host for MockHost {
    type Node = NodeId;
    type Shape = ShapeId;
    type Root = RootId;

    fn screen_ctm(&self, shape: &ShapeId) -> Option<Matrix> {
        self.dom.borrow().shapes[*shape].ctm
    }

    fn local_bbox(&self, shape: &ShapeId) -> Result<LocalBox, TooltipError> {
        let dom = self.dom.borrow();
        let shape = &dom.shapes[*shape];
        if shape.bbox_fails {
            return Err(TooltipError::Dom("Failed to read bounding box: not rendered".to_string()));
        }
        Ok(shape.bbox)
    }

    fn parent(&self, shape: &ShapeId) -> Option<ShapeId> {
        self.dom.borrow().shapes[*shape].parent
    }

    fn svg_root(&self, shape: &ShapeId) -> Option<ShapeId> {
        let dom = self.dom.borrow();
        if dom.shapes[*shape].is_svg {
            return Some(*shape);
        }
        let mut current = dom.shapes[*shape].parent;
        while let Some(id) = current {
            if dom.shapes[id].is_svg {
                return Some(id);
            }
            current = dom.shapes[id].parent;
        }
        None
    }

    fn create_node(&self) -> Result<NodeId, TooltipError> {
        let mut dom = self.dom.borrow_mut();
        dom.nodes.push(MockNode::default());
        Ok(dom.nodes.len() - 1)
    }

    fn append(&self, root: &RootId, node: &NodeId) -> Result<(), TooltipError> {
        let mut dom = self.dom.borrow_mut();
        if *root >= dom.root_scrolls.len() {
            return Err(TooltipError::Dom(format!("no root {}", root)));
        }
        dom.nodes[*node].parent = Some(*root);
        Ok(())
    }

    fn remove(&self, node: &NodeId) {
        let mut dom = self.dom.borrow_mut();
        dom.nodes[*node].removed = true;
        dom.nodes[*node].parent = None;
    }

    fn set_style(&self, node: &NodeId, name: &str, value: &str) -> Result<(), TooltipError> {
        self.dom.borrow_mut().nodes[*node]
            .styles
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn style(&self, node: &NodeId, name: &str) -> Option<String> {
        self.style_of(*node, name)
    }

    fn remove_style(&self, node: &NodeId, name: &str) -> Result<(), TooltipError> {
        self.dom.borrow_mut().nodes[*node].styles.remove(name);
        Ok(())
    }

    fn set_attr(&self, node: &NodeId, name: &str, value: &str) -> Result<(), TooltipError> {
        self.dom.borrow_mut().nodes[*node]
            .attrs
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn attr(&self, node: &NodeId, name: &str) -> Option<String> {
        self.dom.borrow().nodes[*node].attrs.get(name).cloned()
    }

    fn remove_attr(&self, node: &NodeId, name: &str) -> Result<(), TooltipError> {
        self.dom.borrow_mut().nodes[*node].attrs.remove(name);
        Ok(())
    }

    fn set_class(&self, node: &NodeId, class: &str, enabled: bool) -> Result<(), TooltipError> {
        let mut dom = self.dom.borrow_mut();
        let classes = &mut dom.nodes[*node].classes;
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
        Ok(())
    }

    fn set_html(&self, node: &NodeId, html: &str) {
        self.dom.borrow_mut().nodes[*node].html = html.to_string();
    }

    fn node_size(&self, _node: &NodeId) -> NodeSize {
        self.dom.borrow().node_size
    }

    fn document_scroll(&self) -> Scroll {
        self.dom.borrow().document_scroll
    }

    fn root_scroll(&self, root: &RootId) -> Scroll {
        self.dom.borrow().root_scrolls[*root]
    }
}
