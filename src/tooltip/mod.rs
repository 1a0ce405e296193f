//! Tooltip component
//!
//! A [`Tooltip`] owns exactly one floating overlay node. `show` fills it,
//! positions it next to a target shape and makes it visible; `hide` only
//! toggles opacity and pointer events, so the next `show` is cheap. After
//! `destroy`, the next call that needs the node recreates it.

pub mod options;
pub mod resolver;

pub use options::TooltipOptions;
pub use resolver::Resolver;

use crate::error::TooltipError;
use crate::geometry::{Direction, Offset, Placement, Scroll};
use crate::host::Host;
use crate::layout::{compute_placement, resolve_screen_bbox};

/// Observable state of the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Hidden,
    Visible,
    Destroyed,
}

/// Tooltip bound to a host document
///
/// `D` is the datum passed to `show` and forwarded to the resolvers. `E` is
/// the error type resolvers may fail with; it is returned from `show`
/// unchanged, so callers see their own errors.
pub struct Tooltip<H: Host, D: ?Sized + 'static, E: 'static = TooltipError> {
    host: H,
    root: H::Root,
    node: Option<H::Node>,
    mounted: bool,
    visible: bool,
    svg: Option<H::Shape>,
    target: Option<H::Shape>,
    html: Resolver<D, String, E>,
    offset: Resolver<D, Offset, E>,
    direction: Resolver<D, Direction, E>,
}

fn init_node<H: Host>(host: &H) -> Result<H::Node, TooltipError> {
    let node = host.create_node()?;
    host.set_style(&node, "position", "absolute")?;
    host.set_style(&node, "top", "0")?;
    host.set_style(&node, "opacity", "0")?;
    host.set_style(&node, "pointer-events", "none")?;
    host.set_style(&node, "box-sizing", "border-box")?;
    Ok(node)
}

impl<H, D, E> Tooltip<H, D, E>
where
    H: Host,
    D: ?Sized + 'static,
    E: From<TooltipError> + 'static,
{
    /// Create a hidden tooltip whose overlay will live under `root`
    pub fn new(host: H, root: H::Root) -> Result<Self, TooltipError> {
        let node = init_node(&host)?;
        Ok(Self {
            host,
            root,
            node: Some(node),
            mounted: false,
            visible: false,
            svg: None,
            target: None,
            html: Resolver::constant(" ".to_string()),
            offset: Resolver::constant(Offset::default()),
            direction: Resolver::constant(Direction::default()),
        })
    }

    /// Bind to a visualization and put the overlay into the document
    ///
    /// `vis` may be the `<svg>` itself or any element inside it. Nothing
    /// changes when no SVG root can be found.
    pub fn attach(&mut self, vis: &H::Shape) -> Result<&mut Self, TooltipError> {
        let svg = self.host.svg_root(vis).ok_or(TooltipError::NoSvgRoot)?;
        self.svg = Some(svg);
        self.mount()?;
        log::debug!("tooltip attached to SVG root");
        Ok(self)
    }

    /// Fill, position and reveal the overlay for `datum`
    ///
    /// An explicit `target` replaces the remembered one and is kept for later
    /// calls. Content is written before the node is measured so its size
    /// reflects what is being shown.
    pub fn show(&mut self, datum: &D, target: Option<&H::Shape>) -> Result<&mut Self, E> {
        let content = self.html.resolve(datum)?;
        let offset = self.offset.resolve(datum)?;
        let direction = self.direction.resolve(datum)?;

        if let Some(target) = target {
            self.target = Some(target.clone());
        }
        let target = self.target.clone().ok_or(TooltipError::NoTarget)?;
        let anchors = resolve_screen_bbox(&self.host, &target)?;

        self.mount()?;
        let node = self.node()?;
        let host = &self.host;

        host.set_html(&node, &content);
        host.set_style(&node, "opacity", "1")?;
        host.set_style(&node, "pointer-events", "all")?;
        for dir in Direction::ALL {
            host.set_class(&node, dir.key(), false)?;
        }

        let placement = compute_placement(direction, &anchors, host.node_size(&node), offset, self.scroll());
        host.set_class(&node, direction.key(), true)?;
        host.set_style(&node, "top", &placement.top_px())?;
        host.set_style(&node, "left", &placement.left_px())?;

        self.visible = true;
        log::debug!(
            "tooltip shown {} at top={} left={}",
            direction,
            placement.top,
            placement.left
        );
        Ok(self)
    }

    /// Make the overlay transparent and click-through, keeping its content
    pub fn hide(&mut self) -> Result<&mut Self, TooltipError> {
        let node = self.node()?;
        self.host.set_style(&node, "opacity", "0")?;
        self.host.set_style(&node, "pointer-events", "none")?;
        self.visible = false;
        Ok(self)
    }

    /// Remove the overlay from the document
    pub fn destroy(&mut self) -> &mut Self {
        if let Some(node) = self.node.take() {
            self.host.remove(&node);
            log::debug!("tooltip node removed");
        }
        self.mounted = false;
        self.visible = false;
        self
    }

    /// Placement the overlay would get for `target`, without moving or showing it
    ///
    /// The current node is measured, so a destroyed overlay is recreated under
    /// the root first (hidden).
    pub fn placement(
        &mut self,
        target: &H::Shape,
        direction: Direction,
        offset: Offset,
    ) -> Result<Placement, TooltipError> {
        let anchors = resolve_screen_bbox(&self.host, target)?;
        let node = self.node()?;
        let size = self.host.node_size(&node);
        Ok(compute_placement(direction, &anchors, size, offset, self.scroll()))
    }

    pub fn state(&self) -> OverlayState {
        match (&self.node, self.visible) {
            (None, _) => OverlayState::Destroyed,
            (Some(_), true) => OverlayState::Visible,
            (Some(_), false) => OverlayState::Hidden,
        }
    }

    // --- configuration ---

    /// Set the content resolver; `None` restores the default (`" "`)
    pub fn set_html(&mut self, html: Option<Resolver<D, String, E>>) -> &mut Self {
        self.html = html.unwrap_or_else(|| Resolver::constant(" ".to_string()));
        self
    }

    pub fn html(&self) -> &Resolver<D, String, E> {
        &self.html
    }

    /// Set the offset resolver; `None` restores the default (`[0, 0]`)
    pub fn set_offset(&mut self, offset: Option<Resolver<D, Offset, E>>) -> &mut Self {
        self.offset = offset.unwrap_or_else(|| Resolver::constant(Offset::default()));
        self
    }

    pub fn offset(&self) -> &Resolver<D, Offset, E> {
        &self.offset
    }

    /// Set the direction resolver; `None` restores the default (`n`)
    pub fn set_direction(&mut self, direction: Option<Resolver<D, Direction, E>>) -> &mut Self {
        self.direction = direction.unwrap_or_else(|| Resolver::constant(Direction::default()));
        self
    }

    pub fn direction(&self) -> &Resolver<D, Direction, E> {
        &self.direction
    }

    /// Change the root anchor; a mounted overlay is moved under it
    pub fn set_root(&mut self, root: H::Root) -> Result<&mut Self, TooltipError> {
        self.root = root;
        if self.mounted {
            if let Some(node) = &self.node {
                self.host.append(&self.root, node)?;
            }
        }
        Ok(self)
    }

    pub fn root(&self) -> &H::Root {
        &self.root
    }

    /// The SVG root found by the last successful `attach`
    pub fn svg(&self) -> Option<&H::Shape> {
        self.svg.as_ref()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    // --- overlay pass-through ---

    pub fn set_attr(&mut self, name: &str, value: &str) -> Result<&mut Self, TooltipError> {
        let node = self.node()?;
        self.host.set_attr(&node, name, value)?;
        Ok(self)
    }

    pub fn attr(&mut self, name: &str) -> Result<Option<String>, TooltipError> {
        let node = self.node()?;
        Ok(self.host.attr(&node, name))
    }

    pub fn remove_attr(&mut self, name: &str) -> Result<&mut Self, TooltipError> {
        let node = self.node()?;
        self.host.remove_attr(&node, name)?;
        Ok(self)
    }

    pub fn set_style(&mut self, name: &str, value: &str) -> Result<&mut Self, TooltipError> {
        let node = self.node()?;
        self.host.set_style(&node, name, value)?;
        Ok(self)
    }

    pub fn style(&mut self, name: &str) -> Result<Option<String>, TooltipError> {
        let node = self.node()?;
        Ok(self.host.style(&node, name))
    }

    pub fn remove_style(&mut self, name: &str) -> Result<&mut Self, TooltipError> {
        let node = self.node()?;
        self.host.remove_style(&node, name)?;
        Ok(self)
    }

    /// The overlay node, recreated under the root if it was destroyed
    pub fn node(&mut self) -> Result<H::Node, TooltipError> {
        if let Some(node) = &self.node {
            return Ok(node.clone());
        }
        let node = init_node(&self.host)?;
        self.host.append(&self.root, &node)?;
        self.node = Some(node.clone());
        self.mounted = true;
        self.visible = false;
        log::debug!("tooltip node recreated");
        Ok(node)
    }

    fn mount(&mut self) -> Result<(), TooltipError> {
        let node = self.node()?;
        if !self.mounted {
            self.host.append(&self.root, &node)?;
            self.mounted = true;
        }
        Ok(())
    }

    fn scroll(&self) -> Scroll {
        self.host.document_scroll().or(self.host.root_scroll(&self.root))
    }
}
