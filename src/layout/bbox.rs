//! Screen-space bounding box of a target shape
//!
//! ```text
//!  nw ---- n ---- ne
//!  |              |
//!  w              e
//!  |              |
//!  sw ---- s ---- se
//! ```

use serde::{Deserialize, Serialize};

use crate::error::TooltipError;
use crate::geometry::{Direction, LocalBox, Matrix, Point};
use crate::host::Host;

/// The eight anchor points of a shape, in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenBBox {
    pub n: Point,
    pub s: Point,
    pub e: Point,
    pub w: Point,
    pub nw: Point,
    pub ne: Point,
    pub sw: Point,
    pub se: Point,
}

impl ScreenBBox {
    /// Transforms a local box through `matrix`
    ///
    /// One scratch point is walked around the box, the same way it is done
    /// with `SVGPoint.matrixTransform`, so rotated or skewed matrices give the
    /// same anchors as the browser would.
    pub fn from_local(bbox: &LocalBox, matrix: &Matrix) -> Self {
        let (width, height) = (bbox.width, bbox.height);
        let mut point = Point::new(bbox.x, bbox.y);

        let nw = matrix.transform_point(point);
        point.x += width;
        let ne = matrix.transform_point(point);
        point.y += height;
        let se = matrix.transform_point(point);
        point.x -= width;
        let sw = matrix.transform_point(point);
        point.y -= height / 2.0;
        let w = matrix.transform_point(point);
        point.x += width;
        let e = matrix.transform_point(point);
        point.x -= width / 2.0;
        point.y -= height / 2.0;
        let n = matrix.transform_point(point);
        point.y += height;
        let s = matrix.transform_point(point);

        Self { n, s, e, w, nw, ne, sw, se }
    }

    pub fn anchor(&self, direction: Direction) -> Point {
        match direction {
            Direction::N => self.n,
            Direction::S => self.s,
            Direction::E => self.e,
            Direction::W => self.w,
            Direction::Nw => self.nw,
            Direction::Ne => self.ne,
            Direction::Sw => self.sw,
            Direction::Se => self.se,
        }
    }
}

/// Resolve the screen bounding box of `target`
///
/// Shapes nested in a group do not expose a screen transform in every
/// browser, so the parent chain is walked up to the first element that does.
/// The box is read from that same element.
pub fn resolve_screen_bbox<H: Host>(host: &H, target: &H::Shape) -> Result<ScreenBBox, TooltipError> {
    let mut element = target.clone();
    let matrix = loop {
        if let Some(matrix) = host.screen_ctm(&element) {
            break matrix;
        }
        match host.parent(&element) {
            Some(parent) => element = parent,
            None => return Err(TooltipError::NoScreenTransform),
        }
    };

    let local = host.local_bbox(&element)?;
    Ok(ScreenBBox::from_local(&local, &matrix))
}
