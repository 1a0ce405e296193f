//! Error types for tooltip positioning
//!
//! Every failure is local and synchronous; nothing here is retried.

use thiserror::Error;

/// Errors raised by the tooltip and its host bindings
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TooltipError {
    /// The visualization root is neither an `<svg>` nor owned by one
    #[error("no SVG root found for the visualization element")]
    NoSvgRoot,

    /// No element on the target's parent chain exposes a screen transform
    #[error("target shape has no screen transform on its parent chain")]
    NoScreenTransform,

    /// `show` was called without an explicit or remembered target
    #[error("no target shape to position the tooltip against")]
    NoTarget,

    /// Direction key is not one of n, s, e, w, nw, ne, sw, se
    #[error("unknown tooltip direction: '{0}'")]
    UnknownDirection(String),

    /// No window, document or body available
    #[error("no document available in this environment")]
    NoDocument,

    /// A DOM call failed
    #[error("DOM operation failed: {0}")]
    Dom(String),
}
