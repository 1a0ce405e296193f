//! Declarative tooltip configuration
//!
//! Lets a host page configure a tooltip from one object (or JSON string)
//! instead of a chain of setter calls.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Resolver, Tooltip};
use crate::error::TooltipError;
use crate::geometry::{Direction, Offset};
use crate::host::Host;

/// Constant tooltip settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TooltipOptions {
    pub direction: Option<Direction>,
    pub offset: Option<Offset>,
    pub html: Option<String>,
    /// Added to the overlay's `class` attribute
    pub class_name: Option<String>,
    /// Inline styles for the overlay
    pub style: BTreeMap<String, String>,
    /// Extra attributes for the overlay
    pub attrs: BTreeMap<String, String>,
}

impl TooltipOptions {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Apply every set option to `tooltip`; unset options are left alone
    pub fn apply<H, D, E>(&self, tooltip: &mut Tooltip<H, D, E>) -> Result<(), TooltipError>
    where
        H: Host,
        D: ?Sized + 'static,
        E: From<TooltipError> + 'static,
    {
        if let Some(direction) = self.direction {
            tooltip.set_direction(Some(Resolver::constant(direction)));
        }
        if let Some(offset) = self.offset {
            tooltip.set_offset(Some(Resolver::constant(offset)));
        }
        if let Some(html) = &self.html {
            tooltip.set_html(Some(Resolver::constant(html.clone())));
        }
        if let Some(class_name) = &self.class_name {
            tooltip.set_attr("class", class_name)?;
        }
        for (name, value) in &self.attrs {
            tooltip.set_attr(name, value)?;
        }
        for (name, value) in &self.style {
            tooltip.set_style(name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_camel_case() {
        let options = TooltipOptions::from_json(
            r##"{
                "direction": "se",
                "offset": [-10, 4],
                "className": "d3-tip",
                "style": { "background-color": "#fff" }
            }"##,
        )
        .unwrap();

        assert_eq!(options.direction, Some(Direction::Se));
        assert_eq!(options.offset, Some(Offset::new(-10.0, 4.0)));
        assert_eq!(options.class_name.as_deref(), Some("d3-tip"));
        assert_eq!(options.style.get("background-color").map(String::as_str), Some("#fff"));
        assert!(options.html.is_none());
        assert!(options.attrs.is_empty());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(TooltipOptions::from_json("{}").unwrap(), TooltipOptions::default());
    }

    #[test]
    fn test_bad_direction_is_rejected() {
        assert!(TooltipOptions::from_json(r#"{ "direction": "up" }"#).is_err());
    }
}
