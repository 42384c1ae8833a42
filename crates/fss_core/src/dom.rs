//! Seams between the renderer and whatever surface hosts it.
//!
//! Rendering only ever touches elements through [`Element`], and hover
//! positioning only reads geometry through [`Positioner`], so both can be
//! replaced by in-memory doubles.

use crate::MarkerId;

/// A mutable element on the host surface.
pub trait Element {
    fn set_inner_html(&mut self, html: String);
    fn inner_html(&self) -> &str;
    fn set_style(&mut self, property: &str, value: String);
    fn style(&self, property: &str) -> Option<&str>;
}

/// Screen-space bounding box of a rendered element, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Reads layout geometry for hover markers.
pub trait Positioner {
    fn marker_rect(&self, marker: MarkerId) -> Option<Rect>;
}

/// In-memory element used by the command-line host and by tests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VirtualElement {
    id: String,
    inner_html: String,
    styles: Vec<(String, String)>,
}

impl VirtualElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Serializes the element as a `div`, styles in the order first set.
    pub fn to_html(&self) -> String {
        let mut out = format!("<div id=\"{}\"", crate::escape_html(&self.id));
        if !self.styles.is_empty() {
            let style = self
                .styles
                .iter()
                .map(|(property, value)| format!("{property}: {value}"))
                .collect::<Vec<_>>()
                .join("; ");
            out.push_str(&format!(" style=\"{}\"", crate::escape_html(&style)));
        }
        out.push('>');
        out.push_str(&self.inner_html);
        out.push_str("</div>");
        out
    }
}

impl Element for VirtualElement {
    fn set_inner_html(&mut self, html: String) {
        self.inner_html = html;
    }

    fn inner_html(&self) -> &str {
        &self.inner_html
    }

    fn set_style(&mut self, property: &str, value: String) {
        match self.styles.iter_mut().find(|(p, _)| p == property) {
            Some((_, existing)) => *existing = value,
            None => self.styles.push((property.to_string(), value)),
        }
    }

    fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restyling_keeps_property_order() {
        let mut element = VirtualElement::new("plugin_container");
        element.set_style("display", "block".into());
        element.set_style("left", "10px".into());
        element.set_style("display", "none".into());
        element.set_inner_html("<ul></ul>".into());

        assert_eq!(element.style("display"), Some("none"));
        assert_eq!(
            element.to_html(),
            r#"<div id="plugin_container" style="display: none; left: 10px"><ul></ul></div>"#
        );
    }
}
