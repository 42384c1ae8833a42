use fss_core::{escape_html, Element, VirtualElement};

use super::constants::*;

const PAGE_STYLE: &str = "\
body { font-family: sans-serif; }
.nav { cursor: pointer; color: #888; }
#plugin_container { position: fixed; background: #fff; border: 1px solid #888; }";

/// The host page: a listing container and a floating plugin menu inside a body.
pub struct Document {
    pub title: String,
    /// Empty until something replaces the whole body.
    pub body: VirtualElement,
    pub container: VirtualElement,
    pub plugin_container: VirtualElement,
}

impl Document {
    pub fn new() -> Self {
        let mut plugin_container = VirtualElement::new(PLUGIN_CONTAINER_ID);
        plugin_container.set_style("display", "none".to_string());
        Self {
            title: "fss".to_string(),
            body: VirtualElement::new(BODY_ID),
            container: VirtualElement::new(CONTAINER_ID),
            plugin_container,
        }
    }

    pub fn to_html(&self) -> String {
        let body = if self.body.inner_html().is_empty() {
            format!(
                "{}\n{}",
                self.container.to_html(),
                self.plugin_container.to_html()
            )
        } else {
            self.body.inner_html().to_string()
        };
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{PAGE_STYLE}\n</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
            escape_html(&self.title)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_document_has_both_containers_and_hidden_menu() {
        let html = Document::new().to_html();
        assert!(html.contains(r#"<div id="container"></div>"#));
        assert!(html.contains(r#"<div id="plugin_container" style="display: none"></div>"#));
    }

    #[test]
    fn replaced_body_drops_the_containers() {
        let mut document = Document::new();
        document.body.set_inner_html("<h1>boom</h1>".to_string());
        let html = document.to_html();

        assert!(html.contains("<body>\n<h1>boom</h1>\n</body>"));
        assert!(!html.contains("container"));
    }
}
