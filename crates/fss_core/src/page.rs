//! Listing page: breadcrumb header, entry list and the hover plugin menu.
use std::fmt;

use crate::{
    breadcrumbs, cwd_href, escape_html, normalize_root, Crumb, Element, Failure, Plugin, Positioner, QueryResult,
    RenderError,
};

/// Shown in the plugin menu when the server reports no plugins.
pub const NO_PLUGINS_PLACEHOLDER: &str = "No plugins installed";

/// The menu opens this many pixels above the marker's top edge.
pub const MENU_TOP_OFFSET: f64 = 5.0;

const MARKER_TEXT: &str = " &gt;&gt; ";
const MENU_LIST_STYLE: &str = "list-style-type: none; padding: 5px; margin: 0px;";
const ERROR_PAGE_STYLE: &str = "font-family: ui-monospace, courier new, monospace";

/// Hover target next to the header (the listed directory) or an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerId {
    Header,
    Entry(usize),
}

impl MarkerId {
    /// Element id of the marker span; the header marker carries none.
    pub fn dom_id(self) -> Option<String> {
        match self {
            MarkerId::Header => None,
            MarkerId::Entry(index) => Some(index.to_string()),
        }
    }

    pub fn from_dom_id(id: &str) -> Option<MarkerId> {
        if id.is_empty() {
            return Some(MarkerId::Header);
        }
        id.parse().ok().map(MarkerId::Entry)
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerId::Header => write!(f, "header"),
            MarkerId::Entry(index) => write!(f, "entry {index}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub index: usize,
    pub name: String,
    pub href: String,
}

/// Everything the hover handlers need after the listing was rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    /// Normalized root, always ending in `/`.
    pub root: String,
    pub crumbs: Vec<Crumb>,
    pub entries: Vec<EntryView>,
    pub plugins: Vec<Plugin>,
}

impl ListingView {
    pub fn from_result(result: &QueryResult) -> Result<Self, RenderError> {
        let listing = result.listing()?;
        let plugins = result.plugins()?.to_vec();
        let root = normalize_root(&listing.root);
        let entries = listing
            .paths
            .iter()
            .enumerate()
            .map(|(index, name)| EntryView {
                index,
                name: name.clone(),
                href: cwd_href(&format!("{root}{name}")),
            })
            .collect();

        Ok(Self {
            crumbs: breadcrumbs(&listing.root),
            root,
            entries,
            plugins,
        })
    }

    /// Path a plugin opened from `marker` should operate on.
    pub fn marker_target(&self, marker: MarkerId) -> Result<String, RenderError> {
        match marker {
            MarkerId::Header => Ok(self.root.clone()),
            MarkerId::Entry(index) => self
                .entries
                .get(index)
                .map(|entry| format!("{}{}", self.root, entry.name))
                .ok_or(RenderError::UnknownMarker(marker)),
        }
    }
}

pub fn render_listing(view: &ListingView) -> String {
    let mut header = String::from("<a href=\"?cwd=/\">/</a>");
    // The root link already reads as the leading separator, so the first
    // crumb follows it directly: `/a/b`, not `//a/b`.
    for (i, crumb) in view.crumbs.iter().enumerate() {
        if i > 0 {
            header.push('/');
        }
        header.push_str(&link(&crumb.href, &crumb.label));
    }

    let items: String = view
        .entries
        .iter()
        .map(|entry| {
            format!(
                "<li>{}<span class=\"nav\" id=\"{}\">{MARKER_TEXT}</span></li>",
                link(&entry.href, &entry.name),
                entry.index
            )
        })
        .collect();

    format!("<h1>{header}<span class=\"nav\">{MARKER_TEXT}</span></h1><ul>{items}</ul>")
}

pub fn plugin_href(plugin: &Plugin, target: &str) -> String {
    format!("/{}{}", plugin.directory, cwd_href(target))
}

pub fn render_plugin_menu(view: &ListingView, marker: MarkerId) -> Result<String, RenderError> {
    let target = view.marker_target(marker)?;
    let items = if view.plugins.is_empty() {
        format!("<em>{NO_PLUGINS_PLACEHOLDER}</em>")
    } else {
        view.plugins
            .iter()
            .map(|plugin| format!("<li>{}</li>", link(&plugin_href(plugin, &target), &plugin.name)))
            .collect()
    };
    Ok(format!("<ul style=\"{MENU_LIST_STYLE}\">{items}</ul>"))
}

/// Renders the listing for `result` into `container`, replacing its contents.
pub fn app_main(
    result: &QueryResult,
    container: &mut dyn Element,
) -> Result<ListingView, RenderError> {
    let view = ListingView::from_result(result)?;
    container.set_inner_html(render_listing(&view));
    Ok(view)
}

/// Shows the plugin menu for `marker` with its top-left corner at (`left`, `top`).
pub fn show_plugin_menu(
    view: &ListingView,
    marker: MarkerId,
    left: f64,
    top: f64,
    plugin_container: &mut dyn Element,
) -> Result<(), RenderError> {
    let menu = render_plugin_menu(view, marker)?;
    plugin_container.set_style("display", "block".to_string());
    plugin_container.set_style("left", format!("{left}px"));
    plugin_container.set_style("top", format!("{top}px"));
    plugin_container.set_inner_html(menu);
    Ok(())
}

/// Pointer-enter handler for a hover marker.
pub fn on_marker_enter(
    view: &ListingView,
    marker: MarkerId,
    positioner: &dyn Positioner,
    plugin_container: &mut dyn Element,
) -> Result<(), RenderError> {
    let rect = positioner
        .marker_rect(marker)
        .ok_or(RenderError::UnknownMarker(marker))?;
    show_plugin_menu(
        view,
        marker,
        rect.right,
        rect.top - MENU_TOP_OFFSET,
        plugin_container,
    )
}

/// Pointer-leave handler for the plugin menu.
pub fn on_menu_leave(plugin_container: &mut dyn Element) {
    plugin_container.set_style("display", "none".to_string());
}

/// Full-body error block: the message as heading, the trace below it.
pub fn render_error_page(failure: &Failure) -> String {
    format!(
        "<div style=\"{ERROR_PAGE_STYLE}\">\n  <h1>{}</h1>\n  <blockquote><pre>{}</pre></blockquote>\n</div>",
        escape_html(&failure.message),
        escape_html(&failure.trace.join("\n"))
    )
}

fn link(href: &str, text: &str) -> String {
    format!("<a href=\"{}\">{}</a>", escape_html(href), escape_html(text))
}
