//! FSS core: data model, query construction, page rendering and the pure UI state machine.
mod breadcrumb;
mod dom;
mod effect;
mod error;
mod failure;
mod html;
mod model;
mod msg;
mod page;
mod query;
mod state;
mod update;
mod view_model;

pub use breadcrumb::{breadcrumbs, normalize_root, Crumb};
pub use dom::{Element, Positioner, Rect, VirtualElement};
pub use effect::Effect;
pub use error::RenderError;
pub use failure::Failure;
pub use html::escape_html;
pub use model::{DirectoryListing, Plugin, PluginList, QueryKind, QueryResult, DEFAULT_QUERY_KINDS};
pub use msg::Msg;
pub use page::{
    app_main, on_marker_enter, on_menu_leave, plugin_href, render_error_page,
    render_listing, render_plugin_menu, show_plugin_menu, EntryView, ListingView, MarkerId,
    MENU_TOP_OFFSET, NO_PLUGINS_PLACEHOLDER,
};
pub use query::{build_query_string, cwd_href, download_query, navigation_query, ParseAs};
pub use state::{AppState, Generation, MenuState, PageState};
pub use update::update;
pub use view_model::AppViewModel;
