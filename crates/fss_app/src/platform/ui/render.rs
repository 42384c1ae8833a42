use fss_core::{
    on_menu_leave, render_error_page, render_listing, show_plugin_menu, AppViewModel, Element,
    MenuState, PageState, RenderError,
};
use fss_logging::fss_error;

use super::layout::Document;

/// Applies the view model to the document.
pub fn render(document: &mut Document, view: &AppViewModel) -> Result<(), RenderError> {
    if let Some(cwd) = &view.cwd {
        document.title = format!("fss: {cwd}");
    }

    match &view.page {
        PageState::Idle => {}
        PageState::Loading => {
            document
                .container
                .set_inner_html("<p><em>Loading...</em></p>".to_string());
            on_menu_leave(&mut document.plugin_container);
        }
        PageState::Loaded(listing) => {
            document.title = format!("fss: {}", listing.root);
            document.container.set_inner_html(render_listing(listing));
            match view.menu {
                MenuState::Hidden => on_menu_leave(&mut document.plugin_container),
                MenuState::Shown { marker, left, top } => show_plugin_menu(
                    listing,
                    marker,
                    left,
                    top,
                    &mut document.plugin_container,
                )?,
            }
        }
        PageState::Failed(failure) => {
            fss_error!("{}", failure);
            document.body.set_inner_html(render_error_page(failure));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fss_core::{DirectoryListing, Failure, ListingView, MarkerId, Plugin, QueryResult};

    fn listing() -> ListingView {
        ListingView::from_result(&QueryResult {
            cwd: None,
            list: Some(DirectoryListing {
                root: "/a".to_string(),
                paths: vec!["x".to_string()],
            }),
            plugins: Some(vec![Plugin::new("gallery")]),
        })
        .unwrap()
    }

    #[test]
    fn loaded_page_with_open_menu() {
        let mut document = Document::new();
        let view = AppViewModel {
            page: PageState::Loaded(listing()),
            menu: MenuState::Shown {
                marker: MarkerId::Entry(0),
                left: 72.0,
                top: 75.0,
            },
            ..AppViewModel::default()
        };

        render(&mut document, &view).unwrap();

        assert_eq!(document.title, "fss: /a/");
        assert!(document.container.inner_html().contains(r#"href="?cwd=/a/x""#));
        assert_eq!(document.plugin_container.style("display"), Some("block"));
        assert_eq!(document.plugin_container.style("left"), Some("72px"));
        assert!(document
            .plugin_container
            .inner_html()
            .contains(r#"href="/gallery?cwd=/a/x""#));
    }

    #[test]
    fn failure_replaces_body() {
        let mut document = Document::new();
        let view = AppViewModel {
            page: PageState::Failed(Failure::new("Not Found")),
            ..AppViewModel::default()
        };

        render(&mut document, &view).unwrap();

        assert!(document.body.inner_html().contains("<h1>Not Found</h1>"));
        assert!(!document.to_html().contains("id=\"container\""));
    }
}
