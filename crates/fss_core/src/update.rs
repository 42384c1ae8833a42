use crate::{
    AppState, Effect, Failure, ListingView, MenuState, Msg, PageState, DEFAULT_QUERY_KINDS,
    MENU_TOP_OFFSET,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Navigate(cwd) => {
            let generation = state.begin_navigation(cwd.clone());
            vec![Effect::IssueQuery {
                generation,
                cwd,
                kinds: DEFAULT_QUERY_KINDS.to_vec(),
            }]
        }
        Msg::QueryLoaded { generation, result } => {
            // A response for an older navigation must not overwrite a newer page.
            if generation != state.generation() {
                return (state, Vec::new());
            }
            let page = match result {
                Ok(result) => match ListingView::from_result(&result) {
                    Ok(view) => PageState::Loaded(view),
                    Err(err) => PageState::Failed(Failure::from_error(&err)),
                },
                Err(failure) => PageState::Failed(failure),
            };
            state.set_page(page);
            Vec::new()
        }
        Msg::MarkerEntered { marker, rect } => {
            let known = match state.page() {
                PageState::Loaded(view) => view.marker_target(marker).is_ok(),
                _ => false,
            };
            if known {
                state.set_menu(MenuState::Shown {
                    marker,
                    left: rect.right,
                    top: rect.top - MENU_TOP_OFFSET,
                });
            }
            Vec::new()
        }
        Msg::MenuLeft => {
            state.set_menu(MenuState::Hidden);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
