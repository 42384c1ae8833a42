use crate::view_model::AppViewModel;
use crate::{Failure, ListingView, MarkerId};

/// Navigation counter; only the response to the latest generation is applied.
pub type Generation = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageState {
    #[default]
    Idle,
    Loading,
    Loaded(ListingView),
    /// Terminal: the error page replaces everything.
    Failed(Failure),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MenuState {
    #[default]
    Hidden,
    Shown {
        marker: MarkerId,
        left: f64,
        top: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    generation: Generation,
    cwd: Option<String>,
    page: PageState,
    menu: MenuState,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            generation: self.generation,
            cwd: self.cwd.clone(),
            page: self.page.clone(),
            menu: self.menu,
            dirty: self.dirty,
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn begin_navigation(&mut self, cwd: Option<String>) -> Generation {
        self.generation += 1;
        self.cwd = cwd;
        self.page = PageState::Loading;
        self.menu = MenuState::Hidden;
        self.dirty = true;
        self.generation
    }

    pub(crate) fn set_page(&mut self, page: PageState) {
        self.page = page;
        self.dirty = true;
    }

    pub(crate) fn set_menu(&mut self, menu: MenuState) {
        if self.menu != menu {
            self.menu = menu;
            self.dirty = true;
        }
    }
}
