use crate::{Generation, MenuState, PageState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub generation: Generation,
    pub cwd: Option<String>,
    pub page: PageState,
    pub menu: MenuState,
    pub dirty: bool,
}
