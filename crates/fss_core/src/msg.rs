use crate::{Failure, Generation, MarkerId, QueryResult, Rect};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User followed a link to `cwd`; `None` keeps the server's current directory.
    Navigate(Option<String>),
    /// A query issued for `generation` finished.
    QueryLoaded {
        generation: Generation,
        result: Result<QueryResult, Failure>,
    },
    /// Pointer entered a hover marker whose bounding box is `rect`.
    MarkerEntered { marker: MarkerId, rect: Rect },
    /// Pointer left the plugin menu.
    MenuLeft,
    /// Fallback for placeholder wiring.
    NoOp,
}
