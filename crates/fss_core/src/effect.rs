use crate::{Generation, QueryKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    IssueQuery {
        generation: Generation,
        cwd: Option<String>,
        kinds: Vec<QueryKind>,
    },
}
