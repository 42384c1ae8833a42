use crate::{MarkerId, QueryKind};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("query result has no `{0}` field")]
    MissingField(QueryKind),
    #[error("no hover marker {0}")]
    UnknownMarker(MarkerId),
    #[error("unknown query kind \"{0}\"")]
    UnknownQueryKind(String),
    #[error("unknown parse mode \"{0}\" (expected json or text)")]
    UnknownParseAs(String),
}
