use fss_core::QueryKind;

/// Failure of any client operation.
///
/// Every variant is surfaced to the user the same way; the distinction is
/// kept for logging and tests.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ClientError {
    /// Non-success HTTP status; displays the status text only.
    #[error("{status_text}")]
    Server { status: u16, status_text: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("redirect limit exceeded")]
    RedirectLimitExceeded,
    #[error("response too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("could not decode response body: {0}")]
    Decode(String),
    #[error("server response has no `{0}` field")]
    MissingField(QueryKind),
}

impl ClientError {
    pub fn server(status: reqwest::StatusCode) -> Self {
        Self::Server {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}
