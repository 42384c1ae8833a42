use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::form_urlencoded::byte_serialize;

use crate::{QueryKind, RenderError};

/// Joins one `query=<kind>` pair per requested kind with `&`, in input order.
pub fn build_query_string(kinds: &[QueryKind]) -> String {
    kinds
        .iter()
        .map(|kind| format!("query={}", kind.as_str()))
        .collect::<Vec<_>>()
        .join("&")
}

/// Query string for a navigation request: the server records `cwd` before
/// answering the `query` pairs that follow it.
pub fn navigation_query(cwd: Option<&str>, kinds: &[QueryKind]) -> String {
    let queries = build_query_string(kinds);
    match cwd {
        Some(cwd) if queries.is_empty() => format!("cwd={}", encode(cwd)),
        Some(cwd) => format!("cwd={}&{}", encode(cwd), queries),
        None => queries,
    }
}

pub fn download_query(path: &str) -> String {
    format!("download={}", encode(path))
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

/// Bytes escaped in rendered `cwd` links. Path separators stay readable.
const CWD_LINK: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Relative link that navigates the browser page to `path`.
pub fn cwd_href(path: &str) -> String {
    format!("?cwd={}", utf8_percent_encode(path, CWD_LINK))
}

/// How a downloaded body is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseAs {
    Json,
    Text,
}

impl ParseAs {
    /// An explicit choice wins; otherwise `.json` paths parse as JSON and
    /// everything else as text.
    pub fn for_download(path: &str, parse_as: Option<ParseAs>) -> ParseAs {
        match parse_as {
            Some(parse_as) => parse_as,
            None if path.ends_with(".json") => ParseAs::Json,
            None => ParseAs::Text,
        }
    }
}

impl FromStr for ParseAs {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ParseAs::Json),
            "text" => Ok(ParseAs::Text),
            _ => Err(RenderError::UnknownParseAs(s.to_string())),
        }
    }
}
