use std::fmt;

use fss_core::{Generation, QueryResult};

use crate::ClientError;

/// Content fetched with `?download=`.
#[derive(Debug, Clone, PartialEq)]
pub enum Downloaded {
    Json(serde_json::Value),
    Text(String),
}

impl fmt::Display for Downloaded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Downloaded::Json(value) => {
                let pretty = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
                f.write_str(&pretty)
            }
            Downloaded::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    QueryCompleted {
        generation: Generation,
        result: Result<QueryResult, ClientError>,
    },
    DownloadCompleted {
        generation: Generation,
        result: Result<Downloaded, ClientError>,
    },
}
