use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::RenderError;

/// Selects which server-side data a combined query response includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    Cwd,
    List,
    Plugins,
}

pub const DEFAULT_QUERY_KINDS: [QueryKind; 3] =
    [QueryKind::Cwd, QueryKind::List, QueryKind::Plugins];

impl QueryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryKind::Cwd => "cwd",
            QueryKind::List => "list",
            QueryKind::Plugins => "plugins",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cwd" => Ok(QueryKind::Cwd),
            "list" => Ok(QueryKind::List),
            "plugins" => Ok(QueryKind::Plugins),
            other => Err(RenderError::UnknownQueryKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryListing {
    /// Absolute path of the listed directory.
    pub root: String,
    /// Entry names relative to `root`, in server order.
    #[serde(default)]
    pub paths: Vec<String>,
}

/// An installed plugin page.
///
/// The server reports plugins either as bare names or as descriptor objects
/// carrying the plugin's `fss.toml` keys; both forms deserialize here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plugin {
    pub name: String,
    pub directory: String,
}

impl Plugin {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            directory: name.clone(),
            name,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PluginRepr {
    Name(String),
    Descriptor {
        name: String,
        #[serde(default)]
        directory: Option<String>,
    },
}

impl<'de> Deserialize<'de> for Plugin {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match PluginRepr::deserialize(deserializer)? {
            PluginRepr::Name(name) => Plugin::new(name),
            PluginRepr::Descriptor { name, directory } => Plugin {
                directory: directory.unwrap_or_else(|| name.clone()),
                name,
            },
        })
    }
}

pub type PluginList = Vec<Plugin>;

/// Combined response to a `?query=...` request, keyed by query kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<DirectoryListing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<PluginList>,
}

impl QueryResult {
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn listing(&self) -> Result<&DirectoryListing, RenderError> {
        self.list
            .as_ref()
            .ok_or(RenderError::MissingField(QueryKind::List))
    }

    pub fn plugins(&self) -> Result<&[Plugin], RenderError> {
        self.plugins
            .as_deref()
            .ok_or(RenderError::MissingField(QueryKind::Plugins))
    }
}
