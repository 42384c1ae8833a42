use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use fss_client::ClientSettings;
use fss_logging::{fss_debug, fss_info};
use serde::Deserialize;

/// Settings shared with the server's `config.toml`; keys this client does
/// not know are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub address: String,
    pub port: u16,
    pub default_plugin: String,
    /// Also log to ./fss-browse.log.
    pub log_file: bool,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: "localhost".to_string(),
            port: 8080,
            default_plugin: "fss/browser".to_string(),
            log_file: false,
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Loads `path`, or the default location when `None`. A missing file yields defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path.map(Path::to_path_buf).or_else(default_config_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                fss_debug!("No config at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read config {}", path.display()))
            }
        };
        let config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        fss_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// URL of the default plugin page, which every request is issued against.
    pub fn base_url(&self) -> String {
        format!(
            "http://{}:{}/{}/",
            self.address,
            self.port,
            self.default_plugin.trim_matches('/')
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            request_timeout: self.request_timeout(),
            ..ClientSettings::default()
        }
    }
}

/// `$XDG_CONFIG_HOME/fss/config.toml`, falling back to `~/.config`, the same
/// file the server reads.
pub fn default_config_path() -> Option<PathBuf> {
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))?;
    Some(config_dir.join("fss").join("config.toml"))
}
