use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no config path is given
pub const CONFIG_FILE_NAME: &str = "educonnect.toml";

/// Main configuration for EduConnect
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub server: ServerConfig,
    pub search: SearchConfig,
    pub widget: WidgetConfig,
}

/// Where the program catalog is read from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the catalog JSON file, relative to the working directory
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/programs.json"),
        }
    }
}

/// Transport used by `educonnect serve`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// MCP over stdin/stdout
    #[default]
    Stdio,
    /// MCP streamable HTTP plus REST endpoints
    Http,
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transport::Stdio => write!(f, "stdio"),
            Transport::Http => write!(f, "http"),
        }
    }
}

/// Configuration for the MCP/HTTP server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub transport: Transport,
    /// HTTP port (http transport only)
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: Transport::Stdio,
            port: 3000,
        }
    }
}

/// Configuration for search and listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum programs returned by a tool call
    pub result_limit: usize,
    /// Extra English term → Arabic stems entries, merged into the built-in index
    pub keywords: BTreeMap<String, Vec<String>>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            result_limit: 10,
            keywords: BTreeMap::new(),
        }
    }
}

/// Configuration for the embedded UI widget resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// HTML document served as the widget; the built-in page is used when unset
    pub html_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Resolve and load the configuration.
    ///
    /// An explicit path must exist. Otherwise `./educonnect.toml` and then the
    /// per-user config file are tried, falling back to defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidates = [Some(PathBuf::from(CONFIG_FILE_NAME)), Self::user_config_path()];
        for path in candidates.into_iter().flatten() {
            if path.is_file() {
                tracing::debug!("Using config file {}", path.display());
                return Self::load(&path);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Get the per-user config file path, if a home directory is known
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "educonnect", "educonnect")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.catalog.path, PathBuf::from("data/programs.json"));
        assert_eq!(config.server.transport, Transport::Stdio);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.search.result_limit, 10);
        assert!(config.search.keywords.is_empty());
        assert!(config.widget.html_path.is_none());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.search.result_limit, 10);
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
[catalog]
path = "/srv/catalog.json"

[server]
transport = "http"
port = 8080

[search]
result_limit = 5

[search.keywords]
"space science" = ["فضاء", "فلك"]
cyber = ["اختراق"]

[widget]
html_path = "dist/enrollment-app.html"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalog.path, PathBuf::from("/srv/catalog.json"));
        assert_eq!(config.server.transport, Transport::Http);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.search.result_limit, 5);
        assert_eq!(config.search.keywords["space science"], vec!["فضاء", "فلك"]);
        assert_eq!(
            config.widget.html_path,
            Some(PathBuf::from("dist/enrollment-app.html"))
        );
    }

    #[test]
    fn test_partial_server_section() {
        let toml_str = r#"
[server]
port = 4000
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.transport, Transport::Stdio);
    }

    #[test]
    fn test_unknown_transport_rejected() {
        let toml_str = r#"
[server]
transport = "websocket"
"#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }

    #[test]
    fn test_load_and_discover_explicit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("educonnect.toml");
        std::fs::write(&path, "[search]\nresult_limit = 3\n").unwrap();

        let config = Config::discover(Some(&path)).unwrap();
        assert_eq!(config.search.result_limit, 3);

        let missing = dir.path().join("nope.toml");
        let err = Config::discover(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }
}
