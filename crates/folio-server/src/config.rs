use std::path::{Path, PathBuf};

use folio_core::FolioConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ServerError;

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "FOLIO_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerSettings {
    /// Base URL of the upload/chat backend
    pub backend_url: String,

    /// Logging level for the server, `RUST_LOG` still overrides it
    pub log_level: LogLevel,

    /// YAML workspace configuration; defaults apply when absent
    pub workspace_config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000/".to_string(),
            log_level: LogLevel::Info,
            workspace_config: None,
        }
    }
}

impl ServerSettings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ServerError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|source| ServerError::Settings {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Settings from the file named by `FOLIO_CONFIG`, or defaults
    pub fn from_env() -> Result<Self, ServerError> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn backend_base(&self) -> Result<Url, ServerError> {
        // A base without trailing slash would have its last segment replaced by `join`
        let raw = if self.backend_url.ends_with('/') {
            self.backend_url.clone()
        } else {
            format!("{}/", self.backend_url)
        };
        Url::parse(&raw).map_err(|source| ServerError::BackendUrl {
            url: self.backend_url.clone(),
            source,
        })
    }

    pub fn load_workspace_config(&self) -> Result<FolioConfig, ServerError> {
        let Some(path) = &self.workspace_config else {
            return Ok(FolioConfig::default());
        };
        let content = std::fs::read_to_string(path)?;
        FolioConfig::from_yaml(&content).map_err(|e| ServerError::WorkspaceConfig {
            path: path.clone(),
            message: e.to_string(),
        })
    }
}
