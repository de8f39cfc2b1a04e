use std::path::PathBuf;

use thiserror::Error;

/// Failures of the host itself. Workspace errors never end up here: they are
/// reported to the client and the session carries on.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file {path:?}: {source}")]
    Settings {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid workspace config {path:?}: {message}")]
    WorkspaceConfig { path: PathBuf, message: String },

    #[error("Invalid backend url '{url}': {source}")]
    BackendUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}
