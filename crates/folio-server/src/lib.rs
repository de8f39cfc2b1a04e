//! Folio Server Library
//!
//! Hosts a `folio_core::Workspace` behind a JSON-lines protocol: intents
//! in, read-model snapshots out. Uploads and chat go to an HTTP backend on
//! background tasks.

use log::info;
use tokio::io::BufReader;

pub mod collaborators;
pub mod config;
pub mod error;
pub mod handlers;
pub mod protocol;
pub mod session;
pub mod state;


pub use collaborators::{HttpBackend, Services};
pub use config::ServerSettings;
pub use error::ServerError;
pub use session::Session;

/// Serve one session over stdin/stdout until stdin closes
pub async fn serve_stdio(settings: &ServerSettings) -> Result<(), ServerError> {
    let config = settings.load_workspace_config()?;
    let base = settings.backend_base()?;
    info!("workspace '{}' using backend {}", config.workspace.name, base);

    let session = Session::new(config, HttpBackend::new(base).services());
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    session.serve(stdin, stdout).await
}
