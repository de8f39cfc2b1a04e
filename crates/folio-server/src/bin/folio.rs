//! Folio Server Binary Entry Point

use anyhow::Context;
use folio_server::{serve_stdio, ServerSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = ServerSettings::from_env().context("loading settings")?;

    // stdout carries the protocol, logs go to stderr
    env_logger::Builder::new()
        .filter_level(settings.log_level.to_filter())
        .parse_default_env()
        .init();

    log::info!("Folio server starting, listening on stdin/stdout");
    serve_stdio(&settings).await?;
    log::info!("input closed, shutting down");
    Ok(())
}
