use std::sync::Arc;

use folio_core::{FolioConfig, Workspace};
use tokio::sync::RwLock;

/// Shared state of a running session
/// Must be Send + Sync
#[derive(Clone)]
pub struct GlobalState {
    /// Every intent and every collaborator completion is applied under one
    /// write acquisition, so readers only ever see whole mutations
    pub workspace: Arc<RwLock<Workspace>>,
}

impl GlobalState {
    pub fn new(config: FolioConfig) -> Self {
        Self {
            workspace: Arc::new(RwLock::new(Workspace::new(config))),
        }
    }
}
