use super::Workspace;
use crate::error::Result;
use crate::model::SourceId;

/// Source pane intents
impl Workspace {
    pub fn select_source(&mut self, id: SourceId) -> Result<()> {
        self.selection.select_source(&self.store, id)
    }

    /// Rename in place. A selected source keeps its selection; the label in
    /// the read-model is derived from the store and follows the new name.
    pub fn rename_source(&mut self, id: SourceId, new_name: &str) -> Result<()> {
        self.store.rename_source(id, new_name)
    }

    pub fn delete_source(&mut self, id: SourceId) -> Result<()> {
        let event = self.store.delete_source(id)?;
        self.apply_store_event(event);
        Ok(())
    }
}
