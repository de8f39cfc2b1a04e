use log::debug;

use super::Workspace;
use crate::error::{Result, WorkspaceError};
use crate::markdown::{apply_command, MarkdownCommand};
use crate::model::{FolderId, NoteId};

/// Studio pane intents: folders, notes and the note editor
impl Workspace {
    pub fn add_folder(&mut self, name: &str) -> FolderId {
        self.store.add_folder(name).id
    }

    pub fn toggle_folder(&mut self, id: FolderId) -> Result<bool> {
        self.store.toggle_folder(id)
    }

    /// Delete a folder with all of its notes, returning the removed note ids
    pub fn delete_folder(&mut self, id: FolderId) -> Result<Vec<NoteId>> {
        let event = self.store.delete_folder(id)?;
        let removed = event.removed_notes().to_vec();
        self.apply_store_event(event);
        Ok(removed)
    }

    pub fn add_note(&mut self, title: &str, folder: Option<FolderId>) -> Result<NoteId> {
        Ok(self.store.add_note(title, folder)?.id)
    }

    pub fn delete_note(&mut self, id: NoteId) -> Result<()> {
        let event = self.store.delete_note(id)?;
        self.apply_store_event(event);
        Ok(())
    }

    pub fn select_note(&mut self, id: NoteId) -> Result<()> {
        self.selection.select_note(&self.store, id)
    }

    /// "Back to chat": drop the focus and any active history
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ------------------------------------------------------------------------
    // Editing the active note
    // ------------------------------------------------------------------------

    /// Replace the active note's text with what the editor now shows.
    /// Returns `false` when nothing changed.
    pub fn edit_note(&mut self, content: &str) -> Result<bool> {
        let history = self
            .selection
            .active_history_mut()
            .ok_or(WorkspaceError::NoActiveNote)?;
        if !history.record(content) {
            return Ok(false);
        }
        self.write_back()?;
        Ok(true)
    }

    /// Parse a command token and apply it. Unknown tokens are rejected with
    /// `UnknownCommand` before any state is touched.
    pub fn apply_command(&mut self, token: &str, start: usize, end: usize) -> Result<usize> {
        let command: MarkdownCommand = token.parse()?;
        self.apply_markdown(command, start, end)
    }

    /// Format the latest snapshot of the active note and record the result
    /// as an undoable step. Returns the caret position to restore.
    pub fn apply_markdown(&mut self, command: MarkdownCommand, start: usize, end: usize) -> Result<usize> {
        let history = self
            .selection
            .active_history_mut()
            .ok_or(WorkspaceError::NoActiveNote)?;
        let formatted = apply_command(command, history.current(), start, end)?;
        debug!("{} applied at {}..{}", command, start, end);

        history.record(formatted.text);
        self.write_back()?;
        Ok(formatted.cursor)
    }

    /// Returns `false` when already at the oldest snapshot
    pub fn undo(&mut self) -> Result<bool> {
        let history = self
            .selection
            .active_history_mut()
            .ok_or(WorkspaceError::NoActiveNote)?;
        if history.undo().is_none() {
            return Ok(false);
        }
        self.write_back()?;
        Ok(true)
    }

    /// Returns `false` when already at the newest snapshot
    pub fn redo(&mut self) -> Result<bool> {
        let history = self
            .selection
            .active_history_mut()
            .ok_or(WorkspaceError::NoActiveNote)?;
        if history.redo().is_none() {
            return Ok(false);
        }
        self.write_back()?;
        Ok(true)
    }

    /// Copy the history's current snapshot into the store so both agree on
    /// the note's content
    fn write_back(&mut self) -> Result<()> {
        let history = self
            .selection
            .active_history()
            .ok_or(WorkspaceError::NoActiveNote)?;
        self.store
            .set_note_content(history.note_id(), history.current())
    }
}
