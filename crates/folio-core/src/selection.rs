use log::debug;

use crate::error::{Result, WorkspaceError};
use crate::history::EditHistory;
use crate::model::{NoteId, Selection, SourceId};
use crate::store::{ContentStore, StoreEvent};

/// Single source of truth for what the workspace is focused on.
///
/// Owns the edit history of the active note: a history exists exactly while
/// the selection is `Selection::Note`, is created when a note becomes active
/// and dropped when it stops being active. Switching notes therefore starts
/// from a clean undo stack.
#[derive(Debug, Clone)]
pub struct SelectionCoordinator {
    selection: Selection,
    history: Option<EditHistory>,
    history_limit: usize,
}

impl SelectionCoordinator {
    pub fn new(history_limit: usize) -> Self {
        Self {
            selection: Selection::None,
            history: None,
            history_limit,
        }
    }

    pub fn current(&self) -> Selection {
        self.selection
    }

    pub fn active_history(&self) -> Option<&EditHistory> {
        self.history.as_ref()
    }

    pub fn active_history_mut(&mut self) -> Option<&mut EditHistory> {
        self.history.as_mut()
    }

    pub fn select_source(&mut self, store: &ContentStore, id: SourceId) -> Result<()> {
        if store.source(id).is_none() {
            return Err(WorkspaceError::not_found("source", id));
        }
        self.transition(Selection::Source(id));
        self.history = None;
        Ok(())
    }

    /// Activate a note and begin its edit history. Re-selecting the note that
    /// is already active keeps the running history.
    pub fn select_note(&mut self, store: &ContentStore, id: NoteId) -> Result<()> {
        let note = store
            .note(id)
            .ok_or_else(|| WorkspaceError::not_found("note", id))?;

        if self.selection == Selection::Note(id) && self.history.is_some() {
            return Ok(());
        }
        self.history = Some(EditHistory::begin(note).with_limit(self.history_limit));
        self.transition(Selection::Note(id));
        Ok(())
    }

    /// Back to the plain chat view
    pub fn clear(&mut self) {
        self.transition(Selection::None);
        self.history = None;
    }

    /// React to a removal in the content store. Returns `true` when the
    /// removed entity was selected and the selection was forced to `None`.
    pub fn handle_event(&mut self, event: &StoreEvent) -> bool {
        let dangling = match (self.selection, event) {
            (Selection::Source(selected), StoreEvent::SourceRemoved(removed)) => selected == *removed,
            (Selection::Note(selected), _) => event.removed_notes().contains(&selected),
            _ => false,
        };
        if dangling {
            self.clear();
        }
        dangling
    }

    fn transition(&mut self, next: Selection) {
        if self.selection != next {
            debug!("selection {:?} -> {:?}", self.selection, next);
        }
        self.selection = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FolioConfig;

    fn fixture() -> (ContentStore, SourceId, NoteId, NoteId) {
        let mut store = ContentStore::new(&FolioConfig::default());
        let source = store.add_source("A.pdf").unwrap();
        let folder = store.add_folder("Research");
        let n1 = store.add_note("N1", Some(folder.id)).unwrap();
        let n2 = store.add_note("N2", Some(folder.id)).unwrap();
        (store, source.id, n1.id, n2.id)
    }

    #[test]
    fn test_source_then_note_then_clear() {
        let (store, source, note, _) = fixture();
        let mut selection = SelectionCoordinator::new(0);

        selection.select_source(&store, source).unwrap();
        assert_eq!(selection.current(), Selection::Source(source));
        assert!(selection.active_history().is_none());

        selection.select_note(&store, note).unwrap();
        assert_eq!(selection.current(), Selection::Note(note));
        assert_eq!(selection.active_history().unwrap().note_id(), note);

        selection.clear();
        assert_eq!(selection.current(), Selection::None);
        assert!(selection.active_history().is_none());
    }

    #[test]
    fn test_unknown_ids_leave_state_unchanged() {
        let (store, source, _, _) = fixture();
        let mut selection = SelectionCoordinator::new(0);
        selection.select_source(&store, source).unwrap();

        assert!(matches!(
            selection.select_note(&store, NoteId::new()),
            Err(WorkspaceError::NotFound { entity_type: "note", .. })
        ));
        assert!(selection.select_source(&store, SourceId::new()).is_err());
        assert_eq!(selection.current(), Selection::Source(source));
    }

    #[test]
    fn test_switching_notes_starts_fresh_history() {
        let (store, _, n1, n2) = fixture();
        let mut selection = SelectionCoordinator::new(0);

        selection.select_note(&store, n1).unwrap();
        selection.active_history_mut().unwrap().record("edited");
        assert!(selection.active_history().unwrap().can_undo());

        // Same note again: history survives
        selection.select_note(&store, n1).unwrap();
        assert!(selection.active_history().unwrap().can_undo());

        selection.select_note(&store, n2).unwrap();
        let history = selection.active_history().unwrap();
        assert_eq!(history.note_id(), n2);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_removal_of_selected_entity_forces_none() {
        let (mut store, source, note, other) = fixture();
        let mut selection = SelectionCoordinator::new(0);

        selection.select_note(&store, note).unwrap();
        let event = store.delete_note(other).unwrap();
        assert!(!selection.handle_event(&event));
        assert_eq!(selection.current(), Selection::Note(note));

        let event = store.delete_source(source).unwrap();
        assert!(!selection.handle_event(&event));

        let folder = store.note(note).unwrap().folder_id;
        let event = store.delete_folder(folder).unwrap();
        assert!(selection.handle_event(&event));
        assert_eq!(selection.current(), Selection::None);
        assert!(selection.active_history().is_none());
    }

    #[test]
    fn test_deleting_selected_source_forces_none() {
        let (mut store, source, _, _) = fixture();
        let mut selection = SelectionCoordinator::new(0);
        selection.select_source(&store, source).unwrap();

        let event = store.delete_source(source).unwrap();
        assert!(selection.handle_event(&event));
        assert_eq!(selection.current(), Selection::None);
    }
}
