use serde::Serialize;

use super::{Workspace, NOTE_PREVIEW_CHARS};
use crate::markdown::note_preview;
use crate::model::{Folder, FolderId, NoteId, Selection, Source};
use crate::transcript::ChatMessage;
use crate::uploads::{PendingUpload, UploadProgress};
use crate::view::ViewState;

/// Read-model handed to the presentation layer after every mutation.
/// Everything a renderer needs, detached from internal state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSnapshot {
    pub workspace_name: String,
    pub sources: Vec<Source>,
    pub folders: Vec<Folder>,
    pub notes: Vec<NoteCard>,
    pub selection: Selection,
    /// Display name of the selected source or title of the selected note
    pub selection_label: Option<String>,
    pub active_note: Option<ActiveNote>,
    pub transcript: Vec<ChatMessage>,
    pub awaiting_response: bool,
    pub uploads: UploadStatus,
    pub notices: Vec<Notice>,
    pub view: ViewState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteCard {
    pub id: NoteId,
    pub title: String,
    pub folder_id: FolderId,
    pub preview: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveNote {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub can_undo: bool,
    pub can_redo: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadStatus {
    pub pending: Vec<PendingUpload>,
    #[serde(flatten)]
    pub progress: UploadProgress,
}

/// User-visible error from a collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub message: String,
    pub timestamp_ms: u64,
}

impl Workspace {
    pub fn snapshot(&self) -> WorkspaceSnapshot {
        let selection = self.selection.current();
        let selection_label = match selection {
            Selection::None => None,
            Selection::Source(id) => self.store.source(id).map(|s| s.name.clone()),
            Selection::Note(id) => self.store.note(id).map(|n| n.title.clone()),
        };

        let active_note = self.selection.active_history().and_then(|history| {
            let note = self.store.note(history.note_id())?;
            debug_assert_eq!(note.content, history.current());
            Some(ActiveNote {
                id: note.id,
                title: note.title.clone(),
                content: note.content.clone(),
                can_undo: history.can_undo(),
                can_redo: history.can_redo(),
            })
        });

        let notes = self
            .store
            .notes()
            .iter()
            .map(|note| NoteCard {
                id: note.id,
                title: note.title.clone(),
                folder_id: note.folder_id,
                preview: note_preview(&note.content, NOTE_PREVIEW_CHARS),
            })
            .collect();

        WorkspaceSnapshot {
            workspace_name: self.config.workspace.name.clone(),
            sources: self.store.sources().to_vec(),
            folders: self.store.folders().to_vec(),
            notes,
            selection,
            selection_label,
            active_note,
            transcript: self.transcript.messages().to_vec(),
            awaiting_response: self.transcript.awaiting_response(),
            uploads: UploadStatus {
                pending: self.uploads.pending().to_vec(),
                progress: self.uploads.progress(),
            },
            notices: self.notices.clone(),
            view: self.view.clone(),
        }
    }
}
