use std::path::PathBuf;

use folio_core::model::{FolderId, NoteId, SourceId};
use folio_core::transcript::QuickAction;
use folio_core::view::{Dialog, Theme};
use folio_core::WorkspaceSnapshot;
use serde::{Deserialize, Serialize};

/// One user intent, one JSON object per input line
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Intent {
    SelectSource { id: SourceId },
    SelectNote { id: NoteId },
    /// Back to chat
    ClearSelection,
    RenameSource { id: SourceId, name: String },
    DeleteSource { id: SourceId },

    AddFolder { name: String },
    ToggleFolder { id: FolderId },
    DeleteFolder { id: FolderId },
    AddNote {
        title: String,
        #[serde(default)]
        folder_id: Option<FolderId>,
    },
    DeleteNote { id: NoteId },

    /// Full text of the active note as the editor now shows it
    EditNote { content: String },
    /// Formatting command at the editor's selection, positions in chars
    ApplyCommand {
        command: String,
        selection_start: usize,
        selection_end: usize,
    },
    Undo,
    Redo,

    Upload { path: PathBuf },
    SendChat { message: String },
    QuickAction { action: QuickAction },

    SetTheme { theme: Theme },
    ToggleSidebar,
    TogglePreview,
    ToggleFullScreen,
    SetDialog {
        #[serde(default)]
        dialog: Option<Dialog>,
    },
    DismissNotice { index: usize },

    /// Ask for the current read-model without changing anything
    Snapshot,
}

/// One output line
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Output {
    Snapshot(WorkspaceSnapshot),
    /// Caret position to restore after a formatting command
    Caret { position: usize },
    Error { message: String },
}
