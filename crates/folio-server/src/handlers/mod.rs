//! Intent routing. Every handler runs against an exclusively borrowed
//! `Workspace`; the session holds the write lock for the whole call.

use std::path::PathBuf;

use folio_core::transcript::ChatRequest;
use folio_core::uploads::UploadTicket;
use folio_core::{Workspace, WorkspaceError};

use crate::protocol::Intent;

mod collab;
mod editing;
mod layout;

pub use collab::*;
pub use editing::*;
pub use layout::*;

/// Work an intent leaves for the session beyond the snapshot
#[derive(Debug)]
pub enum Effect {
    /// Tell the editor where to put the caret
    Caret(usize),
    /// Start a collaborator call
    Call(Call),
}

#[derive(Debug)]
pub enum Call {
    Upload { ticket: UploadTicket, path: PathBuf },
    Chat(ChatRequest),
}

pub fn dispatch(workspace: &mut Workspace, intent: Intent) -> Result<Option<Effect>, WorkspaceError> {
    match intent {
        Intent::SelectSource { id } => workspace.select_source(id).map(|_| None),
        Intent::SelectNote { id } => workspace.select_note(id).map(|_| None),
        Intent::ClearSelection => {
            workspace.clear_selection();
            Ok(None)
        }
        Intent::RenameSource { id, name } => workspace.rename_source(id, &name).map(|_| None),
        Intent::DeleteSource { id } => workspace.delete_source(id).map(|_| None),

        Intent::AddFolder { name } => handle_add_folder(workspace, &name),
        Intent::ToggleFolder { id } => workspace.toggle_folder(id).map(|_| None),
        Intent::DeleteFolder { id } => handle_delete_folder(workspace, id),
        Intent::AddNote { title, folder_id } => handle_add_note(workspace, &title, folder_id),
        Intent::DeleteNote { id } => workspace.delete_note(id).map(|_| None),

        Intent::EditNote { content } => handle_edit_note(workspace, &content),
        Intent::ApplyCommand {
            command,
            selection_start,
            selection_end,
        } => handle_apply_command(workspace, &command, selection_start, selection_end),
        Intent::Undo => handle_undo(workspace),
        Intent::Redo => handle_redo(workspace),

        Intent::Upload { path } => handle_upload(workspace, path),
        Intent::SendChat { message } => Ok(handle_send_chat(workspace, &message)),
        Intent::QuickAction { action } => Ok(handle_quick_action(workspace, action)),

        Intent::SetTheme { theme } => Ok(handle_set_theme(workspace, theme)),
        Intent::ToggleSidebar => Ok(handle_toggle_sidebar(workspace)),
        Intent::TogglePreview => Ok(handle_toggle_preview(workspace)),
        Intent::ToggleFullScreen => Ok(handle_toggle_full_screen(workspace)),
        Intent::SetDialog { dialog } => Ok(handle_set_dialog(workspace, dialog)),
        Intent::DismissNotice { index } => workspace.dismiss_notice(index).map(|_| None),

        Intent::Snapshot => Ok(None),
    }
}
