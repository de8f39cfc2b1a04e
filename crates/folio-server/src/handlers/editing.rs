use folio_core::model::{FolderId, NoteId};
use folio_core::{Workspace, WorkspaceError};
use log::debug;

use super::Effect;

/// Handle "addFolder"
pub fn handle_add_folder(workspace: &mut Workspace, name: &str) -> Result<Option<Effect>, WorkspaceError> {
    let id = workspace.add_folder(name);
    debug!("folder {} created as {}", name, id);
    Ok(None)
}

/// Handle "deleteFolder", cascading to the folder's notes
pub fn handle_delete_folder(workspace: &mut Workspace, id: FolderId) -> Result<Option<Effect>, WorkspaceError> {
    workspace.delete_folder(id)?;
    Ok(None)
}

/// Handle "addNote". New notes are not selected automatically.
pub fn handle_add_note(
    workspace: &mut Workspace,
    title: &str,
    folder: Option<FolderId>,
) -> Result<Option<Effect>, WorkspaceError> {
    let id: NoteId = workspace.add_note(title, folder)?;
    debug!("note {} created as {}", title, id);
    Ok(None)
}

/// Handle "editNote"
pub fn handle_edit_note(workspace: &mut Workspace, content: &str) -> Result<Option<Effect>, WorkspaceError> {
    workspace.edit_note(content)?;
    Ok(None)
}

/// Handle "applyCommand": format the selection and report the caret
pub fn handle_apply_command(
    workspace: &mut Workspace,
    command: &str,
    start: usize,
    end: usize,
) -> Result<Option<Effect>, WorkspaceError> {
    let caret = workspace.apply_command(command, start, end)?;
    Ok(Some(Effect::Caret(caret)))
}

/// Handle "undo". Nothing to undo is not an error.
pub fn handle_undo(workspace: &mut Workspace) -> Result<Option<Effect>, WorkspaceError> {
    if !workspace.undo()? {
        debug!("undo: already at the oldest snapshot");
    }
    Ok(None)
}

/// Handle "redo"
pub fn handle_redo(workspace: &mut Workspace) -> Result<Option<Effect>, WorkspaceError> {
    if !workspace.redo()? {
        debug!("redo: already at the newest snapshot");
    }
    Ok(None)
}
