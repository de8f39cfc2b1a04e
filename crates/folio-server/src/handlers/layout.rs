use folio_core::view::{Dialog, Theme};
use folio_core::Workspace;
use log::debug;

use super::Effect;

pub fn handle_set_theme(workspace: &mut Workspace, theme: Theme) -> Option<Effect> {
    workspace.set_theme(theme);
    None
}

pub fn handle_toggle_sidebar(workspace: &mut Workspace) -> Option<Effect> {
    let open = workspace.toggle_sidebar();
    debug!("sidebar open: {}", open);
    None
}

pub fn handle_toggle_preview(workspace: &mut Workspace) -> Option<Effect> {
    let visible = workspace.toggle_preview();
    debug!("preview visible: {}", visible);
    None
}

pub fn handle_toggle_full_screen(workspace: &mut Workspace) -> Option<Effect> {
    workspace.toggle_full_screen();
    None
}

pub fn handle_set_dialog(workspace: &mut Workspace, dialog: Option<Dialog>) -> Option<Effect> {
    workspace.set_dialog(dialog);
    None
}
