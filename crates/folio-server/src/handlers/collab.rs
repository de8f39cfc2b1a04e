use std::path::PathBuf;

use folio_core::transcript::{ChatTicket, QuickAction};
use folio_core::uploads::UploadTicket;
use folio_core::{Workspace, WorkspaceError};
use log::{info, warn};
use tokio::sync::mpsc::UnboundedSender;

use super::{Call, Effect};
use crate::collaborators::{file_display_name, Services};

/// A collaborator call that resolved, delivered back to the session
#[derive(Debug)]
pub enum Completion {
    Upload {
        ticket: UploadTicket,
        outcome: Result<String, String>,
    },
    Chat {
        ticket: ChatTicket,
        outcome: Result<String, String>,
    },
}

/// Handle "upload": validate and register, the file is sent by a spawned task
pub fn handle_upload(workspace: &mut Workspace, path: PathBuf) -> Result<Option<Effect>, WorkspaceError> {
    let ticket = workspace.begin_upload(&file_display_name(&path))?;
    Ok(Some(Effect::Call(Call::Upload { ticket, path })))
}

/// Handle "sendChat". Blank messages produce no call.
pub fn handle_send_chat(workspace: &mut Workspace, message: &str) -> Option<Effect> {
    workspace.send_chat(message).map(|request| Effect::Call(Call::Chat(request)))
}

/// Handle "quickAction"
pub fn handle_quick_action(workspace: &mut Workspace, action: QuickAction) -> Option<Effect> {
    workspace
        .quick_action(action)
        .map(|request| Effect::Call(Call::Chat(request)))
}

/// Run a collaborator call on its own task. The result comes back through
/// `sender` as a `Completion`.
pub fn spawn_call(services: &Services, call: Call, sender: UnboundedSender<Completion>) {
    let services = services.clone();
    tokio::spawn(async move {
        let completion = match call {
            Call::Upload { ticket, path } => {
                let outcome = services.upload.upload(&path).await.map_err(|e| e.to_string());
                Completion::Upload { ticket, outcome }
            }
            Call::Chat(request) => {
                let outcome = services.chat.chat(&request).await.map_err(|e| e.to_string());
                Completion::Chat {
                    ticket: request.ticket,
                    outcome,
                }
            }
        };
        if sender.send(completion).is_err() {
            warn!("session closed before a collaborator call resolved");
        }
    });
}

/// Fold a resolved call into the workspace
pub fn apply_completion(workspace: &mut Workspace, completion: Completion) {
    match completion {
        Completion::Upload { ticket, outcome } => {
            if let Some(id) = workspace.complete_upload(ticket, outcome) {
                info!("upload {:?} completed as source {}", ticket, id);
            }
        }
        Completion::Chat { ticket, outcome } => {
            if workspace.complete_chat(ticket, outcome) {
                info!("chat request {:?} answered", ticket);
            }
        }
    }
}
