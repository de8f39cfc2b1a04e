use log::{info, warn};

use super::Workspace;
use crate::error::{Result, WorkspaceError};
use crate::model::SourceId;
use crate::transcript::{ChatRequest, ChatTicket, QuickAction, Role};
use crate::uploads::UploadTicket;

/// Collaborator bookkeeping (upload and chat).
/// The host performs the call between `begin`/`send` and `complete`; local
/// edits may interleave freely, and completions never touch note history.
impl Workspace {
    /// Validate and register an upload. The host sends the file and reports
    /// back with `complete_upload`.
    pub fn begin_upload(&mut self, file_name: &str) -> Result<UploadTicket> {
        self.uploads.begin(file_name)
    }

    /// Apply the outcome of an upload: `Ok(display_name)` adds a source,
    /// `Err(message)` records a notice. Late results are applied as they
    /// arrive; unknown tickets are ignored.
    pub fn complete_upload(
        &mut self,
        ticket: UploadTicket,
        outcome: std::result::Result<String, String>,
    ) -> Option<SourceId> {
        let Some(pending) = self.uploads.finish(ticket) else {
            warn!("completion for unknown upload {:?}", ticket);
            return None;
        };

        match outcome {
            Ok(display_name) => match self.store.add_source(display_name) {
                Ok(source) => {
                    info!("source added: {}", source.name);
                    Some(source.id)
                }
                Err(e) => {
                    self.push_notice(e.to_string());
                    None
                }
            },
            Err(message) => {
                let error =
                    WorkspaceError::UploadFailed(format!("{}: {}", pending.file_name, message));
                warn!("{}", error);
                self.push_notice(error.to_string());
                None
            }
        }
    }

    /// Append the user's message to the transcript right away and return
    /// the request for the chat service. Blank messages are dropped.
    pub fn send_chat(&mut self, message: &str) -> Option<ChatRequest> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }

        let source = self
            .selection
            .current()
            .source()
            .and_then(|id| self.store.source(id))
            .map(|s| s.name.clone());
        let ticket = self.transcript.ask(message);

        Some(ChatRequest {
            ticket,
            message: message.to_string(),
            source,
        })
    }

    pub fn quick_action(&mut self, action: QuickAction) -> Option<ChatRequest> {
        self.send_chat(action.prompt())
    }

    /// Append the answer, or an error notice, for a request sent earlier.
    /// Returns `false` for unknown tickets.
    pub fn complete_chat(
        &mut self,
        ticket: ChatTicket,
        outcome: std::result::Result<String, String>,
    ) -> bool {
        if !self.transcript.resolve(ticket) {
            warn!("completion for unknown chat request {:?}", ticket);
            return false;
        }

        match outcome {
            Ok(response) => {
                self.transcript.push(Role::Assistant, response);
            }
            Err(message) => {
                let error = WorkspaceError::ChatRequestFailed(message);
                warn!("{}", error);
                self.transcript.push(Role::Notice, error.to_string());
            }
        }
        true
    }

    pub fn dismiss_notice(&mut self, index: usize) -> Result<()> {
        if index >= self.notices.len() {
            return Err(WorkspaceError::not_found("notice", index));
        }
        self.notices.remove(index);
        Ok(())
    }
}
