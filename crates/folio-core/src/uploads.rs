//! Bookkeeping for uploads in flight.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WorkspaceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadTicket(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingUpload {
    pub ticket: UploadTicket,
    pub file_name: String,
}

/// Progress of the current batch: uploads started since the pending set was
/// last empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UploadProgress {
    pub completed: usize,
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct UploadTracker {
    accepted_extensions: Vec<String>,
    pending: Vec<PendingUpload>,
    progress: UploadProgress,
    next_ticket: u64,
}

impl UploadTracker {
    pub fn new(accepted_extensions: &[String]) -> Self {
        Self {
            accepted_extensions: accepted_extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect(),
            pending: Vec::new(),
            progress: UploadProgress::default(),
            next_ticket: 0,
        }
    }

    pub fn accepts(&self, file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .is_some_and(|ext| self.accepted_extensions.contains(&ext))
    }

    /// Register an upload about to be sent. Rejects file types outside the
    /// accepted list before anything goes over the wire.
    pub fn begin(&mut self, file_name: &str) -> Result<UploadTicket> {
        if !self.accepts(file_name) {
            return Err(WorkspaceError::UnsupportedFileType(file_name.to_string()));
        }

        if self.pending.is_empty() {
            self.progress = UploadProgress::default();
        }
        self.next_ticket += 1;
        let ticket = UploadTicket(self.next_ticket);
        self.pending.push(PendingUpload {
            ticket,
            file_name: file_name.to_string(),
        });
        self.progress.total += 1;
        Ok(ticket)
    }

    /// Take an upload out of the pending set, whatever its outcome.
    /// `None` for unknown or already finished tickets.
    pub fn finish(&mut self, ticket: UploadTicket) -> Option<PendingUpload> {
        let index = self.pending.iter().position(|p| p.ticket == ticket)?;
        self.progress.completed += 1;
        Some(self.pending.remove(index))
    }

    pub fn pending(&self) -> &[PendingUpload] {
        &self.pending
    }

    pub fn progress(&self) -> UploadProgress {
        self.progress
    }
}
