//! Error types for workspace operations.

use thiserror::Error;

/// Every recoverable failure a workspace operation can report.
///
/// None of these leave the workspace in an invalid state; callers surface
/// them to the user and carry on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceError {
    /// The operation referenced an id the content store does not have
    #[error("{entity_type} not found: '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Note creation without a (known) target folder
    #[error("No folder selected for the new note")]
    NoFolderSelected,

    /// Formatting command token that does not name a command
    #[error("Unknown formatting command: '{0}'")]
    UnknownCommand(String),

    /// Selection range is inverted or runs past the end of the text
    #[error("Selection {start}..{end} is invalid for text of {len} characters")]
    InvalidSelection { start: usize, end: usize, len: usize },

    #[error("A source named '{0}' already exists")]
    DuplicateName(String),

    #[error("Unsupported file type: '{0}'")]
    UnsupportedFileType(String),

    /// Editing intent arrived while no note is selected
    #[error("No note is open for editing")]
    NoActiveNote,

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Chat request failed: {0}")]
    ChatRequestFailed(String),
}

impl WorkspaceError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WorkspaceError>;
