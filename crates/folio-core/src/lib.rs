//! Folio Core Library
//!
//! Workspace coordination and note editing: content store, edit history,
//! markdown formatting commands and the selection state machine.
//! No IO dependencies, pure logic only.
//!

pub mod config;
pub mod error;
pub mod history;
pub mod markdown;
pub mod model;
pub mod selection;
pub mod store;
pub mod text_offset;
pub mod transcript;
pub mod uploads;
pub mod utils;
pub mod view;
pub mod workspace;

pub use config::FolioConfig;
pub use error::{Result, WorkspaceError};
pub use history::EditHistory;
pub use markdown::{apply_command, Formatted, MarkdownCommand};
pub use model::{Folder, FolderId, Note, NoteId, Selection, Source, SourceId};
pub use selection::SelectionCoordinator;
pub use store::{ContentStore, StoreEvent};
pub use workspace::{Workspace, WorkspaceSnapshot};
