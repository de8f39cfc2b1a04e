//! The workspace controller.
//!
//! `Workspace` composes the content store, the selection coordinator (which
//! owns the active edit history), the chat transcript and the upload tracker
//! into one state machine. Every public method runs to completion, cascades
//! included, before returning, so a `snapshot()` taken between calls never
//! observes a half-applied mutation.
//!
//! Network calls are not made here. Collaborator work is split into a
//! `begin_*` / `send_*` step that returns a ticket and a `complete_*` step
//! the host calls once the call resolves.

use log::debug;

use crate::config::FolioConfig;
use crate::selection::SelectionCoordinator;
use crate::store::{ContentStore, StoreEvent};
use crate::transcript::Transcript;
use crate::uploads::UploadTracker;
use crate::utils::time;
use crate::view::{Dialog, Theme, ViewState};

mod collab;
mod notes;
mod snapshot;
mod sources;


pub use snapshot::{ActiveNote, NoteCard, Notice, UploadStatus, WorkspaceSnapshot};

/// Length of the plain-text teaser on note cards
const NOTE_PREVIEW_CHARS: usize = 80;

pub struct Workspace {
    pub(crate) config: FolioConfig,
    pub(crate) store: ContentStore,
    pub(crate) selection: SelectionCoordinator,
    pub(crate) transcript: Transcript,
    pub(crate) uploads: UploadTracker,
    pub(crate) notices: Vec<Notice>,
    pub(crate) view: ViewState,
}

impl Workspace {
    pub fn new(config: FolioConfig) -> Self {
        Self {
            store: ContentStore::new(&config),
            selection: SelectionCoordinator::new(config.editor.history_limit),
            transcript: Transcript::new(config.chat.welcome_message.as_deref()),
            uploads: UploadTracker::new(&config.upload.accepted_extensions),
            notices: Vec::new(),
            view: config.view.clone(),
            config,
        }
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionCoordinator {
        &self.selection
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Forward a store removal to the selection so it never dangles
    fn apply_store_event(&mut self, event: StoreEvent) {
        if self.selection.handle_event(&event) {
            debug!("selection cleared after {:?}", event);
        }
    }

    fn push_notice(&mut self, message: String) {
        self.notices.push(Notice {
            message,
            timestamp_ms: time::now(),
        });
    }

    // ------------------------------------------------------------------------
    // View state
    // ------------------------------------------------------------------------

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.view.theme = theme;
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.view.sidebar_open = !self.view.sidebar_open;
        self.view.sidebar_open
    }

    pub fn toggle_preview(&mut self) -> bool {
        self.view.preview_visible = !self.view.preview_visible;
        self.view.preview_visible
    }

    pub fn toggle_full_screen(&mut self) -> bool {
        self.view.full_screen = !self.view.full_screen;
        self.view.full_screen
    }

    pub fn set_dialog(&mut self, dialog: Option<Dialog>) {
        self.view.open_dialog = dialog;
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(FolioConfig::default())
    }
}
