//! Ambient presentation state carried alongside the workspace read-model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dialog {
    Upload,
    Settings,
}

/// Theme, pane and dialog flags. Plain data: the core never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewState {
    pub theme: Theme,
    pub sidebar_open: bool,
    /// Rendered markdown preview next to the note editor
    pub preview_visible: bool,
    pub full_screen: bool,
    pub open_dialog: Option<Dialog>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            sidebar_open: true,
            preview_visible: true,
            full_screen: false,
            open_dialog: None,
        }
    }
}
