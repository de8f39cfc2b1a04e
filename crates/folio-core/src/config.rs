use serde::{Deserialize, Serialize};

use crate::view::ViewState;

/// Top-level configuration for a Folio workspace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub workspace: WorkspaceConfig,
    pub editor: EditorConfig,
    pub chat: ChatConfig,
    pub upload: UploadConfig,
    /// Initial presentation state
    pub view: ViewState,
}

/// Workspace-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Name of the workspace
    pub name: String,
    /// Reject sources whose name is already taken
    pub unique_source_names: bool,
}

/// Note editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum snapshots kept per edit history, 0 for unbounded
    pub history_limit: usize,
    /// Content of a freshly created note; `{title}` is replaced by the title
    pub note_scaffold: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// First assistant message of every transcript, if any
    pub welcome_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// File extensions accepted for upload, without the leading dot
    pub accepted_extensions: Vec<String>,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            name: "Folio Workspace".to_string(),
            unique_source_names: false,
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: 200,
            note_scaffold: "# {title}\n\nStart writing here...".to_string(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            welcome_message: Some(
                "Hello! I'm your research assistant. Upload some documents and I'll help you analyze them."
                    .to_string(),
            ),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            accepted_extensions: ["pdf", "doc", "docx", "txt"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}

impl EditorConfig {
    pub fn scaffold_for(&self, title: &str) -> String {
        self.note_scaffold.replace("{title}", title)
    }
}

impl FolioConfig {
    /// Load config from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Theme;

    #[test]
    fn test_default_scaffold() {
        let config = FolioConfig::default();
        assert_eq!(
            config.editor.scaffold_for("Plan"),
            "# Plan\n\nStart writing here..."
        );
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "workspace:\n  name: Thesis\neditor:\n  history_limit: 10\nview:\n  theme: light\n";
        let config = FolioConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.workspace.name, "Thesis");
        assert!(!config.workspace.unique_source_names);
        assert_eq!(config.editor.history_limit, 10);
        assert_eq!(config.view.theme, Theme::Light);
        assert!(config.view.preview_visible);
        assert_eq!(config.upload.accepted_extensions.len(), 4);
    }

    #[test]
    fn test_yaml_output_parses_back() {
        let mut config = FolioConfig::default();
        config.chat.welcome_message = None;
        let yaml = config.to_yaml().unwrap();
        assert_eq!(FolioConfig::from_yaml(&yaml).unwrap(), config);
    }
}
