use serde::{Deserialize, Serialize};
use std::fmt;

// Opaque identifiers. One newtype per entity kind so a folder id can never
// be handed to an operation expecting a note id.
macro_rules! entity_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub uuid::Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

entity_id!(SourceId);
entity_id!(FolderId);
entity_id!(NoteId);

/// An uploaded document, known by its display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: SourceId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    pub is_open: bool,
}

/// A markdown note. `folder_id` always references an existing folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub folder_id: FolderId,
}

/// What the workspace is focused on. `None` is the plain chat view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum Selection {
    #[default]
    None,
    Source(SourceId),
    Note(NoteId),
}

impl Selection {
    pub fn note(&self) -> Option<NoteId> {
        match self {
            Selection::Note(id) => Some(*id),
            _ => None,
        }
    }

    pub fn source(&self) -> Option<SourceId> {
        match self {
            Selection::Source(id) => Some(*id),
            _ => None,
        }
    }
}
