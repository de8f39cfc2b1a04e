use log::debug;

use crate::config::{EditorConfig, FolioConfig};
use crate::error::{Result, WorkspaceError};
use crate::model::{Folder, FolderId, Note, NoteId, Source, SourceId};

/// Removal notifications emitted by the store.
/// The store knows nothing about selection; whoever owns the selection
/// must forward these so it never points at a removed entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    SourceRemoved(SourceId),
    NoteRemoved(NoteId),
    /// A folder went away together with every note it held
    FolderRemoved {
        folder: FolderId,
        notes: Vec<NoteId>,
    },
}

impl StoreEvent {
    pub fn removed_notes(&self) -> &[NoteId] {
        match self {
            StoreEvent::NoteRemoved(id) => std::slice::from_ref(id),
            StoreEvent::FolderRemoved { notes, .. } => notes,
            StoreEvent::SourceRemoved(_) => &[],
        }
    }
}

// In memory, insertion ordered
#[derive(Debug, Clone)]
pub struct ContentStore {
    sources: Vec<Source>,
    folders: Vec<Folder>,
    notes: Vec<Note>,
    unique_source_names: bool,
    editor: EditorConfig,
}

impl ContentStore {
    pub fn new(config: &FolioConfig) -> Self {
        Self {
            sources: Vec::new(),
            folders: Vec::new(),
            notes: Vec::new(),
            unique_source_names: config.workspace.unique_source_names,
            editor: config.editor.clone(),
        }
    }

    // ------------------------------------------------------------------------
    // Sources
    // ------------------------------------------------------------------------

    pub fn add_source(&mut self, name: impl Into<String>) -> Result<Source> {
        let name = name.into();
        self.check_source_name(&name, None)?;

        let source = Source {
            id: SourceId::new(),
            name,
        };
        self.sources.push(source.clone());
        Ok(source)
    }

    pub fn delete_source(&mut self, id: SourceId) -> Result<StoreEvent> {
        let index = self
            .sources
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| WorkspaceError::not_found("source", id))?;
        self.sources.remove(index);
        Ok(StoreEvent::SourceRemoved(id))
    }

    pub fn rename_source(&mut self, id: SourceId, new_name: impl Into<String>) -> Result<()> {
        let new_name = new_name.into();
        if self.source(id).is_none() {
            return Err(WorkspaceError::not_found("source", id));
        }
        self.check_source_name(&new_name, Some(id))?;

        if let Some(source) = self.sources.iter_mut().find(|s| s.id == id) {
            source.name = new_name;
        }
        Ok(())
    }

    fn check_source_name(&self, name: &str, except: Option<SourceId>) -> Result<()> {
        if !self.unique_source_names {
            return Ok(());
        }
        let taken = self
            .sources
            .iter()
            .any(|s| s.name == name && Some(s.id) != except);
        if taken {
            return Err(WorkspaceError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Folders
    // ------------------------------------------------------------------------

    pub fn add_folder(&mut self, name: impl Into<String>) -> Folder {
        let folder = Folder {
            id: FolderId::new(),
            name: name.into(),
            is_open: true,
        };
        self.folders.push(folder.clone());
        folder
    }

    /// Flip `is_open`, returning the new value
    pub fn toggle_folder(&mut self, id: FolderId) -> Result<bool> {
        let folder = self
            .folders
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| WorkspaceError::not_found("folder", id))?;
        folder.is_open = !folder.is_open;
        Ok(folder.is_open)
    }

    /// Remove a folder and cascade to its notes
    pub fn delete_folder(&mut self, id: FolderId) -> Result<StoreEvent> {
        let index = self
            .folders
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| WorkspaceError::not_found("folder", id))?;
        self.folders.remove(index);

        let notes: Vec<NoteId> = self
            .notes
            .iter()
            .filter(|n| n.folder_id == id)
            .map(|n| n.id)
            .collect();
        self.notes.retain(|n| n.folder_id != id);
        debug!("folder {} removed with {} note(s)", id, notes.len());

        Ok(StoreEvent::FolderRemoved { folder: id, notes })
    }

    // ------------------------------------------------------------------------
    // Notes
    // ------------------------------------------------------------------------

    pub fn add_note(&mut self, title: impl Into<String>, folder_id: Option<FolderId>) -> Result<Note> {
        let folder_id = folder_id
            .filter(|id| self.folder(*id).is_some())
            .ok_or(WorkspaceError::NoFolderSelected)?;

        let title = title.into();
        let note = Note {
            id: NoteId::new(),
            content: self.editor.scaffold_for(&title),
            title,
            folder_id,
        };
        self.notes.push(note.clone());
        Ok(note)
    }

    pub fn delete_note(&mut self, id: NoteId) -> Result<StoreEvent> {
        let index = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| WorkspaceError::not_found("note", id))?;
        self.notes.remove(index);
        Ok(StoreEvent::NoteRemoved(id))
    }

    /// Raw content replace. Edits that should be undoable go through the
    /// active edit history instead.
    pub fn set_note_content(&mut self, id: NoteId, content: impl Into<String>) -> Result<()> {
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| WorkspaceError::not_found("note", id))?;
        note.content = content.into();
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------------

    pub fn source(&self, id: SourceId) -> Option<&Source> {
        self.sources.iter().find(|s| s.id == id)
    }

    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn notes_in(&self, folder: FolderId) -> impl Iterator<Item = &Note> {
        self.notes.iter().filter(move |n| n.folder_id == folder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ContentStore {
        ContentStore::new(&FolioConfig::default())
    }

    fn unique_store() -> ContentStore {
        let mut config = FolioConfig::default();
        config.workspace.unique_source_names = true;
        ContentStore::new(&config)
    }

    #[test]
    fn test_duplicate_source_names_allowed_by_default() {
        let mut store = store();
        let a = store.add_source("paper.pdf").unwrap();
        let b = store.add_source("paper.pdf").unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.sources().len(), 2);
    }

    #[test]
    fn test_duplicate_source_names_rejected_when_enforced() {
        let mut store = unique_store();
        store.add_source("paper.pdf").unwrap();
        assert_eq!(
            store.add_source("paper.pdf"),
            Err(WorkspaceError::DuplicateName("paper.pdf".to_string()))
        );

        let other = store.add_source("notes.txt").unwrap();
        assert!(store.rename_source(other.id, "paper.pdf").is_err());
        // Renaming to its own name is not a clash
        assert!(store.rename_source(other.id, "notes.txt").is_ok());
    }

    #[test]
    fn test_rename_and_delete_source() {
        let mut store = store();
        let source = store.add_source("draft.docx").unwrap();

        store.rename_source(source.id, "final.docx").unwrap();
        assert_eq!(store.source(source.id).unwrap().name, "final.docx");

        assert_eq!(
            store.delete_source(source.id),
            Ok(StoreEvent::SourceRemoved(source.id))
        );
        assert!(store.sources().is_empty());
        assert!(matches!(
            store.delete_source(source.id),
            Err(WorkspaceError::NotFound { entity_type: "source", .. })
        ));
    }

    #[test]
    fn test_add_note_requires_known_folder() {
        let mut store = store();
        assert_eq!(
            store.add_note("Plan", None),
            Err(WorkspaceError::NoFolderSelected)
        );
        assert_eq!(
            store.add_note("Plan", Some(FolderId::new())),
            Err(WorkspaceError::NoFolderSelected)
        );

        let folder = store.add_folder("Research");
        let note = store.add_note("Plan", Some(folder.id)).unwrap();
        assert_eq!(note.folder_id, folder.id);
        assert_eq!(note.content, "# Plan\n\nStart writing here...");
        assert_eq!(store.notes_in(folder.id).count(), 1);
    }

    #[test]
    fn test_toggle_folder() {
        let mut store = store();
        let folder = store.add_folder("Research");
        assert!(folder.is_open);
        assert_eq!(store.toggle_folder(folder.id), Ok(false));
        assert_eq!(store.toggle_folder(folder.id), Ok(true));
    }

    #[test]
    fn test_delete_folder_cascades_to_notes() {
        let mut store = store();
        let research = store.add_folder("Research");
        let drafts = store.add_folder("Drafts");
        let a = store.add_note("A", Some(research.id)).unwrap();
        let b = store.add_note("B", Some(research.id)).unwrap();
        let c = store.add_note("C", Some(drafts.id)).unwrap();

        let event = store.delete_folder(research.id).unwrap();
        assert_eq!(event.removed_notes(), &[a.id, b.id]);
        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.notes()[0].id, c.id);
        assert!(store
            .notes()
            .iter()
            .all(|n| store.folder(n.folder_id).is_some()));
    }
}
