use super::backend::{Document, StorageBackend};
use crate::error::{LinkbookError, Result};
use crate::model::{CategoryTree, NoteList};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_CATEGORIES_FILE: &str = "content_data.json";
pub const DEFAULT_NOTES_FILE: &str = "notes_data.json";

pub struct FsBackend {
    root: PathBuf,
    categories_file: String,
    notes_file: String,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            categories_file: DEFAULT_CATEGORIES_FILE.to_string(),
            notes_file: DEFAULT_NOTES_FILE.to_string(),
        }
    }

    pub fn with_categories_file(mut self, name: &str) -> Self {
        self.categories_file = name.to_string();
        self
    }

    pub fn with_notes_file(mut self, name: &str) -> Self {
        self.notes_file = name.to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn document_path(&self, doc: Document) -> PathBuf {
        match doc {
            Document::Categories => self.root.join(&self.categories_file),
            Document::Notes => self.root.join(&self.notes_file),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(LinkbookError::Io)?;
        }
        Ok(())
    }

    fn load_document<T: DeserializeOwned + Default>(&self, doc: Document) -> Result<T> {
        let path = self.document_path(doc);
        if !path.exists() {
            log::debug!("{} document not found at {}, using empty", doc, path.display());
            return Ok(T::default());
        }
        let content = fs::read_to_string(&path).map_err(LinkbookError::Io)?;
        let value = serde_json::from_str(&content).map_err(LinkbookError::Serialization)?;
        log::debug!("loaded {} document from {}", doc, path.display());
        Ok(value)
    }

    fn save_document<T: Serialize>(&self, doc: Document, value: &T) -> Result<()> {
        self.ensure_dir(&self.root)?;

        let path = self.document_path(doc);
        let content = serde_json::to_string_pretty(value).map_err(LinkbookError::Serialization)?;

        // Atomic write: a failure leaves the previous document in place
        let tmp_path = self.root.join(format!(".{}-{}.tmp", doc, Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(LinkbookError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(LinkbookError::Io(e));
        }

        log::debug!("saved {} document to {}", doc, path.display());
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_categories(&self) -> Result<CategoryTree> {
        self.load_document(Document::Categories)
    }

    fn save_categories(&self, tree: &CategoryTree) -> Result<()> {
        self.save_document(Document::Categories, tree)
    }

    fn load_notes(&self) -> Result<NoteList> {
        self.load_document(Document::Notes)
    }

    fn save_notes(&self, notes: &NoteList) -> Result<()> {
        self.save_document(Document::Notes, notes)
    }

    fn exists(&self, doc: Document) -> Result<bool> {
        Ok(self.document_path(doc).exists())
    }

    fn location(&self, doc: Document) -> String {
        self.document_path(doc).display().to_string()
    }
}
