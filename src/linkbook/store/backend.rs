use crate::error::Result;
use crate::model::{CategoryTree, NoteList};

/// Which of the two documents a backend call refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    Categories,
    Notes,
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Document::Categories => write!(f, "categories"),
            Document::Notes => write!(f, "notes"),
        }
    }
}

/// Abstract interface for raw document I/O.
///
/// Every load returns the whole document and every save replaces it. A document
/// that has never been written loads as its empty default.
pub trait StorageBackend {
    // --- Category document ---

    fn load_categories(&self) -> Result<CategoryTree>;

    fn save_categories(&self, tree: &CategoryTree) -> Result<()>;

    // --- Notes document ---

    fn load_notes(&self) -> Result<NoteList>;

    fn save_notes(&self, notes: &NoteList) -> Result<()>;

    // --- Bootstrapping ---

    /// Whether the document has been written at least once.
    fn exists(&self, doc: Document) -> Result<bool>;

    /// Where the document lives, for display. Virtual for non-file backends.
    fn location(&self, doc: Document) -> String;
}
