use super::backend::{Document, StorageBackend};
use crate::error::{LinkbookError, Result};
use crate::model::{CategoryTree, NoteList};
use std::cell::RefCell;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since linkbook is single-threaded,
/// which lets the `StorageBackend` trait take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    categories: RefCell<Option<CategoryTree>>,
    notes: RefCell<Option<NoteList>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    fn check_writable(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(LinkbookError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn load_categories(&self) -> Result<CategoryTree> {
        Ok(self.categories.borrow().clone().unwrap_or_default())
    }

    fn save_categories(&self, tree: &CategoryTree) -> Result<()> {
        self.check_writable()?;
        *self.categories.borrow_mut() = Some(tree.clone());
        Ok(())
    }

    fn load_notes(&self) -> Result<NoteList> {
        Ok(self.notes.borrow().clone().unwrap_or_default())
    }

    fn save_notes(&self, notes: &NoteList) -> Result<()> {
        self.check_writable()?;
        *self.notes.borrow_mut() = Some(notes.clone());
        Ok(())
    }

    fn exists(&self, doc: Document) -> Result<bool> {
        Ok(match doc {
            Document::Categories => self.categories.borrow().is_some(),
            Document::Notes => self.notes.borrow().is_some(),
        })
    }

    fn location(&self, doc: Document) -> String {
        format!("memory://{}", doc)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub backend: MemBackend,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                backend: MemBackend::new(),
            }
        }

        pub fn with_link(self, main: &str, sub: &str, author: &str, link: &str) -> Self {
            let mut tree = self.backend.load_categories().unwrap();
            tree.add_link(main, sub, author, link).unwrap();
            self.backend.save_categories(&tree).unwrap();
            self
        }

        pub fn with_note(self, text: &str) -> Self {
            let mut notes = self.backend.load_notes().unwrap();
            notes.push(text).unwrap();
            self.backend.save_notes(&notes).unwrap();
            self
        }
    }
}
