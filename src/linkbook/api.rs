//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every linkbook operation, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic and never prints. Failures come back as
//! [`LinkbookError`](crate::error::LinkbookError) values and are never retried.
//!
//! ## Generic Over StorageBackend
//!
//! `LinkbookApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `LinkbookApi<FsBackend>`
//! - Testing: `LinkbookApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::store::StorageBackend;

/// The main API facade for linkbook operations.
pub struct LinkbookApi<B: StorageBackend> {
    backend: B,
    paths: commands::LinkbookPaths,
}

impl<B: StorageBackend> LinkbookApi<B> {
    pub fn new(backend: B, paths: commands::LinkbookPaths) -> Self {
        Self { backend, paths }
    }

    // --- Category store ---

    pub fn add_link(
        &self,
        main: &str,
        sub: &str,
        author: &str,
        link: &str,
    ) -> Result<commands::CmdResult> {
        commands::add_link::run(&self.backend, main, sub, author, link)
    }

    pub fn list_mains(&self) -> Result<commands::CmdResult> {
        commands::browse::list_mains(&self.backend)
    }

    pub fn list_subs(&self, main: &str) -> Result<commands::CmdResult> {
        commands::browse::list_subs(&self.backend, main)
    }

    pub fn list_authors(&self, main: &str, sub: &str) -> Result<commands::CmdResult> {
        commands::browse::list_authors(&self.backend, main, sub)
    }

    pub fn get_links(&self, main: &str, sub: &str, author: &str) -> Result<commands::CmdResult> {
        commands::browse::get_links(&self.backend, main, sub, author)
    }

    pub fn tree(&self) -> Result<commands::CmdResult> {
        commands::browse::tree(&self.backend)
    }

    pub fn delete_author(
        &self,
        main: &str,
        sub: &str,
        author: &str,
    ) -> Result<commands::CmdResult> {
        commands::delete_author::run(&self.backend, main, sub, author)
    }

    // --- Notes ---

    pub fn add_note(&self, text: &str) -> Result<commands::CmdResult> {
        commands::notes::add(&self.backend, text)
    }

    /// `index` is 0-based.
    pub fn delete_note(&self, index: usize) -> Result<commands::CmdResult> {
        commands::notes::delete(&self.backend, index)
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::notes::list(&self.backend)
    }

    // --- Housekeeping ---

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.backend)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::LinkbookPaths {
        &self.paths
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, LinkbookPaths, MessageLevel};
