//! # Storage Layer
//!
//! Storage is abstracted behind the [`StorageBackend`] trait so the commands never
//! know where the two documents live.
//!
//! - [`fs_backend::FsBackend`]: production, one JSON file per document
//! - [`mem_backend::MemBackend`]: in-memory, for tests
//!
//! ## Storage Format
//!
//! For `FsBackend`:
//! ```text
//! <data dir>/
//! ├── content_data.json   # CategoryTree: {main: {sub: {author: [links]}}}
//! ├── notes_data.json     # NoteList: [notes]
//! └── config.json         # LinkbookConfig
//! ```
//!
//! Both documents are rewritten whole on every save, pretty-printed, through a
//! temporary file that is renamed over the target.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::{Document, StorageBackend};
