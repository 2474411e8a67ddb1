//! # Data Directory and Context Setup
//!
//! Both documents and the config file live in one data directory, resolved in
//! this order:
//!
//! 1. An explicit override (the CLI's `--data-dir`).
//! 2. The `LINKBOOK_HOME` environment variable.
//! 3. The OS-appropriate data directory (via the `directories` crate), e.g.
//!    `~/.local/share/linkbook` on Linux.
//!
//! [`initialize`] then loads the config from that directory and builds an
//! [`FsBackend`] pointed at the configured document names.

use crate::api::{LinkbookApi, LinkbookPaths};
use crate::config::LinkbookConfig;
use crate::error::{LinkbookError, Result};
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::path::PathBuf;

pub const HOME_ENV: &str = "LINKBOOK_HOME";

pub struct LinkbookContext {
    pub api: LinkbookApi<FsBackend>,
    pub config: LinkbookConfig,
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(HOME_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "linkbook", "linkbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| LinkbookError::Store("Could not determine data directory".to_string()))
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<LinkbookContext> {
    let data_dir = resolve_data_dir(data_override)?;
    log::debug!("using data directory {}", data_dir.display());

    let config = LinkbookConfig::load(&data_dir)?;
    let backend = FsBackend::new(data_dir.clone())
        .with_categories_file(&config.categories_file)
        .with_notes_file(&config.notes_file);
    let api = LinkbookApi::new(backend, LinkbookPaths { data_dir });

    Ok(LinkbookContext { api, config })
}
