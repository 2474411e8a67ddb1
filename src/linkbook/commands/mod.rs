use crate::config::LinkbookConfig;
use crate::model::{CategoryTree, LinkList};
use crate::store::Document;
use std::path::PathBuf;

pub mod add_link;
pub mod browse;
pub mod config;
pub mod delete_author;
pub mod init;
pub mod notes;

#[derive(Debug, Clone)]
pub struct LinkbookPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Keys of one tree level (mains, subs or authors)
    pub names: Vec<String>,
    pub links: LinkList,
    pub notes: Vec<String>,
    pub tree: Option<CategoryTree>,
    pub created_documents: Vec<Document>,
    pub config: Option<LinkbookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = names;
        self
    }

    pub fn with_links(mut self, links: LinkList) -> Self {
        self.links = links;
        self
    }

    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }

    pub fn with_tree(mut self, tree: CategoryTree) -> Self {
        self.tree = Some(tree);
        self
    }

    pub fn with_config(mut self, config: LinkbookConfig) -> Self {
        self.config = Some(config);
        self
    }
}
