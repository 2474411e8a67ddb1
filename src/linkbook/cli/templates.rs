//! # CLI Templates
//!
//! Output layout lives in stand-alone minijinja templates under `templates/`,
//! embedded at compile time. Layout math (numbering, column padding) is done in
//! Rust and handed to the templates as ready strings; templates only decide
//! what goes on which line and which style name each piece gets.
//!
//! The environment runs with `trim_blocks`, so a line holding only a block tag
//! produces no output of its own. Keep block tags at the start of their line.

pub const NAMES_TEMPLATE: &str = include_str!("templates/names.tmp");
pub const LINKS_TEMPLATE: &str = include_str!("templates/links.tmp");
pub const TREE_TEMPLATE: &str = include_str!("templates/tree.tmp");
pub const NOTES_TEMPLATE: &str = include_str!("templates/notes.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
