//! # Terminal Styles
//!
//! Templates never pick colors directly. They tag text with a semantic style name
//! (`{{ name | style("main") }}`) and this module maps the name to a
//! [`console::Style`]. With color off, the tag is dropped and the text passes
//! through untouched, which is what the rendering tests compare against.
use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const MAIN: &str = "main";
    pub const SUB: &str = "sub";
    pub const AUTHOR: &str = "author";
    pub const LINK: &str = "link";
    pub const INDEX: &str = "index";
    pub const MUTED: &str = "muted";
    pub const HEADING: &str = "heading";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

pub static LINKBOOK_THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        (names::MAIN, Style::new().bold().magenta()),
        (names::SUB, Style::new().cyan()),
        (names::AUTHOR, Style::new().green()),
        (names::LINK, Style::new().blue().underlined()),
        (names::INDEX, Style::new().yellow()),
        (names::MUTED, Style::new().dim()),
        (names::HEADING, Style::new().bold()),
        (names::ERROR, Style::new().red()),
        (names::WARNING, Style::new().yellow()),
        (names::SUCCESS, Style::new().green()),
        (names::INFO, Style::new().dim()),
    ])
});

/// Applies a named style. Unknown names leave the text as is.
pub fn apply(name: &str, text: &str, use_color: bool) -> String {
    match LINKBOOK_THEME.get(name) {
        Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
        _ => text.to_string(),
    }
}
