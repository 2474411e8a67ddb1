//! Terminal front end: argument parsing, prompts and rendering.
//!
//! Everything here is presentation. Domain work goes through
//! [`linkbook::api::LinkbookApi`].

mod commands;
mod prompt;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
