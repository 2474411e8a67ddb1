//! # Rendering Module
//!
//! Turns `CmdResult` pieces into terminal text through the templates in
//! `templates.rs`, with the `style` filter backed by `styles.rs`. Every public
//! renderer has a `*_with_color` twin so tests can pin color off and compare
//! plain strings.

use super::styles::{self, names};
use super::templates::{
    LINKS_TEMPLATE, MESSAGES_TEMPLATE, NAMES_TEMPLATE, NOTES_TEMPLATE, TREE_TEMPLATE,
};
use linkbook::api::{CmdMessage, MessageLevel};
use linkbook::model::CategoryTree;
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

#[derive(Serialize)]
struct NumberedItem {
    number: String,
    name: String,
}

#[derive(Serialize)]
struct NamesData {
    heading: String,
    items: Vec<NumberedItem>,
    item_style: String,
    empty_message: String,
}

#[derive(Serialize)]
struct LinksData {
    main: String,
    sub: String,
    author: String,
    links: Vec<String>,
}

#[derive(Serialize)]
struct AuthorEntry {
    name: String,
    padding: String,
    count: String,
    links: Vec<String>,
}

#[derive(Serialize)]
struct SubEntry {
    name: String,
    authors: Vec<AuthorEntry>,
}

#[derive(Serialize)]
struct MainEntry {
    name: String,
    subs: Vec<SubEntry>,
}

#[derive(Serialize)]
struct TreeData {
    mains: Vec<MainEntry>,
}

#[derive(Serialize)]
struct NoteLine {
    number: String,
    text: String,
}

#[derive(Serialize)]
struct NotesData {
    notes: Vec<NoteLine>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn use_color() -> bool {
    console::colors_enabled()
}

fn render_template<T: Serialize>(
    template: &str,
    data: &T,
    use_color: bool,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        styles::apply(&name, &value.to_string(), use_color)
    });
    env.render_str(template, data)
}

/// Right-aligned "1." .. "N." labels, all the same width.
fn numbers(count: usize) -> Vec<String> {
    let width = format!("{}.", count).len();
    (1..=count)
        .map(|n| format!("{:>width$}", format!("{}.", n), width = width))
        .collect()
}

fn link_count(n: usize) -> String {
    if n == 1 {
        "1 link".to_string()
    } else {
        format!("{} links", n)
    }
}

/// Renders one level of the tree (mains, subs or authors) as a numbered list.
pub fn render_names(heading: &str, items: &[String], item_style: &str, empty_message: &str) -> String {
    render_names_with_color(heading, items, item_style, empty_message, use_color())
}

pub fn render_names_with_color(
    heading: &str,
    items: &[String],
    item_style: &str,
    empty_message: &str,
    use_color: bool,
) -> String {
    let data = NamesData {
        heading: heading.to_string(),
        items: numbers(items.len())
            .into_iter()
            .zip(items)
            .map(|(number, name)| NumberedItem {
                number,
                name: name.clone(),
            })
            .collect(),
        item_style: item_style.to_string(),
        empty_message: empty_message.to_string(),
    };
    render_template(NAMES_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_links(main: &str, sub: &str, author: &str, links: &[String]) -> String {
    render_links_with_color(main, sub, author, links, use_color())
}

pub fn render_links_with_color(
    main: &str,
    sub: &str,
    author: &str,
    links: &[String],
    use_color: bool,
) -> String {
    let data = LinksData {
        main: main.trim().to_string(),
        sub: sub.trim().to_string(),
        author: author.trim().to_string(),
        links: links.to_vec(),
    };
    render_template(LINKS_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_tree(tree: &CategoryTree) -> String {
    render_tree_with_color(tree, use_color())
}

pub fn render_tree_with_color(tree: &CategoryTree, use_color: bool) -> String {
    let mains = tree
        .iter()
        .map(|(main, subs)| MainEntry {
            name: main.clone(),
            subs: subs
                .iter()
                .map(|(sub, authors)| {
                    // Align link counts within one sub category
                    let widest = authors.keys().map(|a| a.width()).max().unwrap_or(0);
                    SubEntry {
                        name: sub.clone(),
                        authors: authors
                            .iter()
                            .map(|(author, links)| AuthorEntry {
                                name: author.clone(),
                                padding: " ".repeat(widest - author.width()),
                                count: link_count(links.len()),
                                links: links.clone(),
                            })
                            .collect(),
                    }
                })
                .collect(),
        })
        .collect();

    render_template(TREE_TEMPLATE, &TreeData { mains }, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders notes numbered from 1, the numbering `note rm` expects.
pub fn render_notes(notes: &[String]) -> String {
    render_notes_with_color(notes, use_color())
}

pub fn render_notes_with_color(notes: &[String], use_color: bool) -> String {
    let data = NotesData {
        notes: numbers(notes.len())
            .into_iter()
            .zip(notes)
            .map(|(number, text)| NoteLine {
                number,
                text: text.clone(),
            })
            .collect(),
    };
    render_template(NOTES_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_with_color(messages, use_color())
}

pub fn render_messages_with_color(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| {
                let style = match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                };
                MessageData {
                    content: msg.content.clone(),
                    style: style.to_string(),
                }
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// Prints command messages to stdout.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn numbers_are_right_aligned() {
        let labels = numbers(10);
        assert_eq!(labels[0], " 1.");
        assert_eq!(labels[9], "10.");
    }

    #[test]
    fn names_render_numbered() {
        let out = render_names_with_color(
            "Main categories",
            &strings(&["Courses", "Videos"]),
            names::MAIN,
            "nothing",
            false,
        );
        assert_eq!(out, "Main categories\n1. Courses\n2. Videos\n");
    }

    #[test]
    fn names_render_empty_message() {
        let out = render_names_with_color("", &[], names::MAIN, "No data.", false);
        assert_eq!(out, "No data.\n");
    }

    #[test]
    fn links_render_as_bullets() {
        let out = render_links_with_color(
            "Courses",
            "Marketing",
            "Jane",
            &strings(&["http://a", "http://b"]),
            false,
        );
        assert_eq!(
            out,
            "Courses / Marketing / Jane\n  - http://a\n  - http://b\n"
        );
    }

    #[test]
    fn tree_renders_nested_with_aligned_counts() {
        let mut tree = CategoryTree::new();
        tree.add_link("Courses", "Marketing", "Jane", "http://a").unwrap();
        tree.add_link("Courses", "Marketing", "Bobby", "http://b").unwrap();
        tree.add_link("Courses", "Marketing", "Bobby", "http://c").unwrap();

        let out = render_tree_with_color(&tree, false);
        assert_eq!(
            out,
            "Courses\n  Marketing\n    Jane   1 link\n      - http://a\n    Bobby  2 links\n      - http://b\n      - http://c\n"
        );
    }

    #[test]
    fn notes_render_from_one() {
        let out = render_notes_with_color(&strings(&["buy milk", "call bob"]), false);
        assert_eq!(out, "1. buy milk\n2. call bob\n");
        assert_eq!(render_notes_with_color(&[], false), "No notes yet.\n");
    }

    #[test]
    fn messages_render_one_per_line() {
        let out = render_messages_with_color(
            &[CmdMessage::success("done"), CmdMessage::warning("careful")],
            false,
        );
        assert_eq!(out, "done\ncareful\n");
        assert_eq!(render_messages_with_color(&[], false), "");
    }
}
