//! # Domain Model: Category Tree and Notes
//!
//! Two documents make up all of linkbook's state:
//!
//! ```text
//! CategoryTree                      NoteList
//! {                                 [
//!   "Courses": {        <- main       "buy milk",
//!     "Marketing": {    <- sub        "call bob"
//!       "Jane": [       <- author   ]
//!         "http://a",   <- links
//!         "http://b"
//!       ]
//!     }
//!   }
//! }
//! ```
//!
//! The tree is typed all the way down ([`SubMap`], [`AuthorMap`], [`LinkList`]),
//! so a document of the wrong depth fails at deserialization instead of at lookup.
//!
//! ## Ordering
//!
//! Every level is an [`IndexMap`]: keys iterate in insertion order, and that order
//! survives a save/load cycle because it is the key order of the JSON object on disk.
//! Removals use `shift_remove` so the remaining keys keep their relative order.
//!
//! ## Cascading Prune
//!
//! Only [`CategoryTree::add_link`] creates keys, and it always appends a link, so an
//! author never starts out empty. [`CategoryTree::delete_author`] is the only operation
//! that removes keys, and it restores the "no empty maps" invariant before returning:
//!
//! 1. Remove the author.
//! 2. If the sub category has no authors left, remove it.
//! 3. If the main category has no sub categories left, remove it.
//!
//! All of this happens on the in-memory tree, which the caller then saves once.
//!
//! ## Names
//!
//! Keys, links and notes are trimmed before they are stored or looked up. A value
//! that is blank after trimming is rejected with [`LinkbookError::Validation`].

use crate::error::{LinkbookError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Links recorded for one author. Duplicates are allowed.
pub type LinkList = Vec<String>;

/// Authors of one sub category.
pub type AuthorMap = IndexMap<String, LinkList>;

/// Sub categories of one main category.
pub type SubMap = IndexMap<String, AuthorMap>;

/// Trims `value`, rejecting it if nothing is left.
pub fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LinkbookError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

fn not_found(path: &[&str]) -> LinkbookError {
    LinkbookError::NotFound(path.join(" / "))
}

/// What a successful [`CategoryTree::delete_author`] removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRemoval {
    pub main: String,
    pub sub: String,
    pub author: String,
    pub links: LinkList,
    pub pruned_sub: bool,
    pub pruned_main: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTree {
    mains: IndexMap<String, SubMap>,
}

impl CategoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.mains.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, SubMap> {
        self.mains.iter()
    }

    /// Appends `link` to the author's list, creating missing levels on the way down.
    pub fn add_link(&mut self, main: &str, sub: &str, author: &str, link: &str) -> Result<()> {
        let main = required("Main category", main)?;
        let sub = required("Sub category", sub)?;
        let author = required("Author", author)?;
        let link = required("Link", link)?;

        self.mains
            .entry(main)
            .or_default()
            .entry(sub)
            .or_default()
            .entry(author)
            .or_default()
            .push(link);
        Ok(())
    }

    pub fn mains(&self) -> Vec<String> {
        self.mains.keys().cloned().collect()
    }

    pub fn subs(&self, main: &str) -> Result<Vec<String>> {
        Ok(self.sub_map(main)?.keys().cloned().collect())
    }

    pub fn authors(&self, main: &str, sub: &str) -> Result<Vec<String>> {
        Ok(self.author_map(main, sub)?.keys().cloned().collect())
    }

    /// Returns a copy of the author's links.
    pub fn links(&self, main: &str, sub: &str, author: &str) -> Result<LinkList> {
        let (main, sub, author) = (main.trim(), sub.trim(), author.trim());
        self.author_map(main, sub)?
            .get(author)
            .cloned()
            .ok_or_else(|| not_found(&[main, sub, author]))
    }

    /// Removes the author and prunes any level left empty.
    ///
    /// Fails with [`LinkbookError::NotFound`] without touching the tree if any
    /// part of the path is missing.
    pub fn delete_author(&mut self, main: &str, sub: &str, author: &str) -> Result<AuthorRemoval> {
        let (main, sub, author) = (main.trim(), sub.trim(), author.trim());

        let subs = self.mains.get_mut(main).ok_or_else(|| not_found(&[main]))?;
        let authors = subs.get_mut(sub).ok_or_else(|| not_found(&[main, sub]))?;
        let links = authors
            .shift_remove(author)
            .ok_or_else(|| not_found(&[main, sub, author]))?;

        let pruned_sub = authors.is_empty();
        if pruned_sub {
            subs.shift_remove(sub);
        }
        let pruned_main = subs.is_empty();
        if pruned_main {
            self.mains.shift_remove(main);
        }

        Ok(AuthorRemoval {
            main: main.to_string(),
            sub: sub.to_string(),
            author: author.to_string(),
            links,
            pruned_sub,
            pruned_main,
        })
    }

    fn sub_map(&self, main: &str) -> Result<&SubMap> {
        let main = main.trim();
        self.mains.get(main).ok_or_else(|| not_found(&[main]))
    }

    fn author_map(&self, main: &str, sub: &str) -> Result<&AuthorMap> {
        let (main, sub) = (main.trim(), sub.trim());
        self.sub_map(main)?
            .get(sub)
            .ok_or_else(|| not_found(&[main, sub]))
    }
}

/// Free-text notes. Positions are 0-based and shift down after a removal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteList {
    notes: Vec<String>,
}

impl NoteList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.notes
    }

    /// Appends the trimmed note and returns what was stored.
    pub fn push(&mut self, text: &str) -> Result<String> {
        let note = required("Note", text)?;
        self.notes.push(note.clone());
        Ok(note)
    }

    pub fn remove(&mut self, index: usize) -> Result<String> {
        if index >= self.notes.len() {
            return Err(LinkbookError::IndexOutOfRange {
                index,
                len: self.notes.len(),
            });
        }
        Ok(self.notes.remove(index))
    }
}

impl From<Vec<String>> for NoteList {
    fn from(notes: Vec<String>) -> Self {
        Self { notes }
    }
}
