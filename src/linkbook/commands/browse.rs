//! Read-only queries over the category tree, one level at a time.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::StorageBackend;

pub const EMPTY_TREE_MESSAGE: &str = "No data available. Please add some entries first.";

pub fn list_mains<B: StorageBackend>(backend: &B) -> Result<CmdResult> {
    let tree = backend.load_categories()?;
    let mut result = CmdResult::default().with_names(tree.mains());
    if tree.is_empty() {
        result.add_message(CmdMessage::warning(EMPTY_TREE_MESSAGE));
    }
    Ok(result)
}

pub fn list_subs<B: StorageBackend>(backend: &B, main: &str) -> Result<CmdResult> {
    let tree = backend.load_categories()?;
    Ok(CmdResult::default().with_names(tree.subs(main)?))
}

pub fn list_authors<B: StorageBackend>(backend: &B, main: &str, sub: &str) -> Result<CmdResult> {
    let tree = backend.load_categories()?;
    Ok(CmdResult::default().with_names(tree.authors(main, sub)?))
}

pub fn get_links<B: StorageBackend>(
    backend: &B,
    main: &str,
    sub: &str,
    author: &str,
) -> Result<CmdResult> {
    let tree = backend.load_categories()?;
    Ok(CmdResult::default().with_links(tree.links(main, sub, author)?))
}

/// The whole tree, for browsing everything at once.
pub fn tree<B: StorageBackend>(backend: &B) -> Result<CmdResult> {
    let tree = backend.load_categories()?;
    let mut result = CmdResult::default();
    if tree.is_empty() {
        log::debug!("category tree is empty");
        result.add_message(CmdMessage::warning(EMPTY_TREE_MESSAGE));
    }
    Ok(result.with_tree(tree))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::LinkbookError;
    use crate::store::mem_backend::fixtures::StoreFixture;
    use crate::store::mem_backend::MemBackend;

    fn fixture() -> MemBackend {
        StoreFixture::new()
            .with_link("Courses", "Marketing", "Jane", "http://a")
            .with_link("Courses", "Marketing", "Bob", "http://b")
            .with_link("Courses", "Design", "Ann", "http://c")
            .with_link("Videos", "Rust", "Cy", "http://d")
            .backend
    }

    #[test]
    fn lists_each_level_in_insertion_order() {
        let backend = fixture();

        assert_eq!(list_mains(&backend).unwrap().names, vec!["Courses", "Videos"]);
        assert_eq!(
            list_subs(&backend, "Courses").unwrap().names,
            vec!["Marketing", "Design"]
        );
        assert_eq!(
            list_authors(&backend, "Courses", "Marketing").unwrap().names,
            vec!["Jane", "Bob"]
        );
        assert_eq!(
            get_links(&backend, "Videos", "Rust", "Cy").unwrap().links,
            vec!["http://d"]
        );
    }

    #[test]
    fn repeated_reads_are_stable() {
        let backend = fixture();
        let first = list_mains(&backend).unwrap().names;
        let second = list_mains(&backend).unwrap().names;
        assert_eq!(first, second);
    }

    #[test]
    fn missing_levels_are_not_found() {
        let backend = fixture();
        assert!(matches!(
            list_subs(&backend, "Books"),
            Err(LinkbookError::NotFound(_))
        ));
        assert!(matches!(
            list_authors(&backend, "Courses", "Rust"),
            Err(LinkbookError::NotFound(_))
        ));
        assert!(matches!(
            get_links(&backend, "Courses", "Design", "Jane"),
            Err(LinkbookError::NotFound(_))
        ));
    }

    #[test]
    fn empty_tree_warns() {
        let backend = MemBackend::new();

        let mains = list_mains(&backend).unwrap();
        assert!(mains.names.is_empty());
        assert_eq!(mains.messages[0].level, MessageLevel::Warning);

        let whole = tree(&backend).unwrap();
        assert!(whole.tree.unwrap().is_empty());
        assert_eq!(whole.messages[0].content, EMPTY_TREE_MESSAGE);
    }

    #[test]
    fn tree_returns_everything() {
        let backend = fixture();
        let whole = tree(&backend).unwrap().tree.unwrap();
        assert_eq!(whole, backend.load_categories().unwrap());
        assert!(tree(&backend).unwrap().messages.is_empty());
    }
}
