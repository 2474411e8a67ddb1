use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::StorageBackend;

/// Removes an author, pruning its sub and main category if they end up empty.
///
/// The prune runs on the loaded tree and is written back in one save. A missing
/// path fails before anything is written.
pub fn run<B: StorageBackend>(backend: &B, main: &str, sub: &str, author: &str) -> Result<CmdResult> {
    let mut tree = backend.load_categories()?;
    let removal = tree.delete_author(main, sub, author)?;
    backend.save_categories(&tree)?;

    log::info!(
        "deleted author {} / {} / {} ({} links)",
        removal.main,
        removal.sub,
        removal.author,
        removal.links.len()
    );

    let mut result = CmdResult::default().with_links(removal.links);
    result.add_message(CmdMessage::success(format!(
        "Author '{}' deleted successfully!",
        removal.author
    )));
    if removal.pruned_sub {
        result.add_message(CmdMessage::info(format!(
            "Removed empty sub category '{}'",
            removal.sub
        )));
    }
    if removal.pruned_main {
        result.add_message(CmdMessage::info(format!(
            "Removed empty main category '{}'",
            removal.main
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add_link, browse};
    use crate::error::LinkbookError;
    use crate::store::mem_backend::fixtures::StoreFixture;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn add_then_delete_empties_the_tree() {
        let backend = MemBackend::new();
        add_link::run(&backend, "Courses", "Marketing", "Jane", "http://a").unwrap();
        add_link::run(&backend, "Courses", "Marketing", "Jane", "http://b").unwrap();

        let links = browse::get_links(&backend, "Courses", "Marketing", "Jane").unwrap();
        assert_eq!(links.links, vec!["http://a", "http://b"]);

        let result = run(&backend, "Courses", "Marketing", "Jane").unwrap();
        assert_eq!(result.links, vec!["http://a", "http://b"]);
        assert_eq!(
            result.messages[0].content,
            "Author 'Jane' deleted successfully!"
        );
        assert!(browse::list_mains(&backend).unwrap().names.is_empty());
    }

    #[test]
    fn sibling_author_keeps_sub() {
        let backend = StoreFixture::new()
            .with_link("Courses", "Marketing", "Jane", "http://a")
            .with_link("Courses", "Marketing", "Bob", "http://b")
            .backend;

        let result = run(&backend, "Courses", "Marketing", "Jane").unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(
            browse::list_authors(&backend, "Courses", "Marketing")
                .unwrap()
                .names,
            vec!["Bob"]
        );
    }

    #[test]
    fn only_author_prunes_sub_but_not_main() {
        let backend = StoreFixture::new()
            .with_link("Courses", "Marketing", "Jane", "http://a")
            .with_link("Courses", "Design", "Bob", "http://b")
            .backend;

        let result = run(&backend, "Courses", "Marketing", "Jane").unwrap();
        assert_eq!(result.messages.len(), 2);
        assert_eq!(
            browse::list_subs(&backend, "Courses").unwrap().names,
            vec!["Design"]
        );
        assert_eq!(browse::list_mains(&backend).unwrap().names, vec!["Courses"]);
    }

    #[test]
    fn missing_path_writes_nothing() {
        let backend = StoreFixture::new()
            .with_link("Courses", "Marketing", "Jane", "http://a")
            .backend;
        let before = backend.load_categories().unwrap();

        // With saves failing, NotFound means no save was attempted
        backend.set_simulate_write_error(true);
        let err = run(&backend, "Courses", "Marketing", "Bob").unwrap_err();

        assert!(matches!(err, LinkbookError::NotFound(_)));
        assert_eq!(backend.load_categories().unwrap(), before);
    }

    #[test]
    fn failed_save_leaves_stored_tree_intact() {
        let backend = StoreFixture::new()
            .with_link("Courses", "Marketing", "Jane", "http://a")
            .backend;
        let before = backend.load_categories().unwrap();

        backend.set_simulate_write_error(true);
        let err = run(&backend, "Courses", "Marketing", "Jane").unwrap_err();

        assert!(matches!(err, LinkbookError::Store(_)));
        assert_eq!(backend.load_categories().unwrap(), before);
    }
}
