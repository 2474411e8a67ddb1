use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(
    backend: &B,
    main: &str,
    sub: &str,
    author: &str,
    link: &str,
) -> Result<CmdResult> {
    let mut tree = backend.load_categories()?;
    tree.add_link(main, sub, author, link)?;
    backend.save_categories(&tree)?;

    log::info!(
        "added link under {} / {} / {}",
        main.trim(),
        sub.trim(),
        author.trim()
    );

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Entry added successfully!"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::browse;
    use crate::error::LinkbookError;
    use crate::store::mem_backend::fixtures::StoreFixture;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn appends_link_as_last_element() {
        let backend = StoreFixture::new()
            .with_link("Courses", "Marketing", "Jane", "http://a")
            .backend;

        run(&backend, "Courses", "Marketing", "Jane", "http://b").unwrap();

        let links = browse::get_links(&backend, "Courses", "Marketing", "Jane").unwrap();
        assert_eq!(links.links.last().map(String::as_str), Some("http://b"));
    }

    #[test]
    fn reports_success() {
        let backend = MemBackend::new();
        let result = run(&backend, "Courses", "Marketing", "Jane", "http://a").unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "Entry added successfully!");
    }

    #[test]
    fn blank_field_is_rejected_without_saving() {
        let backend = MemBackend::new();
        let err = run(&backend, "Courses", "", "Jane", "http://a").unwrap_err();
        assert!(matches!(err, LinkbookError::Validation(_)));
        assert!(backend.load_categories().unwrap().is_empty());
    }

    #[test]
    fn write_failure_is_surfaced() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let err = run(&backend, "Courses", "Marketing", "Jane", "http://a").unwrap_err();
        assert!(matches!(err, LinkbookError::Store(_)));
    }
}
