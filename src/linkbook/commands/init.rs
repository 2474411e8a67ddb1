use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{CategoryTree, NoteList};
use crate::store::{Document, StorageBackend};

/// Writes empty documents for any that do not exist yet. Existing ones are left alone.
pub fn run<B: StorageBackend>(backend: &B) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !backend.exists(Document::Categories)? {
        backend.save_categories(&CategoryTree::new())?;
        result.created_documents.push(Document::Categories);
    }
    if !backend.exists(Document::Notes)? {
        backend.save_notes(&NoteList::new())?;
        result.created_documents.push(Document::Notes);
    }

    if result.created_documents.is_empty() {
        result.add_message(CmdMessage::info("Linkbook already initialized."));
    }
    for doc in result.created_documents.clone() {
        log::info!("created empty {} document", doc);
        result.add_message(CmdMessage::success(format!(
            "Initialized {} at {}",
            doc,
            backend.location(doc)
        )));
    }
    Ok(result)
}
