use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::StorageBackend;

pub fn add<B: StorageBackend>(backend: &B, text: &str) -> Result<CmdResult> {
    let mut notes = backend.load_notes()?;
    let saved = notes.push(text)?;
    backend.save_notes(&notes)?;

    log::info!("saved note #{}", notes.len());

    let mut result = CmdResult::default().with_notes(vec![saved]);
    result.add_message(CmdMessage::success("Note saved successfully!"));
    Ok(result)
}

/// Deletes the note at the 0-based `index`; later notes move up one place.
pub fn delete<B: StorageBackend>(backend: &B, index: usize) -> Result<CmdResult> {
    let mut notes = backend.load_notes()?;
    let removed = notes.remove(index)?;
    backend.save_notes(&notes)?;

    log::info!("deleted note at index {}", index);

    let mut result = CmdResult::default().with_notes(vec![removed.clone()]);
    result.add_message(CmdMessage::success(format!("Note deleted: {}", removed)));
    Ok(result)
}

pub fn list<B: StorageBackend>(backend: &B) -> Result<CmdResult> {
    let notes = backend.load_notes()?;
    Ok(CmdResult::default().with_notes(notes.as_slice().to_vec()))
}
