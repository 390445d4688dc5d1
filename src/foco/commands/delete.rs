use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::DocId;
use crate::store::DocumentStore;
use tracing::{info, warn};

use super::helpers::documents_by_ids;

/// Deletes documents permanently, then their cover images.
pub fn run<S: DocumentStore>(store: &mut S, ids: &[DocId]) -> Result<CmdResult> {
    let docs = documents_by_ids(store, ids)?;
    let mut result = CmdResult::default();

    let doc_ids: Vec<DocId> = docs.iter().map(|d| d.id()).collect();
    store.delete(&doc_ids)?;
    info!(count = doc_ids.len(), "deleted documents");

    for doc in &docs {
        if let Some(path) = doc.metadata.cover_image() {
            if let Err(e) = store.discard_cover(path) {
                warn!(id = %doc.id(), path = %path.display(), error = %e, "cover cleanup failed");
                result.add_message(CmdMessage::warning(format!(
                    "Could not remove cover image {}: {}",
                    path.display(),
                    e
                )));
            }
        }
    }

    for doc in &docs {
        result.add_message(CmdMessage::success(format!(
            "Document deleted ({}): {}",
            doc.id(),
            doc.metadata.name
        )));
    }
    Ok(result.with_affected_docs(docs.into_iter().map(|d| d.metadata).collect()))
}
