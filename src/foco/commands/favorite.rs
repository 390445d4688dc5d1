use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::DocId;
use crate::store::DocumentStore;
use tracing::debug;

use super::helpers::documents_by_ids;

/// Flips the favorite flag of each document, based on its stored state.
pub fn toggle<S: DocumentStore>(store: &mut S, ids: &[DocId]) -> Result<CmdResult> {
    let docs = documents_by_ids(store, ids)?;
    let mut result = CmdResult::default();

    for mut doc in docs {
        doc.metadata.favorite = !doc.metadata.favorite;
        store.update(&doc)?;
        debug!(id = %doc.id(), favorite = doc.metadata.favorite, "toggled favorite");

        let verb = if doc.metadata.favorite {
            "marked as favorite"
        } else {
            "removed from favorites"
        };
        result.add_message(CmdMessage::success(format!(
            "Document {} ({}): {}",
            verb,
            doc.id(),
            doc.metadata.name
        )));
        result.affected_docs.push(doc.metadata);
    }

    Ok(result)
}
