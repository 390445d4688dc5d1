use crate::error::{FocoError, Result};
use crate::model::{DocId, Document};
use crate::store::DocumentStore;
use std::collections::HashSet;

/// Number of whitespace separated words in `text`.
pub fn count_words(text: &str) -> u32 {
    u32::try_from(text.split_whitespace().count()).unwrap_or(u32::MAX)
}

/// Drops repeated ids, keeping first-seen order.
pub fn unique_ids(ids: &[DocId]) -> Vec<DocId> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

/// Loads every requested document up front so a bad id fails the whole
/// command before anything is written.
pub fn documents_by_ids<S: DocumentStore>(store: &S, ids: &[DocId]) -> Result<Vec<Document>> {
    if ids.is_empty() {
        return Err(FocoError::Api("No documents given".to_string()));
    }
    unique_ids(ids).into_iter().map(|id| store.get(id)).collect()
}

/// Trims a document name, rejecting blank ones.
pub fn clean_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FocoError::Api("Document name cannot be empty".into()));
    }
    Ok(trimmed.to_string())
}
