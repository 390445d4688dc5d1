use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Document;
use crate::store::DocumentStore;
use tracing::info;

use super::helpers::clean_name;

/// Creates an empty document. Words, working time and edition time stay unset
/// until the first save.
pub fn run<S: DocumentStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let name = clean_name(name)?;
    let id = store.insert(Document::new(name, String::new()))?;
    let metadata = store.get_metadata(id)?;
    info!(%id, name = %metadata.name, "created document");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Document created ({}): {}",
        id, metadata.name
    )));
    Ok(result.with_affected_docs(vec![metadata]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocId;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_blank_document() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "  Novel ").unwrap();

        let meta = &result.affected_docs[0];
        assert_eq!(meta.id, DocId(1));
        assert_eq!(meta.name, "Novel");
        assert_eq!(meta.words, None);
        assert_eq!(meta.working_time_ms, None);
        assert_eq!(meta.last_edition, None);
        assert!(!meta.favorite);
        assert!(meta.cover.is_none());
        assert_eq!(store.get(DocId(1)).unwrap().text, "");
    }

    #[test]
    fn rejects_blank_name() {
        let mut store = InMemoryStore::new();
        assert!(run(&mut store, "   ").is_err());
        assert!(store.list_metadata().unwrap().is_empty());
    }
}
