use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::DocId;
use crate::store::DocumentStore;
use tracing::debug;

use super::helpers::clean_name;

pub fn run<S: DocumentStore>(store: &mut S, id: DocId, name: &str) -> Result<CmdResult> {
    let name = clean_name(name)?;
    let mut doc = store.get(id)?;
    let previous = std::mem::replace(&mut doc.metadata.name, name);
    store.update(&doc)?;
    debug!(%id, from = %previous, to = %doc.metadata.name, "renamed document");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Document renamed ({}): {} -> {}",
        id, previous, doc.metadata.name
    )));
    result.affected_docs.push(doc.metadata);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn renames_document() {
        let mut store = StoreFixture::new().with_document("Draft").store;
        run(&mut store, DocId(1), "Final").unwrap();
        assert_eq!(store.get_metadata(DocId(1)).unwrap().name, "Final");
    }

    #[test]
    fn rename_does_not_count_as_edit() {
        let mut store = StoreFixture::new().with_document("Draft").store;
        run(&mut store, DocId(1), "Final").unwrap();
        assert_eq!(store.get_metadata(DocId(1)).unwrap().last_edition, None);
    }

    #[test]
    fn rejects_blank_name() {
        let mut store = StoreFixture::new().with_document("Draft").store;
        assert!(run(&mut store, DocId(1), "").is_err());
        assert_eq!(store.get_metadata(DocId(1)).unwrap().name, "Draft");
    }
}
