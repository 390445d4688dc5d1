use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::DocId;
use crate::store::DocumentStore;

use super::helpers::documents_by_ids;

pub fn run<S: DocumentStore>(store: &S, ids: &[DocId]) -> Result<CmdResult> {
    let docs = documents_by_ids(store, ids)?;
    Ok(CmdResult::default().with_viewed_docs(docs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::save;
    use crate::store::memory::fixtures::StoreFixture;
    use std::time::Duration;

    #[test]
    fn returns_full_documents_in_request_order() {
        let mut store = StoreFixture::new().with_documents(2).store;
        save::run(&mut store, DocId(2), "second body".into(), Duration::ZERO).unwrap();

        let result = run(&store, &[DocId(2), DocId(1)]).unwrap();
        assert_eq!(result.viewed_docs.len(), 2);
        assert_eq!(result.viewed_docs[0].text, "second body");
        assert_eq!(result.viewed_docs[1].metadata.name, "Document 1");
    }
}
