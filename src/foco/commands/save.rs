use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::format::working_time_label;
use crate::model::DocId;
use crate::store::DocumentStore;
use chrono::Utc;
use std::time::Duration;
use tracing::info;

use super::helpers::count_words;

/// Stores a writing session: new text, time spent writing it.
///
/// `worked` is added to the accumulated working time, the edition time
/// becomes now and the word count is recomputed from `text`.
pub fn run<S: DocumentStore>(
    store: &mut S,
    id: DocId,
    text: String,
    worked: Duration,
) -> Result<CmdResult> {
    let mut doc = store.get(id)?;
    doc.metadata.words = Some(count_words(&text));
    doc.metadata.add_working_time(worked);
    doc.metadata.last_edition = Some(Utc::now());
    doc.text = text;
    store.update(&doc)?;
    info!(%id, words = ?doc.metadata.words, worked_ms = worked.as_millis() as u64, "saved document");

    let total = doc.metadata.working_time().unwrap_or_default();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Document saved ({}): {} [{} total]",
        id,
        doc.metadata.name,
        working_time_label(total)
    )));
    result.affected_docs.push(doc.metadata);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn save_updates_text_and_counters() {
        let mut store = StoreFixture::new().with_document("Essay").store;
        let before = Utc::now();

        run(
            &mut store,
            DocId(1),
            "It was a dark and stormy night".into(),
            Duration::from_secs(300),
        )
        .unwrap();

        let doc = store.get(DocId(1)).unwrap();
        assert_eq!(doc.text, "It was a dark and stormy night");
        assert_eq!(doc.metadata.words, Some(7));
        assert_eq!(doc.metadata.working_time(), Some(Duration::from_secs(300)));
        assert!(doc.metadata.last_edition.unwrap() >= before);
    }

    #[test]
    fn working_time_accumulates_across_saves() {
        let mut store = StoreFixture::new().with_document("Essay").store;
        run(&mut store, DocId(1), "a".into(), Duration::from_secs(60)).unwrap();
        run(&mut store, DocId(1), "a b".into(), Duration::from_secs(120)).unwrap();
        run(&mut store, DocId(1), "".into(), Duration::ZERO).unwrap();

        let meta = store.get_metadata(DocId(1)).unwrap();
        assert_eq!(meta.working_time(), Some(Duration::from_secs(180)));
        assert_eq!(meta.words, Some(0));
    }

    #[test]
    fn unknown_document_fails() {
        let mut store = StoreFixture::new().store;
        assert!(run(&mut store, DocId(3), "x".into(), Duration::ZERO).is_err());
    }
}
