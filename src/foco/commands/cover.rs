use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Cover, CoverColor, DocId, Document};
use crate::store::DocumentStore;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Gives a document a solid color cover, dropping any cover image.
pub fn set_color<S: DocumentStore>(store: &mut S, id: DocId, color: CoverColor) -> Result<CmdResult> {
    let mut doc = store.get(id)?;
    let mut result = CmdResult::default();

    let previous = previous_image(&doc);
    doc.metadata.cover = Some(Cover::Color(color));
    store.update(&doc)?;
    debug!(%id, %color, "set cover color");
    discard_previous_image(store, id, previous, &mut result);

    result.add_message(CmdMessage::success(format!(
        "Cover color set ({}): {} {}",
        id, doc.metadata.name, color
    )));
    result.affected_docs.push(doc.metadata);
    Ok(result)
}

/// Copies `source` into the store and uses it as the document cover.
pub fn set_image<S: DocumentStore>(store: &mut S, id: DocId, source: &Path) -> Result<CmdResult> {
    let mut doc = store.get(id)?;
    let managed = store.import_cover(source)?;
    let mut result = CmdResult::default();

    let previous = previous_image(&doc);
    doc.metadata.cover = Some(Cover::Image(managed.clone()));
    if let Err(e) = store.update(&doc) {
        // the new copy is orphaned if the update did not land
        if let Err(cleanup) = store.discard_cover(&managed) {
            warn!(%id, path = %managed.display(), error = %cleanup, "cover rollback failed");
        }
        return Err(e);
    }
    debug!(%id, path = %managed.display(), "set cover image");
    discard_previous_image(store, id, previous, &mut result);

    result.add_message(CmdMessage::success(format!(
        "Cover image set ({}): {}",
        id, doc.metadata.name
    )));
    result.affected_docs.push(doc.metadata);
    Ok(result)
}

/// Removes any cover, falling back to the default color.
pub fn clear<S: DocumentStore>(store: &mut S, id: DocId) -> Result<CmdResult> {
    let mut doc = store.get(id)?;
    let mut result = CmdResult::default();

    let previous = previous_image(&doc);
    doc.metadata.cover = None;
    store.update(&doc)?;
    discard_previous_image(store, id, previous, &mut result);

    result.add_message(CmdMessage::success(format!(
        "Cover removed ({}): {}",
        id, doc.metadata.name
    )));
    result.affected_docs.push(doc.metadata);
    Ok(result)
}

fn previous_image(doc: &Document) -> Option<PathBuf> {
    doc.metadata.cover_image().cloned()
}

/// Runs only once the document no longer points at `previous`.
fn discard_previous_image<S: DocumentStore>(
    store: &mut S,
    id: DocId,
    previous: Option<PathBuf>,
    result: &mut CmdResult,
) {
    if let Some(path) = previous {
        if let Err(e) = store.discard_cover(&path) {
            warn!(%id, path = %path.display(), error = %e, "cover cleanup failed");
            result.add_message(CmdMessage::warning(format!(
                "Could not remove previous cover image {}: {}",
                path.display(),
                e
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FocoError;
    use crate::model::DocumentMetadata;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    const TEAL: CoverColor = CoverColor(0xFF00_9688);

    /// Store whose updates always fail, to check nothing is cleaned up early.
    struct ReadOnlyStore(InMemoryStore);

    impl DocumentStore for ReadOnlyStore {
        fn insert(&mut self, doc: Document) -> Result<DocId> {
            self.0.insert(doc)
        }
        fn get(&self, id: DocId) -> Result<Document> {
            self.0.get(id)
        }
        fn get_metadata(&self, id: DocId) -> Result<DocumentMetadata> {
            self.0.get_metadata(id)
        }
        fn list_metadata(&self) -> Result<Vec<DocumentMetadata>> {
            self.0.list_metadata()
        }
        fn update(&mut self, _doc: &Document) -> Result<()> {
            Err(FocoError::Store("read only".into()))
        }
        fn delete(&mut self, ids: &[DocId]) -> Result<()> {
            self.0.delete(ids)
        }
        fn import_cover(&mut self, source: &Path) -> Result<PathBuf> {
            self.0.import_cover(source)
        }
        fn discard_cover(&mut self, path: &Path) -> Result<()> {
            self.0.discard_cover(path)
        }
    }

    #[test]
    fn color_replaces_image() {
        let mut store = StoreFixture::new().with_cover_image("Pictured").store;
        let old = store.get_metadata(DocId(1)).unwrap().cover_image().cloned().unwrap();

        set_color(&mut store, DocId(1), TEAL).unwrap();

        let meta = store.get_metadata(DocId(1)).unwrap();
        assert_eq!(meta.cover, Some(Cover::Color(TEAL)));
        assert!(!store.has_cover(&old));
    }

    #[test]
    fn image_replaces_color() {
        let mut store = StoreFixture::new().with_colored("Colored", TEAL).store;
        set_image(&mut store, DocId(1), Path::new("/pictures/sea.png")).unwrap();

        let meta = store.get_metadata(DocId(1)).unwrap();
        let path = meta.cover_image().cloned().unwrap();
        assert!(store.has_cover(&path));
        assert!(!matches!(meta.cover, Some(Cover::Color(_))));
    }

    #[test]
    fn new_image_discards_old_image() {
        let mut store = StoreFixture::new().with_cover_image("Pictured").store;
        set_image(&mut store, DocId(1), Path::new("second.png")).unwrap();
        assert_eq!(store.cover_count(), 1);
        set_image(&mut store, DocId(1), Path::new("third.png")).unwrap();
        assert_eq!(store.cover_count(), 1);
    }

    #[test]
    fn clear_removes_everything() {
        let mut store = StoreFixture::new().with_cover_image("Pictured").store;
        clear(&mut store, DocId(1)).unwrap();
        assert!(store.get_metadata(DocId(1)).unwrap().cover.is_none());
        assert_eq!(store.cover_count(), 0);
    }

    #[test]
    fn unknown_document_imports_nothing() {
        let mut store = StoreFixture::new().store;
        assert!(set_image(&mut store, DocId(1), Path::new("x.png")).is_err());
        assert_eq!(store.cover_count(), 0);
    }

    #[test]
    fn failed_update_keeps_previous_image() {
        let mut store = ReadOnlyStore(StoreFixture::new().with_cover_image("Pictured").store);
        let old = store.get_metadata(DocId(1)).unwrap().cover_image().cloned().unwrap();

        assert!(set_color(&mut store, DocId(1), TEAL).is_err());
        assert!(clear(&mut store, DocId(1)).is_err());
        assert!(set_image(&mut store, DocId(1), Path::new("new.png")).is_err());

        assert!(store.0.has_cover(&old));
        assert_eq!(store.0.cover_count(), 1);
        assert_eq!(store.get_metadata(DocId(1)).unwrap().cover_image(), Some(&old));
    }
}
