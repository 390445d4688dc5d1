use super::DocumentStore;
use crate::error::{FocoError, Result};
use crate::model::{DocId, Document, DocumentMetadata};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Non-persistent store used by tests and embedders.
///
/// Cover images are not copied; `import_cover` hands out a synthetic managed
/// path and remembers it so tests can assert on cleanup.
#[derive(Default)]
pub struct InMemoryStore {
    documents: BTreeMap<DocId, Document>,
    next_id: u64,
    covers: HashSet<PathBuf>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_cover(&self, path: &Path) -> bool {
        self.covers.contains(path)
    }

    pub fn cover_count(&self) -> usize {
        self.covers.len()
    }
}

impl DocumentStore for InMemoryStore {
    fn insert(&mut self, mut doc: Document) -> Result<DocId> {
        self.next_id += 1;
        let id = DocId(self.next_id);
        doc.metadata.id = id;
        self.documents.insert(id, doc);
        Ok(id)
    }

    fn get(&self, id: DocId) -> Result<Document> {
        self.documents
            .get(&id)
            .cloned()
            .ok_or(FocoError::DocumentNotFound(id))
    }

    fn get_metadata(&self, id: DocId) -> Result<DocumentMetadata> {
        self.get(id).map(|doc| doc.metadata)
    }

    fn list_metadata(&self) -> Result<Vec<DocumentMetadata>> {
        Ok(self
            .documents
            .values()
            .map(|doc| doc.metadata.clone())
            .collect())
    }

    fn update(&mut self, doc: &Document) -> Result<()> {
        match self.documents.get_mut(&doc.id()) {
            Some(existing) => {
                *existing = doc.clone();
                Ok(())
            }
            None => Err(FocoError::DocumentNotFound(doc.id())),
        }
    }

    fn delete(&mut self, ids: &[DocId]) -> Result<()> {
        if let Some(missing) = ids.iter().find(|id| !self.documents.contains_key(*id)) {
            return Err(FocoError::DocumentNotFound(*missing));
        }
        for id in ids {
            self.documents.remove(id);
        }
        Ok(())
    }

    fn import_cover(&mut self, source: &Path) -> Result<PathBuf> {
        let ext = source
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let path = PathBuf::from(format!("memory/covers/cover-{}{}", Uuid::new_v4(), ext));
        self.covers.insert(path.clone());
        Ok(path)
    }

    fn discard_cover(&mut self, path: &Path) -> Result<()> {
        self.covers.remove(path);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Cover, CoverColor};
    use chrono::{DateTime, Utc};
    use std::time::Duration;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_documents(mut self, count: usize) -> Self {
            for i in 0..count {
                let doc = Document::new(format!("Document {}", i + 1), String::new());
                self.store.insert(doc).unwrap();
            }
            self
        }

        pub fn with_document(mut self, name: &str) -> Self {
            self.store
                .insert(Document::new(name.to_string(), String::new()))
                .unwrap();
            self
        }

        pub fn with_written_document(
            mut self,
            name: &str,
            words: u32,
            worked: Duration,
            edited: DateTime<Utc>,
        ) -> Self {
            let mut doc = Document::new(name.to_string(), String::new());
            doc.metadata.words = Some(words);
            doc.metadata.add_working_time(worked);
            doc.metadata.last_edition = Some(edited);
            self.store.insert(doc).unwrap();
            self
        }

        pub fn with_favorite(mut self, name: &str) -> Self {
            let mut doc = Document::new(name.to_string(), String::new());
            doc.metadata.favorite = true;
            self.store.insert(doc).unwrap();
            self
        }

        pub fn with_colored(mut self, name: &str, color: CoverColor) -> Self {
            let mut doc = Document::new(name.to_string(), String::new());
            doc.metadata.cover = Some(Cover::Color(color));
            self.store.insert(doc).unwrap();
            self
        }

        pub fn with_cover_image(mut self, name: &str) -> Self {
            let path = self.store.import_cover(Path::new("cover.png")).unwrap();
            let mut doc = Document::new(name.to_string(), String::new());
            doc.metadata.cover = Some(Cover::Image(path));
            self.store.insert(doc).unwrap();
            self
        }
    }
}
