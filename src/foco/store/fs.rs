use super::DocumentStore;
use crate::error::{FocoError, Result};
use crate::model::{DocId, Document, DocumentMetadata};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

const DATA_FILENAME: &str = "data.json";
const COVERS_DIRNAME: &str = "covers";

/// Contents of `data.json`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreIndex {
    next_id: u64,
    documents: Vec<DocumentMetadata>,
}

impl StoreIndex {
    fn position(&self, id: DocId) -> Option<usize> {
        self.documents.iter().position(|m| m.id == id)
    }

    fn allocate_id(&mut self) -> DocId {
        // next_id is 0 in a freshly created index
        let highest = self.documents.iter().map(|m| m.id.0).max().unwrap_or(0);
        let id = self.next_id.max(highest + 1).max(1);
        self.next_id = id + 1;
        DocId(id)
    }
}

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn covers_dir(&self) -> PathBuf {
        self.root.join(COVERS_DIRNAME)
    }

    fn text_path(&self, id: DocId) -> PathBuf {
        self.root.join(format!("doc-{}.txt", id))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(FocoError::Io)?;
        }
        Ok(())
    }

    fn load_index(&self) -> Result<StoreIndex> {
        let data_file = self.root.join(DATA_FILENAME);
        if !data_file.exists() {
            return Ok(StoreIndex::default());
        }
        let content = fs::read_to_string(data_file).map_err(FocoError::Io)?;
        let index: StoreIndex =
            serde_json::from_str(&content).map_err(FocoError::Serialization)?;
        Ok(index)
    }

    fn save_index(&self, index: &StoreIndex) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let data_file = self.root.join(DATA_FILENAME);
        let content = serde_json::to_string_pretty(index).map_err(FocoError::Serialization)?;
        fs::write(data_file, content).map_err(FocoError::Io)?;
        Ok(())
    }

    fn read_text(&self, id: DocId) -> Result<String> {
        match fs::read_to_string(self.text_path(id)) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(FocoError::Io(e)),
        }
    }

    fn write_text(&self, id: DocId, text: &str) -> Result<()> {
        fs::write(self.text_path(id), text).map_err(FocoError::Io)
    }
}

impl DocumentStore for FileStore {
    fn insert(&mut self, mut doc: Document) -> Result<DocId> {
        self.ensure_dir(&self.root)?;
        let mut index = self.load_index()?;
        let id = index.allocate_id();
        doc.metadata.id = id;

        // text before metadata
        self.write_text(id, &doc.text)?;
        index.documents.push(doc.metadata);
        self.save_index(&index)?;

        debug!(%id, root = %self.root.display(), "inserted document");
        Ok(id)
    }

    fn get(&self, id: DocId) -> Result<Document> {
        let metadata = self.get_metadata(id)?;
        let text = self.read_text(id)?;
        Ok(Document { metadata, text })
    }

    fn get_metadata(&self, id: DocId) -> Result<DocumentMetadata> {
        let index = self.load_index()?;
        index
            .documents
            .into_iter()
            .find(|m| m.id == id)
            .ok_or(FocoError::DocumentNotFound(id))
    }

    fn list_metadata(&self) -> Result<Vec<DocumentMetadata>> {
        Ok(self.load_index()?.documents)
    }

    fn update(&mut self, doc: &Document) -> Result<()> {
        let mut index = self.load_index()?;
        let pos = index
            .position(doc.id())
            .ok_or(FocoError::DocumentNotFound(doc.id()))?;

        self.write_text(doc.id(), &doc.text)?;
        index.documents[pos] = doc.metadata.clone();
        self.save_index(&index)?;

        debug!(id = %doc.id(), "updated document");
        Ok(())
    }

    fn delete(&mut self, ids: &[DocId]) -> Result<()> {
        let mut index = self.load_index()?;
        if let Some(missing) = ids.iter().find(|id| index.position(**id).is_none()) {
            return Err(FocoError::DocumentNotFound(*missing));
        }

        index.documents.retain(|m| !ids.contains(&m.id));
        self.save_index(&index)?;

        for id in ids {
            match fs::remove_file(self.text_path(*id)) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => warn!(%id, error = %e, "could not remove document text"),
            }
        }

        debug!(count = ids.len(), "deleted documents");
        Ok(())
    }

    fn import_cover(&mut self, source: &Path) -> Result<PathBuf> {
        if !source.is_file() {
            return Err(FocoError::Api(format!(
                "Cover image not found: {}",
                source.display()
            )));
        }

        let covers = self.covers_dir();
        self.ensure_dir(&covers)?;

        let file_name = match source.extension() {
            Some(ext) => format!("cover-{}.{}", Uuid::new_v4(), ext.to_string_lossy()),
            None => format!("cover-{}", Uuid::new_v4()),
        };
        let target = covers.join(file_name);
        fs::copy(source, &target).map_err(FocoError::Io)?;

        debug!(from = %source.display(), to = %target.display(), "imported cover image");
        Ok(target)
    }

    fn discard_cover(&mut self, path: &Path) -> Result<()> {
        if !path.starts_with(self.covers_dir()) {
            debug!(path = %path.display(), "cover is not store-managed, leaving it in place");
            return Ok(());
        }

        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FocoError::Io(e)),
        }
    }
}
