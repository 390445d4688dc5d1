//! # Storage Layer
//!
//! The [`DocumentStore`] trait is the single seam between foco and persistence.
//! Business logic in `commands/` only ever talks to this trait.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Metadata for every document lives in `data.json`
//!   - Document text lives in individual files: `doc-{id}.txt`
//!   - Cover images are copied into `covers/`
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <root>/
//! ├── data.json               # next id + metadata for all documents
//! ├── doc-{id}.txt            # text bodies
//! ├── covers/cover-{uuid}.png # managed cover images
//! └── config.json             # FocoConfig
//! ```
//!
//! Listing reads `data.json` only, never the text bodies.

use crate::error::Result;
use crate::model::{DocId, Document, DocumentMetadata};
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

/// Abstract interface for document storage.
///
/// Each call is one self-contained unit of work; implementations do not
/// coordinate across calls.
pub trait DocumentStore {
    /// Insert a new document and return the id assigned to it.
    /// The incoming `metadata.id` is ignored.
    fn insert(&mut self, doc: Document) -> Result<DocId>;

    /// Get a full document (metadata and text)
    fn get(&self, id: DocId) -> Result<Document>;

    /// Get a document's metadata without reading its text
    fn get_metadata(&self, id: DocId) -> Result<DocumentMetadata>;

    /// List metadata of every document, in no particular order
    fn list_metadata(&self) -> Result<Vec<DocumentMetadata>>;

    /// Replace an existing document
    fn update(&mut self, doc: &Document) -> Result<()>;

    /// Delete documents. Fails without removing anything if an id is unknown.
    fn delete(&mut self, ids: &[DocId]) -> Result<()>;

    /// Copy an image into store-managed cover storage and return the managed path.
    fn import_cover(&mut self, source: &Path) -> Result<PathBuf>;

    /// Remove a managed cover image. Missing files are not an error.
    fn discard_cover(&mut self, path: &Path) -> Result<()>;
}
