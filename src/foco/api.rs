//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every foco operation, whatever the UI.
//!
//! It:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (id strings and ranges into [`DocId`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints and holds no business logic.
//!
//! `FocoApi<S: DocumentStore>` is generic over the storage backend:
//! `FocoApi<FileStore>` in production, `FocoApi<InMemoryStore>` in tests.

use crate::commands;
use crate::config::FocoConfig;
use crate::error::{FocoError, Result};
use crate::model::{CoverColor, DocId};
use crate::store::DocumentStore;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub struct FocoApi<S: DocumentStore> {
    store: S,
    root: PathBuf,
    config: FocoConfig,
}

impl<S: DocumentStore> FocoApi<S> {
    pub fn new(store: S, root: PathBuf, config: FocoConfig) -> Self {
        Self {
            store,
            root,
            config,
        }
    }

    pub fn create_document(&mut self, name: &str) -> Result<CmdResult> {
        commands::create::run(&mut self.store, name)
    }

    pub fn list_documents(&self, mut query: ListQuery) -> Result<CmdResult> {
        if query.sort.is_none() {
            query.sort = Some(self.config.default_sort);
        }
        commands::list::run(&self.store, &query, &self.config.edition_time_pattern)
    }

    pub fn view_documents<I: AsRef<str>>(&self, ids: &[I]) -> Result<CmdResult> {
        let ids = parse_ids(ids)?;
        commands::view::run(&self.store, &ids)
    }

    pub fn delete_documents<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        let ids = parse_ids(ids)?;
        commands::delete::run(&mut self.store, &ids)
    }

    pub fn toggle_favorite<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        let ids = parse_ids(ids)?;
        commands::favorite::toggle(&mut self.store, &ids)
    }

    pub fn set_cover_color(&mut self, id: &str, color: &str) -> Result<CmdResult> {
        let id: DocId = id.parse()?;
        let color: CoverColor = color.parse()?;
        commands::cover::set_color(&mut self.store, id, color)
    }

    pub fn set_cover_image(&mut self, id: &str, image: &Path) -> Result<CmdResult> {
        let id: DocId = id.parse()?;
        commands::cover::set_image(&mut self.store, id, image)
    }

    pub fn clear_cover(&mut self, id: &str) -> Result<CmdResult> {
        let id: DocId = id.parse()?;
        commands::cover::clear(&mut self.store, id)
    }

    pub fn rename_document(&mut self, id: &str, name: &str) -> Result<CmdResult> {
        let id: DocId = id.parse()?;
        commands::rename::run(&mut self.store, id, name)
    }

    pub fn save_document(&mut self, id: &str, text: String, worked: Duration) -> Result<CmdResult> {
        let id: DocId = id.parse()?;
        commands::save::run(&mut self.store, id, text, worked)
    }

    pub fn import_documents(&mut self, paths: &[PathBuf]) -> Result<CmdResult> {
        commands::import::run(&mut self.store, paths, &self.config.import_extensions)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.root, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn init(&self) -> Result<CmdResult> {
        commands::init::run(&self.root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Widest range a single `a-b` argument may expand to.
pub const MAX_RANGE_LEN: u64 = 10_000;

/// Parses id arguments. Each may be a single id (`3`) or an inclusive
/// range (`3-5`) spanning at most [`MAX_RANGE_LEN`] ids.
pub fn parse_ids<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DocId>> {
    let mut ids = Vec::new();
    for input in inputs {
        ids.extend(parse_id_or_range(input.as_ref())?);
    }
    if ids.is_empty() {
        return Err(FocoError::Api("No document ids given".to_string()));
    }
    Ok(ids)
}

fn parse_id_or_range(s: &str) -> Result<Vec<DocId>> {
    let s = s.trim();
    match s.split_once('-') {
        Some((start, end)) if !start.is_empty() => {
            let start: DocId = start.parse()?;
            let end: DocId = end.parse()?;
            if start > end {
                return Err(FocoError::Api(format!(
                    "Invalid range: start ({}) must be <= end ({})",
                    start, end
                )));
            }
            if end.0 - start.0 >= MAX_RANGE_LEN {
                return Err(FocoError::Api(format!(
                    "Range {}-{} is too wide (at most {} ids)",
                    start, end, MAX_RANGE_LEN
                )));
            }
            Ok((start.0..=end.0).map(DocId).collect())
        }
        _ => Ok(vec![s.parse()?]),
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::ListQuery;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
