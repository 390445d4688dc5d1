use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FocoError, Result};
use crate::model::Document;
use crate::store::DocumentStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::helpers::count_words;

/// Imports text files as documents.
///
/// Directories are scanned (non-recursively) for files whose extension is in
/// `import_exts`. A file becomes a document named after its stem, with its
/// whole content as text and the word count already computed. Files that
/// cannot be read are reported as warnings and skipped.
pub fn run<S: DocumentStore>(
    store: &mut S,
    paths: &[PathBuf],
    import_exts: &[String],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for path in paths {
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(path)
                .map_err(FocoError::Io)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && has_import_ext(p, import_exts))
                .collect();
            entries.sort();
            for file in entries {
                import_one(store, &file, &mut result)?;
            }
        } else if path.is_file() {
            import_one(store, path, &mut result)?;
        } else {
            result.add_message(CmdMessage::warning(format!(
                "Path not found: {}",
                path.display()
            )));
        }
    }

    result.add_message(CmdMessage::success(format!(
        "Total imported: {}",
        result.affected_docs.len()
    )));
    Ok(result)
}

fn has_import_ext(path: &Path, import_exts: &[String]) -> bool {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .is_some_and(|ext| import_exts.iter().any(|e| e.eq_ignore_ascii_case(&ext)))
}

fn import_one<S: DocumentStore>(store: &mut S, path: &Path, result: &mut CmdResult) -> Result<()> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "skipping unreadable file");
            result.add_message(CmdMessage::warning(format!(
                "Failed to import {}: {}",
                path.display(),
                e
            )));
            return Ok(());
        }
    };

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Untitled".to_string());

    let mut doc = Document::new(name, text);
    doc.metadata.words = Some(count_words(&doc.text));
    let id = store.insert(doc)?;
    let metadata = store.get_metadata(id)?;
    debug!(%id, path = %path.display(), "imported document");

    result.add_message(CmdMessage::info(format!(
        "Imported ({}): {}",
        id,
        path.display()
    )));
    result.affected_docs.push(metadata);
    Ok(())
}
