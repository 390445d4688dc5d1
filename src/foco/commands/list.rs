use crate::commands::CmdResult;
use crate::error::Result;
use crate::listing::{DocList, SortOrder};
use crate::model::DocId;
use crate::store::DocumentStore;

/// What to show in a document list.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub sort: Option<SortOrder>,
    pub filter: Option<String>,
    pub favorites_only: bool,
    /// Ids to mark as selected in the returned rows
    pub selected: Vec<DocId>,
}

pub fn run<S: DocumentStore>(
    store: &S,
    query: &ListQuery,
    edition_pattern: &str,
) -> Result<CmdResult> {
    let mut docs = store.list_metadata()?;
    if query.favorites_only {
        docs.retain(|m| m.favorite);
    }

    let mut list = DocList::new().with_edition_pattern(edition_pattern);
    list.set_sort(query.sort);
    list.set_documents(docs);
    list.set_filter(query.filter.as_deref());
    for id in &query.selected {
        list.select(*id);
    }

    Ok(CmdResult::default().with_listed_docs(list.rows()))
}
