//! # Document Listing
//!
//! [`DocList`] is the view model behind every document list: it keeps the full
//! set of documents, an optional sort order, an optional name filter and the
//! current selection, and produces ready-to-render [`DocRow`]s.
//!
//! Sorting always happens on the unfiltered set; the filter is then applied on
//! top, so clearing the filter restores the full sorted list without
//! re-sorting.
//!
//! The filter is stored lowercase and matches anywhere in the lowercased
//! document name. Rows carry the byte range of the match so a UI can
//! highlight it.

use crate::error::FocoError;
use crate::format::{
    edition_label, fold_case, highlight_range, words_label, working_time_label,
    DEFAULT_EDITION_PATTERN,
};
use crate::model::{CoverColor, DocId, DocumentMetadata, DEFAULT_COVER_COLOR};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Range;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Case-insensitive by name
    Name,
    /// Most recently edited first, never-edited last
    Edited,
    /// Most worked on first
    WorkingTime,
    /// Longest first
    Words,
    /// Favorites first, then by name
    Favorites,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Name,
        SortOrder::Edited,
        SortOrder::WorkingTime,
        SortOrder::Words,
        SortOrder::Favorites,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Name => "name",
            SortOrder::Edited => "edited",
            SortOrder::WorkingTime => "working-time",
            SortOrder::Words => "words",
            SortOrder::Favorites => "favorites",
        }
    }

    pub fn compare(&self, a: &DocumentMetadata, b: &DocumentMetadata) -> Ordering {
        let primary = match self {
            SortOrder::Name => by_name(a, b),
            // Option orders None first, so comparing b to a puts None last
            SortOrder::Edited => b.last_edition.cmp(&a.last_edition),
            SortOrder::WorkingTime => b.working_time_ms.cmp(&a.working_time_ms),
            SortOrder::Words => b.words.cmp(&a.words),
            SortOrder::Favorites => b.favorite.cmp(&a.favorite).then_with(|| by_name(a, b)),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

fn by_name(a: &DocumentMetadata, b: &DocumentMetadata) -> Ordering {
    fold_case(&a.name).cmp(&fold_case(&b.name))
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = FocoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        SortOrder::ALL
            .iter()
            .find(|order| order.as_str() == wanted)
            .copied()
            .ok_or_else(|| {
                let names: Vec<_> = SortOrder::ALL.iter().map(|o| o.as_str()).collect();
                FocoError::Api(format!(
                    "Unknown sort order: {} (expected one of: {})",
                    s,
                    names.join(", ")
                ))
            })
    }
}

/// What a row should paint behind the document name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverDisplay {
    Image(PathBuf),
    Color(CoverColor),
    Default(CoverColor),
}

impl CoverDisplay {
    pub fn of(doc: &DocumentMetadata) -> Self {
        use crate::model::Cover;
        match &doc.cover {
            Some(Cover::Image(path)) if !path.as_os_str().is_empty() => {
                CoverDisplay::Image(path.clone())
            }
            Some(Cover::Color(color)) => CoverDisplay::Color(*color),
            _ => CoverDisplay::Default(DEFAULT_COVER_COLOR),
        }
    }
}

/// A formatted list entry.
#[derive(Debug, Clone)]
pub struct DocRow {
    pub metadata: DocumentMetadata,
    pub highlight: Option<Range<usize>>,
    pub words_label: Option<String>,
    pub working_time_label: Option<String>,
    pub edited_label: Option<String>,
    pub favorite: bool,
    pub cover: CoverDisplay,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct DocList {
    docs: Vec<DocumentMetadata>,
    // indexes into `docs`
    visible: Vec<usize>,
    sort: Option<SortOrder>,
    filter: Option<String>,
    selection: BTreeSet<DocId>,
    edition_pattern: String,
}

impl Default for DocList {
    fn default() -> Self {
        Self::new()
    }
}

impl DocList {
    pub fn new() -> Self {
        Self {
            docs: Vec::new(),
            visible: Vec::new(),
            sort: None,
            filter: None,
            selection: BTreeSet::new(),
            edition_pattern: DEFAULT_EDITION_PATTERN.to_string(),
        }
    }

    pub fn with_edition_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.edition_pattern = pattern.into();
        self
    }

    pub fn set_documents(&mut self, docs: Vec<DocumentMetadata>) {
        self.docs = docs;
        self.sort_docs();
        self.apply_filter();
    }

    pub fn set_sort(&mut self, sort: Option<SortOrder>) {
        self.sort = sort;
        self.sort_docs();
        self.apply_filter();
    }

    pub fn sort(&self) -> Option<SortOrder> {
        self.sort
    }

    /// Sets the name filter. `None` and the empty string both clear it.
    pub fn set_filter(&mut self, filter: Option<&str>) {
        self.filter = filter.map(fold_case).filter(|f| !f.is_empty());
        self.apply_filter();
    }

    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    pub fn filter_text(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Visible documents in display order.
    pub fn documents(&self) -> impl Iterator<Item = &DocumentMetadata> {
        self.visible.iter().map(move |&i| &self.docs[i])
    }

    pub fn get(&self, position: usize) -> Option<&DocumentMetadata> {
        self.visible.get(position).map(|&i| &self.docs[i])
    }

    fn sort_docs(&mut self) {
        if let Some(order) = self.sort {
            self.docs.sort_by(|a, b| order.compare(a, b));
        }
    }

    fn apply_filter(&mut self) {
        self.visible = match &self.filter {
            Some(filter) => self
                .docs
                .iter()
                .enumerate()
                .filter(|(_, doc)| highlight_range(&doc.name, filter).is_some())
                .map(|(i, _)| i)
                .collect(),
            None => (0..self.docs.len()).collect(),
        };
    }

    // --- Selection ---

    pub fn select(&mut self, id: DocId) {
        self.selection.insert(id);
    }

    pub fn deselect(&mut self, id: DocId) {
        self.selection.remove(&id);
    }

    /// Returns the new selection state of `id`.
    pub fn toggle_selection(&mut self, id: DocId) -> bool {
        if self.selection.remove(&id) {
            false
        } else {
            self.selection.insert(id);
            true
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, id: DocId) -> bool {
        self.selection.contains(&id)
    }

    pub fn selected_ids(&self) -> Vec<DocId> {
        self.selection.iter().copied().collect()
    }

    // --- Rows ---

    pub fn rows(&self) -> Vec<DocRow> {
        self.documents().map(|doc| self.row(doc)).collect()
    }

    fn row(&self, doc: &DocumentMetadata) -> DocRow {
        DocRow {
            metadata: doc.clone(),
            highlight: self
                .filter
                .as_deref()
                .and_then(|f| highlight_range(&doc.name, f)),
            words_label: doc.words.map(words_label),
            working_time_label: doc.working_time().map(working_time_label),
            edited_label: doc
                .last_edition
                .map(|t| edition_label(t, &self.edition_pattern)),
            favorite: doc.favorite,
            cover: CoverDisplay::of(doc),
            selected: self.is_selected(doc.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Cover;
    use chrono::{TimeZone, Utc};
    use std::time::Duration;

    fn doc(id: u64, name: &str) -> DocumentMetadata {
        let mut m = DocumentMetadata::new(name.to_string());
        m.id = DocId(id);
        m
    }

    fn names(list: &DocList) -> Vec<String> {
        list.documents().map(|d| d.name.clone()).collect()
    }

    #[test]
    fn unsorted_keeps_insertion_order() {
        let mut list = DocList::new();
        list.set_documents(vec![doc(1, "b"), doc(2, "A"), doc(3, "c")]);
        assert_eq!(names(&list), vec!["b", "A", "c"]);
    }

    #[test]
    fn sorts_by_name_case_insensitive() {
        let mut list = DocList::new();
        list.set_documents(vec![doc(1, "beta"), doc(2, "Alpha"), doc(3, "gamma")]);
        list.set_sort(Some(SortOrder::Name));
        assert_eq!(names(&list), vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn sorts_by_edition_newest_first_never_edited_last() {
        let mut old = doc(1, "old");
        old.last_edition = Some(Utc.with_ymd_and_hms(2017, 1, 1, 0, 0, 0).unwrap());
        let mut new = doc(2, "new");
        new.last_edition = Some(Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap());
        let never = doc(3, "never");

        let mut list = DocList::new();
        list.set_sort(Some(SortOrder::Edited));
        list.set_documents(vec![never, old, new]);
        assert_eq!(names(&list), vec!["new", "old", "never"]);
    }

    #[test]
    fn sorts_favorites_first() {
        let mut fav = doc(3, "zeta");
        fav.favorite = true;
        let mut list = DocList::new();
        list.set_sort(Some(SortOrder::Favorites));
        list.set_documents(vec![doc(1, "beta"), fav, doc(2, "alpha")]);
        assert_eq!(names(&list), vec!["zeta", "alpha", "beta"]);
    }

    #[test]
    fn sorts_by_words_and_working_time() {
        let mut short = doc(1, "short");
        short.words = Some(10);
        short.add_working_time(Duration::from_secs(3_600));
        let mut long = doc(2, "long");
        long.words = Some(1_000);
        long.add_working_time(Duration::from_secs(60));

        let mut list = DocList::new();
        list.set_documents(vec![short, long]);
        list.set_sort(Some(SortOrder::Words));
        assert_eq!(names(&list), vec!["long", "short"]);
        list.set_sort(Some(SortOrder::WorkingTime));
        assert_eq!(names(&list), vec!["short", "long"]);
    }

    #[test]
    fn filter_matches_lowercased_name() {
        let mut list = DocList::new();
        list.set_documents(vec![doc(1, "My Novel"), doc(2, "Shopping"), doc(3, "NOVELLA")]);
        list.set_filter(Some("NoVeL"));

        assert!(list.has_filter());
        assert_eq!(list.filter_text(), Some("novel"));
        assert_eq!(names(&list), vec!["My Novel", "NOVELLA"]);

        let rows = list.rows();
        assert_eq!(rows[0].highlight, Some(3..8));
        assert_eq!(rows[1].highlight, Some(0..5));
    }

    #[test]
    fn filtered_rows_always_highlight() {
        let mut list = DocList::new();
        list.set_documents(vec![doc(1, "ΟΔΟΣ"), doc(2, "Straße")]);
        list.set_filter(Some("οδος"));
        let rows = list.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].highlight, Some(0.."ΟΔΟΣ".len()));
    }

    #[test]
    fn ties_break_by_id() {
        let mut list = DocList::new();
        list.set_documents(vec![doc(3, "Draft"), doc(2, "draft"), doc(1, "Draft")]);
        list.set_sort(Some(SortOrder::Name));
        let ids: Vec<u64> = list.documents().map(|d| d.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        list.set_documents(vec![doc(5, "never a"), doc(4, "never b")]);
        list.set_sort(Some(SortOrder::Edited));
        let ids: Vec<u64> = list.documents().map(|d| d.id.0).collect();
        assert_eq!(ids, vec![4, 5]);
    }

    #[test]
    fn empty_filter_clears() {
        let mut list = DocList::new();
        list.set_documents(vec![doc(1, "a"), doc(2, "b")]);
        list.set_filter(Some("a"));
        assert_eq!(list.len(), 1);
        list.set_filter(Some(""));
        assert!(!list.has_filter());
        assert_eq!(list.len(), 2);
        assert!(list.rows().iter().all(|r| r.highlight.is_none()));
    }

    #[test]
    fn filter_survives_resort() {
        let mut list = DocList::new();
        list.set_documents(vec![doc(1, "draft b"), doc(2, "notes"), doc(3, "Draft A")]);
        list.set_filter(Some("draft"));
        list.set_sort(Some(SortOrder::Name));
        assert_eq!(names(&list), vec!["Draft A", "draft b"]);
    }

    #[test]
    fn rows_hide_unset_labels() {
        let mut list = DocList::new();
        list.set_documents(vec![doc(1, "fresh")]);
        let row = &list.rows()[0];
        assert_eq!(row.words_label, None);
        assert_eq!(row.working_time_label, None);
        assert_eq!(row.edited_label, None);
        assert!(!row.favorite);
        assert_eq!(row.cover, CoverDisplay::Default(DEFAULT_COVER_COLOR));
    }

    #[test]
    fn rows_format_labels() {
        let mut written = doc(1, "written");
        written.words = Some(1);
        written.add_working_time(Duration::from_secs(2 * 3_600));
        written.last_edition = Some(Utc.with_ymd_and_hms(2017, 6, 3, 9, 5, 0).unwrap());
        written.favorite = true;
        written.cover = Some(Cover::Color(CoverColor(0xFF00_9688)));

        let mut list = DocList::new().with_edition_pattern("%Y");
        list.set_documents(vec![written]);
        let row = &list.rows()[0];
        assert_eq!(row.words_label.as_deref(), Some("1 word"));
        assert_eq!(row.working_time_label.as_deref(), Some("2 hours"));
        assert!(row.edited_label.is_some());
        assert!(row.favorite);
        assert_eq!(row.cover, CoverDisplay::Color(CoverColor(0xFF00_9688)));
    }

    #[test]
    fn image_cover_wins_display() {
        let mut pictured = doc(1, "pictured");
        pictured.cover = Some(Cover::Image(PathBuf::from("covers/a.png")));
        assert_eq!(
            CoverDisplay::of(&pictured),
            CoverDisplay::Image(PathBuf::from("covers/a.png"))
        );

        let mut blank = doc(2, "blank");
        blank.cover = Some(Cover::Image(PathBuf::new()));
        assert_eq!(
            CoverDisplay::of(&blank),
            CoverDisplay::Default(DEFAULT_COVER_COLOR)
        );
    }

    #[test]
    fn selection_marks_rows() {
        let mut list = DocList::new();
        list.set_documents(vec![doc(1, "a"), doc(2, "b")]);
        list.select(DocId(2));
        assert!(list.toggle_selection(DocId(1)));
        assert!(!list.toggle_selection(DocId(1)));

        let rows = list.rows();
        assert!(!rows[0].selected);
        assert!(rows[1].selected);
        assert_eq!(list.selected_ids(), vec![DocId(2)]);

        list.deselect(DocId(2));
        list.select(DocId(1));
        list.clear_selection();
        assert!(list.selected_ids().is_empty());
    }

    #[test]
    fn parses_sort_orders() {
        assert_eq!("name".parse::<SortOrder>().unwrap(), SortOrder::Name);
        assert_eq!(
            "working_time".parse::<SortOrder>().unwrap(),
            SortOrder::WorkingTime
        );
        assert_eq!("EDITED".parse::<SortOrder>().unwrap(), SortOrder::Edited);
        assert!("size".parse::<SortOrder>().is_err());
    }

    #[test]
    fn positional_access() {
        let mut list = DocList::new();
        list.set_documents(vec![doc(1, "a"), doc(2, "b")]);
        list.set_filter(Some("b"));
        assert_eq!(list.get(0).map(|d| d.id), Some(DocId(2)));
        assert!(list.get(1).is_none());
        assert!(!list.is_empty());
    }
}
