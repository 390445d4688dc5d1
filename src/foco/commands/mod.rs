//! # Command Layer
//!
//! One module per operation. Every command is a plain function over a
//! [`DocumentStore`](crate::store::DocumentStore) that performs a single unit
//! of work and returns a [`CmdResult`]; nothing here prints or exits.

use crate::config::FocoConfig;
use crate::listing::DocRow;
use crate::model::{Document, DocumentMetadata};

pub mod config;
pub mod cover;
pub mod create;
pub mod delete;
pub mod favorite;
pub mod helpers;
pub mod import;
pub mod init;
pub mod list;
pub mod rename;
pub mod save;
pub mod view;

pub use helpers::count_words;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Documents created or modified by the command, as stored afterwards
    pub affected_docs: Vec<DocumentMetadata>,
    pub listed_docs: Vec<DocRow>,
    pub viewed_docs: Vec<Document>,
    pub config: Option<FocoConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_docs(mut self, docs: Vec<DocumentMetadata>) -> Self {
        self.affected_docs = docs;
        self
    }

    pub fn with_listed_docs(mut self, rows: Vec<DocRow>) -> Self {
        self.listed_docs = rows;
        self
    }

    pub fn with_viewed_docs(mut self, docs: Vec<Document>) -> Self {
        self.viewed_docs = docs;
        self
    }

    pub fn with_config(mut self, config: FocoConfig) -> Self {
        self.config = Some(config);
        self
    }
}
