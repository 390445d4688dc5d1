use crate::model::DocId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FocoError {
    #[error("Document not found: {0}")]
    DocumentNotFound(DocId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, FocoError>;
