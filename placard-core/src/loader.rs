//! Loading the document model from an explicit source.

use crate::document::Document;
use crate::error::Result;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where a document comes from: a file on disk or bytes already in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl DocumentSource {
    pub fn path(path: impl AsRef<Path>) -> Self {
        DocumentSource::Path(path.as_ref().to_path_buf())
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::Path(path) => write!(f, "{}", path.display()),
            DocumentSource::Bytes(bytes) => write!(f, "<{} bytes in memory>", bytes.len()),
        }
    }
}

impl From<PathBuf> for DocumentSource {
    fn from(path: PathBuf) -> Self {
        DocumentSource::Path(path)
    }
}

impl From<Vec<u8>> for DocumentSource {
    fn from(bytes: Vec<u8>) -> Self {
        DocumentSource::Bytes(bytes)
    }
}

/// Parse a JSON document model.
///
/// JSON has no NaN or infinity, so parsed bounds are always finite.
pub fn parse_document(bytes: &[u8]) -> Result<Document> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Load a document from `source`.
pub fn load_document(source: &DocumentSource) -> Result<Document> {
    let document = match source {
        DocumentSource::Path(path) => {
            let bytes = std::fs::read(path)?;
            parse_document(&bytes)?
        }
        DocumentSource::Bytes(bytes) => parse_document(bytes)?,
    };
    debug!(source = %source, pages = document.page_count(), "loaded document");
    Ok(document)
}
