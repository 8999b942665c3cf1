use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid document model: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid bounds on page {page}: {reason}")]
    InvalidBounds { page: usize, reason: String },

    #[error("Invalid page number: {0}")]
    InvalidPageNumber(usize),

    #[error("Drawing error: {0}")]
    Drawing(String),
}

pub type Result<T> = std::result::Result<T, PlacardError>;
