use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF rasterization failed: {0}")]
    Rasterize(String),

    #[error("slide deck generation failed: {0}")]
    Deck(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
