use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
