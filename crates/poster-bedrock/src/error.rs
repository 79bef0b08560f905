use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no AWS credentials available: {0}")]
    MissingCredentials(String),

    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(String),

    #[error("prompt template error: {0}")]
    Template(#[from] tera::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("generation cancelled")]
    Cancelled,
}

impl GenerationError {
    /// Whether retrying the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GenerationError::Invocation(_)
                | GenerationError::ResponseParse(_)
                | GenerationError::SchemaViolation(_)
        )
    }
}
