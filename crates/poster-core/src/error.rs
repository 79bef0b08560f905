use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("unknown layout: {0}")]
    UnknownLayout(String),

    #[error("unknown text field: {0}")]
    UnknownField(String),
}

/// Why an untrusted SVG fragment was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SanitizeError {
    #[error("markup is not well-formed: {0}")]
    Malformed(String),

    #[error("forbidden element <{0}>")]
    ForbiddenElement(String),

    #[error("root element must be <svg>, found <{0}>")]
    UnexpectedRoot(String),

    #[error("markup nests deeper than {0} levels")]
    TooDeep(usize),
}
