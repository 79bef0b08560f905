use poster_bedrock::error::GenerationError;
use poster_export::error::ExportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a generation request is already in flight")]
    GenerationInFlight,

    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("the document has no chart")]
    NoChart,

    #[error("data point {index} out of range (chart has {len})")]
    PointOutOfRange { index: usize, len: usize },

    #[error("data point value must be finite, got {0}")]
    NonFiniteValue(f64),

    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("background task failed: {0}")]
    Task(String),
}
