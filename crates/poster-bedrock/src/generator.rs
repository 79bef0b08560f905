use std::future::Future;
use std::pin::Pin;

use poster_core::models::generation::{GeneratedContent, GenerationTransaction};

use crate::error::GenerationError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A completed generation call and what it produced.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub transaction: GenerationTransaction,
    pub content: GeneratedContent,
}

/// Turns free-text notes into structured poster content.
///
/// Methods return boxed futures for dyn compatibility.
pub trait ContentGenerator: Send + Sync {
    /// Identifier of the backing model, recorded on each transaction.
    fn model_id(&self) -> &str;

    fn generate<'a>(
        &'a self,
        notes: &'a str,
    ) -> BoxFuture<'a, Result<GenerationResult, GenerationError>>;
}
