//! The editing session: one document store plus the background work that
//! feeds it (content generation) or reads from it (export).

use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use poster_bedrock::error::GenerationError;
use poster_bedrock::generator::ContentGenerator;
use poster_core::models::generation::GenerationTransaction;
use poster_export::deck::{DeckBuilder, export_deck};
use poster_export::page::ExportArtifact;
use poster_export::raster::{Rasterizer, export_pdf};
use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tracing::{info, warn};

use crate::error::StoreError;
use crate::store::DocumentStore;

pub struct EditingSession {
    store: Arc<Mutex<DocumentStore>>,
    /// `None` when the startup credential check failed.
    generator: Option<Arc<dyn ContentGenerator>>,
    pending: StdMutex<Option<AbortHandle>>,
}

impl EditingSession {
    pub fn new(store: DocumentStore, generator: Option<Arc<dyn ContentGenerator>>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            generator,
            pending: StdMutex::new(None),
        }
    }

    pub fn store(&self) -> Arc<Mutex<DocumentStore>> {
        Arc::clone(&self.store)
    }

    pub fn can_generate(&self) -> bool {
        self.generator.is_some()
    }

    pub fn is_generating(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Abort the pending generation request. Returns `false` when there
    /// was nothing to cancel.
    pub fn cancel_generation(&self) -> bool {
        let pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        match pending.as_ref() {
            Some(handle) => {
                handle.abort();
                info!("generation cancel requested");
                true
            }
            None => false,
        }
    }

    /// Generate content from `notes` and merge it into the document.
    ///
    /// Only one request may be pending. The partial is merged into the
    /// document as it is when the response arrives, so edits made while
    /// waiting are kept for every field the model did not produce.
    pub async fn generate(&self, notes: &str) -> Result<GenerationTransaction, StoreError> {
        let notes = notes.trim();
        if notes.is_empty() {
            return Err(StoreError::EmptyPrompt);
        }
        let generator = self.generator.clone().ok_or_else(|| {
            GenerationError::MissingCredentials("credential check failed at startup".to_string())
        })?;

        let task = {
            let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
            if pending.is_some() {
                return Err(StoreError::GenerationInFlight);
            }
            let notes = notes.to_string();
            let task = tokio::spawn(async move { generator.generate(&notes).await });
            *pending = Some(task.abort_handle());
            task
        };
        let guard = PendingGuard {
            pending: &self.pending,
        };

        let joined = task.await;
        drop(guard);

        let result = match joined {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                warn!(error = %e, retryable = e.is_retryable(), "generation failed");
                return Err(e.into());
            }
            Err(e) if e.is_cancelled() => {
                info!("generation cancelled");
                return Err(GenerationError::Cancelled.into());
            }
            Err(e) => return Err(StoreError::Task(e.to_string())),
        };

        self.store.lock().await.merge_generated(result.content);
        Ok(result.transaction)
    }

    /// Rasterize the current poster into `science-poster.pdf`.
    pub async fn export_pdf(
        &self,
        rasterizer: Arc<dyn Rasterizer>,
    ) -> Result<ExportArtifact, StoreError> {
        let tree = self.store.lock().await.render();
        let artifact =
            tokio::task::spawn_blocking(move || export_pdf(&tree, rasterizer.as_ref()))
                .await
                .map_err(|e| StoreError::Task(e.to_string()))??;
        Ok(artifact)
    }

    /// Build the slide deck for the current document and layout.
    pub async fn export_deck(
        &self,
        builder: Arc<dyn DeckBuilder>,
    ) -> Result<ExportArtifact, StoreError> {
        let (document, theme, layout) = {
            let store = self.store.lock().await;
            (store.document().clone(), store.theme(), store.layout())
        };
        let artifact = tokio::task::spawn_blocking(move || {
            export_deck(&document, theme, layout, builder.as_ref())
        })
        .await
        .map_err(|e| StoreError::Task(e.to_string()))??;
        Ok(artifact)
    }
}

/// Clears the pending slot and aborts the task if the caller stops waiting.
struct PendingGuard<'a> {
    pending: &'a StdMutex<Option<AbortHandle>>,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}
