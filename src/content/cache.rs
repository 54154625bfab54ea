//! Single-slot content cache — memoizes the gateway call.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::ContentError;

use super::gateway::ContentGateway;
use super::model::ContentDocument;

/// Memoizes the content document behind a mutex held across the whole
/// check-fetch-store sequence, so concurrent callers during a pending fetch
/// share a single gateway call and `invalidate` can never interleave with a
/// half-finished load.
pub struct ContentCache {
    gateway: Arc<dyn ContentGateway>,
    slot: Mutex<Option<ContentDocument>>,
}

impl ContentCache {
    pub fn new(gateway: Arc<dyn ContentGateway>) -> Self {
        Self {
            gateway,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached document, fetching it once if absent.
    ///
    /// An envelope with `success = false` raises
    /// [`ContentError::Unavailable`] and caches nothing; transport failures
    /// propagate unmodified and cache nothing.
    pub async fn load(&self) -> Result<ContentDocument, ContentError> {
        let mut slot = self.slot.lock().await;
        if let Some(document) = slot.as_ref() {
            debug!("content cache hit");
            return Ok(document.clone());
        }

        let response = self.gateway.fetch().await?;
        if !response.success {
            warn!("content service flagged the document as unsuccessful");
            return Err(ContentError::Unavailable);
        }

        let document = response.data.onboarding_content;
        *slot = Some(document.clone());
        info!(cards = document.cards.len(), "content document cached");
        Ok(document)
    }

    /// Clear the cached document. The next `load` hits the gateway again.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.lock().await;
        *slot = None;
        debug!("content cache invalidated");
    }
}
