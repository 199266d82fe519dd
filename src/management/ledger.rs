use std::time::Duration;

use crate::{error::StoreError, management::Store, types::PENDING_MARKER, utils};

pub const STATE_KEY_PREFIX: &str = "oauth_state_";
pub const STATE_TTL: Duration = Duration::from_secs(600);

/// Tracks in-flight authorization attempts by their anti-forgery nonce.
///
/// Each attempt is a single store entry `oauth_state_<nonce>` holding the
/// pending marker. Its mere presence is the signal; it expires after ten
/// minutes if the user abandons the flow.
#[derive(Debug, Clone)]
pub struct StateLedger {
    store: Store,
    ttl: Duration,
}

impl StateLedger {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            ttl: STATE_TTL,
        }
    }

    pub fn with_ttl(store: Store, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Starts an authorization attempt and returns its nonce.
    pub async fn begin(&self) -> Result<String, StoreError> {
        let nonce = utils::generate_nonce();
        self.store
            .put(&Self::key(&nonce), PENDING_MARKER.to_string(), self.ttl)
            .await?;
        Ok(nonce)
    }

    /// Checks a nonce returned by the callback and burns it.
    ///
    /// Returns `true` only if a live pending marker existed. The entry is
    /// removed in the same step, so a nonce can never be consumed twice.
    pub async fn consume(&self, nonce: &str) -> Result<bool, StoreError> {
        if nonce.is_empty() {
            return Ok(false);
        }
        let entry = self.store.take(&Self::key(nonce)).await?;
        Ok(entry.is_some_and(|e| e.value == PENDING_MARKER))
    }

    fn key(nonce: &str) -> String {
        format!("{STATE_KEY_PREFIX}{nonce}")
    }
}
