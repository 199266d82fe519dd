use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::{error::StoreError, management::Store, types::CredentialRecord, warning};

pub const TOKEN_KEY: &str = "spotify_tokens";
pub const TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Single-slot holder of the current Spotify credential.
///
/// There is exactly one slot: every successful authorization overwrites the
/// previous record (last write wins). The record is treated as absent one
/// hour after it was written, regardless of whether Spotify would still
/// accept the access token.
#[derive(Debug, Clone)]
pub struct TokenVault {
    store: Store,
    ttl: Duration,
}

impl TokenVault {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            ttl: TOKEN_TTL,
        }
    }

    pub fn with_ttl(store: Store, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    pub async fn store(&self, record: &CredentialRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string(record)?;
        self.store.put(TOKEN_KEY, json, self.ttl).await
    }

    /// Returns the stored credential if it is present and unexpired.
    ///
    /// An unreadable record is reported as absent so the user is simply asked
    /// to authorize again.
    pub async fn fetch(&self) -> Result<Option<CredentialRecord>, StoreError> {
        let Some(entry) = self.store.get(TOKEN_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&entry.value) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warning!("Discarding unreadable stored credential: {}", e);
                Ok(None)
            }
        }
    }

    pub async fn expires_at(&self) -> Result<Option<DateTime<Utc>>, StoreError> {
        Ok(self.store.get(TOKEN_KEY).await?.map(|e| e.expires_at))
    }

    pub async fn clear(&self) -> Result<(), StoreError> {
        self.store.delete(TOKEN_KEY).await
    }
}
