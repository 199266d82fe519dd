use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Marker stored under every pending authorization nonce.
pub const PENDING_MARKER: &str = "pending";

/// The credential returned by Spotify's token endpoint, stored verbatim.
///
/// `refresh_token` is kept but never exchanged; once the vault entry expires
/// the account has to be authorized again.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CredentialRecord {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// A value held by the key/value store together with its expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl Entry {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Query parameters Spotify appends to the redirect back to `/callback`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

impl CallbackParams {
    /// Collects the callback parameters from decoded query pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "code" => &mut params.code,
                "state" => &mut params.state,
                "error" => &mut params.error,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NothingPlaying {
    pub playing: bool,
    pub message: String,
}

impl Default for NothingPlaying {
    fn default() -> Self {
        Self {
            playing: false,
            message: "No track currently playing".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    pub setup: String,
    pub callback: String,
    pub now_playing: String,
    pub recent: String,
    pub health: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            setup: "/setup".to_string(),
            callback: "/callback".to_string(),
            now_playing: "/now-playing".to_string(),
            recent: "/recent".to_string(),
            health: "/health".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: String,
    pub environment: String,
    pub oauth_configured: bool,
    pub endpoints: Endpoints,
}

#[derive(Tabled)]
pub struct StatusTableRow {
    pub item: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn callback_params_keep_first_value() {
        let params = CallbackParams::from_pairs(pairs(&[
            ("error", "access_denied"),
            ("error", "x"),
            ("code", "c1"),
            ("code", "c2"),
            ("utm_source", "mail"),
        ]));

        assert_eq!(params.error.as_deref(), Some("access_denied"));
        assert_eq!(params.code.as_deref(), Some("c1"));
        assert_eq!(params.state, None);
    }
}
