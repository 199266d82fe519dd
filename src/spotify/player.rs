use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::RelayError;

pub const RECENT_LIMIT: u32 = 10;

/// Fetches the user's currently playing item.
///
/// Returns `Ok(None)` when Spotify answers `204 No Content`, which it does
/// whenever nothing is playing. Other non-success statuses are passed through
/// as [`RelayError::UpstreamData`]; the body of a successful answer is
/// returned untouched.
pub async fn currently_playing(
    client: &Client,
    api_url: &str,
    token: &str,
) -> Result<Option<Value>, RelayError> {
    let url = format!("{uri}/me/player/currently-playing", uri = api_url);
    let res = client.get(&url).bearer_auth(token).send().await?;

    if res.status() == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    if !res.status().is_success() {
        return Err(RelayError::UpstreamData {
            status: res.status(),
            message: "Failed to fetch current track".to_string(),
        });
    }

    Ok(Some(res.json::<Value>().await?))
}

/// Fetches the last ten played items.
pub async fn recently_played(
    client: &Client,
    api_url: &str,
    token: &str,
) -> Result<Value, RelayError> {
    let url = format!(
        "{uri}/me/player/recently-played?limit={limit}",
        uri = api_url,
        limit = RECENT_LIMIT
    );
    let res = client.get(&url).bearer_auth(token).send().await?;

    if !res.status().is_success() {
        return Err(RelayError::UpstreamData {
            status: res.status(),
            message: "Failed to fetch recent tracks".to_string(),
        });
    }

    Ok(res.json::<Value>().await?)
}
