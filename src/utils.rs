use axum::http::{HeaderMap, header};
use base64::{Engine, engine::general_purpose::STANDARD};
use rand::{Rng, distr::Alphanumeric};

use crate::config::Config;

pub const NONCE_LENGTH: usize = 16;

/// Random nonce from `[A-Za-z0-9]`, used as the OAuth `state` parameter.
pub fn generate_nonce() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect()
}

/// Value of an HTTP Basic `Authorization` header for the given client.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{client_id}:{client_secret}"))
    )
}

/// Origin the relay is reachable under, as seen by the browser.
///
/// `SPOTRELAY_PUBLIC_URL` wins; otherwise the request's `Host` header (with
/// `X-Forwarded-Proto` when a proxy sets it), and finally the bind address.
pub fn public_origin(config: &Config, headers: &HeaderMap) -> String {
    if let Some(url) = &config.public_url {
        return url.trim_end_matches('/').to_string();
    }

    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .filter(|h| !h.is_empty())
        .unwrap_or(&config.server_addr);
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("http");

    format!("{scheme}://{host}")
}

/// Redirect URI sent both when starting the flow and when exchanging the
/// code. Spotify rejects the exchange if the two differ.
pub fn redirect_uri(config: &Config, headers: &HeaderMap) -> String {
    format!("{}/callback", public_origin(config, headers))
}
