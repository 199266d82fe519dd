//! Configuration management for the spotrelay credential broker.
//!
//! Configuration values come from environment variables, optionally seeded
//! from a `.env` file in the local data directory. They are read once into a
//! [`Config`] value which is then handed explicitly to the server, the
//! callback coordinator and every request handler.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::error::RelayError;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8787";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SCOPE: &str =
    "user-read-currently-playing user-read-recently-played user-read-playback-state";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is looked up in:
/// - Linux: `~/.local/share/spotrelay/.env`
/// - macOS: `~/Library/Application Support/spotrelay/.env`
/// - Windows: `%LOCALAPPDATA%/spotrelay/.env`
///
/// A missing file is not an error, since every value can also be provided
/// through the process environment. Variables that are already set are never
/// overwritten.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or if an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the application's local data directory (`<data_local_dir>/spotrelay`).
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotrelay");
    path
}

/// Client identifiers registered with Spotify.
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Runtime configuration of the relay.
///
/// Built once at startup (usually via [`Config::from_env`]) and shared
/// read-only by all handlers. Client credentials are optional at this level:
/// the relay still starts without them and reports the missing values on the
/// endpoints that need them.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub scope: String,
    pub public_url: Option<String>,
    pub store_path: PathBuf,
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: DEFAULT_SERVER_ADDRESS.to_string(),
            client_id: None,
            client_secret: None,
            auth_url: DEFAULT_AUTH_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            public_url: None,
            store_path: data_dir().join("store.json"),
            environment: "unknown".to_string(),
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `SERVER_ADDRESS` | `127.0.0.1:8787` |
    /// | `SPOTIFY_API_AUTH_CLIENT_ID` | unset |
    /// | `SPOTIFY_API_AUTH_CLIENT_SECRET` | unset |
    /// | `SPOTIFY_API_AUTH_URL` | `https://accounts.spotify.com/authorize` |
    /// | `SPOTIFY_API_TOKEN_URL` | `https://accounts.spotify.com/api/token` |
    /// | `SPOTIFY_API_URL` | `https://api.spotify.com/v1` |
    /// | `SPOTIFY_API_AUTH_SCOPE` | the three playback read scopes |
    /// | `SPOTRELAY_PUBLIC_URL` | derived from the request |
    /// | `SPOTRELAY_STORE_PATH` | `<data_dir>/store.json` |
    /// | `ENVIRONMENT` | `unknown` |
    ///
    /// Empty values are treated as unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_addr: var("SERVER_ADDRESS").unwrap_or(defaults.server_addr),
            client_id: var("SPOTIFY_API_AUTH_CLIENT_ID"),
            client_secret: var("SPOTIFY_API_AUTH_CLIENT_SECRET"),
            auth_url: var("SPOTIFY_API_AUTH_URL").unwrap_or(defaults.auth_url),
            token_url: var("SPOTIFY_API_TOKEN_URL").unwrap_or(defaults.token_url),
            api_url: var("SPOTIFY_API_URL").unwrap_or(defaults.api_url),
            scope: var("SPOTIFY_API_AUTH_SCOPE").unwrap_or(defaults.scope),
            public_url: var("SPOTRELAY_PUBLIC_URL"),
            store_path: var("SPOTRELAY_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.store_path),
            environment: var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    /// Returns the client credentials, or a configuration error naming the
    /// variables that have to be set.
    pub fn credentials(&self) -> Result<ClientCredentials, RelayError> {
        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => {
                Ok(ClientCredentials {
                    client_id: id.clone(),
                    client_secret: secret.clone(),
                })
            }
            _ => Err(RelayError::Configuration(
                "Spotify client credentials not configured. Please set \
                 SPOTIFY_API_AUTH_CLIENT_ID and SPOTIFY_API_AUTH_CLIENT_SECRET."
                    .to_string(),
            )),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials().is_ok()
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
