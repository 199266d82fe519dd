//! Spotify Relay Library
//!
//! A single-user credential broker for the Spotify Web API. The relay runs the
//! OAuth authorization-code handshake on behalf of a client application,
//! keeps the resulting credential in a time-bounded store, and relays
//! read-only playback data so the client never holds long-lived secrets.
//!
//! # Modules
//!
//! - `api` - HTTP handlers (setup pages, OAuth callback, relay, health)
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `context` - Shared handler context
//! - `error` - Error taxonomy and its HTTP mapping
//! - `management` - Key/value store, state ledger, token vault and the
//!   callback coordinator
//! - `server` - Router construction and the HTTP server
//! - `spotify` - Outbound Spotify calls
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotrelay::{config, context::AppContext, management::Store, server};
//!
//! #[tokio::main]
//! async fn main() -> spotrelay::Res<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env();
//!     let store = Store::file(config.store_path.clone());
//!     server::start_api_server(AppContext::new(config, store)).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the CLI and server start-up plumbing, where any error simply ends
/// the command. Request handlers use [`error::RelayError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational line prefixed with a blue `o`.
///
/// Accepts the same arguments as `println!`.
///
/// ```
/// info!("Listening on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success line prefixed with a green `✓`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line and exits the process with status 1.
///
/// Only for start-up and CLI failures. Request handlers must return a
/// [`error::RelayError`] instead of calling this.
///
/// ```
/// error!("Cannot load environment. Err: {}", e);
/// // unreachable
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning line prefixed with a yellow `!`; execution continues.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
