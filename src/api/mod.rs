//! # API Module
//!
//! HTTP handlers of the relay. Every handler receives the shared
//! [`AppContext`](crate::context::AppContext) as axum state and either
//! renders a page, drives the OAuth handshake, or relays a Spotify call.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`root`] - Landing page linking to setup and health
//! - [`setup_page`] - Setup instructions with the callback URL to register
//! - [`begin_authorization`] - Creates a state nonce and redirects (302) to
//!   Spotify's authorization endpoint
//! - [`callback`] - Validates the returned state, exchanges the code and
//!   stores the credential
//!
//! ### Relay
//!
//! - [`now_playing`] - Currently playing item, or `{"playing": false}` when
//!   Spotify reports nothing playing
//! - [`recent`] - Last ten played items
//!
//! ### Monitoring
//!
//! - [`health`] - Liveness plus whether a credential is stored
//!
//! Errors are returned as [`RelayError`](crate::error::RelayError), which
//! picks the status code and body for each failure class.

mod callback;
mod health;
mod relay;
mod setup;
mod templates;

pub use callback::callback;
pub use health::health;
pub use relay::{now_playing, recent};
pub use setup::{begin_authorization, root, setup_page};
