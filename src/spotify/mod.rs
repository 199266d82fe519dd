//! # Spotify Integration Module
//!
//! Outbound calls to Spotify's accounts service and Web API.
//!
//! ## Modules
//!
//! - [`auth`] - Authorization URL construction and the authorization-code
//!   exchange against `POST /api/token` (HTTP Basic client authentication)
//! - [`player`] - Read-only playback endpoints relayed to clients:
//!   - `GET /me/player/currently-playing`
//!   - `GET /me/player/recently-played?limit=10`
//!
//! ## Error Handling
//!
//! Nothing in this module retries. Authorization codes are single-use, so a
//! failed exchange ends the attempt, and failed data calls surface the
//! upstream status to the caller unchanged.
//!
//! Base URLs come from [`crate::config::Config`], which lets tests point the
//! client at a local mock server.

pub mod auth;
pub mod player;
