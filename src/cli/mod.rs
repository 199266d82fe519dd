//! # CLI Module
//!
//! User-facing commands of the `spotrelay` binary.
//!
//! - [`serve`] - Runs the HTTP relay (file-backed store by default,
//!   `--memory` for a throwaway in-process store)
//! - [`status`] - Shows whether client credentials are configured and whether
//!   a usable credential is stored
//! - [`logout`] - Deletes the stored credential
//!
//! ## Usage
//!
//! ```bash
//! spotrelay serve --open          # start and open the setup page
//! spotrelay status                # inspect the persisted credential
//! spotrelay logout                # forget the connected account
//! ```
//!
//! Fatal problems are reported through the crate's `error!` macro, which
//! exits the process.

mod serve;
mod status;

pub use serve::serve;
pub use status::logout;
pub use status::status;
