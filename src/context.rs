use std::sync::Arc;

use reqwest::Client;

use crate::{
    config::Config,
    management::{StateLedger, Store, TokenVault},
};

/// Everything a request handler needs, passed explicitly as axum state.
///
/// Cloning is cheap: the configuration is shared and the ledger and vault
/// only hold handles to the same backing store.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    pub ledger: StateLedger,
    pub vault: TokenVault,
    pub client: Client,
}

impl AppContext {
    pub fn new(config: Config, store: Store) -> Self {
        Self::with_parts(
            config,
            StateLedger::new(store.clone()),
            TokenVault::new(store),
        )
    }

    pub fn with_parts(config: Config, ledger: StateLedger, vault: TokenVault) -> Self {
        Self {
            config: Arc::new(config),
            ledger,
            vault,
            client: Client::new(),
        }
    }
}
