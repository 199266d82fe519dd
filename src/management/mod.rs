mod coordinator;
mod ledger;
mod store;
mod vault;

pub use coordinator::CallbackCoordinator;
pub use coordinator::HandshakeState;
pub use ledger::STATE_TTL;
pub use ledger::StateLedger;
pub use store::FileStore;
pub use store::MemoryStore;
pub use store::Store;
pub use vault::TOKEN_TTL;
pub use vault::TokenVault;
