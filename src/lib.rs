//! Kinetic SDK
//!
//! Client SDK for the Kinetic service: a REST binding (airdrops, blockhash
//! lookup, account creation) and a transaction assembler that builds
//! partially-signed, fee-delegated associated-token-account creation
//! transactions. The owner signs locally; the service countersigns as fee
//! payer and broadcasts.

pub mod api;
pub mod config;
pub mod logging;
pub mod memo;
pub mod programs;
pub mod tx_builder;
pub mod wallet;

// Re-export commonly used types
pub use api::{ApiError, KineticClient};
pub use config::KineticConfig;
pub use memo::{KinMemo, TransactionType};
pub use programs::ProgramRegistry;
pub use tx_builder::{TransactionAssembler, TransactionBuilderError};
pub use wallet::WalletManager;

pub use solana_sdk::{pubkey::Pubkey, signature::Keypair};
