//! Error types for transaction assembly
//!
//! Every variant is fatal to the current assembly call: a failed assembly
//! produces no transaction and leaves nothing to undo, so there is no retry
//! classification here. Errors surface to the caller verbatim.

use solana_sdk::signer::SignerError;
use thiserror::Error;

/// Error type for all transaction assembly operations
#[derive(Error, Debug)]
pub enum TransactionBuilderError {
    /// An account reference, blockhash, or payload could not be converted
    /// to its fixed-width wire representation
    #[error("Encoding error ({field}): {reason}")]
    Encoding {
        /// Which input failed to encode
        field: &'static str,
        /// Detailed reason for the failure
        reason: String,
    },

    /// The associated token address derivation found no valid address
    /// within its bounded search
    #[error("Derivation error: {0}")]
    Derivation(String),

    /// The provided key material could not produce a signature
    #[error("Signing failed: {0}")]
    Signing(#[from] SignerError),
}

impl TransactionBuilderError {
    /// Get the error category for logging and observability
    pub fn category(&self) -> &'static str {
        match self {
            Self::Encoding { .. } => "encoding",
            Self::Derivation(_) => "derivation",
            Self::Signing(_) => "signing",
        }
    }
}

// Convenience constructors for common error scenarios
impl TransactionBuilderError {
    /// Create an encoding error for a named input
    pub fn encoding(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Encoding {
            field,
            reason: reason.into(),
        }
    }

    /// Create a derivation error
    pub fn derivation(reason: impl Into<String>) -> Self {
        Self::Derivation(reason.into())
    }
}
