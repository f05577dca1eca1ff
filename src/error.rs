//! Error taxonomy for transfer operations
//!
//! Every failure is returned to the caller with the step that produced it.
//! Nothing here is retried: resubmitting a bridge transaction blindly can
//! move funds twice.

use thiserror::Error;

/// Errors produced while preparing or submitting a transfer
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The amount string is not a plain non-negative base-10 integer
    #[error("Invalid amount {input:?}: {reason}")]
    InvalidAmount { input: String, reason: String },

    /// The private key could not be decoded or is not a valid secp256k1 scalar.
    /// Never carries the key itself.
    #[error("Invalid private key: {0}")]
    InvalidKeyFormat(String),

    /// A caller-supplied address is not 20 bytes of hex
    #[error("Invalid address {input:?}: {reason}")]
    InvalidAddress { input: String, reason: String },

    /// A destination blockchain ID is not a valid 32-byte identifier
    #[error("Invalid blockchain ID {input:?}: {reason}")]
    InvalidBlockchainId { input: String, reason: String },

    /// The targeted contract cannot be addressed
    #[error("Cannot bind {contract} contract: {reason}")]
    ContractBinding {
        contract: &'static str,
        reason: String,
    },

    /// Signing options or request assembly failed
    #[error("Failed to build {operation} transaction: {reason}")]
    TransactionBuild {
        operation: &'static str,
        reason: String,
    },

    /// The node or the contract rejected the transaction
    #[error("Failed to submit {operation} transaction: {reason}")]
    Submission {
        operation: &'static str,
        reason: String,
    },
}

impl BridgeError {
    pub(crate) fn invalid_amount(input: &str, reason: impl Into<String>) -> Self {
        BridgeError::InvalidAmount {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_address(input: &str, reason: impl Into<String>) -> Self {
        BridgeError::InvalidAddress {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_blockchain_id(input: &str, reason: impl Into<String>) -> Self {
        BridgeError::InvalidBlockchainId {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn build(operation: &'static str, reason: impl Into<String>) -> Self {
        BridgeError::TransactionBuild {
            operation,
            reason: reason.into(),
        }
    }

    pub(crate) fn submission(operation: &'static str, reason: impl Into<String>) -> Self {
        BridgeError::Submission {
            operation,
            reason: reason.into(),
        }
    }
}

/// Result alias for transfer operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
