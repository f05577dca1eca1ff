//! Teleporter Bridge: ERC20 transfers over Avalanche Interchain Token Transfer
//!
//! This crate prepares and submits the two transactions needed to move an
//! ERC20 token from a source chain to another Avalanche L1:
//!
//! - **Approve** - let the route's ERC20TokenHome spend the sender's tokens
//! - **Bridge** - call `send` on the token home, which locks the tokens and
//!   has the destination's token remote mint/release them to the recipient
//!
//! ## Modules
//!
//! - `amount` - strict integer parsing into base units
//! - `signer` - chain-bound signing identities from raw private keys
//! - `params` - immutable route constants (`ParameterTable`)
//! - `requests` - approval / send request assembly
//! - `approver`, `submitter` - the two submission flows
//! - `connection` - the `ChainConnection` network boundary and its RPC implementation
//! - `teleporter` - string-in, hash-out entry points for a CLI or service
//! - `config` - environment configuration for the binary
//!
//! ## Ordering
//!
//! The approval must be mined before the bridge transfer that spends it.
//! Both calls return as soon as the node accepts the transaction, so the
//! caller is responsible for waiting in between.

pub mod amount;
pub mod approver;
pub mod blockchain_id;
pub mod config;
pub mod connection;
pub mod contracts;
pub mod error;
pub mod params;
pub mod redact;
pub mod requests;
pub mod signer;
pub mod submitter;
pub mod teleporter;

// Re-export commonly used items at the crate root
pub use amount::to_base_units;
pub use approver::AllowanceApprover;
pub use blockchain_id::BlockchainId;
pub use config::Config;
pub use connection::{ChainConnection, RpcConnection};
pub use error::{BridgeError, Result};
pub use params::ParameterTable;
pub use requests::{parse_address, ApprovalRequest, BridgeTransferRequest};
pub use signer::{derive_identity, SigningIdentity};
pub use submitter::BridgeSubmitter;
pub use teleporter::Teleporter;

/// Transaction hash returned after the node accepts a submission
pub type TransactionId = alloy::primitives::TxHash;
