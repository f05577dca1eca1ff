//! Transfer Requests
//!
//! Per-call aggregates for the two operations and their lowering into
//! EVM transaction requests. Requests are assembled fresh for every call
//! from the shared [`ParameterTable`] and the caller's inputs, then dropped.

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, U256},
    rpc::types::TransactionRequest,
    sol_types::SolCall,
};

use crate::blockchain_id::BlockchainId;
use crate::contracts::{IERC20, IERC20TokenHome};
use crate::error::{BridgeError, Result};
use crate::params::{bind_contract, ParameterTable};
use crate::signer::SigningIdentity;

/// Operation label used in errors and logs
pub const APPROVE: &str = "approve";
/// Operation label used in errors and logs
pub const SEND: &str = "send";

// ============================================================================
// Approval
// ============================================================================

/// ERC20 `approve(spender, amount)` on the route's token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalRequest {
    pub token: Address,
    pub spender: Address,
    pub amount: U256,
}

impl ApprovalRequest {
    /// Authorise the route's spender for exactly `amount` base units
    pub fn new(params: &ParameterTable, amount: U256) -> Result<Self> {
        Ok(Self {
            token: bind_contract("token", params.token_contract)?,
            spender: bind_contract("approval spender", params.approval_spender)?,
            amount,
        })
    }

    /// ABI-encoded call data
    pub fn calldata(&self) -> Bytes {
        IERC20::approveCall {
            spender: self.spender,
            amount: self.amount,
        }
        .abi_encode()
        .into()
    }

    /// Transaction request signed for `identity`'s chain
    pub fn to_transaction(&self, identity: &SigningIdentity) -> Result<TransactionRequest> {
        signed_call(APPROVE, identity, self.token, self.calldata())
    }
}

// ============================================================================
// Bridge transfer
// ============================================================================

/// ERC20TokenHome `send(input, amount)` towards the route's destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeTransferRequest {
    /// Token home contract receiving the call
    pub bridge_contract: Address,
    pub destination_blockchain_id: BlockchainId,
    pub destination_token_transferrer: Address,
    pub recipient: Address,
    pub primary_fee_token: Address,
    /// Defaults to zero: the supported route pays no relayer fee
    pub primary_fee: U256,
    /// Defaults to zero: only meaningful for multi-hop sends
    pub secondary_fee: U256,
    pub required_gas_limit: U256,
    /// Defaults to the zero address, meaning no fallback
    pub multi_hop_fallback: Address,
    pub amount: U256,
}

impl BridgeTransferRequest {
    /// Combine the route constants with the caller's recipient and amount
    pub fn new(params: &ParameterTable, recipient: Address, amount: U256) -> Result<Self> {
        params.validate()?;

        Ok(Self {
            bridge_contract: params.bridge_contract,
            destination_blockchain_id: params.destination_blockchain_id,
            destination_token_transferrer: params.destination_token_transferrer,
            recipient,
            primary_fee_token: params.fee_token_address,
            primary_fee: params.primary_fee,
            secondary_fee: params.secondary_fee,
            required_gas_limit: params.required_gas_limit,
            multi_hop_fallback: params.multi_hop_fallback,
            amount,
        })
    }

    /// The `SendTokensInput` struct passed to the contract
    pub fn send_input(&self) -> IERC20TokenHome::SendTokensInput {
        IERC20TokenHome::SendTokensInput {
            destinationBlockchainID: self.destination_blockchain_id.as_fixed_bytes(),
            destinationTokenTransferrerAddress: self.destination_token_transferrer,
            recipient: self.recipient,
            primaryFeeTokenAddress: self.primary_fee_token,
            primaryFee: self.primary_fee,
            secondaryFee: self.secondary_fee,
            requiredGasLimit: self.required_gas_limit,
            multiHopFallback: self.multi_hop_fallback,
        }
    }

    /// ABI-encoded call data
    pub fn calldata(&self) -> Bytes {
        IERC20TokenHome::sendCall {
            input: self.send_input(),
            amount: self.amount,
        }
        .abi_encode()
        .into()
    }

    /// Transaction request signed for `identity`'s chain
    pub fn to_transaction(&self, identity: &SigningIdentity) -> Result<TransactionRequest> {
        signed_call(SEND, identity, self.bridge_contract, self.calldata())
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Parse a 20-byte hex address, with or without `0x`.
///
/// Only length and hex are checked; mixed-case checksums are not enforced.
pub fn parse_address(input: &str) -> Result<Address> {
    let hex = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    if hex.len() != 40 {
        return Err(BridgeError::invalid_address(
            input,
            format!("expected 40 hex characters, got {}", hex.len()),
        ));
    }

    let bytes = hex::decode(hex)
        .map_err(|e| BridgeError::invalid_address(input, format!("not hex: {}", e)))?;

    Ok(Address::from_slice(&bytes))
}

fn signed_call(
    operation: &'static str,
    identity: &SigningIdentity,
    to: Address,
    data: Bytes,
) -> Result<TransactionRequest> {
    if identity.chain_id() == 0 {
        return Err(BridgeError::build(operation, "chain id must be non-zero"));
    }

    let mut tx = TransactionRequest::default()
        .from(identity.address())
        .to(to)
        .input(data.into());
    tx.set_chain_id(identity.chain_id());

    Ok(tx)
}

/// Refuse a request that would be signed for a different chain or sender than
/// `identity` is bound to.
pub fn ensure_bound_to(
    operation: &'static str,
    request: &TransactionRequest,
    identity: &SigningIdentity,
) -> Result<()> {
    match request.chain_id {
        Some(chain_id) if chain_id == identity.chain_id() => {}
        Some(chain_id) => {
            return Err(BridgeError::build(
                operation,
                format!(
                    "request chain id {} does not match signer chain id {}",
                    chain_id,
                    identity.chain_id()
                ),
            ))
        }
        None => return Err(BridgeError::build(operation, "request has no chain id")),
    }

    if let Some(from) = request.from {
        if from != identity.address() {
            return Err(BridgeError::build(
                operation,
                format!("request sender {} is not the signer {}", from, identity.address()),
            ));
        }
    }

    Ok(())
}
