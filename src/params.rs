//! Route Parameters
//!
//! The fixed protocol values for one token route: which contracts to call,
//! where the tokens go and what the destination delivery may cost.
//!
//! A [`ParameterTable`] is built once at startup and shared read-only
//! (usually behind an `Arc`). Nothing derives or changes these values at call
//! time; a wrong destination ID or contract address here misroutes funds.

use alloy::primitives::{address, Address, U256};
use serde::Serialize;

use crate::blockchain_id::BlockchainId;
use crate::error::{BridgeError, Result};

// ============================================================================
// XSGD: Avalanche C-Chain -> StraitsX subnet
// ============================================================================

/// EVM chain id of Avalanche C-Chain mainnet
pub const C_CHAIN_EVM_CHAIN_ID: u64 = 43114;

/// ERC20TokenHome for XSGD on C-Chain
pub const XSGD_TOKEN_HOME: Address = address!("48216a3597a19c4903f8933c711237e386daf088");

/// ERC20TokenRemote for XSGD on the StraitsX subnet
pub const XSGD_TOKEN_REMOTE: Address = address!("f0f57f63a964423d3cf3840bcb2b2889aae8d7a7");

/// XSGD token on C-Chain
pub const CCHAIN_XSGD: Address = address!("b2f85b7ab3c2b6f62df06de6ae7d09c010a5096e");

/// StraitsX subnet blockchain ID (CB58)
pub const STRAITSX_SUBNET_BLOCKCHAIN_ID: &str = "EJ4DyXHe4ydhsLLMiDPsHtoq5RDqgyao6Lwb9znKhs59q4NQx";

/// Gas the destination needs to deliver an ERC20 transfer message
pub const DEFAULT_ERC20_REQUIRED_GAS: u64 = 500_000;

/// Immutable protocol constants for a token route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterTable {
    /// Spender authorised by `approve` (the token home contract)
    pub approval_spender: Address,
    /// Contract that receives the `send` call on the source chain
    pub bridge_contract: Address,
    /// ERC20 token being moved
    pub token_contract: Address,
    /// Destination blockchain ID
    pub destination_blockchain_id: BlockchainId,
    /// Token transferrer contract on the destination chain
    pub destination_token_transferrer: Address,
    /// Token used to pay relayer fees
    pub fee_token_address: Address,
    /// Relayer fee for the first hop. Zero for routes without a relayer incentive.
    pub primary_fee: U256,
    /// Relayer fee for the second hop of a multi-hop send. Zero for single-hop routes.
    pub secondary_fee: U256,
    /// Gas limit the destination must provide for message delivery
    pub required_gas_limit: U256,
    /// Where a failed multi-hop send is returned. The zero address means no fallback.
    pub multi_hop_fallback: Address,
}

impl ParameterTable {
    /// Create a fee-free single-hop route.
    ///
    /// `primary_fee` and `secondary_fee` default to zero and
    /// `multi_hop_fallback` to the zero address.
    pub fn single_hop(
        token_home: Address,
        token_contract: Address,
        destination_blockchain_id: BlockchainId,
        destination_token_transferrer: Address,
        required_gas_limit: U256,
    ) -> Self {
        Self {
            approval_spender: token_home,
            bridge_contract: token_home,
            token_contract,
            destination_blockchain_id,
            destination_token_transferrer,
            fee_token_address: token_contract,
            primary_fee: U256::ZERO,
            secondary_fee: U256::ZERO,
            required_gas_limit,
            multi_hop_fallback: Address::ZERO,
        }
    }

    /// Route used to move XSGD from C-Chain to the StraitsX subnet
    pub fn xsgd_cchain_to_stx_subnet() -> Result<Self> {
        Ok(Self::single_hop(
            XSGD_TOKEN_HOME,
            CCHAIN_XSGD,
            BlockchainId::from_cb58(STRAITSX_SUBNET_BLOCKCHAIN_ID)?,
            XSGD_TOKEN_REMOTE,
            U256::from(DEFAULT_ERC20_REQUIRED_GAS),
        ))
    }

    /// Check that every contract this table points at can be addressed.
    pub fn validate(&self) -> Result<()> {
        let contracts = [
            ("approval spender", self.approval_spender),
            ("bridge", self.bridge_contract),
            ("token", self.token_contract),
            ("destination token transferrer", self.destination_token_transferrer),
            ("fee token", self.fee_token_address),
        ];

        for (contract, address) in contracts {
            bind_contract(contract, address)?;
        }

        if self.destination_blockchain_id == BlockchainId::default() {
            return Err(BridgeError::build("send", "destination blockchain ID is zero"));
        }

        if self.required_gas_limit.is_zero() {
            return Err(BridgeError::build("send", "required gas limit is zero"));
        }

        Ok(())
    }
}

/// Reject contract addresses that cannot be called
pub(crate) fn bind_contract(contract: &'static str, address: Address) -> Result<Address> {
    if address == Address::ZERO {
        return Err(BridgeError::ContractBinding {
            contract,
            reason: "address is zero".to_string(),
        });
    }
    Ok(address)
}
