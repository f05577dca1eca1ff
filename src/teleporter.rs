//! Caller-facing operations
//!
//! [`Teleporter`] ties one route's [`ParameterTable`] to a [`ChainConnection`]
//! and exposes the two string-in, hash-out entry points a CLI or service
//! calls. Each call derives its own signing identity and drops it afterwards.

use alloy::primitives::TxHash;
use std::sync::Arc;

use crate::amount::to_base_units;
use crate::approver::AllowanceApprover;
use crate::connection::ChainConnection;
use crate::error::Result;
use crate::params::ParameterTable;
use crate::requests::parse_address;
use crate::signer::derive_identity;
use crate::submitter::BridgeSubmitter;

/// Entry points for approving and bridging on one route
pub struct Teleporter<C> {
    params: Arc<ParameterTable>,
    connection: C,
}

impl<C: ChainConnection> Teleporter<C> {
    pub fn new(params: Arc<ParameterTable>, connection: C) -> Self {
        Self { params, connection }
    }

    /// The route this instance submits to
    pub fn params(&self) -> &ParameterTable {
        &self.params
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Approve the route's spender for `amount` base units.
    ///
    /// Inputs are validated in order (key, then amount) before anything is
    /// sent.
    pub async fn approve(
        &self,
        private_key_hex: &str,
        chain_id: u64,
        amount: &str,
    ) -> Result<TxHash> {
        let identity = derive_identity(private_key_hex, chain_id)?;
        let amount = to_base_units(amount)?;

        AllowanceApprover::new(&self.params, &self.connection)
            .approve(&identity, amount)
            .await
    }

    /// Bridge `amount` base units to `recipient` on the route's destination.
    pub async fn bridge(
        &self,
        private_key_hex: &str,
        chain_id: u64,
        amount: &str,
        recipient: &str,
    ) -> Result<TxHash> {
        let identity = derive_identity(private_key_hex, chain_id)?;
        let amount = to_base_units(amount)?;
        let recipient = parse_address(recipient)?;

        BridgeSubmitter::new(&self.params, &self.connection)
            .bridge(&identity, amount, recipient)
            .await
    }
}
