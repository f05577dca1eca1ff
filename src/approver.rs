//! Allowance Approval
//!
//! Authorises the route's token home to pull tokens from the signer.

use alloy::primitives::{TxHash, U256};
use tracing::{debug, info};

use crate::connection::ChainConnection;
use crate::error::Result;
use crate::params::ParameterTable;
use crate::requests::{ApprovalRequest, APPROVE};
use crate::signer::SigningIdentity;

/// Builds and submits ERC20 approvals for one route
pub struct AllowanceApprover<'a, C: ?Sized> {
    params: &'a ParameterTable,
    connection: &'a C,
}

impl<'a, C: ChainConnection + ?Sized> AllowanceApprover<'a, C> {
    pub fn new(params: &'a ParameterTable, connection: &'a C) -> Self {
        Self { params, connection }
    }

    /// Approve `ParameterTable::approval_spender` for exactly `amount` base
    /// units of the route's token.
    ///
    /// Returns once the node accepts the transaction. The approval is not yet
    /// mined at that point; confirm it before sending a bridge transfer that
    /// depends on it.
    pub async fn approve(&self, identity: &SigningIdentity, amount: U256) -> Result<TxHash> {
        let request = ApprovalRequest::new(self.params, amount)?;
        let tx = request.to_transaction(identity)?;

        debug!(
            token = %request.token,
            spender = %request.spender,
            amount = %request.amount,
            "Built approval request"
        );

        let tx_hash = self.connection.submit(APPROVE, tx, identity).await?;

        info!(
            signer = %identity.address(),
            chain_id = identity.chain_id(),
            spender = %request.spender,
            amount = %amount,
            tx_hash = %tx_hash,
            "Approval submitted"
        );

        Ok(tx_hash)
    }
}
