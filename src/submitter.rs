//! Bridge Transfer Submission
//!
//! Sends tokens through the route's ERC20TokenHome. The home contract locks
//! the tokens here and emits an interchain message that mints or releases
//! them to `recipient` on the destination chain.
//!
//! Fees and the multi-hop fallback come from the [`ParameterTable`], never
//! from the caller. A fee-bearing or multi-hop route is a different table.

use alloy::primitives::{Address, TxHash, U256};
use tracing::{debug, info};

use crate::connection::ChainConnection;
use crate::error::Result;
use crate::params::ParameterTable;
use crate::requests::{BridgeTransferRequest, SEND};
use crate::signer::SigningIdentity;

/// Builds and submits bridge transfers for one route
pub struct BridgeSubmitter<'a, C: ?Sized> {
    params: &'a ParameterTable,
    connection: &'a C,
}

impl<'a, C: ChainConnection + ?Sized> BridgeSubmitter<'a, C> {
    pub fn new(params: &'a ParameterTable, connection: &'a C) -> Self {
        Self { params, connection }
    }

    /// Send `amount` base units to `recipient` on the destination chain.
    ///
    /// The signer must already have approved at least `amount` for the token
    /// home; that is not checked here.
    pub async fn bridge(
        &self,
        identity: &SigningIdentity,
        amount: U256,
        recipient: Address,
    ) -> Result<TxHash> {
        let request = BridgeTransferRequest::new(self.params, recipient, amount)?;
        let tx = request.to_transaction(identity)?;

        debug!(
            bridge = %request.bridge_contract,
            destination = %request.destination_blockchain_id,
            transferrer = %request.destination_token_transferrer,
            required_gas_limit = %request.required_gas_limit,
            "Built send request"
        );

        let tx_hash = self.connection.submit(SEND, tx, identity).await?;

        info!(
            signer = %identity.address(),
            chain_id = identity.chain_id(),
            recipient = %recipient,
            amount = %amount,
            tx_hash = %tx_hash,
            "Bridge transfer submitted"
        );

        Ok(tx_hash)
    }
}
