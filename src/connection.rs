//! Chain Connection
//!
//! The network boundary. A connection takes a fully assembled transaction
//! request plus the identity that must sign it, and returns the transaction
//! hash once the node has accepted it. It never waits for inclusion.

use alloy::{
    primitives::TxHash,
    providers::{Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::error::{BridgeError, Result};
use crate::requests::ensure_bound_to;
use crate::signer::SigningIdentity;

/// Submits signed transactions to a chain
#[async_trait]
pub trait ChainConnection: Send + Sync {
    /// Sign `request` with `identity` and hand it to the network.
    ///
    /// `operation` labels errors (`approve` / `send`). Implementations must
    /// refuse a request whose chain id differs from the identity's.
    async fn submit(
        &self,
        operation: &'static str,
        request: TransactionRequest,
        identity: &SigningIdentity,
    ) -> Result<TxHash>;
}

/// HTTP JSON-RPC connection.
///
/// Nonce, gas and fee fields are filled from the node at submission time;
/// concurrent submissions from the same key can collide on nonce.
#[derive(Debug, Clone)]
pub struct RpcConnection {
    rpc_url: Url,
}

impl RpcConnection {
    /// Create a connection to `rpc_url`
    pub fn new(rpc_url: &str) -> Result<Self> {
        let rpc_url = rpc_url.parse().map_err(|e| BridgeError::Submission {
            operation: "connect",
            reason: format!("Invalid RPC URL: {}", e),
        })?;
        Ok(Self { rpc_url })
    }

    /// The endpoint this connection submits to
    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }
}

#[async_trait]
impl ChainConnection for RpcConnection {
    async fn submit(
        &self,
        operation: &'static str,
        request: TransactionRequest,
        identity: &SigningIdentity,
    ) -> Result<TxHash> {
        ensure_bound_to(operation, &request, identity)?;

        let provider = ProviderBuilder::new()
            .with_recommended_fillers()
            .wallet(identity.wallet())
            .on_http(self.rpc_url.clone());

        debug!(
            operation,
            signer = %identity.address(),
            chain_id = identity.chain_id(),
            "Submitting transaction"
        );

        let pending = provider
            .send_transaction(request)
            .await
            .map_err(|e| BridgeError::submission(operation, e.to_string()))?;

        Ok(*pending.tx_hash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_url_validation() {
        let connection = RpcConnection::new("https://api.avax.network/ext/bc/C/rpc").unwrap();
        assert_eq!(connection.rpc_url().host_str(), Some("api.avax.network"));

        assert!(matches!(
            RpcConnection::new("not a url"),
            Err(BridgeError::Submission { .. })
        ));
    }
}
