//! Signing Identity
//!
//! Derives a chain-bound signer from a raw secp256k1 private key.
//!
//! The identity carries the EVM chain id it was created for. Every transaction
//! signed with it embeds that chain id (EIP-155), so a signature produced for
//! one network cannot be replayed on another.

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    signers::{local::PrivateKeySigner, Signer},
};
use std::fmt;

use crate::error::{BridgeError, Result};
use crate::redact::Redacted;

/// Hex length of a 32-byte private key without prefix
const PRIVATE_KEY_HEX_LEN: usize = 64;

/// A private key bound to a single EVM chain id.
///
/// Created per operation and dropped when it completes. The chain id cannot
/// be changed after construction.
#[derive(Clone)]
pub struct SigningIdentity {
    signer: PrivateKeySigner,
    chain_id: u64,
}

impl SigningIdentity {
    /// Address controlled by this key
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// The chain id this identity signs for
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Wallet for attaching to an alloy provider
    pub fn wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.signer.clone())
    }
}

impl fmt::Debug for SigningIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningIdentity")
            .field("address", &self.address())
            .field("chain_id", &self.chain_id)
            .field("key", &Redacted(()))
            .finish()
    }
}

/// Derive a signing identity from a hex private key and bind it to `chain_id`.
///
/// The key must be exactly 64 hex characters with no `0x` prefix. Decoding
/// failures and scalars outside `1..n` are reported as
/// [`BridgeError::InvalidKeyFormat`]; the key never appears in the error.
pub fn derive_identity(private_key_hex: &str, chain_id: u64) -> Result<SigningIdentity> {
    if private_key_hex.starts_with("0x") || private_key_hex.starts_with("0X") {
        return Err(BridgeError::InvalidKeyFormat(
            "key must be given without a 0x prefix".to_string(),
        ));
    }

    if private_key_hex.len() != PRIVATE_KEY_HEX_LEN {
        return Err(BridgeError::InvalidKeyFormat(format!(
            "expected {} hex characters, got {}",
            PRIVATE_KEY_HEX_LEN,
            private_key_hex.len()
        )));
    }

    let bytes = hex::decode(private_key_hex)
        .map_err(|_| BridgeError::InvalidKeyFormat("key is not valid hex".to_string()))?;

    let signer = PrivateKeySigner::from_slice(&bytes)
        .map_err(|_| {
            BridgeError::InvalidKeyFormat("key is not a valid secp256k1 scalar".to_string())
        })?
        .with_chain_id(Some(chain_id));

    Ok(SigningIdentity { signer, chain_id })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Anvil/Hardhat default account #0
    const TEST_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn test_derive_identity_binds_chain_id() {
        let identity = derive_identity(TEST_KEY, 43114).unwrap();
        assert_eq!(identity.chain_id(), 43114);
        assert_eq!(identity.signer.chain_id(), Some(43114));
        assert_eq!(identity.address(), TEST_ADDRESS.parse::<Address>().unwrap());
    }

    #[test]
    fn test_same_key_different_chains() {
        let mainnet = derive_identity(TEST_KEY, 43114).unwrap();
        let fuji = derive_identity(TEST_KEY, 43113).unwrap();
        assert_eq!(mainnet.address(), fuji.address());
        assert_ne!(mainnet.chain_id(), fuji.chain_id());
    }

    #[test]
    fn test_uppercase_hex_accepted() {
        let identity = derive_identity(&TEST_KEY.to_uppercase(), 1).unwrap();
        assert_eq!(identity.address(), TEST_ADDRESS.parse::<Address>().unwrap());
    }

    #[test]
    fn test_rejects_not_hex() {
        assert!(matches!(
            derive_identity("not-hex", 43114),
            Err(BridgeError::InvalidKeyFormat(_))
        ));

        let non_hex = format!("{}zz", &TEST_KEY[..62]);
        assert!(matches!(
            derive_identity(&non_hex, 43114),
            Err(BridgeError::InvalidKeyFormat(_))
        ));
    }

    #[test]
    fn test_rejects_wrong_length_and_prefix() {
        assert!(matches!(
            derive_identity(&TEST_KEY[..62], 43114),
            Err(BridgeError::InvalidKeyFormat(_))
        ));
        assert!(matches!(
            derive_identity(&format!("{}00", TEST_KEY), 43114),
            Err(BridgeError::InvalidKeyFormat(_))
        ));
        assert!(matches!(
            derive_identity(&format!("0x{}", TEST_KEY), 43114),
            Err(BridgeError::InvalidKeyFormat(_))
        ));
        assert!(matches!(
            derive_identity("", 43114),
            Err(BridgeError::InvalidKeyFormat(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_scalar() {
        let zero = "0".repeat(64);
        assert!(matches!(
            derive_identity(&zero, 43114),
            Err(BridgeError::InvalidKeyFormat(_))
        ));

        // secp256k1 group order n
        let order = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";
        assert!(matches!(
            derive_identity(order, 43114),
            Err(BridgeError::InvalidKeyFormat(_))
        ));
    }

    #[test]
    fn test_errors_and_debug_never_leak_key() {
        let identity = derive_identity(TEST_KEY, 43114).unwrap();
        let debug = format!("{:?}", identity);
        assert!(!debug.contains(TEST_KEY));
        assert!(debug.contains("<redacted>"));

        let bad = format!("{}g", &TEST_KEY[..63]);
        let err = derive_identity(&bad, 43114).unwrap_err();
        assert!(!err.to_string().contains(&TEST_KEY[..63]));
    }
}
