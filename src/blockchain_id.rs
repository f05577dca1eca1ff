//! Avalanche Blockchain IDs
//!
//! Interchain messages address their destination by a 32-byte blockchain ID,
//! not by EVM chain id. Avalanche publishes these IDs in CB58: base58 of the
//! 32 bytes followed by the last 4 bytes of their SHA-256 digest.

use alloy::primitives::FixedBytes;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::error::{BridgeError, Result};

const CHECKSUM_LEN: usize = 4;

/// A 32-byte Avalanche blockchain ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockchainId(pub [u8; 32]);

impl BlockchainId {
    /// Parse the CB58 form shown by Avalanche explorers
    pub fn from_cb58(s: &str) -> Result<Self> {
        let raw = bs58::decode(s)
            .into_vec()
            .map_err(|e| BridgeError::invalid_blockchain_id(s, format!("not base58: {}", e)))?;

        if raw.len() != 32 + CHECKSUM_LEN {
            return Err(BridgeError::invalid_blockchain_id(
                s,
                format!("expected 36 decoded bytes, got {}", raw.len()),
            ));
        }

        let (payload, checksum) = raw.split_at(32);
        if checksum != cb58_checksum(payload) {
            return Err(BridgeError::invalid_blockchain_id(s, "checksum mismatch"));
        }

        let mut id = [0u8; 32];
        id.copy_from_slice(payload);
        Ok(BlockchainId(id))
    }

    /// Encode as CB58
    pub fn to_cb58(&self) -> String {
        let mut raw = Vec::with_capacity(32 + CHECKSUM_LEN);
        raw.extend_from_slice(&self.0);
        raw.extend_from_slice(&cb58_checksum(&self.0));
        bs58::encode(raw).into_string()
    }

    /// Parse from hex string (with or without 0x prefix)
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(hex)
            .map_err(|e| BridgeError::invalid_blockchain_id(s, format!("not hex: {}", e)))?;
        if bytes.len() != 32 {
            return Err(BridgeError::invalid_blockchain_id(
                s,
                format!("must be 32 bytes, got {}", bytes.len()),
            ));
        }
        let mut id = [0u8; 32];
        id.copy_from_slice(&bytes);
        Ok(BlockchainId(id))
    }

    /// Convert to hex string with 0x prefix
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// The `bytes32` value passed to contracts
    pub fn as_fixed_bytes(&self) -> FixedBytes<32> {
        FixedBytes(self.0)
    }
}

fn cb58_checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha256::digest(payload);
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(&digest[digest.len() - CHECKSUM_LEN..]);
    checksum
}

/// Accepts `0x`-prefixed hex or CB58
impl FromStr for BlockchainId {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self> {
        if s.starts_with("0x") {
            Self::from_hex(s)
        } else {
            Self::from_cb58(s)
        }
    }
}

impl fmt::Display for BlockchainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_cb58())
    }
}

/// Serialized in CB58, the form operators compare against explorers
impl Serialize for BlockchainId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_cb58())
    }
}

impl<'de> Deserialize<'de> for BlockchainId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl From<[u8; 32]> for BlockchainId {
    fn from(bytes: [u8; 32]) -> Self {
        BlockchainId(bytes)
    }
}
