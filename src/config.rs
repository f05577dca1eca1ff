//! Configuration
//!
//! Loads an optional `.env` file, then reads the environment. Route values
//! default to the XSGD C-Chain -> StraitsX subnet preset and can be
//! overridden one by one. Everything is validated here, so the core only
//! ever sees a complete [`ParameterTable`].

use alloy::primitives::{Address, U256};
use eyre::{eyre, Result, WrapErr};
use std::env;
use std::fmt;
use std::path::Path;

use crate::blockchain_id::BlockchainId;
use crate::params::{ParameterTable, C_CHAIN_EVM_CHAIN_ID};
use crate::redact::Redacted;
use crate::requests::parse_address;

/// Default explorer prefix for transaction links
pub const DEFAULT_EXPLORER_TX_URL: &str = "https://snowtrace.io/tx/";

/// Process configuration
#[derive(Clone)]
pub struct Config {
    /// JSON-RPC endpoint of the source chain. Required to submit.
    pub rpc_url: Option<String>,
    /// EVM chain id transactions are signed for
    pub chain_id: u64,
    /// Prefix the transaction hash is appended to
    pub explorer_tx_url: String,
    /// Route constants
    pub params: ParameterTable,
}

/// RPC URLs often embed provider API keys.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("rpc_url", &self.rpc_url.as_ref().map(Redacted))
            .field("chain_id", &self.chain_id)
            .field("explorer_tx_url", &self.explorer_tx_url)
            .field("params", &self.params)
            .finish()
    }
}

impl Config {
    /// Load configuration, reading `.env` first if present
    pub fn load() -> Result<Self> {
        Self::load_from_file(".env")
    }

    /// Load from a specific .env file path
    pub fn load_from_file(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            dotenvy::from_filename(path)
                .wrap_err_with(|| format!("Failed to load .env file from {}", path))?;
        }
        Self::from_env()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let rpc_url = optional_var("TELEPORTER_RPC_URL");

        let chain_id = match optional_var("TELEPORTER_CHAIN_ID") {
            Some(raw) => raw
                .parse()
                .wrap_err("TELEPORTER_CHAIN_ID must be a valid u64")?,
            None => C_CHAIN_EVM_CHAIN_ID,
        };

        let explorer_tx_url = optional_var("TELEPORTER_EXPLORER_TX_URL")
            .unwrap_or_else(|| DEFAULT_EXPLORER_TX_URL.to_string());

        let params = load_params()?;

        Ok(Self {
            rpc_url,
            chain_id,
            explorer_tx_url,
            params,
        })
    }

    /// The RPC URL, or an error naming the variable to set
    pub fn require_rpc_url(&self) -> Result<&str> {
        self.rpc_url
            .as_deref()
            .ok_or_else(|| eyre!("TELEPORTER_RPC_URL environment variable is required"))
    }

    /// Explorer link for a submitted transaction
    pub fn explorer_link(&self, tx_hash: impl fmt::Display) -> String {
        format!("{}{}", self.explorer_tx_url, tx_hash)
    }
}

fn load_params() -> Result<ParameterTable> {
    let mut params = ParameterTable::xsgd_cchain_to_stx_subnet()?;

    if let Some(home) = address_var("TELEPORTER_TOKEN_HOME")? {
        params.approval_spender = home;
        params.bridge_contract = home;
    }
    if let Some(remote) = address_var("TELEPORTER_TOKEN_REMOTE")? {
        params.destination_token_transferrer = remote;
    }
    if let Some(token) = address_var("TELEPORTER_TOKEN")? {
        params.token_contract = token;
        params.fee_token_address = token;
    }
    if let Some(fee_token) = address_var("TELEPORTER_FEE_TOKEN")? {
        params.fee_token_address = fee_token;
    }
    if let Some(raw) = optional_var("TELEPORTER_DESTINATION_BLOCKCHAIN_ID") {
        params.destination_blockchain_id = raw
            .parse::<BlockchainId>()
            .wrap_err("TELEPORTER_DESTINATION_BLOCKCHAIN_ID must be CB58 or 0x-hex")?;
    }
    if let Some(raw) = optional_var("TELEPORTER_REQUIRED_GAS_LIMIT") {
        let gas: u64 = raw
            .parse()
            .wrap_err("TELEPORTER_REQUIRED_GAS_LIMIT must be a valid u64")?;
        params.required_gas_limit = U256::from(gas);
    }

    params.validate().wrap_err("Invalid route configuration")?;
    Ok(params)
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn address_var(name: &str) -> Result<Option<Address>> {
    optional_var(name)
        .map(|raw| {
            parse_address(raw.trim())
                .wrap_err_with(|| format!("{} is not a valid address", name))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{CCHAIN_XSGD, XSGD_TOKEN_HOME};
    use serial_test::serial;

    const VARS: &[&str] = &[
        "TELEPORTER_RPC_URL",
        "TELEPORTER_CHAIN_ID",
        "TELEPORTER_EXPLORER_TX_URL",
        "TELEPORTER_TOKEN_HOME",
        "TELEPORTER_TOKEN_REMOTE",
        "TELEPORTER_TOKEN",
        "TELEPORTER_FEE_TOKEN",
        "TELEPORTER_DESTINATION_BLOCKCHAIN_ID",
        "TELEPORTER_REQUIRED_GAS_LIMIT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_to_xsgd_route() {
        clear_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.chain_id, 43114);
        assert_eq!(config.explorer_tx_url, DEFAULT_EXPLORER_TX_URL);
        assert_eq!(config.params, ParameterTable::xsgd_cchain_to_stx_subnet().unwrap());
        assert!(config.rpc_url.is_none());
        assert!(config.require_rpc_url().is_err());
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        env::set_var("TELEPORTER_RPC_URL", "https://rpc.example/key123");
        env::set_var("TELEPORTER_CHAIN_ID", "43113");
        env::set_var("TELEPORTER_TOKEN", "0x1111111111111111111111111111111111111111");
        env::set_var("TELEPORTER_REQUIRED_GAS_LIMIT", "250000");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.require_rpc_url().unwrap(), "https://rpc.example/key123");
        assert_eq!(config.chain_id, 43113);
        let token: Address = "0x1111111111111111111111111111111111111111".parse().unwrap();
        assert_eq!(config.params.token_contract, token);
        assert_eq!(config.params.fee_token_address, token);
        assert_ne!(config.params.token_contract, CCHAIN_XSGD);
        assert_eq!(config.params.bridge_contract, XSGD_TOKEN_HOME);
        assert_eq!(config.params.required_gas_limit, U256::from(250_000u64));

        // API key in the URL stays out of logs
        assert!(!format!("{:?}", config).contains("key123"));
    }

    #[test]
    #[serial]
    fn test_invalid_values_rejected() {
        clear_env();
        env::set_var("TELEPORTER_CHAIN_ID", "c-chain");
        assert!(Config::from_env().is_err());

        clear_env();
        env::set_var("TELEPORTER_TOKEN_HOME", "0x1234");
        assert!(Config::from_env().is_err());

        clear_env();
        env::set_var(
            "TELEPORTER_TOKEN_REMOTE",
            "0x0000000000000000000000000000000000000000",
        );
        assert!(Config::from_env().is_err());

        clear_env();
        env::set_var("TELEPORTER_DESTINATION_BLOCKCHAIN_ID", "not-cb58");
        assert!(Config::from_env().is_err());

        clear_env();
    }

    #[test]
    fn test_explorer_link() {
        let config = Config {
            rpc_url: None,
            chain_id: 43114,
            explorer_tx_url: DEFAULT_EXPLORER_TX_URL.to_string(),
            params: ParameterTable::xsgd_cchain_to_stx_subnet().unwrap(),
        };
        assert_eq!(config.explorer_link("0xabc"), "https://snowtrace.io/tx/0xabc");
    }
}
