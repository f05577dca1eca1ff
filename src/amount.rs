//! Amount Parsing
//!
//! Turns a caller-supplied integer string into token base units.
//!
//! This is a strict parse, not a unit conversion. The caller must already have
//! scaled by the token's decimals (1 XSGD with 6 decimals is `"1000000"`).
//! Nothing here goes through floating point.

use alloy::primitives::U256;

use crate::error::{BridgeError, Result};

/// Parse a base-10 integer string into base units.
///
/// Leading zeros are accepted. Signs, decimal points, separators, whitespace
/// and empty input are rejected, as is anything above `U256::MAX` (the widest
/// amount an ERC20 call can carry).
pub fn to_base_units(input: &str) -> Result<U256> {
    if input.is_empty() {
        return Err(BridgeError::invalid_amount(input, "amount is empty"));
    }

    if let Some(bad) = input.chars().find(|c| !c.is_ascii_digit()) {
        let reason = match bad {
            '.' => "decimal amounts are not accepted, pre-scale to base units".to_string(),
            '-' | '+' => "signs are not accepted".to_string(),
            other => format!("unexpected character {:?}", other),
        };
        return Err(BridgeError::invalid_amount(input, reason));
    }

    U256::from_str_radix(input, 10)
        .map_err(|e| BridgeError::invalid_amount(input, format!("does not fit in uint256: {}", e)))
}
