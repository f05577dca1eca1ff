//! Contract ABI definitions
//!
//! Uses alloy's sol! macro to generate type-safe bindings for the ERC20 token
//! and the Interchain Token Transfer home contract.

use alloy::sol;

sol! {
    /// Minimal ERC20 interface
    interface IERC20 {
        function approve(address spender, uint256 amount) external returns (bool);
    }

    /// ERC20TokenHome (Avalanche ICTT) send interface
    interface IERC20TokenHome {
        /// Input for a single-hop or multi-hop token send
        #[derive(Debug, PartialEq, Eq)]
        struct SendTokensInput {
            bytes32 destinationBlockchainID;
            address destinationTokenTransferrerAddress;
            address recipient;
            address primaryFeeTokenAddress;
            uint256 primaryFee;
            uint256 secondaryFee;
            uint256 requiredGasLimit;
            address multiHopFallback;
        }

        /// Lock `amount` on this chain and mint/release it on the destination
        function send(SendTokensInput calldata input, uint256 amount) external;
    }
}
