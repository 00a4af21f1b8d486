//! Constants for the Sepolia testnet.

/// Name for the Sepolia testnet.
pub const NAME: &str = "sepolia";
/// Chain ID for the Sepolia testnet.
pub const CHAIN_ID: u64 = 11_155_111;
