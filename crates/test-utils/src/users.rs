//! Accounts of a freshly started anvil node.
use alloy::primitives::{address, Address};

/// Private key of anvil's first default account.
pub const DEFAULT_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Anvil's first default account, funded and unlocked.
pub const DEFAULT_ACCOUNT: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

/// Anvil's second default account.
pub const SECOND_ACCOUNT: Address = address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");

/// An address holding nothing on mainnet, used as a recipient and as a
/// query caller.
pub const EMPTY_ACCOUNT: Address = address!("0x00000000000000000000000000000000DeaDBeef");
