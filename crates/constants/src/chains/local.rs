//! Constants for local development nodes (anvil, or any node launched in
//! the default local configuration).

/// Chain ID used by local development nodes, including mainnet forks.
pub const CHAIN_ID: u64 = 31_337;

/// Default JSON-RPC endpoint of a locally running node.
pub const RPC_URL: &str = "http://127.0.0.1:8545";
