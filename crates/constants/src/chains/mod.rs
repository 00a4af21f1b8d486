/// Ethereum mainnet constants: payment tokens, price feeds, and fixture
/// collections.
pub mod mainnet;

/// Sepolia testnet constants.
pub mod sepolia;

/// Local development node constants.
pub mod local;
