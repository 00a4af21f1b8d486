use alloy::{primitives::TxHash, providers::PendingTransactionError, transports::TransportError};

/// Errors returned by the fork helpers.
///
/// Underlying chain errors are wrapped without translation; a revert
/// surfaces exactly as the node reported it.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ForkError {
    /// JSON-RPC request failed.
    #[error("rpc error: {0}")]
    Transport(#[from] TransportError),
    /// Contract call or transaction submission failed.
    #[error("contract error: {0}")]
    Contract(#[from] alloy::contract::Error),
    /// Waiting for a submitted transaction failed.
    #[error("pending transaction error: {0}")]
    Pending(#[from] PendingTransactionError),
    /// The node has no unlocked account to fund gas from.
    #[error("node reports no account to fund gas from")]
    NoFundingAccount,
    /// The transaction was mined but reverted.
    #[error("transaction {0} reverted")]
    Reverted(TxHash),
}
