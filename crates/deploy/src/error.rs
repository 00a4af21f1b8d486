use alloy::{primitives::TxHash, providers::PendingTransactionError, transports::TransportError};
use std::path::PathBuf;

/// Errors returned while deploying the marketplace or reading and writing
/// deployment files.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DeployError {
    /// Filesystem error.
    #[error("io error at {}: {source}", path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// A file did not contain the expected JSON.
    #[error("malformed json in {}: {source}", path.display())]
    Json {
        /// Path being parsed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
    /// The artifact has no creation bytecode.
    #[error("artifact for {0} has no creation bytecode")]
    NotDeployable(String),
    /// The node reports no unlocked account to deploy from.
    #[error("node reports no account to deploy from")]
    NoDeployer,
    /// JSON-RPC request failed.
    #[error("rpc error: {0}")]
    Transport(#[from] TransportError),
    /// Waiting for the deployment transaction failed.
    #[error("pending transaction error: {0}")]
    Pending(#[from] PendingTransactionError),
    /// The deployment transaction reverted.
    #[error("deployment transaction {0} reverted")]
    Reverted(TxHash),
    /// The receipt did not report a created contract.
    #[error("deployment transaction {0} created no contract")]
    NoContractAddress(TxHash),
}

impl DeployError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json { path: path.into(), source }
    }
}

/// Errors returned by [`crate::export_contract_artifacts`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ExportError {
    /// A required argument was not provided. Nothing was written.
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    /// An argument was provided but is not usable. Nothing was written.
    #[error("invalid argument {name}: {reason}")]
    InvalidArgument {
        /// Name of the argument.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },
    /// A deployment file the export reads does not exist.
    #[error("missing export source {}", path.display())]
    MissingSource {
        /// Path that was expected to exist.
        path: PathBuf,
    },
    /// Filesystem error.
    #[error("io error at {}: {source}", path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// A source file, or a generated module, held malformed JSON.
    #[error("malformed json in {}: {source}", path.display())]
    Json {
        /// Path being parsed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
    /// A generated module did not have the `export const <name> = ...;`
    /// shape.
    #[error("malformed generated module: {0}")]
    MalformedModule(&'static str),
    /// A generated module's value is not valid JSON.
    #[error("malformed generated module value: {0}")]
    ModuleValue(#[source] serde_json::Error),
}

impl ExportError {
    /// True if the export did not run because its inputs were absent,
    /// as opposed to failing partway.
    pub const fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingArgument(_) | Self::MissingSource { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json { path: path.into(), source }
    }
}
