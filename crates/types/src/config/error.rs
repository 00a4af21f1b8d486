use alloy::signers::local::LocalSignerError;

/// Error type for [`crate::config`] module. Captures errors related to
/// resolving network configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable required by the selected network still holds its
    /// placeholder default.
    #[error("environment variable {0} is not set")]
    Placeholder(&'static str),
    /// The configured private key could not be parsed.
    #[error("invalid private key in {key}: {source}")]
    PrivateKey {
        /// The environment variable holding the key.
        key: &'static str,
        /// The underlying parse error.
        #[source]
        source: LocalSignerError,
    },
}
