//! Environment configuration.
//!
//! [`EnvConfig`] reads the RPC URLs, the Sepolia deployer key, and the
//! explorer and price-oracle API keys, falling back to placeholders.
//! [`EnvConfig::network`] resolves it into a [`NetworkConfig`] for one of
//! the [`KnownNetworks`].

mod env_utils;
pub use env_utils::{load_string_opt, load_string_or};

mod error;
pub use error::ConfigError;

use alloy::signers::local::PrivateKeySigner;
use nftmarket_constants::{local, KnownNetworks};
use std::borrow::Cow;

/// Environment variable holding the mainnet RPC URL used as fork source.
pub const MAINNET_RPC_URL: &str = "MAINNET_RPC_URL";
/// Environment variable holding the Sepolia RPC URL.
pub const SEPOLIA_RPC_URL: &str = "SEPOLIA_RPC_URL";
/// Environment variable holding the Sepolia deployer private key.
pub const SEPOLIA_PRIV_KEY: &str = "SEPOLIA_PRIV_KEY";
/// Environment variable holding the block explorer API key.
pub const ETHERSCAN_API_KEY: &str = "ETHERSCAN_API_KEY";
/// Environment variable holding the gas price oracle API key.
pub const COINMARKETCAP_API_KEY: &str = "COINMARKETCAP_API_KEY";

const PLACEHOLDER_MAINNET_RPC_URL: &str = "https://eth-mainnet.g.alchemy.com/v2/your-api-key";
const PLACEHOLDER_SEPOLIA_RPC_URL: &str = "https://eth-sepolia.g.alchemy.com/v2/your-api-key";
const PLACEHOLDER_KEY: &str = "0xkey";
const PLACEHOLDER_API_KEY: &str = "key";

/// Configuration loaded from the environment.
///
/// Every value falls back to an insecure placeholder when unset, so
/// loading never fails. Networks that actually need a value check for the
/// placeholder when they are resolved.
#[derive(Clone, PartialEq, Eq)]
pub struct EnvConfig {
    mainnet_rpc_url: Cow<'static, str>,
    sepolia_rpc_url: Cow<'static, str>,
    sepolia_priv_key: Cow<'static, str>,
    etherscan_api_key: Cow<'static, str>,
    coinmarketcap_api_key: Cow<'static, str>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::placeholders()
    }
}

impl core::fmt::Debug for EnvConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EnvConfig")
            .field("mainnet_rpc_url", &self.mainnet_rpc_url)
            .field("sepolia_rpc_url", &self.sepolia_rpc_url)
            .field("sepolia_priv_key", &redact(&self.sepolia_priv_key, PLACEHOLDER_KEY))
            .field("etherscan_api_key", &redact(&self.etherscan_api_key, PLACEHOLDER_API_KEY))
            .field(
                "coinmarketcap_api_key",
                &redact(&self.coinmarketcap_api_key, PLACEHOLDER_API_KEY),
            )
            .finish()
    }
}

fn redact(value: &str, placeholder: &str) -> &'static str {
    if value == placeholder {
        "<unset>"
    } else {
        "<redacted>"
    }
}

impl EnvConfig {
    /// A configuration holding only placeholder values.
    pub const fn placeholders() -> Self {
        Self {
            mainnet_rpc_url: Cow::Borrowed(PLACEHOLDER_MAINNET_RPC_URL),
            sepolia_rpc_url: Cow::Borrowed(PLACEHOLDER_SEPOLIA_RPC_URL),
            sepolia_priv_key: Cow::Borrowed(PLACEHOLDER_KEY),
            etherscan_api_key: Cow::Borrowed(PLACEHOLDER_API_KEY),
            coinmarketcap_api_key: Cow::Borrowed(PLACEHOLDER_API_KEY),
        }
    }

    /// Load the configuration from the environment.
    pub fn from_env() -> Self {
        Self {
            mainnet_rpc_url: load_string_or(MAINNET_RPC_URL, PLACEHOLDER_MAINNET_RPC_URL),
            sepolia_rpc_url: load_string_or(SEPOLIA_RPC_URL, PLACEHOLDER_SEPOLIA_RPC_URL),
            sepolia_priv_key: load_string_or(SEPOLIA_PRIV_KEY, PLACEHOLDER_KEY),
            etherscan_api_key: load_string_or(ETHERSCAN_API_KEY, PLACEHOLDER_API_KEY),
            coinmarketcap_api_key: load_string_or(COINMARKETCAP_API_KEY, PLACEHOLDER_API_KEY),
        }
    }

    /// Set the mainnet RPC URL.
    pub fn with_mainnet_rpc_url(mut self, url: impl Into<Cow<'static, str>>) -> Self {
        self.mainnet_rpc_url = url.into();
        self
    }

    /// Set the Sepolia RPC URL.
    pub fn with_sepolia_rpc_url(mut self, url: impl Into<Cow<'static, str>>) -> Self {
        self.sepolia_rpc_url = url.into();
        self
    }

    /// Set the Sepolia deployer private key.
    pub fn with_sepolia_priv_key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.sepolia_priv_key = key.into();
        self
    }

    /// Get the mainnet RPC URL.
    pub fn mainnet_rpc_url(&self) -> &str {
        &self.mainnet_rpc_url
    }

    /// Get the mainnet RPC URL, unless it is still the placeholder.
    pub fn fork_url(&self) -> Option<&str> {
        (self.mainnet_rpc_url != PLACEHOLDER_MAINNET_RPC_URL).then_some(&*self.mainnet_rpc_url)
    }

    /// Get the Sepolia RPC URL.
    pub fn sepolia_rpc_url(&self) -> &str {
        &self.sepolia_rpc_url
    }

    /// Get the block explorer API key.
    pub fn etherscan_api_key(&self) -> &str {
        &self.etherscan_api_key
    }

    /// Get the gas price oracle API key.
    pub fn coinmarketcap_api_key(&self) -> &str {
        &self.coinmarketcap_api_key
    }

    /// Report which variables are still placeholders, by variable name.
    pub fn unset_variables(&self) -> Vec<&'static str> {
        [
            (MAINNET_RPC_URL, self.mainnet_rpc_url == PLACEHOLDER_MAINNET_RPC_URL),
            (SEPOLIA_RPC_URL, self.sepolia_rpc_url == PLACEHOLDER_SEPOLIA_RPC_URL),
            (SEPOLIA_PRIV_KEY, self.sepolia_priv_key == PLACEHOLDER_KEY),
            (ETHERSCAN_API_KEY, self.etherscan_api_key == PLACEHOLDER_API_KEY),
            (COINMARKETCAP_API_KEY, self.coinmarketcap_api_key == PLACEHOLDER_API_KEY),
        ]
        .into_iter()
        .filter_map(|(key, unset)| unset.then_some(key))
        .collect()
    }

    /// Resolve the configuration for a network.
    pub fn network(&self, network: KnownNetworks) -> NetworkConfig {
        match network {
            KnownNetworks::Hardhat => NetworkConfig {
                network,
                rpc_url: Cow::Borrowed(local::RPC_URL),
                accounts: Accounts::Unlocked,
                fork_url: Some(self.mainnet_rpc_url.clone()),
            },
            KnownNetworks::Localhost => NetworkConfig {
                network,
                rpc_url: Cow::Borrowed(local::RPC_URL),
                accounts: Accounts::Unlocked,
                fork_url: None,
            },
            KnownNetworks::Sepolia => NetworkConfig {
                network,
                rpc_url: self.sepolia_rpc_url.clone(),
                accounts: Accounts::PrivateKey(self.sepolia_priv_key.clone()),
                fork_url: None,
            },
        }
    }
}

/// How a network's deployer account is obtained.
#[derive(Clone, PartialEq, Eq)]
pub enum Accounts {
    /// The node manages unlocked accounts; the first one deploys.
    Unlocked,
    /// A hex-encoded private key signs locally.
    PrivateKey(Cow<'static, str>),
}

impl core::fmt::Debug for Accounts {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unlocked => f.write_str("Unlocked"),
            Self::PrivateKey(_) => f.write_str("PrivateKey(<redacted>)"),
        }
    }
}

/// Resolved configuration for one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    network: KnownNetworks,
    rpc_url: Cow<'static, str>,
    accounts: Accounts,
    fork_url: Option<Cow<'static, str>>,
}

impl NetworkConfig {
    /// Get the network.
    pub const fn network(&self) -> KnownNetworks {
        self.network
    }

    /// Get the chain ID of the network.
    pub const fn chain_id(&self) -> u64 {
        self.network.chain_id()
    }

    /// Get the JSON-RPC endpoint of the network.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Get the account source of the network.
    pub const fn accounts(&self) -> &Accounts {
        &self.accounts
    }

    /// Get the URL the network forks from, if it is a fork.
    pub fn fork_url(&self) -> Result<Option<&str>, ConfigError> {
        match self.fork_url.as_deref() {
            Some(PLACEHOLDER_MAINNET_RPC_URL) => Err(ConfigError::Placeholder(MAINNET_RPC_URL)),
            other => Ok(other),
        }
    }

    /// Get the JSON-RPC endpoint, refusing placeholder values.
    pub fn checked_rpc_url(&self) -> Result<&str, ConfigError> {
        if self.rpc_url == PLACEHOLDER_SEPOLIA_RPC_URL {
            return Err(ConfigError::Placeholder(SEPOLIA_RPC_URL));
        }
        Ok(&self.rpc_url)
    }

    /// Parse the local signer for the network. Returns `None` for networks
    /// with unlocked accounts.
    pub fn signer(&self) -> Result<Option<PrivateKeySigner>, ConfigError> {
        let Accounts::PrivateKey(key) = &self.accounts else {
            return Ok(None);
        };
        if key == PLACEHOLDER_KEY {
            return Err(ConfigError::Placeholder(SEPOLIA_PRIV_KEY));
        }
        key.parse::<PrivateKeySigner>()
            .map(Some)
            .map_err(|source| ConfigError::PrivateKey { key: SEPOLIA_PRIV_KEY, source })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // anvil's first default key.
    const KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn placeholders_are_reported_unset() {
        let config = EnvConfig::placeholders();
        assert_eq!(config.unset_variables().len(), 5);
        assert_eq!(config.fork_url(), None);
    }

    #[test]
    fn hardhat_forks_mainnet() {
        let config = EnvConfig::placeholders();
        let hardhat = config.network(KnownNetworks::Hardhat);
        assert!(matches!(hardhat.fork_url(), Err(ConfigError::Placeholder(MAINNET_RPC_URL))));

        let config = config.with_mainnet_rpc_url("http://archive.example:8545");
        let hardhat = config.network(KnownNetworks::Hardhat);
        assert_eq!(hardhat.fork_url().unwrap(), Some("http://archive.example:8545"));
        assert_eq!(hardhat.rpc_url(), local::RPC_URL);
        assert_eq!(hardhat.chain_id(), 31_337);
        assert!(hardhat.signer().unwrap().is_none());
    }

    #[test]
    fn sepolia_needs_a_key() {
        let config = EnvConfig::placeholders();
        let sepolia = config.network(KnownNetworks::Sepolia);
        assert!(matches!(sepolia.signer(), Err(ConfigError::Placeholder(SEPOLIA_PRIV_KEY))));
        assert!(matches!(sepolia.checked_rpc_url(), Err(ConfigError::Placeholder(SEPOLIA_RPC_URL))));

        let sepolia = config.clone().with_sepolia_priv_key("0xnothex").network(KnownNetworks::Sepolia);
        assert!(matches!(sepolia.signer(), Err(ConfigError::PrivateKey { .. })));

        let sepolia = config.with_sepolia_priv_key(KEY).network(KnownNetworks::Sepolia);
        let signer = sepolia.signer().unwrap().unwrap();
        assert_eq!(
            signer.address(),
            alloy::primitives::address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
    }

    #[test]
    fn debug_redacts_secrets() {
        let config = EnvConfig::placeholders().with_sepolia_priv_key(KEY);
        let debug = format!("{config:?}");
        assert!(!debug.contains(&KEY[2..]));
        assert!(debug.contains("<redacted>"));
        let debug = format!("{:?}", config.network(KnownNetworks::Sepolia));
        assert!(!debug.contains(&KEY[2..]));
    }
}
