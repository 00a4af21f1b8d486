use crate::chains::{local, sepolia};
use std::str::FromStr;

/// The list of known networks as a string.
const KNOWN_NETWORKS: &str = "hardhat, localhost, sepolia";

/// Error type for parsing a network name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseNetworkError {
    /// The network name is not supported.
    #[error("network name {0} is not parseable. supported networks: {KNOWN_NETWORKS}")]
    NetworkNotSupported(String),
}

/// Networks the deployment tooling can target.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum KnownNetworks {
    /// In-process style local node forking mainnet, using unlocked
    /// accounts.
    #[default]
    Hardhat,
    /// A separately launched local node at the default endpoint.
    Localhost,
    /// Sepolia testnet.
    Sepolia,
}

impl KnownNetworks {
    /// All known networks.
    pub const ALL: [Self; 3] = [Self::Hardhat, Self::Localhost, Self::Sepolia];

    /// Get the canonical name of the network.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hardhat => "hardhat",
            Self::Localhost => "localhost",
            Self::Sepolia => sepolia::NAME,
        }
    }

    /// Get the chain ID of the network.
    pub const fn chain_id(&self) -> u64 {
        match self {
            Self::Hardhat | Self::Localhost => local::CHAIN_ID,
            Self::Sepolia => sepolia::CHAIN_ID,
        }
    }

    /// True if the network is a local development node whose accounts are
    /// unlocked.
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Hardhat | Self::Localhost)
    }
}

impl core::fmt::Display for KnownNetworks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KnownNetworks {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "hardhat" => Ok(Self::Hardhat),
            "localhost" => Ok(Self::Localhost),
            "sepolia" => Ok(Self::Sepolia),
            _ => Err(ParseNetworkError::NetworkNotSupported(s)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_known_names() {
        for network in KnownNetworks::ALL {
            assert_eq!(network.name().parse::<KnownNetworks>().unwrap(), network);
        }
        assert_eq!(" Sepolia ".parse::<KnownNetworks>().unwrap(), KnownNetworks::Sepolia);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "mainnet".parse::<KnownNetworks>().unwrap_err();
        assert_eq!(err, ParseNetworkError::NetworkNotSupported("mainnet".to_string()));
    }

    #[test]
    fn chain_ids() {
        assert_eq!(KnownNetworks::Hardhat.chain_id(), 31_337);
        assert_eq!(KnownNetworks::Sepolia.chain_id(), 11_155_111);
        assert!(!KnownNetworks::Sepolia.is_local());
    }
}
