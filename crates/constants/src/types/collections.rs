use alloy::primitives::Address;
use std::borrow::Cow;

/// A named token contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct TokenContractRef {
    /// Human-readable name of the contract.
    name: Cow<'static, str>,
    /// Address of the contract.
    address: Address,
}

impl TokenContractRef {
    /// Create a new contract reference.
    pub const fn new(name: Cow<'static, str>, address: Address) -> Self {
        Self { name, address }
    }

    /// Get the name of the contract.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the address of the contract.
    pub const fn address(&self) -> Address {
        self.address
    }
}

impl core::fmt::Display for TokenContractRef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.name, self.address)
    }
}

/// An ERC-721 collection together with the token IDs used as fixtures.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NftCollection {
    contract: TokenContractRef,
    token_ids: Cow<'static, [u64]>,
}

impl NftCollection {
    /// Create a new fixture collection.
    pub const fn new(contract: TokenContractRef, token_ids: Cow<'static, [u64]>) -> Self {
        Self { contract, token_ids }
    }

    /// Get the collection contract.
    pub const fn contract(&self) -> &TokenContractRef {
        &self.contract
    }

    /// Get the collection address.
    pub const fn address(&self) -> Address {
        self.contract.address()
    }

    /// Get the fixture token IDs, in fixture order.
    pub fn token_ids(&self) -> &[u64] {
        &self.token_ids
    }
}
