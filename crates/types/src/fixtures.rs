use alloy::primitives::{Address, U256};
use nftmarket_constants::NftCollection;

/// A fixture token and, once hydrated, its current on-chain owner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct TokenFixture {
    /// Token ID.
    pub id: U256,
    /// Current owner, `None` until queried.
    pub owner: Option<Address>,
}

impl TokenFixture {
    /// Create a fixture whose owner has not been queried yet.
    pub const fn unhydrated(id: U256) -> Self {
        Self { id, owner: None }
    }

    /// Return a copy of the fixture with the given owner.
    pub const fn with_owner(self, owner: Address) -> Self {
        Self { id: self.id, owner: Some(owner) }
    }

    /// True if the owner has been queried.
    pub const fn is_hydrated(&self) -> bool {
        self.owner.is_some()
    }

    /// Build the unhydrated fixtures for a collection, in fixture order.
    pub fn for_collection(collection: &NftCollection) -> Vec<Self> {
        collection.token_ids().iter().map(|id| Self::unhydrated(U256::from(*id))).collect()
    }
}

/// Hydrated fixtures for every fixture collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    /// Doodles fixtures.
    pub doodles_tokens: Vec<TokenFixture>,
    /// Bored Ape Yacht Club fixtures.
    pub bored_ape_yacht_club_tokens: Vec<TokenFixture>,
    /// Lil Pudgys fixtures.
    pub lil_pudgys_tokens: Vec<TokenFixture>,
}

impl TokenInfo {
    /// Iterate over every fixture across all collections.
    pub fn iter(&self) -> impl Iterator<Item = &TokenFixture> {
        self.doodles_tokens
            .iter()
            .chain(&self.bored_ape_yacht_club_tokens)
            .chain(&self.lil_pudgys_tokens)
    }

    /// True if every fixture has an owner.
    pub fn is_hydrated(&self) -> bool {
        self.iter().all(TokenFixture::is_hydrated)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use nftmarket_constants::mainnet::DOODLES_COLLECTION;

    #[test]
    fn fixtures_follow_collection_order() {
        let fixtures = TokenFixture::for_collection(&DOODLES_COLLECTION);
        let ids: Vec<u64> = fixtures.iter().map(|f| f.id.to::<u64>()).collect();
        assert_eq!(ids, DOODLES_COLLECTION.token_ids());
        assert!(fixtures.iter().all(|f| f.owner.is_none()));
    }

    #[test]
    fn with_owner_leaves_original_untouched() {
        let fixture = TokenFixture::unhydrated(U256::from(7));
        let hydrated = fixture.with_owner(Address::repeat_byte(0x11));
        assert!(!fixture.is_hydrated());
        assert_eq!(hydrated.owner, Some(Address::repeat_byte(0x11)));
        assert_eq!(hydrated.id, fixture.id);
    }
}
