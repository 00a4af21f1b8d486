use crate::{ForkError, ForkedChain};
use alloy::{primitives::Address, providers::Provider};
use nftmarket_constants::{
    mainnet::{BORED_APE_YACHT_CLUB_COLLECTION, DOODLES_COLLECTION, LIL_PUDGYS_COLLECTION},
    NftCollection,
};
use nftmarket_types::{TokenFixture, TokenInfo};
use tracing::{debug, instrument};

/// Query the current owner of every fixture token in `collection`.
///
/// Queries run one after another, in fixture order, as calls from `query`.
/// The result is freshly built on every invocation; nothing is cached.
#[instrument(skip(chain, collection), fields(collection = %collection.contract()))]
pub async fn hydrate_collection<P: Provider>(
    chain: &ForkedChain<P>,
    query: Address,
    collection: &NftCollection,
) -> Result<Vec<TokenFixture>, ForkError> {
    let caller = chain.impersonate(query).await?;

    let fixtures = TokenFixture::for_collection(collection);
    let mut hydrated = Vec::with_capacity(fixtures.len());
    for fixture in fixtures {
        let owner = caller.nft_owner(collection.address(), fixture.id).await?;
        debug!(token_id = %fixture.id, %owner, "hydrated fixture");
        hydrated.push(fixture.with_owner(owner));
    }
    Ok(hydrated)
}

/// Hydrate the Doodles, Bored Ape Yacht Club, and Lil Pudgys fixtures.
pub async fn get_token_info<P: Provider>(
    chain: &ForkedChain<P>,
    query: Address,
) -> Result<TokenInfo, ForkError> {
    Ok(TokenInfo {
        doodles_tokens: hydrate_collection(chain, query, &DOODLES_COLLECTION).await?,
        bored_ape_yacht_club_tokens: hydrate_collection(
            chain,
            query,
            &BORED_APE_YACHT_CLUB_COLLECTION,
        )
        .await?,
        lil_pudgys_tokens: hydrate_collection(chain, query, &LIL_PUDGYS_COLLECTION).await?,
    })
}
