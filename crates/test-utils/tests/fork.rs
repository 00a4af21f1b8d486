//! Tests against a live mainnet fork. Each test returns early when no fork
//! can be spawned.

use alloy::{
    network::TransactionBuilder,
    primitives::{keccak256, Address, U256},
    providers::Provider,
    rpc::types::TransactionRequest,
};
use nftmarket_bindings::IERC721;
use nftmarket_constants::mainnet::{DAI, DOODLES, DOODLES_COLLECTION, WETH};
use nftmarket_fork::{get_token_info, hydrate_collection, TopUp, DEFAULT_GAS_TOP_UP};
use nftmarket_test_utils::{
    fork::TestNode,
    init_tracing,
    users::{DEFAULT_ACCOUNT, EMPTY_ACCOUNT, SECOND_ACCOUNT},
};

const ONE_ETHER: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// An address nobody holds the key to, with nothing on mainnet.
fn fresh_address(label: &str) -> Address {
    Address::from_word(keccak256(label))
}

#[tokio::test]
async fn supply_gas_funds_once() {
    init_tracing();
    let Some(fork) = TestNode::mainnet_fork() else { return };
    let chain = fork.chain();
    let fresh = fresh_address("supply_gas_funds_once");

    let first = chain.supply_gas(fresh).await.unwrap();
    assert!(matches!(first, TopUp::Funded { funder, .. } if funder == DEFAULT_ACCOUNT));
    assert_eq!(fork.provider().get_balance(fresh).await.unwrap(), DEFAULT_GAS_TOP_UP);

    let second = chain.supply_gas(fresh).await.unwrap();
    assert_eq!(second, TopUp::NotNeeded { balance: DEFAULT_GAS_TOP_UP });
    assert_eq!(fork.provider().get_balance(fresh).await.unwrap(), DEFAULT_GAS_TOP_UP);
}

#[tokio::test]
async fn token_info_is_stable() {
    init_tracing();
    let Some(fork) = TestNode::mainnet_fork() else { return };

    let first = get_token_info(fork.chain(), EMPTY_ACCOUNT).await.unwrap();
    let second = get_token_info(fork.chain(), EMPTY_ACCOUNT).await.unwrap();

    assert!(first.is_hydrated());
    assert_eq!(first, second);
}

#[tokio::test]
async fn hydrated_owner_can_transfer() {
    init_tracing();
    let Some(fork) = TestNode::mainnet_fork() else { return };
    let chain = fork.chain();

    // Funding a contract owner may revert, so pick a fixture held by an EOA.
    let fixtures = hydrate_collection(chain, EMPTY_ACCOUNT, &DOODLES_COLLECTION).await.unwrap();
    let mut held = None;
    for fixture in fixtures {
        let owner = fixture.owner.unwrap();
        if fork.provider().get_code_at(owner).await.unwrap().is_empty() {
            held = Some((fixture.id, owner));
            break;
        }
    }
    let Some((token_id, owner)) = held else {
        eprintln!("skipping: every fixture is held by a contract");
        return;
    };

    let holder = chain.impersonate(owner).await.unwrap();
    let receipt = holder.transfer_nft(DOODLES.address(), SECOND_ACCOUNT, token_id).await.unwrap();

    let transfer = receipt
        .inner
        .logs()
        .iter()
        .filter(|log| log.address() == DOODLES.address())
        .find_map(|log| log.log_decode::<IERC721::Transfer>().ok())
        .unwrap();
    assert_eq!(transfer.inner.previous_owner(), owner);
    assert_eq!(transfer.inner.new_owner(), SECOND_ACCOUNT);
    assert_eq!(transfer.inner.token_id(), token_id);

    assert_eq!(holder.nft_owner(DOODLES.address(), token_id).await.unwrap(), SECOND_ACCOUNT);
    holder.release().await.unwrap();
}

#[tokio::test]
async fn approve_allowance_is_visible() {
    init_tracing();
    let Some(fork) = TestNode::mainnet_fork() else { return };
    let owner = fresh_address("approve_allowance_is_visible");
    let owner = fork.chain().impersonate(owner).await.unwrap();
    let amount = U256::from(1_000);

    owner.approve_allowance(DAI, SECOND_ACCOUNT, amount).await.unwrap();
    assert_eq!(owner.erc20_allowance(DAI, SECOND_ACCOUNT).await.unwrap(), amount);
}

#[tokio::test]
async fn supplied_tokens_reach_target() {
    init_tracing();
    let Some(fork) = TestNode::mainnet_fork() else { return };
    let provider = fork.provider();

    // Wrap some ether so the default account holds WETH.
    let wrap = TransactionRequest::default()
        .with_from(DEFAULT_ACCOUNT)
        .with_to(WETH)
        .with_value(ONE_ETHER);
    provider.send_transaction(wrap).await.unwrap().get_receipt().await.unwrap();

    let funder = fork.chain().impersonate(DEFAULT_ACCOUNT).await.unwrap();
    let before = funder.erc20_balance(WETH, EMPTY_ACCOUNT).await.unwrap();

    let amount = ONE_ETHER / U256::from(4);
    funder.supply_token(WETH, EMPTY_ACCOUNT, amount).await.unwrap();

    assert_eq!(funder.erc20_balance(WETH, EMPTY_ACCOUNT).await.unwrap(), before + amount);
}
