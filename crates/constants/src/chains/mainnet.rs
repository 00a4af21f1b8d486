//! Constants for Ethereum mainnet.

use crate::{NftCollection, PaymentRecord, PaymentRecords, TokenContractRef};
use alloy::primitives::{address, Address};
use std::borrow::Cow;

/// Name for the mainnet.
pub const NAME: &str = "mainnet";
/// Chain ID for the mainnet.
pub const CHAIN_ID: u64 = 1;

/// DAI token.
pub const DAI: Address = address!("0x6B175474E89094C44Da98b954EedeAC495271d0F");
/// USDC token.
pub const USDC: Address = address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
/// USDT token.
pub const USDT: Address = address!("0xdAC17F958D2ee523a2206206994597C13D831ec7");
/// WBTC token.
pub const WBTC: Address = address!("0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599");
/// LINK token.
pub const LINK: Address = address!("0x514910771AF9Ca656af840dff83E8264EcF986CA");
/// WETH token. Also the marketplace's native-currency pseudo-address.
pub const WETH: Address = crate::NATIVE_TOKEN_ADDRESS;

/// Chainlink DAI / USD feed.
pub const DAI_USD_FEED: Address = address!("0xAed0c38402a5d19df6E4c03F4E2DceD6e29c1ee9");
/// Chainlink USDC / USD feed.
pub const USDC_USD_FEED: Address = address!("0x8fFfFfd4AfB6115b954Bd326cbe7B4BA576818f6");
/// Chainlink USDT / USD feed.
pub const USDT_USD_FEED: Address = address!("0x3E7d1eAB13ad0104d2750B8863b489D65364e32D");
/// Chainlink BTC / USD feed, used to price WBTC.
pub const BTC_USD_FEED: Address = address!("0xF4030086522a5bEEa4988F8cA5B36dbC97BeE88c");
/// Chainlink LINK / USD feed.
pub const LINK_USD_FEED: Address = address!("0x2c1d072e956AFFC0D435Cb7AC38EF18d24d9127c");

/// DAI payment record.
pub const DAI_RECORD: PaymentRecord = PaymentRecord::new(Cow::Borrowed("DAI"), DAI, DAI_USD_FEED);
/// USDC payment record.
pub const USDC_RECORD: PaymentRecord =
    PaymentRecord::new(Cow::Borrowed("USDC"), USDC, USDC_USD_FEED);
/// USDT payment record.
pub const USDT_RECORD: PaymentRecord =
    PaymentRecord::new(Cow::Borrowed("USDT"), USDT, USDT_USD_FEED);
/// WBTC payment record.
pub const WBTC_RECORD: PaymentRecord =
    PaymentRecord::new(Cow::Borrowed("WBTC"), WBTC, BTC_USD_FEED);
/// LINK payment record.
pub const LINK_RECORD: PaymentRecord =
    PaymentRecord::new(Cow::Borrowed("LINK"), LINK, LINK_USD_FEED);

const PAYMENT_LIST: &[PaymentRecord] =
    &[DAI_RECORD, USDC_RECORD, USDT_RECORD, WBTC_RECORD, LINK_RECORD];

/// ERC-20 payments accepted by the marketplace, in constructor order. The
/// contract maps each index to the price feed at the same index, so this
/// order must not change without redeploying.
pub const PAYMENTS: PaymentRecords = PaymentRecords::new(Cow::Borrowed(PAYMENT_LIST));

/// Doodles collection.
pub const DOODLES: TokenContractRef = TokenContractRef::new(
    Cow::Borrowed("Doodles"),
    address!("0x8a90CAb2b38dba80c64b7734e58Ee1dB38B8992e"),
);
/// Bored Ape Yacht Club collection.
pub const BORED_APE_YACHT_CLUB: TokenContractRef = TokenContractRef::new(
    Cow::Borrowed("BoredApeYachtClub"),
    address!("0xBC4CA0EdA7647A8aB7C2061c2E118A18a936f13D"),
);
/// Lil Pudgys collection.
pub const LIL_PUDGYS: TokenContractRef = TokenContractRef::new(
    Cow::Borrowed("LilPudgys"),
    address!("0x524cAB2ec69124574082676e6F654a18df49A048"),
);

/// Doodles token IDs used as fork fixtures.
pub const DOODLES_TOKEN_IDS: &[u64] = &[1, 7, 42, 420];
/// Bored Ape Yacht Club token IDs used as fork fixtures.
pub const BORED_APE_YACHT_CLUB_TOKEN_IDS: &[u64] = &[1, 2, 3, 100];
/// Lil Pudgys token IDs used as fork fixtures.
pub const LIL_PUDGYS_TOKEN_IDS: &[u64] = &[1, 2, 3, 69];

/// Doodles fixture collection.
pub const DOODLES_COLLECTION: NftCollection =
    NftCollection::new(DOODLES, Cow::Borrowed(DOODLES_TOKEN_IDS));
/// Bored Ape Yacht Club fixture collection.
pub const BORED_APE_YACHT_CLUB_COLLECTION: NftCollection =
    NftCollection::new(BORED_APE_YACHT_CLUB, Cow::Borrowed(BORED_APE_YACHT_CLUB_TOKEN_IDS));
/// Lil Pudgys fixture collection.
pub const LIL_PUDGYS_COLLECTION: NftCollection =
    NftCollection::new(LIL_PUDGYS, Cow::Borrowed(LIL_PUDGYS_TOKEN_IDS));
