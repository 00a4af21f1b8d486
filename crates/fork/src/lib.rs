//! Mainnet-fork helpers.
//!
//! Everything here assumes a development node (anvil) forked from mainnet:
//! the node must accept `anvil_impersonateAccount` and sign
//! `eth_sendTransaction` requests for impersonated and unlocked accounts.
//! Providers handed to [`ForkedChain`] should therefore not carry a wallet.
//!
//! The entry point is [`ForkedChain`], which owns the gas policy and hands
//! out [`Impersonated`] handles. A handle is the capability to act as one
//! address on the fork; the ERC-20 and ERC-721 helpers are methods on it.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod assets;

mod chain;
pub use chain::{ForkedChain, Impersonated};

mod error;
pub use error::ForkError;

mod gas;
pub use gas::{GasPolicy, TopUp, DEFAULT_GAS_THRESHOLD, DEFAULT_GAS_TOP_UP};

mod hydrate;
pub use hydrate::{get_token_info, hydrate_collection};
