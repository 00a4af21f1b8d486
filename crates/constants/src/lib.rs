//! Marketplace tooling constants.
//!
//! This crate contains the fixed mainnet data the tooling works against:
//! the ERC-20 payment tokens the marketplace accepts (with their price
//! feeds), the ERC-721 collections used as fork fixtures, and the networks
//! the deployment tooling knows how to target.

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

mod chains;
pub use chains::{local, mainnet, sepolia};

mod types;
pub use types::{
    KnownNetworks, NftCollection, ParseNetworkError, PaymentRecord, PaymentRecords,
    TokenContractRef,
};

/// Pseudo-address the marketplace uses for the native currency. By
/// convention this is the mainnet WETH9 address, and the marketplace always
/// lists it last among its supported payments.
pub const NATIVE_TOKEN_ADDRESS: alloy::primitives::Address =
    alloy::primitives::address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
