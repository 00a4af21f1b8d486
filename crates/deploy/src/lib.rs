//! Deployment of the NFT marketplace contract and export of its
//! deployment for the front end.
//!
//! - [`NftMarketplaceModule`] declares the deployment: the contract, its
//!   constructor argument, and the value attached.
//! - [`DeploymentLayout`] stores deployed addresses and artifacts per
//!   chain, under `ignition/deployments/chain-<chainId>/` by default.
//! - [`export_contract_artifacts`] turns a chain's deployment into
//!   JavaScript modules.

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
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod error;
pub use error::{DeployError, ExportError};

mod export;
pub use export::{
    export_contract_artifacts, parse_generated_module, render_module, ExportRequest,
    ExportedArtifacts, ADDRESSES_MODULE, ARTIFACTS_MODULE, EXPORT_SUBDIR,
};

mod layout;
pub use layout::{DeploymentLayout, ARTIFACTS_DIR, DEFAULT_DEPLOYMENTS_DIR, DEPLOYED_ADDRESSES_FILE};

mod module;
pub use module::{
    first_account, load_artifact, Deployment, NftMarketplaceModule, CONTRACT_NAME,
    DEFAULT_ARTIFACT_PATH, MODULE_ID, ONE_GWEI,
};

// Used only by the `nftmarket` binary.
use clap as _;
use eyre as _;
use tokio as _;
use tracing_subscriber as _;
