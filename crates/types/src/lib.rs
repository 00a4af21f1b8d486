//! Data model and configuration types for the marketplace tooling.

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

pub mod config;
pub use config::{Accounts, ConfigError, EnvConfig, NetworkConfig};

mod deployment;
pub use deployment::{future_id, ContractArtifact, DeploymentRecord};

mod fixtures;
pub use fixtures::{TokenFixture, TokenInfo};
