//! Anvil nodes for integration tests.
//!
//! [`TestNode::local`] starts a fresh chain and only needs `anvil` on the
//! `PATH`. [`TestNode::mainnet_fork`] also needs `MAINNET_RPC_URL` to point
//! at an archive node. When a requirement is missing, the constructor
//! reports why and returns `None`, and the test should return early.

use alloy::{
    node_bindings::{Anvil, AnvilInstance},
    providers::{DynProvider, Provider, ProviderBuilder},
};
use nftmarket_fork::ForkedChain;
use nftmarket_types::EnvConfig;

/// Chain ID of spawned nodes, matching a local development node.
pub const FORK_CHAIN_ID: u64 = 31_337;

/// A running anvil node. The node stops when this is dropped.
#[derive(Debug)]
pub struct TestNode {
    anvil: AnvilInstance,
    chain: ForkedChain<DynProvider>,
}

impl TestNode {
    /// Spawn a fork of `MAINNET_RPC_URL` at its latest block.
    pub fn mainnet_fork() -> Option<Self> {
        let env = EnvConfig::from_env();
        let Some(fork_url) = env.fork_url() else {
            eprintln!("skipping: MAINNET_RPC_URL not set");
            return None;
        };
        Self::spawn(Anvil::new().fork(fork_url))
    }

    /// Spawn a fresh chain with anvil's default funded accounts.
    pub fn local() -> Option<Self> {
        Self::spawn(Anvil::new())
    }

    fn spawn(anvil: Anvil) -> Option<Self> {
        let anvil = match anvil.chain_id(FORK_CHAIN_ID).try_spawn() {
            Ok(anvil) => anvil,
            Err(err) => {
                eprintln!("skipping: failed to spawn anvil: {err}");
                return None;
            }
        };
        let provider = ProviderBuilder::new().connect_http(anvil.endpoint_url()).erased();

        Some(Self { anvil, chain: ForkedChain::new(provider) })
    }

    /// Get the node's chain.
    pub const fn chain(&self) -> &ForkedChain<DynProvider> {
        &self.chain
    }

    /// Get the node's provider.
    pub const fn provider(&self) -> &DynProvider {
        self.chain.provider()
    }

    /// Get the node's HTTP endpoint.
    pub fn endpoint(&self) -> String {
        self.anvil.endpoint()
    }
}
