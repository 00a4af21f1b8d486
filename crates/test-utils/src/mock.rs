//! Node-free chains backed by alloy's mocked transport.
//!
//! Responses are served in the order they are pushed, one per JSON-RPC
//! request.

use alloy::{
    primitives::{Bytes, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    sol_types::SolValue,
    transports::mock::Asserter,
};
use nftmarket_fork::ForkedChain;

/// Create a [`ForkedChain`] whose requests are answered by the returned
/// [`Asserter`].
pub fn mocked_chain() -> (ForkedChain<DynProvider>, Asserter) {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone()).erased();
    (ForkedChain::new(provider), asserter)
}

/// Answer the next `eth_getBalance`.
pub fn push_balance(asserter: &Asserter, balance: U256) {
    asserter.push_success(&balance);
}

/// Answer the next `anvil_*` request, which returns nothing.
pub fn push_anvil_ok(asserter: &Asserter) {
    asserter.push_success(&());
}

/// Answer the next `eth_call` with the ABI encoding of `output`.
pub fn push_call_output<T: SolValue>(asserter: &Asserter, output: T) {
    asserter.push_success(&Bytes::from(output.abi_encode()));
}
