use crate::{ForkError, GasPolicy, TopUp};
use alloy::{
    network::TransactionBuilder,
    primitives::Address,
    providers::{ext::AnvilApi, Provider},
    rpc::types::{TransactionReceipt, TransactionRequest},
};
use tracing::{debug, instrument, trace};

/// A mainnet fork reachable through a provider, with a gas policy for the
/// accounts it impersonates.
#[derive(Clone)]
pub struct ForkedChain<P> {
    provider: P,
    gas: GasPolicy,
}

impl<P> core::fmt::Debug for ForkedChain<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ForkedChain").field("gas", &self.gas).finish_non_exhaustive()
    }
}

impl<P> ForkedChain<P> {
    /// Wrap a provider connected to a fork, using the default
    /// [`GasPolicy`].
    pub fn new(provider: P) -> Self {
        Self { provider, gas: GasPolicy::default() }
    }

    /// Replace the gas policy.
    pub fn with_gas_policy(mut self, gas: GasPolicy) -> Self {
        self.gas = gas;
        self
    }

    /// Get a reference to the provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Get the gas policy.
    pub const fn gas_policy(&self) -> GasPolicy {
        self.gas
    }
}

impl<P: Provider> ForkedChain<P> {
    /// Make sure `address` can pay for at least one more transaction.
    ///
    /// If its balance is below the policy threshold, the first account the
    /// node reports sends it the top-up amount, and this waits for the
    /// transfer to be mined.
    #[instrument(skip(self))]
    pub async fn supply_gas(&self, address: Address) -> Result<TopUp, ForkError> {
        let balance = self.provider.get_balance(address).await?;
        if !self.gas.needs_top_up(balance) {
            trace!(%balance, "balance above threshold");
            return Ok(TopUp::NotNeeded { balance });
        }

        let accounts = self.provider.get_accounts().await?;
        let funder = accounts.first().copied().ok_or(ForkError::NoFundingAccount)?;

        let tx = TransactionRequest::default()
            .with_from(funder)
            .with_to(address)
            .with_value(self.gas.top_up());
        let receipt = self.provider.send_transaction(tx).await?.get_receipt().await?;
        let tx_hash = ensure_success(receipt)?.transaction_hash;

        debug!(%funder, %balance, %tx_hash, "supplied gas");
        Ok(TopUp::Funded { funder, tx_hash })
    }

    /// Start acting as `address`.
    ///
    /// Tops up `address` before impersonating it. The returned handle does
    /// so again before each action it performs.
    #[instrument(skip(self))]
    pub async fn impersonate(&self, address: Address) -> Result<Impersonated<'_, P>, ForkError> {
        self.supply_gas(address).await?;
        self.provider.anvil_impersonate_account(address).await?;
        Ok(Impersonated { chain: self, address })
    }
}

/// The capability to act as one address on a fork.
///
/// Obtained from [`ForkedChain::impersonate`]. Every action first applies
/// the chain's gas policy to the impersonated address.
pub struct Impersonated<'a, P> {
    pub(crate) chain: &'a ForkedChain<P>,
    pub(crate) address: Address,
}

impl<P> core::fmt::Debug for Impersonated<'_, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Impersonated").field("address", &self.address).finish_non_exhaustive()
    }
}

impl<'a, P> Impersonated<'a, P> {
    /// Get the impersonated address.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Get the chain the handle acts on.
    pub const fn chain(&self) -> &'a ForkedChain<P> {
        self.chain
    }
}

impl<P: Provider> Impersonated<'_, P> {
    /// Apply the gas policy to the impersonated address.
    pub async fn ensure_gas(&self) -> Result<TopUp, ForkError> {
        self.chain.supply_gas(self.address).await
    }

    /// Stop impersonating the address.
    pub async fn release(self) -> Result<(), ForkError> {
        self.chain.provider.anvil_stop_impersonating_account(self.address).await?;
        Ok(())
    }
}

/// Turn a mined-but-reverted receipt into an error.
pub(crate) fn ensure_success(receipt: TransactionReceipt) -> Result<TransactionReceipt, ForkError> {
    if receipt.status() {
        Ok(receipt)
    } else {
        Err(ForkError::Reverted(receipt.transaction_hash))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy::primitives::{b256, TxHash};
    use serde_json::json;

    const TX_HASH: TxHash =
        b256!("0x2a4e3ba1f6d2b8c6d35e1f0a8c6c3a0b1e5d6f7a8b9c0d1e2f3a4b5c6d7e8f90");

    fn receipt(status: &str) -> TransactionReceipt {
        serde_json::from_value(json!({
            "type": "0x2",
            "status": status,
            "cumulativeGasUsed": "0x5208",
            "logs": [],
            "logsBloom": format!("0x{}", "0".repeat(512)),
            "transactionHash": TX_HASH,
            "transactionIndex": "0x0",
            "blockHash": "0x8e7b0f1d6c5a4b3c2d1e0f9a8b7c6d5e4f3a2b1c0d9e8f7a6b5c4d3e2f1a0b9c",
            "blockNumber": "0x1",
            "gasUsed": "0x5208",
            "effectiveGasPrice": "0x3b9aca00",
            "from": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
            "to": "0x70997970c51812dc3a010c7d01b50e0d17dc79c8",
            "contractAddress": null
        }))
        .unwrap()
    }

    #[test]
    fn failed_receipt_is_reverted() {
        let err = ensure_success(receipt("0x0")).unwrap_err();
        assert!(matches!(err, ForkError::Reverted(hash) if hash == TX_HASH));
    }

    #[test]
    fn successful_receipt_passes_through() {
        let receipt = ensure_success(receipt("0x1")).unwrap();
        assert_eq!(receipt.block_number, Some(1));
        assert_eq!(receipt.gas_used, 21_000);
    }
}
