//! ERC-20 and ERC-721 helpers acting through an [`Impersonated`] handle.
//!
//! Writes wait for the transaction receipt before returning. Reads are
//! issued as calls from the impersonated address.

use crate::{chain::ensure_success, ForkError, Impersonated};
use alloy::{
    primitives::{Address, U256},
    providers::Provider,
    rpc::types::TransactionReceipt,
};
use nftmarket_bindings::{IERC20, IERC721};
use tracing::instrument;

impl<P: Provider> Impersonated<'_, P> {
    /// Transfer `amount` of the ERC-20 `token` to `target`.
    #[instrument(skip(self), fields(owner = %self.address))]
    pub async fn supply_token(
        &self,
        token: Address,
        target: Address,
        amount: U256,
    ) -> Result<TransactionReceipt, ForkError> {
        self.ensure_gas().await?;
        let receipt = IERC20::new(token, self.chain.provider())
            .transfer(target, amount)
            .from(self.address)
            .send()
            .await?
            .get_receipt()
            .await?;
        ensure_success(receipt)
    }

    /// Allow `target` to spend `amount` of the ERC-20 `token`.
    #[instrument(skip(self), fields(owner = %self.address))]
    pub async fn approve_allowance(
        &self,
        token: Address,
        target: Address,
        amount: U256,
    ) -> Result<TransactionReceipt, ForkError> {
        self.ensure_gas().await?;
        let receipt = IERC20::new(token, self.chain.provider())
            .approve(target, amount)
            .from(self.address)
            .send()
            .await?
            .get_receipt()
            .await?;
        ensure_success(receipt)
    }

    /// ERC-20 balance of `target`. The impersonated address only pays for
    /// the call context.
    #[instrument(skip(self), fields(caller = %self.address))]
    pub async fn erc20_balance(&self, token: Address, target: Address) -> Result<U256, ForkError> {
        self.ensure_gas().await?;
        let balance = IERC20::new(token, self.chain.provider())
            .balanceOf(target)
            .from(self.address)
            .call()
            .await?;
        Ok(balance)
    }

    /// ERC-20 allowance the impersonated address has granted `target`.
    #[instrument(skip(self), fields(owner = %self.address))]
    pub async fn erc20_allowance(
        &self,
        token: Address,
        target: Address,
    ) -> Result<U256, ForkError> {
        self.ensure_gas().await?;
        let allowance = IERC20::new(token, self.chain.provider())
            .allowance(self.address, target)
            .from(self.address)
            .call()
            .await?;
        Ok(allowance)
    }

    /// Current owner of ERC-721 `token_id`.
    #[instrument(skip(self), fields(caller = %self.address))]
    pub async fn nft_owner(&self, token: Address, token_id: U256) -> Result<Address, ForkError> {
        self.ensure_gas().await?;
        let owner = IERC721::new(token, self.chain.provider())
            .ownerOf(token_id)
            .from(self.address)
            .call()
            .await?;
        Ok(owner)
    }

    /// Transfer ERC-721 `token_id` from the impersonated address to
    /// `target`.
    #[instrument(skip(self), fields(owner = %self.address))]
    pub async fn transfer_nft(
        &self,
        token: Address,
        target: Address,
        token_id: U256,
    ) -> Result<TransactionReceipt, ForkError> {
        self.ensure_gas().await?;
        let receipt = IERC721::new(token, self.chain.provider())
            .transferFrom(self.address, target, token_id)
            .from(self.address)
            .send()
            .await?
            .get_receipt()
            .await?;
        ensure_success(receipt)
    }

    /// Approve `target` to transfer ERC-721 `token_id`.
    #[instrument(skip(self), fields(owner = %self.address))]
    pub async fn approve_nft(
        &self,
        token: Address,
        target: Address,
        token_id: U256,
    ) -> Result<TransactionReceipt, ForkError> {
        self.ensure_gas().await?;
        let receipt = IERC721::new(token, self.chain.provider())
            .approve(target, token_id)
            .from(self.address)
            .send()
            .await?
            .get_receipt()
            .await?;
        ensure_success(receipt)
    }
}
