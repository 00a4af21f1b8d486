use crate::NATIVE_TOKEN_ADDRESS;
use alloy::primitives::Address;
use std::borrow::Cow;

/// An ERC-20 token accepted as payment by the marketplace, and the price
/// feed the marketplace uses to value it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    /// Ticker of the token.
    ticker: Cow<'static, str>,
    /// Address of the token.
    token: Address,
    /// Address of the price feed for the token.
    price_feed: Address,
}

impl PaymentRecord {
    /// Create a new payment record.
    pub const fn new(ticker: Cow<'static, str>, token: Address, price_feed: Address) -> Self {
        Self { ticker, token, price_feed }
    }

    /// Get the ticker of the token.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Get the address of the token.
    pub const fn token(&self) -> Address {
        self.token
    }

    /// Get the address of the price feed.
    pub const fn price_feed(&self) -> Address {
        self.price_feed
    }
}

/// An ordered list of [`PaymentRecord`]s.
///
/// Order is significant: the marketplace constructor receives the token
/// addresses in this order and resolves price feeds by index.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct PaymentRecords(Cow<'static, [PaymentRecord]>);

impl PaymentRecords {
    /// Create a new list of payment records.
    pub const fn new(records: Cow<'static, [PaymentRecord]>) -> Self {
        Self(records)
    }

    /// Get the records as a slice.
    pub fn as_slice(&self) -> &[PaymentRecord] {
        &self.0
    }

    /// Iterate over the records in order.
    pub fn iter(&self) -> impl Iterator<Item = &PaymentRecord> {
        self.0.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no records.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The supported-payment list passed to the marketplace constructor.
    pub fn supported_payments(&self) -> Vec<Address> {
        self.iter().map(PaymentRecord::token).collect()
    }

    /// The supported-payment list as the deployed marketplace reports it:
    /// the configured tokens followed by [`NATIVE_TOKEN_ADDRESS`].
    pub fn with_native(&self) -> Vec<Address> {
        let mut payments = self.supported_payments();
        payments.push(NATIVE_TOKEN_ADDRESS);
        payments
    }

    /// Get the record for a token address.
    pub fn record_for(&self, token: Address) -> Option<&PaymentRecord> {
        self.iter().find(|record| record.token == token)
    }

    /// Get the record for a ticker.
    pub fn by_ticker(&self, ticker: &str) -> Option<&PaymentRecord> {
        self.iter().find(|record| record.ticker == ticker)
    }

    /// Get the price feed for a token address.
    pub fn price_feed_for(&self, token: Address) -> Option<Address> {
        self.record_for(token).map(PaymentRecord::price_feed)
    }
}
