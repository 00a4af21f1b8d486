use alloy::primitives::{Address, TxHash, U256};

/// Balance below which an account is topped up: 10 ether.
pub const DEFAULT_GAS_THRESHOLD: U256 = U256::from_limbs([10_000_000_000_000_000_000, 0, 0, 0]);

/// Amount sent when an account is topped up: 10 ether.
pub const DEFAULT_GAS_TOP_UP: U256 = DEFAULT_GAS_THRESHOLD;

/// When and by how much impersonated accounts are funded for gas.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GasPolicy {
    threshold: U256,
    top_up: U256,
}

impl Default for GasPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_GAS_THRESHOLD, DEFAULT_GAS_TOP_UP)
    }
}

impl GasPolicy {
    /// Create a new policy.
    pub const fn new(threshold: U256, top_up: U256) -> Self {
        Self { threshold, top_up }
    }

    /// Get the threshold.
    pub const fn threshold(&self) -> U256 {
        self.threshold
    }

    /// Get the top-up amount.
    pub const fn top_up(&self) -> U256 {
        self.top_up
    }

    /// True if an account holding `balance` must be topped up.
    pub fn needs_top_up(&self, balance: U256) -> bool {
        balance < self.threshold
    }
}

/// Outcome of a gas check.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TopUp {
    /// The balance was already at or above the threshold.
    NotNeeded {
        /// Balance observed.
        balance: U256,
    },
    /// The account was funded.
    Funded {
        /// Account the funds came from.
        funder: Address,
        /// Hash of the funding transaction.
        tx_hash: TxHash,
    },
}

impl TopUp {
    /// True if a funding transaction was sent.
    pub const fn funded(&self) -> bool {
        matches!(self, Self::Funded { .. })
    }
}
