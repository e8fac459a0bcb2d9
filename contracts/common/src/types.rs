//! Core Types for the Strategy vault
//!
//! Identities, lifecycle status and the immutable vault configuration.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::constants::{fees, limits};
use crate::errors::{StrategyError, StrategyResult};

/// Type alias for addresses (32-byte hash)
pub type Address = [u8; 32];

/// The all-zero address, never a valid privileged identity
pub const ZERO_ADDRESS: Address = [0u8; 32];

/// Lifecycle of a Strategy instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum StrategyStatus {
    /// Not yet constructed; no operation is accepted
    #[default]
    Uninitialized,
    /// Configuration validated and admin set. Terminal.
    Active,
}

impl StrategyStatus {
    /// Returns true if deposits and withdrawals are accepted
    pub fn is_active(&self) -> bool {
        *self == StrategyStatus::Active
    }
}

/// Immutable vault configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct VaultConfig {
    /// Minimum accepted native amount per deposit
    pub min_deposit: u64,
    /// Fee retained on withdrawal, in basis points (100 = 1%)
    pub fee_percentage_bps: u64,
}

impl VaultConfig {
    /// Creates and validates a configuration
    pub fn new(min_deposit: u64, fee_percentage_bps: u64) -> StrategyResult<Self> {
        let config = Self {
            min_deposit,
            fee_percentage_bps,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the bounds that protect the fee and ledger invariants
    pub fn validate(&self) -> StrategyResult<()> {
        if self.min_deposit == 0 {
            return Err(StrategyError::InvalidConfiguration {
                reason: "min_deposit must be positive",
            });
        }
        if self.fee_percentage_bps > fees::MAX_FEE_BPS {
            return Err(StrategyError::InvalidConfiguration {
                reason: "fee percentage exceeds 10000 bps",
            });
        }
        Ok(())
    }
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            min_deposit: limits::DEFAULT_MIN_DEPOSIT,
            fee_percentage_bps: fees::DEFAULT_FEE_BPS,
        }
    }
}
