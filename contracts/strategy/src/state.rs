//! Persisted Strategy State
//!
//! Everything that must survive across calls for the lifetime of a vault
//! instance: configuration, admin, ledger, native reserve and retained
//! fees. Events are deliberately not part of it.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use strategy_common::{
    errors::{StrategyError, StrategyResult},
    AccessControl, Address, FeePolicy, Ledger, StrategyStatus, VaultConfig, Vec,
};

/// Global state for a Strategy vault
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct StrategyState {
    /// Lifecycle status
    pub status: StrategyStatus,
    /// Immutable configuration
    pub config: VaultConfig,
    /// Admin capability
    pub access: AccessControl,
    /// Unit-of-account balances
    pub ledger: Ledger,
    /// Native value held and available for payout
    pub native_reserve: u64,
    /// Units retained as protocol fee (outside the ledger total)
    pub collected_fee_units: u64,
    /// Number of successful mutating operations
    pub sequence: u64,
}

impl StrategyState {
    /// Creates an active state for `deployer` with a validated config.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` for an out-of-range config or a zero
    /// deployer address.
    pub fn new(deployer: Address, config: VaultConfig) -> StrategyResult<Self> {
        config.validate()?;
        let access = AccessControl::new(deployer)?;

        Ok(Self {
            status: StrategyStatus::Active,
            config,
            access,
            ledger: Ledger::new(),
            native_reserve: 0,
            collected_fee_units: 0,
            sequence: 0,
        })
    }

    /// Fee policy derived from the configured rate
    pub fn fee_policy(&self) -> StrategyResult<FeePolicy> {
        FeePolicy::new(self.config.fee_percentage_bps)
    }

    /// Checks a state loaded from storage before it is used
    pub fn validate(&self) -> StrategyResult<()> {
        if !self.status.is_active() {
            return Err(StrategyError::InvalidStateTransition);
        }
        self.config.validate()?;
        self.ledger.verify_conservation()
    }

    /// Serialize state to bytes for storage
    pub fn to_bytes(&self) -> Vec<u8> {
        borsh::to_vec(self).unwrap_or_default()
    }

    /// Deserialize and validate state from bytes
    pub fn from_bytes(bytes: &[u8]) -> StrategyResult<Self> {
        let state: Self = borsh::from_slice(bytes).map_err(|_| StrategyError::DecodeFailed)?;
        state.validate()?;
        Ok(state)
    }

    /// SHA-256 over the borsh encoding
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.to_bytes());
        let result = hasher.finalize();
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&result);
        digest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deployer() -> Address {
        [9u8; 32]
    }

    #[test]
    fn test_new_state_is_active() {
        let state = StrategyState::new(deployer(), VaultConfig::new(100, 1).unwrap()).unwrap();
        assert_eq!(state.status, StrategyStatus::Active);
        assert_eq!(state.ledger.total_units(), 0);
        assert_eq!(state.access.admin(), deployer());
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = VaultConfig { min_deposit: 100, fee_percentage_bps: 10_001 };
        let result = StrategyState::new(deployer(), config);
        assert!(matches!(result, Err(StrategyError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_bytes_restore() {
        let mut state = StrategyState::new(deployer(), VaultConfig::new(100, 1).unwrap()).unwrap();
        state.ledger.credit(&[1u8; 32], 500).unwrap();
        state.native_reserve = 500;

        let restored = StrategyState::from_bytes(&state.to_bytes()).unwrap();
        assert_eq!(restored, state);
        assert_eq!(restored.digest(), state.digest());
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        assert_eq!(StrategyState::from_bytes(&[1, 2, 3]), Err(StrategyError::DecodeFailed));
    }

    #[test]
    fn test_uninitialized_state_rejected() {
        let mut state = StrategyState::new(deployer(), VaultConfig::default()).unwrap();
        state.status = StrategyStatus::Uninitialized;
        let result = StrategyState::from_bytes(&state.to_bytes());
        assert_eq!(result, Err(StrategyError::InvalidStateTransition));
    }

    #[test]
    fn test_digest_tracks_changes() {
        let mut state = StrategyState::new(deployer(), VaultConfig::default()).unwrap();
        let before = state.digest();
        state.ledger.credit(&[1u8; 32], 1).unwrap();
        assert_ne!(state.digest(), before);
    }
}
