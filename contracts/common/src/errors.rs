//! Error Types for the Strategy vault
//!
//! Every rejected operation maps to one variant. Rejections are total:
//! the engine never leaves partial state behind, so callers can simply
//! surface the error.

use core::fmt;

/// Result type alias for Strategy operations
pub type StrategyResult<T> = Result<T, StrategyError>;

/// Main error enum for all Strategy errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    // ============ Deposit Errors ============
    /// Attached native value is below the configured minimum
    DepositIsLessThanMinDeposit { amount: u64, minimum: u64 },

    // ============ Withdrawal Errors ============
    /// Withdrawal requests more units than the caller holds
    InsufficientBalance { available: u64, requested: u64 },

    /// Vault does not hold enough native value to pay out
    InsufficientReserve { available: u64, requested: u64 },

    // ============ Configuration Errors ============
    /// Construction-time parameter out of bounds
    InvalidConfiguration { reason: &'static str },

    // ============ Math Errors ============
    /// Credit, debit or fee computation left the integer domain
    ArithmeticOverflow,

    // ============ State Errors ============
    /// Sum of balances disagrees with the recorded total
    ConservationViolated { total: u64, sum: u64 },

    /// Operation not allowed in the current lifecycle state
    InvalidStateTransition,

    /// Persisted bytes could not be decoded
    DecodeFailed,
}

impl StrategyError {
    /// Returns a human-readable error code for logging/debugging
    pub fn code(&self) -> &'static str {
        match self {
            Self::DepositIsLessThanMinDeposit { .. } => "E001_DEPOSIT_BELOW_MIN",
            Self::InsufficientBalance { .. } => "E010_INSUFFICIENT_BALANCE",
            Self::InsufficientReserve { .. } => "E011_INSUFFICIENT_RESERVE",
            Self::InvalidConfiguration { .. } => "E020_INVALID_CONFIG",
            Self::ArithmeticOverflow => "E030_OVERFLOW",
            Self::ConservationViolated { .. } => "E040_CONSERVATION",
            Self::InvalidStateTransition => "E041_INVALID_STATE",
            Self::DecodeFailed => "E050_DECODE_FAILED",
        }
    }

    /// Returns true if this error is recoverable (user can fix it)
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::DepositIsLessThanMinDeposit { .. } => true, // Attach more value
            Self::InsufficientBalance { .. } => true,         // Request less
            Self::InsufficientReserve { .. } => true,         // Wait for liquidity
            _ => false,
        }
    }
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepositIsLessThanMinDeposit { amount, minimum } => {
                write!(f, "deposit of {amount} is less than minimum deposit {minimum}")
            }
            Self::InsufficientBalance { available, requested } => {
                write!(f, "insufficient balance: available {available}, requested {requested}")
            }
            Self::InsufficientReserve { available, requested } => {
                write!(f, "insufficient native reserve: available {available}, requested {requested}")
            }
            Self::InvalidConfiguration { reason } => write!(f, "invalid configuration: {reason}"),
            Self::ArithmeticOverflow => write!(f, "arithmetic overflow"),
            Self::ConservationViolated { total, sum } => {
                write!(f, "ledger total {total} does not match sum of balances {sum}")
            }
            Self::InvalidStateTransition => write!(f, "invalid state transition"),
            Self::DecodeFailed => write!(f, "failed to decode persisted state"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StrategyError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_error_codes_unique() {
        let errors = [
            StrategyError::DepositIsLessThanMinDeposit { amount: 80, minimum: 100 },
            StrategyError::InsufficientBalance { available: 1, requested: 2 },
            StrategyError::InsufficientReserve { available: 1, requested: 2 },
            StrategyError::InvalidConfiguration { reason: "x" },
            StrategyError::ArithmeticOverflow,
            StrategyError::ConservationViolated { total: 1, sum: 2 },
            StrategyError::InvalidStateTransition,
            StrategyError::DecodeFailed,
        ];

        let codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        let unique: BTreeSet<_> = codes.iter().collect();
        assert_eq!(codes.len(), unique.len(), "Error codes must be unique");
    }

    #[test]
    fn test_recoverable() {
        assert!(StrategyError::InsufficientBalance { available: 0, requested: 1 }.is_recoverable());
        assert!(!StrategyError::ArithmeticOverflow.is_recoverable());
    }

    #[test]
    fn test_display() {
        let err = StrategyError::DepositIsLessThanMinDeposit { amount: 80, minimum: 100 };
        assert_eq!(err.to_string(), "deposit of 80 is less than minimum deposit 100");
    }
}
