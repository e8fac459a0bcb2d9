//! Access Control Module
//!
//! A single administrator identity, fixed when the vault is constructed.
//! There is no grant, revoke or transfer: privileged checks reduce to
//! the [`AccessControl::is_admin`] predicate.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::errors::{StrategyError, StrategyResult};
use crate::types::{Address, ZERO_ADDRESS};

/// Administrator capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct AccessControl {
    admin: Address,
}

impl AccessControl {
    /// Set the admin to the initializing caller
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` for the zero address.
    pub fn new(admin: Address) -> StrategyResult<Self> {
        if admin == ZERO_ADDRESS {
            return Err(StrategyError::InvalidConfiguration {
                reason: "admin cannot be zero address",
            });
        }
        Ok(Self { admin })
    }

    /// The admin identity
    pub fn admin(&self) -> Address {
        self.admin
    }

    /// Synonym of [`admin`](Self::admin); owner and admin are one role
    pub fn owner(&self) -> Address {
        self.admin
    }

    /// Check if `caller` holds the admin role
    pub fn is_admin(&self, caller: &Address) -> bool {
        self.admin == *caller
    }
}
