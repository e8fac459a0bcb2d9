//! Shared Strategy Handle
//!
//! Thread-safe wrapper for hosts that serve several callers at once.
//! All mutations serialize on one lock, so concurrent deposits and
//! withdrawals never lose updates to a balance or to the total.

use std::sync::Arc;

use parking_lot::Mutex;

use strategy_common::{
    errors::StrategyResult,
    events::StrategyEvent,
    Address, ConversionOracle,
};

use crate::{DepositReceipt, Strategy, StrategyState, WithdrawReceipt};

/// Cloneable, lock-guarded [`Strategy`]
#[derive(Debug)]
pub struct SharedStrategy<O: ConversionOracle> {
    inner: Arc<Mutex<Strategy<O>>>,
}

impl<O: ConversionOracle> Clone for SharedStrategy<O> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<O: ConversionOracle> SharedStrategy<O> {
    /// Wrap an engine
    pub fn new(strategy: Strategy<O>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(strategy)),
        }
    }

    /// See [`Strategy::deposit`]
    pub fn deposit(&self, caller: Address, native_amount: u64) -> StrategyResult<DepositReceipt> {
        self.inner.lock().deposit(caller, native_amount)
    }

    /// See [`Strategy::withdraw`]
    pub fn withdraw(
        &self,
        caller: Address,
        requested_units: u64,
        fee_tier: u64,
    ) -> StrategyResult<WithdrawReceipt> {
        self.inner.lock().withdraw(caller, requested_units, fee_tier)
    }

    /// Run a read-only closure under the lock
    pub fn read<R>(&self, f: impl FnOnce(&Strategy<O>) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Units held by `depositor`
    pub fn balance_of(&self, depositor: &Address) -> u64 {
        self.inner.lock().balance_of(depositor)
    }

    /// Total units across all depositors
    pub fn total_units(&self) -> u64 {
        self.inner.lock().total_units()
    }

    /// Clone of the persisted state, taken atomically
    pub fn snapshot(&self) -> StrategyState {
        self.inner.lock().state().clone()
    }

    /// Drain emitted events
    pub fn take_events(&self) -> Vec<StrategyEvent> {
        self.inner.lock().take_events()
    }
}
