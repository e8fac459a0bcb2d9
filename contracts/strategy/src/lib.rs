//! Strategy Vault Engine
//!
//! Accepts native value, books it as USDC-equivalent units through an
//! injected [`ConversionOracle`], and releases native value back to
//! depositors net of a basis-point protocol fee.
//!
//! ## Operations
//!
//! - **deposit**: native amount >= `min_deposit`, credited as converted units
//! - **withdraw**: debit units, retain the fee, pay out the net in native value
//!
//! ## Atomicity
//!
//! Every fallible step (conversion, fee, checked arithmetic, reserve and
//! balance checks) runs before the first write. A rejected call leaves
//! [`StrategyState`] byte-identical and emits nothing.
//!
//! ## Lifecycle
//!
//! `Uninitialized -> Active`. [`Strategy::new`] validates the
//! configuration, sets the deployer as admin and enters `Active`, which
//! is terminal.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub mod state;

#[cfg(feature = "std")]
pub mod shared;


pub use state::StrategyState;
#[cfg(feature = "std")]
pub use shared::SharedStrategy;

use strategy_common::{
    errors::{StrategyError, StrategyResult},
    events::{EventLog, StrategyEvent},
    math::{safe_add, safe_sub},
    Address, ConversionOracle, StrategyStatus, VaultConfig, Vec,
};

// ============ Receipts ============

/// Outcome of a successful deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositReceipt {
    /// Units credited to the depositor
    pub units_credited: u64,
    /// Depositor balance after the credit
    pub new_balance: u64,
    /// Sequence number of this operation
    pub sequence: u64,
}

/// Outcome of a successful withdrawal
///
/// `native_paid` is what the caller's transfer layer must release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawReceipt {
    /// Units removed from the depositor's balance
    pub units_debited: u64,
    /// Units retained as protocol fee
    pub fee_units: u64,
    /// Units converted into the payout
    pub net_units: u64,
    /// Native value paid out
    pub native_paid: u64,
    /// Depositor balance after the debit
    pub new_balance: u64,
    /// Sequence number of this operation
    pub sequence: u64,
}

// ============ Engine ============

/// The vault engine
///
/// Owns the persisted [`StrategyState`], the conversion oracle and an
/// outbound [`EventLog`].
#[derive(Debug, Clone)]
pub struct Strategy<O: ConversionOracle> {
    state: StrategyState,
    oracle: O,
    events: EventLog,
}

impl<O: ConversionOracle> Strategy<O> {
    /// Deploy a new vault; `deployer` becomes the admin.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `min_deposit == 0`, the fee is
    /// above 10000 bps, or `deployer` is the zero address.
    pub fn new(deployer: Address, config: VaultConfig, oracle: O) -> StrategyResult<Self> {
        let state = StrategyState::new(deployer, config)?;
        debug!(
            min_deposit = config.min_deposit,
            fee_bps = config.fee_percentage_bps,
            "strategy deployed"
        );
        Ok(Self {
            state,
            oracle,
            events: EventLog::new(),
        })
    }

    /// Resume a vault from persisted state
    ///
    /// # Errors
    /// Returns `InvalidStateTransition` if the state is not `Active`, or
    /// the ledger/config error if the state is inconsistent.
    pub fn from_state(state: StrategyState, oracle: O) -> StrategyResult<Self> {
        state.validate()?;
        Ok(Self {
            state,
            oracle,
            events: EventLog::new(),
        })
    }

    // ============ Mutating Operations ============

    /// Deposit `native_amount` attached by `caller`
    ///
    /// # Errors
    /// - `DepositIsLessThanMinDeposit` if below the configured minimum
    /// - `ArithmeticOverflow` if the ledger or reserve would overflow
    pub fn deposit(&mut self, caller: Address, native_amount: u64) -> StrategyResult<DepositReceipt> {
        let result = self.apply_deposit(&caller, native_amount);
        if let Err(err) = &result {
            warn!(op = "deposit", code = err.code(), native_amount, %err, "operation rejected");
        }
        result
    }

    /// Withdraw `requested_units` from `caller`'s balance
    ///
    /// The fee is retained, the remaining units are converted back to
    /// native value and paid out. `fee_tier` is accepted for interface
    /// compatibility but has no effect on the fee or the balance check.
    ///
    /// # Errors
    /// - `InsufficientBalance` if `requested_units` exceeds the balance
    /// - `InsufficientReserve` if the vault cannot cover the payout
    /// - `ArithmeticOverflow` on any overflowing computation
    pub fn withdraw(
        &mut self,
        caller: Address,
        requested_units: u64,
        fee_tier: u64,
    ) -> StrategyResult<WithdrawReceipt> {
        let result = self.apply_withdraw(&caller, requested_units, fee_tier);
        if let Err(err) = &result {
            warn!(op = "withdraw", code = err.code(), requested_units, %err, "operation rejected");
        }
        result
    }

    fn apply_deposit(&mut self, caller: &Address, native_amount: u64) -> StrategyResult<DepositReceipt> {
        self.ensure_active()?;

        // 1. Minimum deposit
        let minimum = self.state.config.min_deposit;
        if native_amount < minimum {
            return Err(StrategyError::DepositIsLessThanMinDeposit {
                amount: native_amount,
                minimum,
            });
        }

        // 2. Convert and stage every new value
        let units = self.oracle.native_to_units(native_amount)?;
        let new_reserve = safe_add(self.state.native_reserve, native_amount)?;
        let sequence = safe_add(self.state.sequence, 1)?;

        // 3. Credit is the last fallible step and is itself all-or-nothing
        let new_balance = self.state.ledger.credit(caller, units)?;

        // 4. Commit
        self.state.native_reserve = new_reserve;
        self.state.sequence = sequence;

        self.events.emit(StrategyEvent::Deposit {
            depositor: *caller,
            native_amount,
            units_credited: units,
            sequence,
        });

        debug!(
            depositor = ?&caller[..4],
            native_amount,
            units,
            total_units = self.state.ledger.total_units(),
            "deposit accepted"
        );

        Ok(DepositReceipt {
            units_credited: units,
            new_balance,
            sequence,
        })
    }

    fn apply_withdraw(
        &mut self,
        caller: &Address,
        requested_units: u64,
        fee_tier: u64,
    ) -> StrategyResult<WithdrawReceipt> {
        self.ensure_active()?;

        // 1. Balance precondition
        let available = self.state.ledger.balance_of(caller);
        if requested_units > available {
            return Err(StrategyError::InsufficientBalance {
                available,
                requested: requested_units,
            });
        }

        // 2. Fee and payout
        // TODO: give `fee_tier` semantics once tiered fees / slippage bounds are specified
        let (fee, net_units) = self.state.fee_policy()?.split(requested_units)?;
        let native_paid = self.oracle.units_to_native(net_units)?;

        if native_paid > self.state.native_reserve {
            return Err(StrategyError::InsufficientReserve {
                available: self.state.native_reserve,
                requested: native_paid,
            });
        }

        // 3. Stage every new value
        let new_reserve = safe_sub(self.state.native_reserve, native_paid)?;
        let new_fees = safe_add(self.state.collected_fee_units, fee)?;
        let sequence = safe_add(self.state.sequence, 1)?;

        // 4. Debit is the last fallible step
        let new_balance = self.state.ledger.debit(caller, requested_units)?;

        // 5. Commit
        self.state.native_reserve = new_reserve;
        self.state.collected_fee_units = new_fees;
        self.state.sequence = sequence;

        self.events.emit(StrategyEvent::Withdraw {
            depositor: *caller,
            units_debited: requested_units,
            native_amount_paid: native_paid,
            fee_charged: fee,
            sequence,
        });

        debug!(
            depositor = ?&caller[..4],
            requested_units,
            fee,
            native_paid,
            fee_tier,
            "withdrawal accepted"
        );

        Ok(WithdrawReceipt {
            units_debited: requested_units,
            fee_units: fee,
            net_units,
            native_paid,
            new_balance,
            sequence,
        })
    }

    fn ensure_active(&self) -> StrategyResult<()> {
        if !self.state.status.is_active() {
            return Err(StrategyError::InvalidStateTransition);
        }
        Ok(())
    }

    // ============ Read Accessors ============

    /// Minimum accepted native deposit
    pub fn min_deposit(&self) -> u64 {
        self.state.config.min_deposit
    }

    /// Withdrawal fee in basis points
    pub fn fee_percentage(&self) -> u64 {
        self.state.config.fee_percentage_bps
    }

    /// Admin identity
    pub fn admin(&self) -> Address {
        self.state.access.admin()
    }

    /// Synonym of [`admin`](Self::admin)
    pub fn owner(&self) -> Address {
        self.state.access.owner()
    }

    /// Check if `caller` is the admin
    pub fn is_admin(&self, caller: &Address) -> bool {
        self.state.access.is_admin(caller)
    }

    /// Units held by `depositor`
    pub fn balance_of(&self, depositor: &Address) -> u64 {
        self.state.ledger.balance_of(depositor)
    }

    /// Total units across all depositors
    pub fn total_units(&self) -> u64 {
        self.state.ledger.total_units()
    }

    /// Alias of [`total_units`](Self::total_units)
    pub fn get_udsc(&self) -> u64 {
        self.total_units()
    }

    /// Alias of [`total_units`](Self::total_units)
    pub fn total_usdc_tokens(&self) -> u64 {
        self.total_units()
    }

    /// Native value held by the vault
    pub fn native_reserve(&self) -> u64 {
        self.state.native_reserve
    }

    /// Units retained as fees so far
    pub fn collected_fee_units(&self) -> u64 {
        self.state.collected_fee_units
    }

    /// Lifecycle status
    pub fn status(&self) -> StrategyStatus {
        self.state.status
    }

    /// Immutable configuration
    pub fn config(&self) -> &VaultConfig {
        &self.state.config
    }

    /// The injected oracle
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    // ============ State & Events ============

    /// Persisted state
    pub fn state(&self) -> &StrategyState {
        &self.state
    }

    /// Consume the engine, keeping only the persisted state
    pub fn into_state(self) -> StrategyState {
        self.state
    }

    /// Events emitted since the last drain
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Drain emitted events
    pub fn take_events(&mut self) -> Vec<StrategyEvent> {
        self.events.take()
    }
}
