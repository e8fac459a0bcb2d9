//! Strategy Events
//!
//! Append-only records emitted as a side effect of successful deposits
//! and withdrawals. They live in an [`EventLog`] outbox that is kept
//! apart from the persisted vault state, so tests can assert on state
//! mutation and emission independently.

use crate::Vec;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::types::Address;

/// Event types for indexing and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
#[borsh(use_discriminant = true)]
#[repr(u8)]
pub enum EventType {
    Deposit = 0x01,
    Withdraw = 0x02,
}

/// Main event enum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum StrategyEvent {
    /// Emitted when native value is deposited and units are credited
    Deposit {
        depositor: Address,
        native_amount: u64,
        units_credited: u64,
        sequence: u64,
    },

    /// Emitted when units are withdrawn and native value is paid out
    Withdraw {
        depositor: Address,
        units_debited: u64,
        native_amount_paid: u64,
        fee_charged: u64,
        sequence: u64,
    },
}

impl StrategyEvent {
    /// Get the event type for filtering
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Deposit { .. } => EventType::Deposit,
            Self::Withdraw { .. } => EventType::Withdraw,
        }
    }

    /// Operation sequence number of the emitting call
    pub fn sequence(&self) -> u64 {
        match self {
            Self::Deposit { sequence, .. } => *sequence,
            Self::Withdraw { sequence, .. } => *sequence,
        }
    }

    /// Depositor the event concerns
    pub fn depositor(&self) -> &Address {
        match self {
            Self::Deposit { depositor, .. } => depositor,
            Self::Withdraw { depositor, .. } => depositor,
        }
    }

    /// Serialize event to bytes for storage/transmission
    pub fn to_bytes(&self) -> Vec<u8> {
        borsh::to_vec(self).unwrap_or_default()
    }

    /// Deserialize event from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        borsh::from_slice(bytes).ok()
    }
}

/// Event log for collecting events during execution
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<StrategyEvent>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Emit an event (add to log)
    pub fn emit(&mut self, event: StrategyEvent) {
        self.events.push(event);
    }

    /// Get all events
    pub fn events(&self) -> &[StrategyEvent] {
        &self.events
    }

    /// Drain all events, leaving the log empty
    pub fn take(&mut self) -> Vec<StrategyEvent> {
        core::mem::take(&mut self.events)
    }

    /// Filter events by type
    pub fn filter_by_type(&self, event_type: EventType) -> Vec<&StrategyEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Last emitted event, if any
    pub fn last(&self) -> Option<&StrategyEvent> {
        self.events.last()
    }

    /// Check if any events were emitted
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Get number of events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deposit_event() -> StrategyEvent {
        StrategyEvent::Deposit {
            depositor: [1u8; 32],
            native_amount: 100_000_000_000_000,
            units_credited: 200_000,
            sequence: 1,
        }
    }

    #[test]
    fn test_event_type() {
        let event = deposit_event();
        assert_eq!(event.event_type(), EventType::Deposit);
        assert_eq!(event.sequence(), 1);
        assert_eq!(event.depositor(), &[1u8; 32]);
    }

    #[test]
    fn test_event_serialization() {
        let event = StrategyEvent::Withdraw {
            depositor: [2u8; 32],
            units_debited: 100_000_000,
            native_amount_paid: 99_000_000,
            fee_charged: 1_000_000,
            sequence: 7,
        };

        let bytes = event.to_bytes();
        let restored = StrategyEvent::from_bytes(&bytes).unwrap();
        assert_eq!(event, restored);
    }

    #[test]
    fn test_event_log() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.emit(deposit_event());
        log.emit(StrategyEvent::Withdraw {
            depositor: [1u8; 32],
            units_debited: 10,
            native_amount_paid: 10,
            fee_charged: 0,
            sequence: 2,
        });

        assert_eq!(log.len(), 2);
        assert!(log.has_events());
        assert_eq!(log.filter_by_type(EventType::Withdraw).len(), 1);
        assert_eq!(log.last().map(|e| e.sequence()), Some(2));

        let drained = log.take();
        assert_eq!(drained.len(), 2);
        assert!(log.is_empty());
    }
}
