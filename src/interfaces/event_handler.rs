// ============================================================================
// Event Handler Interface
// Defines the contract for observing economy events
// ============================================================================

use crate::economy::PurchaseReceipt;
use crate::numeric::Currency;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the purchase flow
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EconomyEvent {
    /// A run of units was priced, paid for, and committed
    PurchaseCompleted { receipt: PurchaseReceipt },

    /// A purchase attempt did not go through (unaffordable or empty run)
    PurchaseRejected {
        quantity: u64,
        cost: Currency,
        balance: Currency,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for observing the economy
/// Implementations can handle logging, achievements, statistics, etc.
pub trait EventHandler {
    /// Handle an economy event
    fn on_event(&self, event: EconomyEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<EconomyEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: EconomyEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: EconomyEvent) {
        tracing::debug!("economy event: {:?}", event);
    }
}
