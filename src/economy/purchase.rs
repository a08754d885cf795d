// ============================================================================
// Purchase Flow
// Wallet balance and commit protocol for escalating-cost purchases
// ============================================================================

use crate::economy::curve::GrowthCurve;
use crate::interfaces::{EconomyEvent, EventHandler};
use crate::numeric::Currency;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Player balance holder.
///
/// Spending follows the currency contract: a cost is only deducted after
/// comparing it against the balance, and deduction uses the saturating
/// subtraction, so the balance can never go negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wallet {
    balance: Currency,
}

impl Wallet {
    /// Empty wallet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wallet holding an initial balance.
    pub fn with_balance(balance: Currency) -> Self {
        Self { balance }
    }

    /// Current balance.
    #[inline]
    pub fn balance(&self) -> Currency {
        self.balance
    }

    /// Add income to the balance.
    pub fn deposit(&mut self, amount: Currency) {
        self.balance = self.balance.add(amount);
    }

    /// Whether the balance covers a cost.
    ///
    /// A cost matching the balance to within the solver's rounding slack
    /// counts as payable; the saturating deduction clamps the residue at
    /// zero. Without this, "buy max" could reject the very run the
    /// affordability search just sized.
    #[inline]
    pub fn can_afford(&self, cost: Currency) -> bool {
        cost.compare(self.balance) != std::cmp::Ordering::Greater
            || cost.approx_eq(self.balance, super::curve::BOUNDARY_SLACK)
    }

    /// Deduct a cost if the balance covers it. Returns whether the
    /// deduction happened.
    pub fn try_spend(&mut self, cost: Currency) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.balance = self.balance.saturating_sub(cost);
        true
    }
}

/// Record of a committed purchase.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PurchaseReceipt {
    /// Unique purchase identifier
    pub id: Uuid,

    /// Number of units bought in this run
    pub quantity: u64,

    /// Total deducted from the wallet
    pub total_cost: Currency,

    /// Owned count after the purchase; the caller adopts this as the new
    /// `owned` for subsequent pricing
    pub owned_after: u64,

    /// Wallet balance after deduction
    pub balance_after: Currency,

    /// Purchase timestamp
    pub timestamp: DateTime<Utc>,
}

/// Buy `quantity` contiguous units at the curve's current price point.
///
/// Prices the run, compares against the balance, deducts, and only then
/// reports the advanced owned count: the commit order the rest of the
/// game relies on. An unaffordable or empty run emits a rejection event
/// and returns `None`; nothing in this path panics.
pub fn execute_purchase(
    wallet: &mut Wallet,
    curve: &GrowthCurve,
    owned: u64,
    quantity: u64,
    handler: &dyn EventHandler,
) -> Option<PurchaseReceipt> {
    let cost = curve.cost_of_run(owned, quantity);
    if quantity == 0 || !wallet.try_spend(cost) {
        handler.on_event(EconomyEvent::PurchaseRejected {
            quantity,
            cost,
            balance: wallet.balance(),
            timestamp: Utc::now(),
        });
        return None;
    }

    let receipt = PurchaseReceipt {
        id: Uuid::new_v4(),
        quantity,
        total_cost: cost,
        owned_after: owned.saturating_add(quantity),
        balance_after: wallet.balance(),
        timestamp: Utc::now(),
    };
    handler.on_event(EconomyEvent::PurchaseCompleted {
        receipt: receipt.clone(),
    });
    Some(receipt)
}

/// Buy as many units as the wallet affords, using the log-space
/// affordability search to size the run.
pub fn execute_max_purchase(
    wallet: &mut Wallet,
    curve: &GrowthCurve,
    owned: u64,
    handler: &dyn EventHandler,
) -> Option<PurchaseReceipt> {
    let quantity = curve.max_affordable(wallet.balance(), owned);
    execute_purchase(wallet, curve, owned, quantity, handler)
}

// ============================================================================
// Tests
// ============================================================================
