// ============================================================================
// Growth Curve
// Geometric-growth pricing over extended-range currency values
// ============================================================================

use crate::numeric::{Currency, DecimalFloat};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hard ceiling on the run length the affordability solver will report.
/// Protects downstream consumers (purchase loops, UI counters) from
/// pathological inputs such as a near-flat curve against an astronomical
/// budget.
pub const MAX_RUN_LENGTH: u64 = 1_000_000_000;

/// Once log10 of the budget/first-price ratio passes this, the solver
/// stays entirely in log-space and drops the `+1` series term: f64 loses
/// integer precision past 1e15, so materializing the ratio would be noise
/// anyway.
const LOG_SPACE_CUTOFF: f64 = 15.0;

/// Relative slack for affordability comparisons at the exact budget
/// boundary, where the closed-form series and the budget differ only by
/// float rounding. Well under display precision.
pub(crate) const BOUNDARY_SLACK: f64 = 1e-9;

/// Escalating-cost configuration for one purchasable entity.
///
/// The price of the `owned`-th unit is `base_cost × growth^owned`; all
/// exponentiation runs in log-space through [`DecimalFloat::pow10`], so
/// owned counts in the thousands cannot overflow a native float.
///
/// The pricing methods are pure and total: degenerate configuration
/// (zero base cost, growth at or below 1) degrades to zero or to linear
/// pricing rather than faulting, because they execute every animation
/// frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GrowthCurve {
    /// Price of the 0th unit
    pub base_cost: Currency,
    /// Per-unit multiplicative growth factor; must be greater than 1
    pub growth: f64,
}

impl GrowthCurve {
    /// Create a new curve.
    pub fn new(base_cost: Currency, growth: f64) -> Self {
        Self { base_cost, growth }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_cost.is_zero() {
            return Err("base cost must be positive".to_string());
        }
        if !self.growth.is_finite() {
            return Err("growth factor must be finite".to_string());
        }
        if self.growth <= 1.0 {
            return Err("growth factor must be greater than 1".to_string());
        }
        Ok(())
    }

    // ========================================================================
    // Preset Curves (Factory Methods)
    // ========================================================================

    /// Classic building curve: each unit costs 15% more than the last.
    pub fn building(base_cost: Currency) -> Self {
        Self::new(base_cost, 1.15)
    }

    /// Gentler generator curve, the capitalist-idle convention.
    pub fn generator(base_cost: Currency) -> Self {
        Self::new(base_cost, 1.07)
    }

    // ========================================================================
    // Pricing
    // ========================================================================

    /// Per-unit price once `owned` units are held:
    /// `base_cost × growth^owned`.
    pub fn price_at(&self, owned: u64) -> Currency {
        if self.base_cost.is_zero() {
            return Currency::ZERO;
        }
        if owned == 0 || !self.growth.is_finite() || self.growth <= 1.0 {
            return self.base_cost;
        }
        self.base_cost
            .mul(DecimalFloat::pow10(owned as f64 * self.growth.log10()))
    }

    /// Total price of `quantity` contiguous units starting at `owned`,
    /// via the closed-form geometric series
    /// `first_price × (growth^quantity − 1) / (growth − 1)`.
    ///
    /// Never a summation loop: `quantity` is unbounded. A curve with
    /// `growth <= 1` degrades to linear pricing instead of dividing by
    /// zero.
    pub fn cost_of_run(&self, owned: u64, quantity: u64) -> Currency {
        if quantity == 0 {
            return Currency::ZERO;
        }
        let first = self.price_at(owned);
        if first.is_zero() {
            return Currency::ZERO;
        }
        if !self.growth.is_finite() || self.growth <= 1.0 {
            return first.mul_scalar(quantity as f64);
        }
        if quantity == 1 {
            return first;
        }

        let growth_pow = DecimalFloat::pow10(quantity as f64 * self.growth.log10());
        let series = growth_pow
            .saturating_sub(DecimalFloat::ONE)
            .mul_scalar(1.0 / (self.growth - 1.0));
        first.mul(series)
    }

    /// Largest run length whose total cost fits the budget.
    ///
    /// Inverts the series inequality algebraically,
    /// `k <= log_growth(1 + budget*(growth-1)/first_price)`, instead of
    /// trial-multiplying, then floors and nudges across the float-rounding
    /// boundary. Degenerate inputs (zero budget, unaffordable first unit,
    /// growth at or below 1) yield zero; the result is clamped to
    /// [`MAX_RUN_LENGTH`].
    pub fn max_affordable(&self, budget: Currency, owned: u64) -> u64 {
        if !self.growth.is_finite() || self.growth <= 1.0 {
            return 0;
        }
        let first = self.price_at(owned);
        if first.is_zero() || budget.compare(first) == Ordering::Less {
            return 0;
        }

        let log_growth = self.growth.log10();
        // log10 of budget·(growth−1)/first, without materializing any term
        let log_ratio = budget.log10() + (self.growth - 1.0).log10() - first.log10();

        let estimate = if log_ratio > LOG_SPACE_CUTOFF {
            // The +1 series term is negligible at this magnitude
            log_ratio / log_growth
        } else {
            (1.0 + 10f64.powf(log_ratio)).log10() / log_growth
        };
        if !estimate.is_finite() {
            return 0;
        }

        let mut quantity = if estimate >= MAX_RUN_LENGTH as f64 {
            tracing::warn!(estimate, "affordable run length clamped");
            MAX_RUN_LENGTH
        } else if estimate < 1.0 {
            1
        } else {
            estimate.floor() as u64
        };

        // The algebraic estimate can land one off either way at the
        // boundary; walk to the exact edge.
        while quantity > 1 && !self.run_affordable(budget, owned, quantity) {
            quantity -= 1;
        }
        if !self.run_affordable(budget, owned, quantity) {
            return 0;
        }
        while quantity < MAX_RUN_LENGTH && self.run_affordable(budget, owned, quantity + 1) {
            quantity += 1;
        }
        quantity
    }

    fn run_affordable(&self, budget: Currency, owned: u64, quantity: u64) -> bool {
        let cost = self.cost_of_run(owned, quantity);
        cost.compare(budget) != Ordering::Greater || cost.approx_eq(budget, BOUNDARY_SLACK)
    }
}

// ============================================================================
// Tests
// ============================================================================
